/// Utility modules for the file comparer
///
/// This module contains utility functions for reading files and for
/// formatting and exporting comparison results.

pub mod file_utils;
pub mod output_formatter;
