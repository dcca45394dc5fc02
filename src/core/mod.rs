/// Core module for file comparison
///
/// This module contains the positional line comparer and the error type
/// it reports when an input file cannot be read.

pub mod comparer;
pub mod error;
