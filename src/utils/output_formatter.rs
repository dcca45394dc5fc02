/// Output formatter for comparison results
///
/// This module handles formatting and exporting comparison results in
/// various formats, including console output, JSON, HTML, and CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use serde_json::json;

use crate::core::comparer::{ComparisonReport, DifferenceKind, LineRecord};

const IDENTICAL_MESSAGE: &str = "The files are identical (including line order).";

/// Strip the line terminator only, for cells where inner whitespace matters
fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Format comparison results for console output
///
/// # Arguments
///
/// * `differences` - Ordered difference records
/// * `label_a` - Name printed for the first file
/// * `label_b` - Name printed for the second file
/// * `use_markdown` - Whether to wrap the output in markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(
    differences: &[LineRecord],
    label_a: &str,
    label_b: &str,
    use_markdown: bool,
) -> String {
    let mut output = String::new();

    if use_markdown {
        output.push_str("```\n");
    }

    if differences.is_empty() {
        output.push_str(&format!("{}\n", IDENTICAL_MESSAGE.green()));
    } else {
        output.push_str(&format!("{}\n", "Differences found:".yellow().bold()));

        for record in differences {
            let n = record.line_number();
            match (record.content_a(), record.content_b()) {
                (Some(a), Some(b)) => {
                    output.push_str(&format!("{}\n", format!("Line {}:", n).bold()));
                    output.push_str(&format!("{}: {}\n", label_a.cyan(), a.trim()));
                    output.push_str(&format!("{}: {}\n", label_b.magenta(), b.trim()));
                }
                (Some(a), None) => {
                    output.push_str(&format!(
                        "{} in {} is not present in {}:\n",
                        format!("Line {}", n).bold(),
                        label_a.cyan(),
                        label_b.magenta(),
                    ));
                    output.push_str(&format!("{}\n", a.trim()));
                }
                (None, Some(b)) => {
                    output.push_str(&format!(
                        "{} in {} is not present in {}:\n",
                        format!("Line {}", n).bold(),
                        label_b.magenta(),
                        label_a.cyan(),
                    ));
                    output.push_str(&format!("{}\n", b.trim()));
                }
                (None, None) => unreachable!("line record {} has neither side", n),
            }
        }
    }

    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Print comparison results to standard output
pub fn print_report(differences: &[LineRecord], label_a: &str, label_b: &str) {
    print!("{}", format_report(differences, label_a, label_b, false));
}

/// Create a short summary of a comparison: file sizes and per-kind counts
pub fn format_summary(report: &ComparisonReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Comparison Summary".yellow().bold()));
    for summary in [&report.file_a, &report.file_b] {
        output.push_str(&format!(
            "{} {} lines, {} bytes\n",
            format!("{}:", summary.label).cyan(),
            summary.line_count,
            summary.size
        ));
    }

    if report.is_identical() {
        output.push_str(&format!("{}\n", IDENTICAL_MESSAGE.green()));
    } else {
        output.push_str(&format!("Changed lines: {}\n", report.count(DifferenceKind::Changed)));
        output.push_str(&format!(
            "Only in {}: {}\n",
            report.file_a.label,
            report.count(DifferenceKind::OnlyInA)
        ));
        output.push_str(&format!(
            "Only in {}: {}\n",
            report.file_b.label,
            report.count(DifferenceKind::OnlyInB)
        ));
    }

    output
}

/// Export results to a JSON file
///
/// # Arguments
///
/// * `report` - Comparison report
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_results_json(report: &ComparisonReport, output_path: &Path) -> Result<()> {
    let json_output = json!({
        "generated_at": report.generated_at,
        "file_a": report.file_a,
        "file_b": report.file_b,
        "identical": report.is_identical(),
        "difference_count": report.differences.len(),
        "differences": report.differences,
    });

    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, &json_output).context("Failed to write JSON data")?;

    Ok(())
}

/// Create an HTML report from comparison results
///
/// # Arguments
///
/// * `report` - Comparison report
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_html_report(report: &ComparisonReport, output_path: &Path) -> Result<()> {
    let mut handlebars = Handlebars::new();

    const HTML_TEMPLATE: &str = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>File Comparison Report</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                line-height: 1.6;
                color: #333;
                max-width: 1200px;
                margin: 0 auto;
                padding: 20px;
            }
            h1 {
                color: #2c3e50;
                border-bottom: 2px solid #3498db;
                padding-bottom: 10px;
            }
            .timestamp {
                color: #7f8c8d;
                font-size: 0.9em;
                margin-bottom: 30px;
            }
            .summary {
                background-color: #e8f4f8;
                padding: 15px;
                border-radius: 5px;
                margin-bottom: 30px;
            }
            table {
                border-collapse: collapse;
                width: 100%;
            }
            th, td {
                text-align: left;
                padding: 6px 10px;
                border-bottom: 1px solid #eee;
                font-family: monospace;
                white-space: pre-wrap;
            }
            .changed { background-color: #fff8e1; }
            .only_in_a { background-color: #fdecea; }
            .only_in_b { background-color: #e8f5e9; }
            .absent { color: #aaa; font-style: italic; }
        </style>
    </head>
    <body>
        <h1>File Comparison Report</h1>
        <div class="timestamp">Generated on: {{generated_at}}</div>

        <div class="summary">
            <h2>Summary</h2>
            {{#each files}}
            <p><strong>{{label}}</strong> ({{path}}): {{line_count}} lines, {{size}} bytes, sha256 {{sha256}}</p>
            {{/each}}
            <p>Differences: {{difference_count}}</p>
        </div>

        {{#if identical}}
        <p>The files are identical (including line order).</p>
        {{else}}
        <table>
            <tr><th>Line</th><th>{{label_a}}</th><th>{{label_b}}</th></tr>
            {{#each rows}}
            <tr class="{{kind}}">
                <td>{{line_number}}</td>
                {{#if has_a}}<td>{{content_a}}</td>{{else}}<td class="absent">not present</td>{{/if}}
                {{#if has_b}}<td>{{content_b}}</td>{{else}}<td class="absent">not present</td>{{/if}}
            </tr>
            {{/each}}
        </table>
        {{/if}}
    </body>
    </html>
    "#;

    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let rows: Vec<_> = report
        .differences
        .iter()
        .map(|record| {
            json!({
                "line_number": record.line_number(),
                "kind": record.kind(),
                "has_a": record.content_a().is_some(),
                "has_b": record.content_b().is_some(),
                "content_a": record.content_a().map(str::trim),
                "content_b": record.content_b().map(str::trim),
            })
        })
        .collect();

    let template_data = json!({
        "generated_at": report.generated_at,
        "files": [report.file_a, report.file_b],
        "label_a": report.file_a.label,
        "label_b": report.file_b.label,
        "identical": report.is_identical(),
        "difference_count": report.differences.len(),
        "rows": rows,
    });

    let html = handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")?;

    let mut file = File::create(output_path)
        .context(format!("Failed to create HTML output file: {}", output_path.display()))?;

    file.write_all(html.as_bytes()).context("Failed to write HTML data")?;

    Ok(())
}

/// Create a CSV report from comparison results
///
/// Line terminators are removed from the cells; other whitespace is kept.
pub fn create_csv_report(report: &ComparisonReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["Line", "Kind", report.file_a.label.as_str(), report.file_b.label.as_str()])
        .context("Failed to write CSV header")?;

    for record in &report.differences {
        let kind = match record.kind() {
            DifferenceKind::Changed => "changed",
            DifferenceKind::OnlyInA => "only_in_a",
            DifferenceKind::OnlyInB => "only_in_b",
        };
        let line_number = record.line_number().to_string();
        let a = record.content_a().map(strip_terminator).unwrap_or("");
        let b = record.content_b().map(strip_terminator).unwrap_or("");

        writer
            .write_record([line_number.as_str(), kind, a, b])
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}
