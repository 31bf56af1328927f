//! Pure textual rendering of a [`Report`].

use std::fmt::Write as _;

use super::{Report, Section};

const RULE_HEAVY: &str =
    "================================================================================";
const RULE_LIGHT: &str =
    "--------------------------------------------------------------------------------";

/// Render a report to its final text. Same report, same text.
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(out, "{RULE_HEAVY}");

    for section in &report.sections {
        render_section(&mut out, section);
    }

    let _ = writeln!(out, "\n{RULE_HEAVY}");
    let _ = writeln!(out, "Analysis Complete!");
    let _ = writeln!(out, "{RULE_HEAVY}");

    out
}

fn render_section(out: &mut String, section: &Section) {
    match section {
        Section::DatasetSummary {
            records,
            columns,
            numeric,
            categorical,
        } => {
            let _ = writeln!(out, "Dataset: {records} records, {columns} columns");
            let _ = writeln!(out, "Numeric columns: [{}]", numeric.join(", "));
            let _ = writeln!(out, "Categorical columns: [{}]", categorical.join(", "));
        }

        Section::NumericSummaries { entries } => {
            header(out, "NUMERIC METRICS SUMMARY");
            for entry in entries {
                let s = &entry.summary;
                let _ = writeln!(out, "\n{}:", entry.column.to_uppercase());
                let _ = writeln!(out, "  Count: {}", s.count);
                if s.count == 0 {
                    continue;
                }
                let _ = writeln!(out, "  Sum: {}", amount(s.sum, entry.monetary));
                if let Some(mean) = s.mean {
                    let _ = writeln!(out, "  Average: {}", amount(mean, entry.monetary));
                }
                if let Some(min) = s.min {
                    let _ = writeln!(out, "  Min: {}", amount(min, entry.monetary));
                }
                if let Some(max) = s.max {
                    let _ = writeln!(out, "  Max: {}", amount(max, entry.monetary));
                }
                if let Some(median) = s.median {
                    let _ = writeln!(out, "  Median: {}", amount(median, entry.monetary));
                }
                if let Some(std_dev) = s.std_dev {
                    let _ = writeln!(out, "  Std Dev: {}", amount(std_dev, entry.monetary));
                }
            }
        }

        Section::Breakdown {
            value_column,
            group_column,
            monetary,
            rows,
        } => {
            header(
                out,
                &format!(
                    "{} BY {}",
                    value_column.to_uppercase(),
                    group_column.to_uppercase()
                ),
            );
            for row in rows {
                let _ = writeln!(
                    out,
                    "  {}: Total: {} | Avg: {} ({} records)",
                    row.key,
                    amount(row.sum, *monetary),
                    amount(row.mean, *monetary),
                    row.count
                );
            }
        }

        Section::Distribution { column, entries } => {
            header(out, &format!("DISTRIBUTION: {}", column.to_uppercase()));
            for entry in entries {
                let _ = writeln!(
                    out,
                    "  {}: {} records ({:.1}%)",
                    entry.value, entry.count, entry.percentage
                );
            }
        }

        Section::Ranking {
            group_column,
            value_column,
            metric,
            limit,
            monetary,
            entries,
        } => {
            header(
                out,
                &format!(
                    "TOP {} {} BY {} {}",
                    limit,
                    group_column.to_uppercase(),
                    metric,
                    value_column.to_uppercase()
                ),
            );
            for (rank, (key, value)) in entries.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}: {}", rank + 1, key, amount(*value, *monetary));
            }
        }
    }
}

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n[{title}]");
    let _ = writeln!(out, "{RULE_LIGHT}");
}

/// Format a number with thousands separators and two decimals, with a
/// leading `$` for monetary columns.
fn amount(value: f64, monetary: bool) -> String {
    let formatted = thousands(value);
    if monetary {
        format!("${formatted}")
    } else {
        formatted
    }
}

fn thousands(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
