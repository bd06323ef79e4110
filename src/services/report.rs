//! Fixed-width pipe-table rendering for the cost report

use crate::services::aggregator::ProviderReport;

const NAME_HEADER: &str = "Model Name";
const AVG_HEADER: &str = "Avg cost per 1 iteration";
const PER_100K_HEADER: &str = "Cost per 100000 iterations";
const PER_YEAR_HEADER: &str = "Cost per 1 year";

/// Render report rows as a pipe-delimited table.
///
/// The name column widens to the longest provider id; the three money
/// columns are right-justified against their header widths. Money cells
/// get one extra column for the `$` prefix.
pub fn render_table(rows: &[ProviderReport]) -> String {
    let name_w = rows
        .iter()
        .map(|r| r.provider_id.len())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(NAME_HEADER.len());
    let avg_w = AVG_HEADER.len();
    let per_100k_w = PER_100K_HEADER.len();
    let per_year_w = PER_YEAR_HEADER.len();

    let header = format!(
        "| {:<name_w$} | {:>avg_w$} | {:>per_100k_w$} | {:>per_year_w$} |",
        NAME_HEADER, AVG_HEADER, PER_100K_HEADER, PER_YEAR_HEADER
    );

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push('|');
    out.push_str(&"-".repeat(header.len() - 2));
    out.push_str("|\n");

    for row in rows {
        out.push_str(&format!(
            "| {:<name_w$} | {} | {} | {} |\n",
            row.provider_id,
            fmt_money(row.avg_cost, avg_w),
            fmt_money(row.cost_per_100k, per_100k_w),
            fmt_money(row.cost_per_year, per_year_w),
        ));
    }

    out
}

/// Format a dollar amount right-justified to `width + 1` characters
/// (the extra column absorbs the `$`).
///
/// Sub-dollar values keep 6 decimal digits so per-iteration costs stay
/// legible; everything else gets the usual 2.
pub fn fmt_money(value: f64, width: usize) -> String {
    let decimals = if value < 1.0 { 6 } else { 2 };
    let s = format!("${}", with_thousands(value, decimals));
    format!("{s:>w$}", w = width + 1)
}

/// Fixed-precision rendering with comma-grouped integer digits
fn with_thousands(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rendered.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in digits.bytes().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch as char);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
