use colored::Colorize;

use crate::storage::LoadNotice;

/// All currency rounding and formatting lives here, at the presentation
/// boundary; computed values stay unrounded everywhere else.
pub fn currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;
    format!("{sign}${}.{fraction:02}", group_thousands(dollars))
}

pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn section(title: &str) {
    println!();
    println!("{}", title.bold().underline());
}

pub fn info(message: &str) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: &str) {
    println!("{} {}", "[ok]".green(), message.green());
}

pub fn warning(message: &str) {
    println!("{} {}", "[!]".yellow(), message.yellow());
}

pub fn error_line(message: &str) {
    eprintln!("{} {}", "[x]".red(), message.red());
}

pub fn metric(label: &str, value: &str) {
    println!("  {}: {}", label, value.bold());
}

/// Renders a left-aligned ASCII table; the stand-in for the external
/// charting collaborator.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() {
                widths[idx] = widths[idx].max(cell.len());
            }
        }
    }
    let header_line: Vec<String> = headers
        .iter()
        .zip(widths.iter().copied())
        .map(|(header, width)| format!("{header:<width$}"))
        .collect();
    println!("  {}", header_line.join("  ").bold());
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        println!("  {}", line.join("  "));
    }
}

/// Renders a load notice inline; a missing table is routine, a malformed
/// one is a warning the user should act on.
pub fn describe_notice(table_name: &str, notice: &LoadNotice) {
    match notice {
        LoadNotice::Missing => info(&format!(
            "No {table_name} file yet; starting from an empty table."
        )),
        LoadNotice::Malformed(reason) => warning(&format!(
            "Could not read the {table_name} table ({reason}); showing an empty table."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_rounds_to_cents_with_grouping() {
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(1234.5), "$1,234.50");
        assert_eq!(currency(1234567.894), "$1,234,567.89");
        assert_eq!(currency(-42.004), "-$42.00");
    }

    #[test]
    fn percent_renders_fraction() {
        assert_eq!(percent(0.125), "12.5%");
        assert_eq!(percent(-0.5), "-50.0%");
    }
}
