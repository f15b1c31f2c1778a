//! Text rendering of the full report.
//!
//! Writes the ten banner-delimited sections to any `io::Write`, so tests
//! can render into a buffer and the CLI into stdout.
use std::io::{self, Write};

use crate::analysis::{sellers, FullReport};

const BANNER_WIDTH: usize = 80;

/// Format a monetary value as `R$ 1,234.56`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u128;
    let units = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (pos, digit) in units.chars().enumerate() {
        if pos > 0 && (units.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("R$ {}{}.{:02}", sign, grouped, frac)
}

fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    banner(out)?;
    writeln!(out, "{}", title)?;
    banner(out)
}

/// Write the whole report as formatted text.
pub fn render_text<W: Write>(report: &FullReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "SALES DATA ANALYSIS")?;
    banner(out)?;
    writeln!(out, "Dataset loaded: {} rows", report.row_count)?;
    if let Some((first, last)) = report.date_range {
        writeln!(out, "Period: {} to {}", first, last)?;
    }

    section(out, "QUESTION 1: Top product by revenue (trailing 12 months)")?;
    match &report.top_product {
        Some(top) => {
            writeln!(out, "Product: {}", top.product)?;
            writeln!(out, "Total revenue: {}", format_currency(top.revenue))?;
            writeln!(out, "Number of sales: {}", top.sales)?;
            writeln!(out, "Units selling it: {}", top.units)?;
        }
        None => writeln!(out, "No product meets the volume criteria")?,
    }

    section(out, "QUESTION 2: Average ticket per seller")?;
    match report.seller_tickets.first() {
        Some(top) => {
            writeln!(out, "Seller with the highest average ticket:")?;
            writeln!(out, "Code: {}", top.seller)?;
            writeln!(out, "Average ticket: {}", format_currency(top.avg_ticket))?;
            writeln!(out, "Number of sales: {}", top.sales)?;
        }
        None => writeln!(out, "No sellers in the dataset")?,
    }

    section(out, "QUESTION 3: Highest average-ticket value")?;
    match sellers::highest_avg_ticket(&report.seller_tickets) {
        Some(value) => writeln!(out, "Highest average ticket: {}", format_currency(value))?,
        None => writeln!(out, "No sellers in the dataset")?,
    }

    section(out, "QUESTION 4: Year-over-year growth by unit")?;
    match report.unit_growth.first() {
        Some(best) => {
            writeln!(out, "Unit with the highest mean yearly growth:")?;
            writeln!(out, "Unit: {}", best.unit)?;
            writeln!(out, "Mean yearly growth: {:.2}%", best.mean_growth_pct)?;
        }
        None => writeln!(out, "Not enough yearly data to compute growth")?,
    }

    section(out, "QUESTION 5: Revenue share by unit")?;
    if report.revenue_share.is_empty() {
        writeln!(out, "No revenue recorded")?;
    } else {
        writeln!(out, "Share of total revenue per unit:")?;
        for share in &report.revenue_share {
            writeln!(out, "{}: {:.2}%", share.unit, share.share_pct)?;
        }
        let largest = &report.revenue_share[0];
        let smallest = &report.revenue_share[report.revenue_share.len() - 1];
        writeln!(out)?;
        writeln!(
            out,
            "Largest share: {} ({:.2}%)",
            largest.unit, largest.share_pct
        )?;
        writeln!(
            out,
            "Smallest share: {} ({:.2}%)",
            smallest.unit, smallest.share_pct
        )?;
    }

    section(out, "QUESTION 6: Price-increase simulation")?;
    let sim = &report.simulation;
    writeln!(
        out,
        "Original revenue: {}",
        format_currency(sim.original_revenue)
    )?;
    writeln!(
        out,
        "Simulated revenue: {}",
        format_currency(sim.simulated_revenue)
    )?;
    writeln!(out, "Revenue impact: {}", format_currency(sim.impact))?;
    writeln!(out, "Impact percentage: {:.2}%", sim.impact_pct)?;
    writeln!(out, "Rows affected: {}", sim.rows_affected)?;

    section(out, "QUESTION 7: Highest cumulative revenue by unit")?;
    match report.cumulative.first() {
        Some(leader) => {
            writeln!(out, "Unit: {}", leader.unit)?;
            writeln!(
                out,
                "Cumulative revenue: {}",
                format_currency(leader.cumulative_total)
            )?;
        }
        None => writeln!(out, "No revenue recorded")?,
    }

    section(out, "QUESTION 8: Anomalies per unit (IQR bounds)")?;
    if report.anomalies.by_unit.is_empty() {
        writeln!(out, "No units in the dataset")?;
    } else {
        writeln!(out, "Anomalous rows per unit:")?;
        for (unit, count) in &report.anomalies.by_unit {
            writeln!(out, "{}: {} anomalies", unit, count)?;
        }
        let (unit, count) = &report.anomalies.by_unit[0];
        writeln!(out)?;
        writeln!(out, "Unit with the most anomalies: {} ({})", unit, count)?;
    }

    section(out, "QUESTION 9: Correlation matrix")?;
    let matrix = &report.correlation;
    write!(out, "{:<16}", "")?;
    for label in &matrix.labels {
        write!(out, "{:>16}", label)?;
    }
    writeln!(out)?;
    for (i, row) in matrix.values.iter().enumerate() {
        write!(out, "{:<16}", matrix.labels[i])?;
        for value in row {
            match value {
                Some(r) => write!(out, "{:>16.3}", r)?,
                None => write!(out, "{:>16}", "NaN")?,
            }
        }
        writeln!(out)?;
    }
    if !report.strong_pairs.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "Strongest correlations (|r| > {}):",
            report.strong_correlation
        )?;
        for pair in &report.strong_pairs {
            writeln!(out, "{} vs {}: {:.3}", pair.left, pair.right, pair.r)?;
        }
    }

    section(out, "QUESTION 10: Most consistent seller")?;
    match &report.consistency {
        Some(best) => {
            writeln!(out, "Most consistent seller:")?;
            writeln!(out, "Code: {}", best.seller)?;
            writeln!(out, "Standard deviation: {}", format_currency(best.std_dev))?;
            writeln!(out, "Average sale: {}", format_currency(best.mean))?;
            writeln!(out, "Number of sales: {}", best.sales)?;
        }
        None => writeln!(out, "No seller meets the minimum-sales criterion")?,
    }

    writeln!(out)?;
    banner(out)?;
    writeln!(out, "ANALYSIS COMPLETE")?;
    banner(out)?;
    Ok(())
}
