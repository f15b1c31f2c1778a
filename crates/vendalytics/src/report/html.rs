//! HTML rendering of the full report with maud.
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::analysis::{sellers, FullReport};

use super::render::format_currency;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 60em; }\n\
table { border-collapse: collapse; margin: 0.5em 0; }\n\
td, th { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: right; }\n\
th, td:first-child { text-align: left; }\n\
h2 { border-bottom: 2px solid #444; padding-bottom: 0.2em; }";

/// Render the whole report as an HTML page.
///
/// `chart_html` is pre-rendered plot markup (plotly inline HTML) appended
/// at the end of the page when present.
pub fn render_html_report(report: &FullReport, chart_html: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Sales data analysis" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Sales data analysis" }
                p {
                    "Dataset loaded: " (report.row_count) " rows"
                    @if let Some((first, last)) = report.date_range {
                        " — period " (first) " to " (last)
                    }
                }

                h2 { "1. Top product by revenue (trailing 12 months)" }
                @if let Some(top) = &report.top_product {
                    p {
                        b { (top.product) } ": " (format_currency(top.revenue))
                        " over " (top.sales) " sales in " (top.units) " units"
                    }
                } @else {
                    p { "No product meets the volume criteria" }
                }

                h2 { "2–3. Average ticket per seller" }
                @if report.seller_tickets.is_empty() {
                    p { "No sellers in the dataset" }
                } @else {
                    table {
                        tr { th { "Seller" } th { "Average ticket" } th { "Sales" } }
                        @for ticket in &report.seller_tickets {
                            tr {
                                td { (ticket.seller) }
                                td { (format_currency(ticket.avg_ticket)) }
                                td { (ticket.sales) }
                            }
                        }
                    }
                    @if let Some(highest) = sellers::highest_avg_ticket(&report.seller_tickets) {
                        p { "Highest average ticket: " b { (format_currency(highest)) } }
                    }
                }

                h2 { "4. Year-over-year growth by unit" }
                @if let Some(best) = report.unit_growth.first() {
                    p {
                        "Highest mean yearly growth: " b { (best.unit) }
                        " (" (format!("{:.2}", best.mean_growth_pct)) "%)"
                    }
                } @else {
                    p { "Not enough yearly data to compute growth" }
                }

                h2 { "5. Revenue share by unit" }
                @if report.revenue_share.is_empty() {
                    p { "No revenue recorded" }
                } @else {
                    table {
                        tr { th { "Unit" } th { "Revenue" } th { "Share" } }
                        @for share in &report.revenue_share {
                            tr {
                                td { (share.unit) }
                                td { (format_currency(share.revenue)) }
                                td { (format!("{:.2}", share.share_pct)) "%" }
                            }
                        }
                    }
                }

                h2 { "6. Price-increase simulation" }
                p {
                    "Original " (format_currency(report.simulation.original_revenue))
                    " → simulated " (format_currency(report.simulation.simulated_revenue))
                    " (impact " (format_currency(report.simulation.impact))
                    ", " (format!("{:.2}", report.simulation.impact_pct)) "%, "
                    (report.simulation.rows_affected) " rows affected)"
                }

                h2 { "7. Highest cumulative revenue by unit" }
                @if let Some(leader) = report.cumulative.first() {
                    p { b { (leader.unit) } ": " (format_currency(leader.cumulative_total)) }
                } @else {
                    p { "No revenue recorded" }
                }

                h2 { "8. Anomalies per unit (IQR bounds)" }
                @if report.anomalies.by_unit.is_empty() {
                    p { "No units in the dataset" }
                } @else {
                    table {
                        tr { th { "Unit" } th { "Anomalies" } }
                        @for (unit, count) in &report.anomalies.by_unit {
                            tr { td { (unit) } td { (count) } }
                        }
                    }
                }

                h2 { "9. Correlation matrix" }
                table {
                    tr {
                        th { "" }
                        @for label in &report.correlation.labels {
                            th { (label) }
                        }
                    }
                    @for (i, row) in report.correlation.values.iter().enumerate() {
                        tr {
                            td { (report.correlation.labels[i]) }
                            @for value in row {
                                @if let Some(r) = value {
                                    td { (format!("{:.3}", r)) }
                                } @else {
                                    td { "NaN" }
                                }
                            }
                        }
                    }
                }
                @if !report.strong_pairs.is_empty() {
                    p { "Strongest correlations (|r| > " (report.strong_correlation) "):" }
                    ul {
                        @for pair in &report.strong_pairs {
                            li { (pair.left) " vs " (pair.right) ": " (format!("{:.3}", pair.r)) }
                        }
                    }
                }

                h2 { "10. Most consistent seller" }
                @if let Some(best) = &report.consistency {
                    p {
                        b { (best.seller) } ": std " (format_currency(best.std_dev))
                        ", mean " (format_currency(best.mean))
                        ", " (best.sales) " sales"
                    }
                } @else {
                    p { "No seller meets the minimum-sales criterion" }
                }

                @if let Some(chart) = chart_html {
                    h2 { "Revenue per product" }
                    (PreEscaped(chart))
                }
            }
        }
    }
}
