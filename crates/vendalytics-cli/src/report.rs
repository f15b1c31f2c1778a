//! CLI command runners: full report, chart, synthetic dataset.
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

use vendalytics::analysis::analyze;
use vendalytics::config::AnalysisConfig;
use vendalytics::data_handling::SalesTable;
use vendalytics::io::{read_sales_csv_with_config, SalesCsvConfig};
use vendalytics::report::html::render_html_report;
use vendalytics::report::plots::{plot_product_revenue, write_chart};
use vendalytics::report::render_text;
use vendalytics::synthetic::write_synthetic_csv;

/// Load an analysis configuration from a JSON file.
///
/// Every field defaults, so a file overriding a single threshold is valid.
pub fn load_analysis_config<P: AsRef<Path>>(path: P) -> Result<AnalysisConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: AnalysisConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

fn load_table<P: AsRef<Path>>(data: P, delimiter: char) -> Result<SalesTable> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    let csv_config = SalesCsvConfig {
        delimiter: delimiter as u8,
        ..SalesCsvConfig::default()
    };
    let table = read_sales_csv_with_config(data, &csv_config)?;
    table.log_input_summary();
    Ok(table)
}

/// Run the full ten-question report against a dataset, printing the text
/// report and optionally writing an HTML page with the revenue chart.
pub fn run_report<P: AsRef<Path>>(
    data: P,
    config_path: Option<P>,
    html_out: Option<P>,
    delimiter: char,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_analysis_config(path)?,
        None => AnalysisConfig::default(),
    };

    let table = load_table(data, delimiter)?;
    let report = analyze(&table, &config)?;

    let stdout = io::stdout();
    render_text(&report, &mut stdout.lock()).context("Failed to write report")?;

    if let Some(path) = html_out {
        let chart = plot_product_revenue(&table);
        let page = render_html_report(
            &report,
            Some(&chart.to_inline_html(Some("revenue-chart"))),
        );
        std::fs::write(&path, page.into_string())
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        log::info!("HTML report written to {}", path.as_ref().display());
    }

    Ok(())
}

/// Write the revenue-per-product bar chart as a standalone HTML page.
pub fn run_chart<P: AsRef<Path>>(data: P, out: P, delimiter: char) -> Result<()> {
    let table = load_table(data, delimiter)?;
    let plot = plot_product_revenue(&table);
    write_chart(&plot, &out);
    log::info!("Chart written to {}", out.as_ref().display());
    Ok(())
}

/// Generate a synthetic dataset for demos and smoke tests.
pub fn run_synth<P: AsRef<Path>>(out: P, rows: usize, seed: u64) -> Result<()> {
    write_synthetic_csv(&out, rows, seed)?;
    log::info!("{} synthetic rows written to {}", rows, out.as_ref().display());
    Ok(())
}
