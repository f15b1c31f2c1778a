//! Revenue chart built with plotly.
use std::collections::BTreeMap;
use std::path::Path;

use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot};

use crate::data_handling::SalesTable;

/// Total revenue per product, in product order.
pub fn product_totals(table: &SalesTable) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for (i, product) in table.product.iter().enumerate() {
        *totals.entry(product.as_str()).or_insert(0.0) += table.total_value[i];
    }
    totals
        .into_iter()
        .map(|(product, revenue)| (product.to_string(), revenue))
        .collect()
}

/// Bar chart of total revenue per product.
pub fn plot_product_revenue(table: &SalesTable) -> Plot {
    let (products, revenues): (Vec<String>, Vec<f64>) =
        product_totals(table).into_iter().unzip();

    let trace = Bar::new(products, revenues).name("Revenue");

    let layout = Layout::new()
        .title("Total revenue per product")
        .x_axis(Axis::new().title("Product"))
        .y_axis(Axis::new().title("Revenue (R$)"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Write the chart as a standalone HTML page.
pub fn write_chart<P: AsRef<Path>>(plot: &Plot, path: P) {
    plot.write_html(path);
}
