//! Question-level rollups over the sales table.
//!
//! Each submodule answers one family of report questions and returns a
//! plain result struct; [`analyze`] runs the whole battery and bundles the
//! answers into a [`FullReport`] for the renderers.
pub mod anomalies;
pub mod correlation;
pub mod growth;
pub mod revenue;
pub mod sellers;
pub mod simulation;

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::AnalysisConfig;
use crate::data_handling::SalesTable;

/// All report answers computed from one table.
#[derive(Debug)]
pub struct FullReport {
    pub row_count: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub top_product: Option<revenue::TopProduct>,
    pub seller_tickets: Vec<sellers::SellerTicket>,
    pub unit_growth: Vec<growth::UnitGrowth>,
    pub revenue_share: Vec<revenue::UnitShare>,
    pub simulation: simulation::SimulationImpact,
    pub cumulative: Vec<revenue::UnitCumulative>,
    pub anomalies: anomalies::AnomalyReport,
    pub correlation: correlation::CorrelationMatrix,
    /// Off-diagonal pairs above the configured correlation threshold.
    pub strong_pairs: Vec<correlation::StrongPair>,
    pub strong_correlation: f64,
    pub consistency: Option<sellers::SellerConsistency>,
}

/// Run every analysis against `table` with the given thresholds.
pub fn analyze(table: &SalesTable, config: &AnalysisConfig) -> Result<FullReport> {
    let correlation = correlation::correlation_matrix(table)?;
    let strong_pairs = correlation.strong_pairs(config.strong_correlation);

    Ok(FullReport {
        row_count: table.len(),
        date_range: table.date_range(),
        top_product: revenue::top_product(table, config),
        seller_tickets: sellers::ticket_per_seller(table),
        unit_growth: growth::yoy_growth_by_unit(table),
        revenue_share: revenue::unit_revenue_share(table),
        simulation: simulation::price_increase_impact(table, config),
        cumulative: revenue::cumulative_by_unit(table),
        anomalies: anomalies::anomalies_by_unit(table, config.iqr_factor),
        correlation,
        strong_pairs,
        strong_correlation: config.strong_correlation,
        consistency: sellers::most_consistent_seller(table, config.min_seller_sales),
    })
}

/// Group row indices by a string key column, in key order.
pub(crate) fn group_indices<'a>(keys: &'a [String]) -> BTreeMap<&'a str, Vec<usize>> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, key) in keys.iter().enumerate() {
        groups.entry(key.as_str()).or_default().push(i);
    }
    groups
}

#[cfg(test)]
pub(crate) fn fixture_table() -> SalesTable {
    let date = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    SalesTable::new(
        vec![
            "Mesa".into(),
            "Cadeira".into(),
            "Notebook".into(),
            "Mesa".into(),
            "Notebook".into(),
            "Geladeira".into(),
            "Mesa".into(),
            "Notebook".into(),
        ],
        vec![
            "Móveis".into(),
            "Móveis".into(),
            "Informática".into(),
            "Móveis".into(),
            "Informática".into(),
            "Eletrodomésticos".into(),
            "Móveis".into(),
            "Informática".into(),
        ],
        vec![
            "Manaus".into(),
            "Manaus".into(),
            "Belém".into(),
            "Belém".into(),
            "Manaus".into(),
            "Manaus".into(),
            "Porto Velho".into(),
            "Porto Velho".into(),
        ],
        vec![
            "V1".into(),
            "V1".into(),
            "V2".into(),
            "V1".into(),
            "V2".into(),
            "V3".into(),
            "V3".into(),
            "V2".into(),
        ],
        vec![2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 4.0, 1.0],
        vec![100.0, 200.0, 3000.0, 100.0, 3000.0, 2000.0, 100.0, 3000.0],
        vec![200.0, 200.0, 3000.0, 100.0, 6000.0, 2000.0, 400.0, 3000.0],
        vec![
            date(2022, 3, 10),
            date(2022, 6, 15),
            date(2022, 9, 1),
            date(2023, 1, 20),
            date(2023, 2, 11),
            date(2023, 3, 5),
            date(2023, 4, 18),
            date(2023, 5, 9),
        ],
    )
    .unwrap()
}
