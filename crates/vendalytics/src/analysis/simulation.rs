//! Price-increase simulation over a disposable copy of the table.
use crate::config::AnalysisConfig;
use crate::data_handling::SalesTable;

/// Revenue impact of the simulated price increases.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationImpact {
    pub original_revenue: f64,
    pub simulated_revenue: f64,
    pub impact: f64,
    pub impact_pct: f64,
    pub rows_affected: usize,
}

/// Apply the configured per-category increases to every row whose unit
/// price is below the cap, recompute totals on a copy, and report the
/// revenue delta. The source table is never mutated.
pub fn price_increase_impact(table: &SalesTable, config: &AnalysisConfig) -> SimulationImpact {
    let mut prices = table.unit_price.clone();
    let mut rows_affected = 0;

    for (i, price) in prices.iter_mut().enumerate() {
        if *price >= config.simulation_price_cap {
            continue;
        }
        let increase = config
            .simulation_increases
            .iter()
            .find(|inc| inc.category == table.category[i]);
        if let Some(increase) = increase {
            *price *= 1.0 + increase.percent / 100.0;
            rows_affected += 1;
        }
    }

    let simulated = table.with_unit_prices(prices);
    let original_revenue = table.total_revenue();
    let simulated_revenue = simulated.total_revenue();
    let impact = simulated_revenue - original_revenue;
    let impact_pct = if original_revenue > 0.0 {
        impact / original_revenue * 100.0
    } else {
        0.0
    };

    SimulationImpact {
        original_revenue,
        simulated_revenue,
        impact,
        impact_pct,
        rows_affected,
    }
}
