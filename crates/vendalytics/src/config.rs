use serde::{Deserialize, Serialize};

/// Central configuration for the report analyses.
///
/// Every threshold the analyses use lives here so a JSON config file can
/// override any of them; defaults reproduce the canonical report.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Trailing window for the top-product question, in days.
    pub trailing_window_days: i64,
    /// Minimum number of sale rows for a product to qualify.
    pub min_product_sales: usize,
    /// Minimum number of distinct units a product must be sold in.
    pub min_distinct_units: usize,
    /// Unit-price cap below which the simulation raises prices.
    pub simulation_price_cap: f64,
    /// Per-category price increases applied by the simulation.
    pub simulation_increases: Vec<CategoryIncrease>,
    /// Multiplier applied to the IQR when computing outlier bounds.
    pub iqr_factor: f64,
    /// Absolute correlation above which a pair is reported as strong.
    pub strong_correlation: f64,
    /// Minimum sale count for a seller to enter the consistency ranking.
    pub min_seller_sales: usize,
}

/// One simulated price increase: rows in `category` with a unit price below
/// the configured cap have their price multiplied by `1 + percent / 100`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoryIncrease {
    pub category: String,
    pub percent: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            trailing_window_days: 365,
            min_product_sales: 50,
            min_distinct_units: 3,
            simulation_price_cap: 1500.0,
            simulation_increases: vec![
                CategoryIncrease {
                    category: "Móveis".to_string(),
                    percent: 10.0,
                },
                CategoryIncrease {
                    category: "Informática".to_string(),
                    percent: 15.0,
                },
            ],
            iqr_factor: 1.5,
            strong_correlation: 0.5,
            min_seller_sales: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_match_canonical_report() {
        let config = AnalysisConfig::default();
        assert_eq!(config.trailing_window_days, 365);
        assert_eq!(config.min_product_sales, 50);
        assert_eq!(config.min_distinct_units, 3);
        assert_eq!(config.simulation_increases.len(), 2);
        assert_eq!(config.simulation_increases[0].category, "Móveis");
        assert_eq!(config.simulation_increases[0].percent, 10.0);
        assert_eq!(config.simulation_increases[1].percent, 15.0);
    }
}
