//! IQR-based anomaly counting per unit.
use crate::data_handling::SalesTable;
use crate::stats::{self, IqrBounds};

use super::group_indices;

/// Anomaly counts per unit plus the bounds that defined them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyReport {
    /// Bounds on unit price; rows outside either side are anomalous.
    pub price_bounds: Option<IqrBounds>,
    /// Upper bound on quantity; only excessive quantities are anomalous.
    pub quantity_upper: Option<f64>,
    /// `(unit, anomalous row count)`, sorted by count descending.
    pub by_unit: Vec<(String, usize)>,
}

/// Count anomalous rows per unit.
///
/// Bounds are computed over the whole table: a unit price outside
/// `[Q1 − factor·IQR, Q3 + factor·IQR]` or a quantity above
/// `Q3 + factor·IQR` marks the row. One row with both conditions counts
/// once.
pub fn anomalies_by_unit(table: &SalesTable, factor: f64) -> AnomalyReport {
    let price_bounds = stats::iqr_bounds(&table.unit_price, factor);
    let quantity_upper = stats::iqr_bounds(&table.quantity, factor).map(|b| b.upper);

    let anomalous: Vec<bool> = (0..table.len())
        .map(|i| {
            let price_out = price_bounds
                .map(|b| table.unit_price[i] < b.lower || table.unit_price[i] > b.upper)
                .unwrap_or(false);
            let quantity_out = quantity_upper
                .map(|upper| table.quantity[i] > upper)
                .unwrap_or(false);
            price_out || quantity_out
        })
        .collect();

    let mut by_unit: Vec<(String, usize)> = group_indices(&table.unit)
        .into_iter()
        .map(|(unit, rows)| {
            let count = rows.iter().filter(|&&i| anomalous[i]).count();
            (unit.to_string(), count)
        })
        .collect();

    by_unit.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    AnomalyReport {
        price_bounds,
        quantity_upper,
        by_unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixture_table;

    #[test]
    fn bounds_follow_the_iqr_formula() {
        let table = fixture_table();
        let report = anomalies_by_unit(&table, 1.5);

        let bounds = report.price_bounds.unwrap();
        assert_eq!(bounds.q1, 100.0);
        assert_eq!(bounds.q3, 3000.0);
        assert_eq!(bounds.lower, 100.0 - 1.5 * 2900.0);
        assert_eq!(bounds.upper, 3000.0 + 1.5 * 2900.0);
        assert_eq!(report.quantity_upper, Some(3.5));
    }

    #[test]
    fn excessive_quantities_are_counted_in_their_unit() {
        let table = fixture_table();
        let report = anomalies_by_unit(&table, 1.5);

        // Only the quantity-4 Mesa sale in Porto Velho trips a bound.
        assert_eq!(report.by_unit[0], ("Porto Velho".to_string(), 1));
        let total: usize = report.by_unit.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 1);
        // Every unit appears, including clean ones.
        assert_eq!(report.by_unit.len(), 3);
    }

    #[test]
    fn rows_breaking_both_bounds_count_once() {
        let mut table = fixture_table();
        // Make the Porto Velho outlier also carry an extreme price.
        table = table.with_unit_prices(vec![
            100.0, 200.0, 3000.0, 100.0, 3000.0, 2000.0, 1_000_000.0, 3000.0,
        ]);
        let report = anomalies_by_unit(&table, 1.5);
        let porto = report
            .by_unit
            .iter()
            .find(|(unit, _)| unit == "Porto Velho")
            .unwrap();
        assert_eq!(porto.1, 1);
    }
}
