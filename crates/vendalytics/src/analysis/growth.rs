//! Year-over-year revenue growth per unit.
use std::collections::BTreeMap;

use crate::data_handling::SalesTable;
use crate::stats;

use super::group_indices;

/// Yearly revenue trajectory of one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitGrowth {
    pub unit: String,
    /// `(year, revenue)` in chronological order.
    pub yearly: Vec<(i32, f64)>,
    /// Mean of the year-over-year growth percentages.
    pub mean_growth_pct: f64,
}

/// Mean year-over-year growth per unit, sorted by growth descending.
///
/// Growth between consecutive years is `(new − old) / old × 100` and is
/// only computed against a positive base year. Units with fewer than two
/// years of data, or no computable growth figure, are omitted.
pub fn yoy_growth_by_unit(table: &SalesTable) -> Vec<UnitGrowth> {
    let mut results = Vec::new();

    for (unit, rows) in group_indices(&table.unit) {
        let mut yearly: BTreeMap<i32, f64> = BTreeMap::new();
        for &i in &rows {
            *yearly.entry(table.year[i]).or_insert(0.0) += table.total_value[i];
        }
        let yearly: Vec<(i32, f64)> = yearly.into_iter().collect();
        if yearly.len() < 2 {
            continue;
        }

        let growths: Vec<f64> = yearly
            .windows(2)
            .filter_map(|pair| stats::pct_change(pair[0].1, pair[1].1))
            .collect();
        let Some(mean_growth_pct) = stats::mean(&growths) else {
            continue;
        };

        results.push(UnitGrowth {
            unit: unit.to_string(),
            yearly,
            mean_growth_pct,
        });
    }

    results.sort_by(|a, b| {
        b.mean_growth_pct
            .partial_cmp(&a.mean_growth_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.unit.cmp(&b.unit))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixture_table;
    use chrono::NaiveDate;

    #[test]
    fn growth_follows_the_percentage_formula() {
        let table = fixture_table();
        let growth = yoy_growth_by_unit(&table);

        // Porto Velho has a single year and is skipped.
        assert_eq!(growth.len(), 2);

        // Manaus: 400 in 2022, 8000 in 2023.
        assert_eq!(growth[0].unit, "Manaus");
        assert_eq!(growth[0].yearly, vec![(2022, 400.0), (2023, 8000.0)]);
        assert!((growth[0].mean_growth_pct - 1900.0).abs() < 1e-9);

        // Belém: 3000 in 2022, 100 in 2023.
        assert_eq!(growth[1].unit, "Belém");
        assert!((growth[1].mean_growth_pct - (100.0 - 3000.0) / 3000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_base_years_are_skipped() {
        let date = |y: i32| NaiveDate::from_ymd_opt(y, 6, 1).unwrap();
        // One unit, three years, with a zero-revenue middle year.
        let table = SalesTable::new(
            vec!["P".into(), "P".into(), "P".into()],
            vec!["C".into(), "C".into(), "C".into()],
            vec!["U".into(), "U".into(), "U".into()],
            vec!["S".into(), "S".into(), "S".into()],
            vec![1.0, 1.0, 1.0],
            vec![100.0, 0.0, 300.0],
            vec![100.0, 0.0, 300.0],
            vec![date(2021), date(2022), date(2023)],
        )
        .unwrap();

        let growth = yoy_growth_by_unit(&table);
        assert_eq!(growth.len(), 1);
        // 2021→2022 is -100%; 2022→2023 has a zero base and is skipped.
        assert!((growth[0].mean_growth_pct - (-100.0)).abs() < 1e-9);
    }
}
