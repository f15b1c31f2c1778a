//! Revenue rollups: top product, unit shares, cumulative series.
use std::collections::BTreeMap;
use std::collections::HashSet;

use chrono::Duration;

use crate::config::AnalysisConfig;
use crate::data_handling::SalesTable;

use super::group_indices;

/// Best-selling product by revenue inside the trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct TopProduct {
    pub product: String,
    pub revenue: f64,
    /// Number of sale rows inside the window.
    pub sales: usize,
    /// Number of distinct units the product was sold in.
    pub units: usize,
}

/// One unit's share of total revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitShare {
    pub unit: String,
    pub revenue: f64,
    pub share_pct: f64,
}

/// One unit's monthly revenue accumulated in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCumulative {
    pub unit: String,
    /// `((year, month), accumulated revenue up to that month)`.
    pub monthly: Vec<((i32, u32), f64)>,
    /// Final accumulated value; equals the unit's total revenue.
    pub cumulative_total: f64,
}

/// Top product by revenue over the trailing window, counting only products
/// with at least `min_product_sales` rows sold in at least
/// `min_distinct_units` units. `None` when no product qualifies.
pub fn top_product(table: &SalesTable, config: &AnalysisConfig) -> Option<TopProduct> {
    let (_, max_date) = table.date_range()?;
    let cutoff = max_date - Duration::days(config.trailing_window_days);
    let mask: Vec<bool> = table
        .purchase_date
        .iter()
        .map(|d| *d >= cutoff)
        .collect();
    let window = table.filter(&mask);

    let mut best: Option<TopProduct> = None;
    for (product, rows) in group_indices(&window.product) {
        let revenue: f64 = rows.iter().map(|&i| window.total_value[i]).sum();
        let units: HashSet<&str> = rows.iter().map(|&i| window.unit[i].as_str()).collect();
        if rows.len() < config.min_product_sales || units.len() < config.min_distinct_units {
            continue;
        }
        let candidate = TopProduct {
            product: product.to_string(),
            revenue,
            sales: rows.len(),
            units: units.len(),
        };
        match &best {
            Some(current) if current.revenue >= candidate.revenue => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Revenue share per unit, sorted by share descending.
pub fn unit_revenue_share(table: &SalesTable) -> Vec<UnitShare> {
    let total = table.total_revenue();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut shares: Vec<UnitShare> = group_indices(&table.unit)
        .into_iter()
        .map(|(unit, rows)| {
            let revenue: f64 = rows.iter().map(|&i| table.total_value[i]).sum();
            UnitShare {
                unit: unit.to_string(),
                revenue,
                share_pct: revenue / total * 100.0,
            }
        })
        .collect();

    shares.sort_by(|a, b| {
        b.share_pct
            .partial_cmp(&a.share_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.unit.cmp(&b.unit))
    });
    shares
}

/// Per-unit monthly revenue accumulated in period order, sorted by the
/// final accumulated value descending.
pub fn cumulative_by_unit(table: &SalesTable) -> Vec<UnitCumulative> {
    let mut results: Vec<UnitCumulative> = group_indices(&table.unit)
        .into_iter()
        .map(|(unit, rows)| {
            let mut monthly: BTreeMap<(i32, u32), f64> = BTreeMap::new();
            for &i in &rows {
                *monthly.entry(table.period(i)).or_insert(0.0) += table.total_value[i];
            }

            let mut running = 0.0;
            let monthly: Vec<((i32, u32), f64)> = monthly
                .into_iter()
                .map(|(period, revenue)| {
                    running += revenue;
                    (period, running)
                })
                .collect();

            UnitCumulative {
                unit: unit.to_string(),
                cumulative_total: running,
                monthly,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.cumulative_total
            .partial_cmp(&a.cumulative_total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.unit.cmp(&b.unit))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixture_table;

    fn loose_config(min_sales: usize, min_units: usize) -> AnalysisConfig {
        AnalysisConfig {
            min_product_sales: min_sales,
            min_distinct_units: min_units,
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn top_product_applies_both_volume_filters() {
        let table = fixture_table();

        // Notebook: 3 window sales across 3 units; Mesa: 2 across 2.
        let top = top_product(&table, &loose_config(2, 2)).unwrap();
        assert_eq!(top.product, "Notebook");
        assert_eq!(top.revenue, 12000.0);
        assert_eq!(top.sales, 3);
        assert_eq!(top.units, 3);

        // Raising the unit filter to 4 disqualifies everything.
        assert_eq!(top_product(&table, &loose_config(2, 4)), None);
    }

    #[test]
    fn top_product_restricts_to_the_trailing_window() {
        let table = fixture_table();
        // Mesa's 2022-03-10 row falls outside max date minus 365 days.
        let top = top_product(&table, &loose_config(1, 1)).unwrap();
        assert_eq!(top.product, "Notebook");
        let mesa_like = top_product(
            &table.filter(&[true, false, false, true, false, false, true, false]),
            &loose_config(1, 1),
        )
        .unwrap();
        assert_eq!(mesa_like.product, "Mesa");
        assert_eq!(mesa_like.sales, 2, "row outside the window must not count");
        assert_eq!(mesa_like.revenue, 500.0);
    }

    #[test]
    fn shares_sum_to_one_hundred_percent() {
        let table = fixture_table();
        let shares = unit_revenue_share(&table);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].unit, "Manaus");
        assert_eq!(shares[0].revenue, 8400.0);
        let sum: f64 = shares.iter().map(|s| s.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        // Sorted descending.
        assert!(shares[0].share_pct >= shares[1].share_pct);
        assert!(shares[1].share_pct >= shares[2].share_pct);
    }

    #[test]
    fn cumulative_final_value_equals_unit_total() {
        let table = fixture_table();
        let cumulative = cumulative_by_unit(&table);
        assert_eq!(cumulative[0].unit, "Manaus");
        assert_eq!(cumulative[0].cumulative_total, 8400.0);

        for unit in &cumulative {
            let last = unit.monthly.last().unwrap().1;
            assert_eq!(last, unit.cumulative_total);
            // Monthly series is non-decreasing and period-ordered.
            for pair in unit.monthly.windows(2) {
                assert!(pair[0].0 < pair[1].0);
                assert!(pair[0].1 <= pair[1].1);
            }
        }

        let manaus = &cumulative[0];
        assert_eq!(manaus.monthly.first().unwrap(), &((2022, 3), 200.0));
        assert_eq!(manaus.monthly.last().unwrap(), &((2023, 3), 8400.0));
    }
}
