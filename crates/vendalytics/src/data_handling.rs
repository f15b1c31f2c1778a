//! Data structures and helpers for the in-memory sales table.
//!
//! This module defines `SalesTable`, a column-oriented table of sale rows
//! with derived date columns computed once at construction, and the
//! copy-producing operations (`filter`, `with_unit_prices`) the analyses
//! are built on. The table is never mutated after load.
use chrono::{Datelike, NaiveDate};

use crate::error::AnalysisError;

/// One sales dataset held as parallel columns.
///
/// All columns have the same length; `year` and `month` are derived from
/// `purchase_date` at construction and kept in sync by every operation.
#[derive(Debug, Clone)]
pub struct SalesTable {
    /// Product name
    pub product: Vec<String>,
    /// Product category
    pub category: Vec<String>,
    /// Sales branch/unit
    pub unit: Vec<String>,
    /// Seller code
    pub seller: Vec<String>,
    /// Quantity sold
    pub quantity: Vec<f64>,
    /// Unit price
    pub unit_price: Vec<f64>,
    /// Total value (price × quantity)
    pub total_value: Vec<f64>,
    /// Purchase date
    pub purchase_date: Vec<NaiveDate>,
    /// Purchase year (derived)
    pub year: Vec<i32>,
    /// Purchase month, 1-12 (derived)
    pub month: Vec<u32>,
}

impl SalesTable {
    /// Build a table from raw columns, deriving the date columns.
    ///
    /// Fails when the columns do not share one length. `total_value` rows
    /// are taken as given; use [`SalesTable::with_unit_prices`] to derive
    /// totals from prices.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product: Vec<String>,
        category: Vec<String>,
        unit: Vec<String>,
        seller: Vec<String>,
        quantity: Vec<f64>,
        unit_price: Vec<f64>,
        total_value: Vec<f64>,
        purchase_date: Vec<NaiveDate>,
    ) -> Result<Self, AnalysisError> {
        let n = product.len();
        for len in [
            category.len(),
            unit.len(),
            seller.len(),
            quantity.len(),
            unit_price.len(),
            total_value.len(),
            purchase_date.len(),
        ] {
            if len != n {
                return Err(AnalysisError::LengthMismatch { left: n, right: len });
            }
        }

        let year = purchase_date.iter().map(|d| d.year()).collect();
        let month = purchase_date.iter().map(|d| d.month()).collect();

        Ok(SalesTable {
            product,
            category,
            unit,
            seller,
            quantity,
            unit_price,
            total_value,
            purchase_date,
            year,
            month,
        })
    }

    pub fn len(&self) -> usize {
        self.product.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product.is_empty()
    }

    /// Year-month period of row `i`, the grouping key for monthly rollups.
    pub fn period(&self, i: usize) -> (i32, u32) {
        (self.year[i], self.month[i])
    }

    /// Earliest and latest purchase dates, `None` for an empty table.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.purchase_date.iter().min()?;
        let max = self.purchase_date.iter().max()?;
        Some((*min, *max))
    }

    /// Sum of the total-value column.
    pub fn total_revenue(&self) -> f64 {
        self.total_value.iter().sum()
    }

    pub fn log_input_summary(&self) {
        log::info!("{} sale rows loaded", self.len());
        if let Some((first, last)) = self.date_range() {
            log::info!("Period: {} to {}", first, last);
        }
    }

    /// Filter the table by applying a boolean mask to all row-aligned
    /// columns, returning a new table with only rows where
    /// `mask[i] == true`.
    pub fn filter(&self, mask: &[bool]) -> SalesTable {
        assert_eq!(
            mask.len(),
            self.len(),
            "Filter mask must match the number of rows"
        );
        let keep: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| if m { Some(i) } else { None })
            .collect();

        SalesTable {
            product: select(&self.product, &keep),
            category: select(&self.category, &keep),
            unit: select(&self.unit, &keep),
            seller: select(&self.seller, &keep),
            quantity: select(&self.quantity, &keep),
            unit_price: select(&self.unit_price, &keep),
            total_value: select(&self.total_value, &keep),
            purchase_date: select(&self.purchase_date, &keep),
            year: select(&self.year, &keep),
            month: select(&self.month, &keep),
        }
    }

    /// Copy of the table with replaced unit prices and totals recomputed as
    /// price × quantity. The receiver is left untouched; the simulation
    /// question works on the returned copy only.
    pub fn with_unit_prices(&self, unit_price: Vec<f64>) -> SalesTable {
        assert_eq!(
            unit_price.len(),
            self.len(),
            "Replacement prices must match the number of rows"
        );
        let total_value = unit_price
            .iter()
            .zip(self.quantity.iter())
            .map(|(p, q)| p * q)
            .collect();

        SalesTable {
            unit_price,
            total_value,
            ..self.clone()
        }
    }

}

fn select<T: Clone>(values: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| values[i].clone()).collect()
}
