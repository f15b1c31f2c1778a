//! Seeded synthetic sales dataset, for demos and tests.
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data_handling::SalesTable;
use crate::io::SalesCsvConfig;

/// Product catalog: name, category, base price.
const CATALOG: &[(&str, &str, f64)] = &[
    ("Mesa", "Móveis", 350.0),
    ("Cadeira", "Móveis", 180.0),
    ("Guarda-roupa", "Móveis", 1900.0),
    ("Notebook", "Informática", 3200.0),
    ("Mouse", "Informática", 90.0),
    ("Monitor", "Informática", 1100.0),
    ("Geladeira", "Eletrodomésticos", 2400.0),
    ("Micro-ondas", "Eletrodomésticos", 700.0),
    ("Liquidificador", "Eletroportáteis", 150.0),
    ("Ventilador", "Eletroportáteis", 220.0),
];

const UNITS: &[&str] = &["Manaus", "Belém", "Porto Velho", "Boa Vista", "Rio Branco"];

const SELLERS_PER_UNIT: usize = 3;

/// Generate a reproducible synthetic sales table.
///
/// Dates span two years; prices jitter ±15% around the catalog base, and a
/// small fraction of rows carry an oversized quantity so the anomaly
/// analysis has something to find.
pub fn synthetic_table(rows: usize, seed: u64) -> SalesTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid start date");

    let mut product = Vec::with_capacity(rows);
    let mut category = Vec::with_capacity(rows);
    let mut unit = Vec::with_capacity(rows);
    let mut seller = Vec::with_capacity(rows);
    let mut quantity = Vec::with_capacity(rows);
    let mut unit_price = Vec::with_capacity(rows);
    let mut total_value = Vec::with_capacity(rows);
    let mut purchase_date = Vec::with_capacity(rows);

    for _ in 0..rows {
        let (name, cat, base) = CATALOG[rng.gen_range(0..CATALOG.len())];
        let unit_idx = rng.gen_range(0..UNITS.len());
        let seller_idx = unit_idx * SELLERS_PER_UNIT + rng.gen_range(0..SELLERS_PER_UNIT);

        let price = (base * rng.gen_range(0.85..1.15) * 100.0).round() / 100.0;
        let qty = if rng.gen_bool(0.02) {
            rng.gen_range(10..=20) as f64
        } else {
            rng.gen_range(1..=5) as f64
        };

        product.push(name.to_string());
        category.push(cat.to_string());
        unit.push(UNITS[unit_idx].to_string());
        seller.push(format!("V{:03}", seller_idx + 1));
        quantity.push(qty);
        unit_price.push(price);
        total_value.push(price * qty);
        purchase_date.push(start + Duration::days(rng.gen_range(0..730)));
    }

    SalesTable::new(
        product,
        category,
        unit,
        seller,
        quantity,
        unit_price,
        total_value,
        purchase_date,
    )
    .expect("generated columns share one length")
}

/// Write a synthetic dataset using the default column headers.
pub fn write_synthetic_csv<P: AsRef<Path>>(path: P, rows: usize, seed: u64) -> Result<()> {
    let table = synthetic_table(rows, seed);
    let config = SalesCsvConfig::default();

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;

    writer.write_record([
        config.product_column.as_str(),
        config.category_column.as_str(),
        config.unit_column.as_str(),
        config.seller_column.as_str(),
        config.quantity_column.as_str(),
        config.unit_price_column.as_str(),
        config.total_value_column.as_str(),
        config.date_column.as_str(),
    ])?;

    for i in 0..table.len() {
        let quantity = format!("{}", table.quantity[i]);
        let price = format!("{:.2}", table.unit_price[i]);
        let total = format!("{:.2}", table.total_value[i]);
        let date = table.purchase_date[i].format("%Y-%m-%d").to_string();
        writer.write_record([
            table.product[i].as_str(),
            table.category[i].as_str(),
            table.unit[i].as_str(),
            table.seller[i].as_str(),
            quantity.as_str(),
            price.as_str(),
            total.as_str(),
            date.as_str(),
        ])?;
    }

    writer.flush().context("Failed to flush dataset")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_sales_csv;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = synthetic_table(50, 7);
        let b = synthetic_table(50, 7);
        let c = synthetic_table(50, 8);
        assert_eq!(a.product, b.product);
        assert_eq!(a.total_value, b.total_value);
        assert_ne!(a.total_value, c.total_value);
    }

    #[test]
    fn generated_rows_are_internally_consistent() {
        let table = synthetic_table(200, 42);
        assert_eq!(table.len(), 200);
        for i in 0..table.len() {
            assert!((table.total_value[i] - table.quantity[i] * table.unit_price[i]).abs() < 1e-9);
            assert!(table.quantity[i] >= 1.0);
            assert!((2022..=2023).contains(&table.year[i]));
        }
    }

    #[test]
    fn written_dataset_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vendas.csv");
        write_synthetic_csv(&path, 120, 1).unwrap();

        let table = read_sales_csv(&path).unwrap();
        assert_eq!(table.len(), 120);
        let generated = synthetic_table(120, 1);
        assert_eq!(table.product, generated.product);
        assert_eq!(table.seller, generated.seller);
    }
}
