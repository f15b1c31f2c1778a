//! Delimited sales-dataset reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::data_handling::SalesTable;

/// Configuration for reading a delimited sales dataset.
///
/// Defaults match the canonical export headers. Header lookup is
/// case-insensitive; the total-value column is optional and computed as
/// price × quantity when absent.
#[derive(Debug, Clone)]
pub struct SalesCsvConfig {
    pub product_column: String,
    pub category_column: String,
    pub unit_column: String,
    pub seller_column: String,
    pub quantity_column: String,
    pub unit_price_column: String,
    pub total_value_column: String,
    pub date_column: String,
    /// Field delimiter, `b','` by default.
    pub delimiter: u8,
}

impl Default for SalesCsvConfig {
    fn default() -> Self {
        Self {
            product_column: "Produto".to_string(),
            category_column: "Categoria".to_string(),
            unit_column: "Unidade".to_string(),
            seller_column: "Cod_vendedor".to_string(),
            quantity_column: "Qtd".to_string(),
            unit_price_column: "Valor Unitário".to_string(),
            total_value_column: "Valor Total".to_string(),
            date_column: "Data_compra".to_string(),
            delimiter: b',',
        }
    }
}

/// Read a sales dataset using the default column mapping.
pub fn read_sales_csv<P: AsRef<Path>>(path: P) -> Result<SalesTable> {
    read_sales_csv_with_config(path, &SalesCsvConfig::default())
}

/// Read a sales dataset using a custom configuration.
pub fn read_sales_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &SalesCsvConfig,
) -> Result<SalesTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open dataset: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read dataset header row")?
        .clone();

    let product_idx = require_column(&headers, &config.product_column)?;
    let category_idx = require_column(&headers, &config.category_column)?;
    let unit_idx = require_column(&headers, &config.unit_column)?;
    let seller_idx = require_column(&headers, &config.seller_column)?;
    let quantity_idx = require_column(&headers, &config.quantity_column)?;
    let price_idx = require_column(&headers, &config.unit_price_column)?;
    let total_idx = find_column(&headers, &config.total_value_column);
    let date_idx = require_column(&headers, &config.date_column)?;

    let mut product = Vec::new();
    let mut category = Vec::new();
    let mut unit = Vec::new();
    let mut seller = Vec::new();
    let mut quantity = Vec::new();
    let mut unit_price = Vec::new();
    let mut total_value = Vec::new();
    let mut purchase_date = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = result.with_context(|| format!("Failed to read row {}", row))?;

        product.push(get_string(&record, product_idx, row, &config.product_column)?);
        category.push(get_string(&record, category_idx, row, &config.category_column)?);
        unit.push(get_string(&record, unit_idx, row, &config.unit_column)?);
        seller.push(get_string(&record, seller_idx, row, &config.seller_column)?);

        let qty = get_number(&record, quantity_idx, row, &config.quantity_column)?;
        let price = get_number(&record, price_idx, row, &config.unit_price_column)?;
        quantity.push(qty);
        unit_price.push(price);

        let total = match total_idx {
            Some(idx) => get_number(&record, idx, row, &config.total_value_column)?,
            None => price * qty,
        };
        total_value.push(total);

        let raw_date = record
            .get(date_idx)
            .ok_or_else(|| anyhow!("Missing '{}' at row {}", config.date_column, row))?;
        let date = parse_date(raw_date)
            .with_context(|| format!("Invalid '{}' at row {}: '{}'", config.date_column, row, raw_date))?;
        purchase_date.push(date);
    }

    let table = SalesTable::new(
        product,
        category,
        unit,
        seller,
        quantity,
        unit_price,
        total_value,
        purchase_date,
    )
    .context("Failed to assemble sales table")?;

    if table.is_empty() {
        return Err(anyhow!(
            "Dataset {} contains no rows",
            path.as_ref().display()
        ));
    }

    Ok(table)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize> {
    find_column(headers, name).ok_or_else(|| anyhow!("Missing column '{}'", name))
}

fn get_string(record: &StringRecord, idx: usize, row: usize, name: &str) -> Result<String> {
    let value = record
        .get(idx)
        .ok_or_else(|| anyhow!("Missing '{}' at row {}", name, row))?
        .trim();
    if value.is_empty() {
        return Err(anyhow!("Empty '{}' at row {}", name, row));
    }
    Ok(value.to_string())
}

fn get_number(record: &StringRecord, idx: usize, row: usize, name: &str) -> Result<f64> {
    let value = record
        .get(idx)
        .ok_or_else(|| anyhow!("Missing '{}' at row {}", name, row))?
        .trim();
    value
        .parse::<f64>()
        .with_context(|| format!("Invalid '{}' at row {}: '{}'", name, row, value))
}

/// Parse a purchase date, accepting ISO and day-first forms with an
/// optional time component.
fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }
    Err(anyhow!("Unrecognized date format"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_a_complete_dataset() {
        let file = write_dataset(
            "Produto,Categoria,Unidade,Cod_vendedor,Qtd,Valor Unitário,Valor Total,Data_compra\n\
             Mesa,Móveis,Manaus,V1,2,100.0,200.0,2023-01-10\n\
             Notebook,Informática,Belém,V2,1,3000.0,3000.0,15/02/2023\n",
        );

        let table = read_sales_csv(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.product, vec!["Mesa", "Notebook"]);
        assert_eq!(table.total_value, vec![200.0, 3000.0]);
        assert_eq!(table.year, vec![2023, 2023]);
        assert_eq!(table.month, vec![1, 2]);
    }

    #[test]
    fn computes_totals_when_the_column_is_absent() {
        let file = write_dataset(
            "Produto,Categoria,Unidade,Cod_vendedor,Qtd,Valor Unitário,Data_compra\n\
             Mesa,Móveis,Manaus,V1,3,100.0,2023-01-10\n",
        );

        let table = read_sales_csv(file.path()).unwrap();
        assert_eq!(table.total_value, vec![300.0]);
    }

    #[test]
    fn accepts_datetime_values_in_the_date_column() {
        let file = write_dataset(
            "Produto,Categoria,Unidade,Cod_vendedor,Qtd,Valor Unitário,Valor Total,Data_compra\n\
             Mesa,Móveis,Manaus,V1,1,100.0,100.0,2023-01-10 14:30:00\n",
        );

        let table = read_sales_csv(file.path()).unwrap();
        assert_eq!(table.month, vec![1]);
    }

    #[test]
    fn reports_the_offending_row_for_bad_numbers() {
        let file = write_dataset(
            "Produto,Categoria,Unidade,Cod_vendedor,Qtd,Valor Unitário,Valor Total,Data_compra\n\
             Mesa,Móveis,Manaus,V1,2,100.0,200.0,2023-01-10\n\
             Mesa,Móveis,Manaus,V1,abc,100.0,200.0,2023-01-11\n",
        );

        let err = read_sales_csv(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("row 2"), "unexpected error: {}", message);
        assert!(message.contains("Qtd"), "unexpected error: {}", message);
    }

    #[test]
    fn rejects_a_missing_column() {
        let file = write_dataset("Produto,Categoria\nMesa,Móveis\n");
        let err = read_sales_csv(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Unidade"));
    }

    #[test]
    fn rejects_an_empty_dataset() {
        let file = write_dataset(
            "Produto,Categoria,Unidade,Cod_vendedor,Qtd,Valor Unitário,Valor Total,Data_compra\n",
        );
        let err = read_sales_csv(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("no rows"));
    }
}
