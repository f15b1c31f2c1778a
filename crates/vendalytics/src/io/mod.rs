pub mod sales_csv;

pub use sales_csv::{read_sales_csv, read_sales_csv_with_config, SalesCsvConfig};
