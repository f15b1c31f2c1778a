//! Pearson correlation matrix over the numeric columns.
use crate::data_handling::SalesTable;
use crate::error::AnalysisError;
use crate::stats;

/// Correlation matrix over the numeric columns of the table.
///
/// `values[i][j]` is the Pearson coefficient between columns `i` and `j`,
/// `None` when undefined (constant column). The matrix is symmetric with a
/// unit diagonal for every non-constant column.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// One strongly correlated off-diagonal pair.
#[derive(Debug, Clone, PartialEq)]
pub struct StrongPair {
    pub left: String,
    pub right: String,
    pub r: f64,
}

/// Correlation matrix over quantity, unit price, total value, year, and
/// month — the numeric columns of the dataset.
pub fn correlation_matrix(table: &SalesTable) -> Result<CorrelationMatrix, AnalysisError> {
    if table.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let year: Vec<f64> = table.year.iter().map(|&y| y as f64).collect();
    let month: Vec<f64> = table.month.iter().map(|&m| m as f64).collect();
    let columns: [(&str, &[f64]); 5] = [
        ("Qtd", &table.quantity),
        ("Valor Unitário", &table.unit_price),
        ("Valor Total", &table.total_value),
        ("Ano", &year),
        ("Mes", &month),
    ];

    let labels = columns.iter().map(|(name, _)| name.to_string()).collect();
    let mut values = vec![vec![None; columns.len()]; columns.len()];
    for i in 0..columns.len() {
        for j in i..columns.len() {
            let r = stats::pearson(columns[i].1, columns[j].1)?;
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { labels, values })
}

impl CorrelationMatrix {
    /// Off-diagonal pairs with `|r|` above `threshold`, each pair once.
    pub fn strong_pairs(&self, threshold: f64) -> Vec<StrongPair> {
        let mut pairs = Vec::new();
        for i in 0..self.labels.len() {
            for j in (i + 1)..self.labels.len() {
                if let Some(r) = self.values[i][j] {
                    if r.abs() > threshold {
                        pairs.push(StrongPair {
                            left: self.labels[i].clone(),
                            right: self.labels[j].clone(),
                            r,
                        });
                    }
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixture_table;
    use chrono::NaiveDate;

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let table = fixture_table();
        let matrix = correlation_matrix(&table).unwrap();

        assert_eq!(matrix.labels.len(), 5);
        for i in 0..5 {
            assert!((matrix.values[i][i].unwrap() - 1.0).abs() < 1e-9);
            for j in 0..5 {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
    }

    #[test]
    fn price_and_total_are_a_strong_pair() {
        let table = fixture_table();
        let matrix = correlation_matrix(&table).unwrap();
        let pairs = matrix.strong_pairs(0.5);

        let pair = pairs
            .iter()
            .find(|p| p.left == "Valor Unitário" && p.right == "Valor Total")
            .expect("price/total should correlate strongly");
        assert!(pair.r > 0.8);
    }

    #[test]
    fn constant_columns_are_undefined_not_nan() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        // Two identical rows: every column is constant.
        let table = SalesTable::new(
            vec!["P".into(), "P".into()],
            vec!["C".into(), "C".into()],
            vec!["U".into(), "U".into()],
            vec!["S".into(), "S".into()],
            vec![1.0, 1.0],
            vec![10.0, 10.0],
            vec![10.0, 10.0],
            vec![date, date],
        )
        .unwrap();

        let matrix = correlation_matrix(&table).unwrap();
        for row in &matrix.values {
            assert!(row.iter().all(|v| v.is_none()));
        }
        assert!(matrix.strong_pairs(0.5).is_empty());
    }

    #[test]
    fn empty_table_is_rejected() {
        let table = fixture_table().filter(&[false; 8]);
        assert_eq!(correlation_matrix(&table), Err(AnalysisError::EmptyDataset));
    }
}
