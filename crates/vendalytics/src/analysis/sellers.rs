//! Seller rollups: average ticket and consistency ranking.
use crate::data_handling::SalesTable;
use crate::stats;

use super::group_indices;

/// Average ticket (mean total value) for one seller.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerTicket {
    pub seller: String,
    pub avg_ticket: f64,
    pub sales: usize,
}

/// Consistency entry: spread of one seller's sale values.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerConsistency {
    pub seller: String,
    pub std_dev: f64,
    pub mean: f64,
    pub sales: usize,
}

/// Average ticket per seller, sorted by ticket descending.
pub fn ticket_per_seller(table: &SalesTable) -> Vec<SellerTicket> {
    let mut tickets: Vec<SellerTicket> = group_indices(&table.seller)
        .into_iter()
        .filter_map(|(seller, rows)| {
            let values: Vec<f64> = rows.iter().map(|&i| table.total_value[i]).collect();
            let avg_ticket = stats::mean(&values)?;
            Some(SellerTicket {
                seller: seller.to_string(),
                avg_ticket,
                sales: rows.len(),
            })
        })
        .collect();

    tickets.sort_by(|a, b| {
        b.avg_ticket
            .partial_cmp(&a.avg_ticket)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.seller.cmp(&b.seller))
    });
    tickets
}

/// Highest average ticket across sellers.
pub fn highest_avg_ticket(tickets: &[SellerTicket]) -> Option<f64> {
    tickets.first().map(|t| t.avg_ticket)
}

/// The seller with the smallest sample standard deviation of sale values,
/// among sellers with at least `min_sales` sales. `None` when nobody
/// qualifies.
pub fn most_consistent_seller(table: &SalesTable, min_sales: usize) -> Option<SellerConsistency> {
    let mut best: Option<SellerConsistency> = None;
    for (seller, rows) in group_indices(&table.seller) {
        if rows.len() < min_sales {
            continue;
        }
        let values: Vec<f64> = rows.iter().map(|&i| table.total_value[i]).collect();
        let (Some(std_dev), Some(mean)) = (stats::sample_std_dev(&values), stats::mean(&values))
        else {
            continue;
        };
        let candidate = SellerConsistency {
            seller: seller.to_string(),
            std_dev,
            mean,
            sales: rows.len(),
        };
        match &best {
            Some(current) if current.std_dev <= candidate.std_dev => {}
            _ => best = Some(candidate),
        }
    }
    best
}
