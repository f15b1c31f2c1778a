//! Numeric kernel shared by the analyses.
//!
//! Free functions over `&[f64]` slices: mean, sample standard deviation,
//! linear-interpolation quantiles, IQR outlier bounds, Pearson correlation,
//! and percentage change. Undefined quantities (empty input, single
//! observation, zero variance) are `None`, never NaN.
use statrs::statistics::Statistics;

use crate::error::AnalysisError;

/// IQR-based outlier bounds for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().mean())
    }
}

/// Sample standard deviation (N − 1 denominator), `None` below two
/// observations. Matches the ddof = 1 convention of grouped rollups.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        None
    } else {
        Some(values.iter().std_dev())
    }
}

/// Quantile with linear interpolation between closest ranks.
///
/// # Arguments
///
/// * `values` - Observations, in any order.
/// * `q` - Quantile in `[0, 1]`; 0.25 is the first quartile.
///
/// # Returns
///
/// The interpolated quantile, or `None` for an empty slice or a `q`
/// outside `[0, 1]`.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q * (sorted.len() as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let fraction = rank - lower as f64;
    Some((1.0 - fraction) * sorted[lower] + fraction * sorted[upper])
}

/// Outlier bounds `[Q1 − factor·IQR, Q3 + factor·IQR]` for one column.
pub fn iqr_bounds(values: &[f64], factor: f64) -> Option<IqrBounds> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some(IqrBounds {
        q1,
        q3,
        iqr,
        lower: q1 - factor * iqr,
        upper: q3 + factor * iqr,
    })
}

/// Pearson correlation coefficient between two columns.
///
/// # Returns
///
/// * `Ok(Some(r))` for two columns with positive variance
/// * `Ok(None)` when either column is constant or shorter than two rows
/// * `Err` when the columns differ in length
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Option<f64>, AnalysisError> {
    if x.len() != y.len() {
        return Err(AnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Ok(None);
    }

    let mean_x = x.iter().mean();
    let mean_y = y.iter().mean();

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Ok(None);
    }
    Ok(Some(cov / (var_x.sqrt() * var_y.sqrt())))
}

/// Percentage change from `old` to `new`, `(new − old) / old × 100`.
///
/// `None` when the base period is not positive; growth against a zero or
/// negative base is reported as unavailable rather than infinite.
pub fn pct_change(old: f64, new: f64) -> Option<f64> {
    if old > 0.0 {
        Some((new - old) / old * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn mean_and_std_of_known_sample() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        close(mean(&values).unwrap(), 5.0);
        // Sample variance of this set is 32/7.
        close(sample_std_dev(&values).unwrap(), (32.0f64 / 7.0).sqrt());
    }

    #[test]
    fn degenerate_inputs_are_undefined() {
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_std_dev(&[3.0]), None);
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[1.0], 1.5), None);
        assert_eq!(pct_change(0.0, 10.0), None);
        assert_eq!(pct_change(-5.0, 10.0), None);
    }

    #[test]
    fn quantile_interpolates_between_ranks() {
        let values = [1.0, 2.0, 3.0, 4.0];
        close(quantile(&values, 0.25).unwrap(), 1.75);
        close(quantile(&values, 0.5).unwrap(), 2.5);
        close(quantile(&values, 0.75).unwrap(), 3.25);
        close(quantile(&values, 0.0).unwrap(), 1.0);
        close(quantile(&values, 1.0).unwrap(), 4.0);
    }

    #[test]
    fn iqr_bounds_match_the_quartile_formula() {
        let values: Vec<f64> = (1..=8).map(f64::from).collect();
        let bounds = iqr_bounds(&values, 1.5).unwrap();
        close(bounds.q1, 2.75);
        close(bounds.q3, 6.25);
        close(bounds.iqr, 3.5);
        close(bounds.lower, 2.75 - 1.5 * 3.5);
        close(bounds.upper, 6.25 + 1.5 * 3.5);
    }

    #[test]
    fn pearson_detects_exact_linear_relationships() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let doubled = [2.0, 4.0, 6.0, 8.0];
        let negated = [4.0, 3.0, 2.0, 1.0];
        close(pearson(&x, &doubled).unwrap().unwrap(), 1.0);
        close(pearson(&x, &negated).unwrap().unwrap(), -1.0);
    }

    #[test]
    fn pearson_of_constant_column_is_undefined() {
        let x = [1.0, 2.0, 3.0];
        let constant = [5.0, 5.0, 5.0];
        assert_eq!(pearson(&x, &constant).unwrap(), None);
    }

    #[test]
    fn pearson_rejects_mismatched_lengths() {
        let err = pearson(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, AnalysisError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn pct_change_between_positive_periods() {
        close(pct_change(100.0, 125.0).unwrap(), 25.0);
        close(pct_change(200.0, 150.0).unwrap(), -25.0);
    }
}
