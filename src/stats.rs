//! Descriptive statistics over repeated runs.

use crate::sa::RunResult;

/// Summary of final costs across runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); 0 for one sample.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl CostSummary {
    /// Summarizes `costs`. `None` if empty.
    pub fn from_costs(costs: &[f64]) -> Option<Self> {
        if costs.is_empty() {
            return None;
        }
        let count = costs.len();
        let n = count as f64;
        let mean = costs.iter().sum::<f64>() / n;
        let std_dev = if count > 1 {
            let ss: f64 = costs.iter().map(|c| (c - mean) * (c - mean)).sum();
            (ss / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        let mut sorted = costs.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if count % 2 == 1 {
            sorted[count / 2]
        } else {
            0.5 * (sorted[count / 2 - 1] + sorted[count / 2])
        };

        Some(Self {
            count,
            mean,
            std_dev,
            min: sorted[0],
            max: sorted[count - 1],
            median,
        })
    }

    /// Summarizes the best costs of `runs`.
    pub fn from_runs(runs: &[RunResult]) -> Option<Self> {
        let costs: Vec<f64> = runs.iter().map(|r| r.best_cost).collect();
        Self::from_costs(&costs)
    }
}

/// Gap between `cost` and a known optimum, in percent.
pub fn gap_percent(cost: f64, optimum: f64) -> f64 {
    (cost - optimum) / optimum * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_odd() {
        let s = CostSummary::from_costs(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.count, 3);
        assert!((s.mean - 2.0).abs() < 1e-12);
        assert!((s.std_dev - 1.0).abs() < 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert_eq!(s.median, 2.0);
    }

    #[test]
    fn test_summary_even_median() {
        let s = CostSummary::from_costs(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.median, 2.5);
        // sample variance of 1..=4 is 5/3
        assert!((s.std_dev - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summary_single_and_empty() {
        let s = CostSummary::from_costs(&[7.0]).unwrap();
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.median, 7.0);
        assert!(CostSummary::from_costs(&[]).is_none());
    }

    #[test]
    fn test_gap_percent() {
        assert!((gap_percent(447.3, 426.0) - 5.0).abs() < 1e-9);
    }
}
