//! Convergence detection over recorded differences.
//!
//! The checker scans every difference the run has ever recorded and
//! reports the ones that fell strictly below a caller-supplied threshold.
//! It is not wired into the generational loop — the external driver
//! decides when (and whether) to consult it.

use crate::fitness::FrequencyHistory;

/// A recorded difference that crossed the convergence threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Converged {
    /// Fitness rank bucket the difference was recorded under.
    pub rank: usize,
    /// The partition-sum difference itself.
    pub difference: u32,
}

/// All `(rank, difference)` pairs with `difference < threshold`, in
/// ascending rank order and, within a rank, in recording order.
pub fn evaluate_convergence(history: &FrequencyHistory, threshold: u32) -> Vec<Converged> {
    history
        .iter()
        .flat_map(|(rank, differences)| {
            differences
                .iter()
                .filter(move |&&difference| difference < threshold)
                .map(move |&difference| Converged { rank, difference })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::FrequencyTable;

    fn history_with(entries: &[(usize, u32)]) -> FrequencyHistory {
        let mut table = FrequencyTable::new(4);
        for &(rank, difference) in entries {
            table.record(rank, difference);
        }
        let mut history = FrequencyHistory::new(4);
        history.absorb(&table);
        history
    }

    #[test]
    fn test_reports_differences_below_threshold() {
        let history = history_with(&[(3, 0), (2, 2), (1, 2), (0, 5)]);
        let converged = evaluate_convergence(&history, 3);

        assert_eq!(
            converged,
            vec![
                Converged {
                    rank: 1,
                    difference: 2
                },
                Converged {
                    rank: 2,
                    difference: 2
                },
                Converged {
                    rank: 3,
                    difference: 0
                },
            ]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let history = history_with(&[(3, 5)]);
        assert!(evaluate_convergence(&history, 5).is_empty());
        assert_eq!(evaluate_convergence(&history, 6).len(), 1);
    }

    #[test]
    fn test_empty_history_never_converges() {
        let history = FrequencyHistory::new(20);
        assert!(evaluate_convergence(&history, u32::MAX).is_empty());
    }

    #[test]
    fn test_scans_accumulated_generations() {
        let mut history = FrequencyHistory::new(4);
        for difference in [9, 4, 1] {
            let mut table = FrequencyTable::new(4);
            table.record(3, difference);
            history.absorb(&table);
        }

        let converged = evaluate_convergence(&history, 5);
        assert_eq!(converged.len(), 2);
        assert!(converged.iter().all(|c| c.rank == 3));
    }
}
