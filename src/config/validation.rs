//! Configuration validation
//!
//! Nothing here rejects a config: a bad budget already falls back to the
//! default. Validation only reports what will be ignored.

use std::collections::HashSet;

use super::types::RouterConfig;
use crate::types::BudgetFraction;

impl RouterConfig {
    /// Problems worth warning about, one message each
    ///
    /// - routers without a label (they can never be looked up)
    /// - labels used more than once (only the first is used)
    /// - budgets outside `[0, 1]`
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut problems = Vec::new();

        for (index, entry) in self.routers.iter().enumerate() {
            let Some(label) = entry.label.as_deref() else {
                problems.push(format!("Router #{index} has no label and will never match"));
                continue;
            };

            if !seen.insert(label) {
                problems.push(format!(
                    "Router '{label}' is configured more than once; only the first entry is used"
                ));
            }

            if let Some(raw) = entry.percent_can_retry()
                && BudgetFraction::try_new(raw).is_err()
            {
                problems.push(format!(
                    "Router '{label}' has percentCanRetry {raw} outside [0, 1]; the default will be used"
                ));
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouterEntry;

    #[test]
    fn test_clean_config() {
        let cfg = RouterConfig {
            routers: vec![
                RouterEntry::with_budget("incoming", 0.2),
                RouterEntry::with_budget("outgoing", 1.0),
            ],
        };
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn test_reports_every_problem() {
        let cfg = RouterConfig {
            routers: vec![
                RouterEntry::default(),
                RouterEntry::with_budget("incoming", 0.2),
                RouterEntry::with_budget("incoming", 2.0),
            ],
        };
        let problems = cfg.validate();
        assert_eq!(problems.len(), 3);
        assert!(problems[0].contains("no label"));
        assert!(problems[1].contains("more than once"));
        assert!(problems[2].contains("outside [0, 1]"));
    }
}
