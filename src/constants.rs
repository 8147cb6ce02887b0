//! Constants used throughout the router summary
//!
//! This module centralizes magic numbers, tree segment names and
//! display strings to keep them out of the computation code.

/// Retry budget constants
pub mod budget {
    /// Fraction of requests a router may retry when its config does not say
    pub const DEFAULT_PERCENT_CAN_RETRY: f64 = 0.2;

    /// Smallest health fraction drawn orange (below is red)
    pub const ORANGE_THRESHOLD: f64 = 0.5;

    /// Smallest health fraction drawn green
    pub const GREEN_THRESHOLD: f64 = 0.75;

    const _THRESHOLDS_ORDERED: () = assert!(
        ORANGE_THRESHOLD < GREEN_THRESHOLD,
        "orange tier must start below the green tier"
    );
}

/// Segment names of the metrics tree
///
/// Every router lives under `rt/<router>`; the categories below hang off it.
pub mod tree {
    /// Root segment for all router subtrees
    pub const ROUTER_ROOT: &str = "rt";

    /// Server-scoped entities (`rt/<router>/srv/<server>`)
    pub const SERVERS: &[&str] = &["srv"];

    /// Client-scoped entities (`rt/<router>/dst/id/<client>`)
    pub const CLIENTS: &[&str] = &["dst", "id"];

    /// Service path subtree (`rt/<router>/dst/path/svc`)
    pub const SERVICE_PATHS: &[&str] = &["dst", "path", "svc"];

    /// Trailing segment requesting a gauge from the collector
    pub const GAUGE: &str = "gauge";

    /// Trailing segment requesting a counter from the collector
    pub const COUNTER: &str = "counter";

    /// Field holding a gauge's current reading in a snapshot
    pub const VALUE: &str = "value";

    /// Field holding a counter's change since the previous snapshot
    pub const DELTA: &str = "delta";
}

/// Display strings
pub mod text {
    /// Shown in place of a percentage that has no numeric value
    pub const PERCENT_PLACEHOLDER: &str = " - ";

    /// Shown in place of a rate whose denominator is zero
    pub const RATE_UNAVAILABLE: &str = "N/A";

    /// Health bar description
    pub const BUDGET_DESCRIPTION: &str = "Retry budget available";

    /// Health bar warning once retries reach the budget
    pub const BUDGET_EXHAUSTED: &str = "budget exhausted";
}

/// Snapshot feed and terminal output
pub mod feed {
    /// Default pause between published snapshots
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

    /// Width of the ASCII health bar in headless mode
    pub const TEXT_BAR_WIDTH: usize = 30;

    /// Argument meaning "read snapshots from stdin"
    pub const STDIN: &str = "-";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_in_range() {
        assert!((0.0..=1.0).contains(&budget::DEFAULT_PERCENT_CAN_RETRY));
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(budget::ORANGE_THRESHOLD, 0.5);
        assert_eq!(budget::GREEN_THRESHOLD, 0.75);
    }

    #[test]
    fn test_text_constants() {
        assert_eq!(text::PERCENT_PLACEHOLDER, " - ");
        assert_eq!(text::RATE_UNAVAILABLE, "N/A");
        assert_eq!(text::BUDGET_DESCRIPTION, "Retry budget available");
        assert_eq!(text::BUDGET_EXHAUSTED, "budget exhausted");
    }

    #[test]
    fn test_read_fields_differ_from_request_fields() {
        assert_ne!(tree::GAUGE, tree::VALUE);
        assert_ne!(tree::COUNTER, tree::DELTA);
    }
}
