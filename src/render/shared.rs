//! Cloneable cells that keep the latest render output for another thread

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::{ChartRenderer, SummaryContainer};
use crate::budget::RetryBudgetState;

/// Summary container whose markup can be read from any clone
#[derive(Debug, Clone, Default)]
pub struct SharedMarkup {
    markup: Arc<Mutex<String>>,
}

impl SharedMarkup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current markup
    #[must_use]
    pub fn markup(&self) -> String {
        self.markup
            .lock()
            .map(|markup| markup.clone())
            .unwrap_or_default()
    }
}

impl SummaryContainer for SharedMarkup {
    fn set_markup(&mut self, markup: String) {
        if let Ok(mut current) = self.markup.lock() {
            *current = markup;
        }
    }
}

/// Chart that only remembers the last state it was given
#[derive(Debug, Clone, Default)]
pub struct SharedChart {
    state: Arc<Mutex<Option<RetryBudgetState>>>,
    updates: Arc<AtomicU64>,
}

impl SharedChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent state, `None` before the first update
    #[must_use]
    pub fn latest(&self) -> Option<RetryBudgetState> {
        self.state.lock().ok().and_then(|state| state.clone())
    }

    /// How many updates the chart has received
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }
}

impl ChartRenderer for SharedChart {
    fn update(&mut self, state: &RetryBudgetState) {
        if let Ok(mut current) = self.state.lock() {
            *current = Some(state.clone());
        }
        self.updates.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::to_health_bar;
    use crate::metrics::{Totals, summarize};
    use crate::types::{BudgetFraction, RouterName};

    #[test]
    fn test_markup_visible_through_clone() {
        let reader = SharedMarkup::new();
        let mut writer = reader.clone();
        assert_eq!(reader.markup(), "");
        writer.set_markup("hello".to_string());
        assert_eq!(reader.markup(), "hello");
    }

    #[test]
    fn test_chart_keeps_latest() {
        let reader = SharedChart::new();
        let mut writer = reader.clone();
        assert!(reader.latest().is_none());

        let summary = summarize(
            RouterName::new("r".to_string()).unwrap(),
            Totals::default(),
        );
        let state = to_health_bar(&summary, BudgetFraction::default());
        writer.update(&state);
        writer.update(&state);

        assert_eq!(reader.latest(), Some(state));
        assert_eq!(reader.update_count(), 2);
    }

    #[test]
    fn test_update_count_shared_across_threads() {
        let reader = SharedChart::new();
        let summary = summarize(
            RouterName::new("r".to_string()).unwrap(),
            Totals::default(),
        );
        let state = to_health_bar(&summary, BudgetFraction::default());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut writer = reader.clone();
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        writer.update(&state);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(reader.update_count(), 100);
    }
}
