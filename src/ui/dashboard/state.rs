//! Dashboard state management
//!
//! Contains the dashboard screen state and selection logic

use crate::environment::Environment;
use crate::loader::DashboardData;
use crate::rewards;
use std::time::Instant;

/// State of the dashboard screen: one in-memory snapshot of server data for
/// the lifetime of the mounted screen, plus cursor position.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether the initial parallel load is still in flight.
    pub loading: bool,
    /// Snapshot of server data; degraded sections hold their defaults.
    pub data: DashboardData,
    /// Index of the selected module in the progress card.
    pub selected: usize,
    /// Time-of-day greeting, fixed at mount.
    pub greeting: &'static str,
    /// Study tip picked at mount.
    pub tip: &'static str,
}

impl DashboardState {
    /// Creates the state for a freshly mounted dashboard, before any data
    /// has arrived.
    pub fn loading(
        environment: Environment,
        start_time: Instant,
        greeting: &'static str,
        tip: &'static str,
    ) -> Self {
        Self {
            environment,
            start_time,
            loading: true,
            data: DashboardData::default(),
            selected: 0,
            greeting,
            tip,
        }
    }

    /// Installs the joined load result and clamps the selection.
    pub fn apply(&mut self, data: DashboardData) {
        self.data = data;
        self.loading = false;
        if self.selected >= self.data.modules.len() {
            self.selected = self.data.modules.len().saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.data.modules.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Id of the currently selected module, if any.
    pub fn selected_module_id(&self) -> Option<&str> {
        self.data
            .modules
            .get(self.selected)
            .map(|m| m.id.as_str())
    }

    /// Whether the currently selected module is locked by course order.
    pub fn selected_module_locked(&self) -> bool {
        rewards::is_module_locked(&self.data.modules, self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ModuleStatus, ModuleSummary};

    fn state_with_modules(count: usize) -> DashboardState {
        let mut state = DashboardState::loading(
            Environment::Production,
            Instant::now(),
            "Good evening",
            "tip",
        );
        let modules = (0..count)
            .map(|i| ModuleSummary {
                id: format!("m{}", i),
                title: format!("Module {}", i),
                summary: String::new(),
                status: ModuleStatus::NotStarted,
                points_reward: 0,
            })
            .collect();
        state.apply(DashboardData {
            modules,
            ..DashboardData::default()
        });
        state
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = state_with_modules(2);
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_apply_clamps_selection() {
        let mut state = state_with_modules(3);
        state.selected = 2;
        state.apply(DashboardData::default());
        assert_eq!(state.selected, 0);
        assert!(state.selected_module_id().is_none());
    }

    #[test]
    fn test_first_module_never_locked() {
        let state = state_with_modules(2);
        assert!(!state.selected_module_locked());
    }
}
