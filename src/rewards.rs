//! Reward arithmetic
//!
//! Pure derived display values, recomputed on every render from source
//! numbers. Nothing here is cached or persisted.

use crate::api::types::{ModuleStatus, ModuleSummary};
use crate::consts::cli_consts::POINTS_PER_CREDIT;

/// Currency-equivalent credit for a points balance (20 points = 1 unit).
pub fn credit_amount(points: u64) -> f64 {
    points as f64 / POINTS_PER_CREDIT as f64
}

/// Completion percentage for the progress card. Zero when nothing exists
/// to complete.
pub fn completion_percent(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total) * 100.0
}

/// A module is locked when the previous module in course order has not been
/// completed. The first module is never locked.
pub fn is_module_locked(modules: &[ModuleSummary], index: usize) -> bool {
    if index == 0 {
        return false;
    }
    match modules.get(index - 1) {
        Some(previous) => previous.status != ModuleStatus::Completed,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, status: ModuleStatus) -> ModuleSummary {
        ModuleSummary {
            id: id.to_string(),
            title: id.to_string(),
            summary: String::new(),
            status,
            points_reward: 10,
        }
    }

    #[test]
    // 100 points at 20 points per unit is 5.00 credit.
    fn test_credit_amount() {
        assert_eq!(credit_amount(100), 5.0);
        assert_eq!(credit_amount(0), 0.0);
        assert_eq!(credit_amount(30), 1.5);
    }

    #[test]
    // 3 of 4 completed is 75%.
    fn test_completion_percent() {
        assert_eq!(completion_percent(3, 4), 75.0);
        assert_eq!(completion_percent(0, 4), 0.0);
        assert_eq!(completion_percent(4, 4), 100.0);
        assert_eq!(completion_percent(0, 0), 0.0);
    }

    #[test]
    // A module is locked exactly when its predecessor is not completed.
    fn test_lock_follows_previous_status() {
        let modules = vec![
            module("m1", ModuleStatus::Completed),
            module("m2", ModuleStatus::InProgress),
            module("m3", ModuleStatus::NotStarted),
        ];
        assert!(!is_module_locked(&modules, 0));
        assert!(!is_module_locked(&modules, 1));
        assert!(is_module_locked(&modules, 2));
    }
}
