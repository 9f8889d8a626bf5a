//! Derived read-only aggregates over the task collection.
//!
//! Pure functions of a snapshot: no side effects, no hidden state, safe to
//! memoize keyed on collection content.

use crate::types::TaskListState;
use taskboard_api::Task;

/// Aggregate counters derived from the task collection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewStats {
    /// Total number of tasks
    pub total: usize,
    /// Number of tasks with `done == true`
    pub completed: usize,
    /// Completion percentage, rounded; 0 when the collection is empty
    pub percent: u8,
}

/// Compute aggregate counters for a task collection
#[must_use]
pub fn stats(tasks: &[Task]) -> ViewStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.done).count();
    let percent = if total == 0 {
        0
    } else {
        // Note: the ratio is bounded by 0..=100, so the cast is lossless
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        #[allow(clippy::cast_precision_loss)]
        {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        }
    };

    ViewStats {
        total,
        completed,
        percent,
    }
}

impl TaskListState {
    /// Aggregate counters for the current collection
    #[must_use]
    pub fn stats(&self) -> ViewStats {
        stats(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_api::TaskId;

    fn task(id: u64, done: bool) -> Task {
        Task {
            id: TaskId::new(id),
            title: format!("task {id}"),
            done,
        }
    }

    #[test]
    fn empty_collection_is_zero_percent() {
        let view = stats(&[]);
        assert_eq!(
            view,
            ViewStats {
                total: 0,
                completed: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn single_open_task() {
        let view = stats(&[task(1, false)]);
        assert_eq!(
            view,
            ViewStats {
                total: 1,
                completed: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        // 1/3 done -> 33.33..% -> 33
        let view = stats(&[task(1, true), task(2, false), task(3, false)]);
        assert_eq!(view.percent, 33);

        // 2/3 done -> 66.66..% -> 67
        let view = stats(&[task(1, true), task(2, true), task(3, false)]);
        assert_eq!(view.percent, 67);
    }

    #[test]
    fn all_done_is_one_hundred_percent() {
        let view = stats(&[task(1, true), task(2, true)]);
        assert_eq!(view.percent, 100);
    }

    #[test]
    fn stats_is_idempotent() {
        let tasks = [task(1, true), task(2, false)];
        assert_eq!(stats(&tasks), stats(&tasks));
    }
}
