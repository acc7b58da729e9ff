use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined target with a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub text: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    pub fn new(text: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            deadline,
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.deadline < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_only_when_open_and_past_deadline() {
        let deadline = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let mut goal = Goal::new("Follow plan 100%", deadline);
        let after = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        assert!(goal.is_overdue(after));
        assert!(!goal.is_overdue(deadline));

        goal.toggle();
        assert!(!goal.is_overdue(after));
    }

    #[test]
    fn test_new_goals_get_distinct_ids() {
        let deadline = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let a = Goal::new("a", deadline);
        let b = Goal::new("b", deadline);
        assert_ne!(a.id, b.id);
        assert!(!a.completed);
    }
}
