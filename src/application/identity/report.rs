use crate::domain::{AppResult, ContractorAssignment};

/// Result of applying one registry entry.
#[derive(Debug)]
pub struct AssignmentOutcome {
    pub assignment: ContractorAssignment,
    pub result: AppResult<()>,
}

impl AssignmentOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-entry outcomes of a registry run, in registry order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<AssignmentOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssignmentOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}
