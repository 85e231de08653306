//! Contractor registry
//!
//! Maps account uids to the department each contractor works for. The
//! compiled-in list is used unless the configuration file supplies its own.

use serde::Deserialize;

use super::account::ClaimsBundle;

/// Built-in assignments, applied in this order.
pub const DEFAULT_CONTRACTORS: &[(&str, &str)] = &[
    ("LeZAof1zTnZtrIwC0ylg7YhpDDo2", "Roads"),
    ("ugdNpzSiCDN0va94oImw5nhCbMi1", "Water"),
    ("jgH50fde1zfB7uAwWV4eilqv3o43", "Power"),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractorAssignment {
    pub uid: String,
    pub department: String,
}

impl ContractorAssignment {
    pub fn new(uid: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            department: department.into(),
        }
    }

    pub fn claims(&self) -> ClaimsBundle {
        ClaimsBundle::contractor(self.department.clone())
    }
}

pub fn default_registry() -> Vec<ContractorAssignment> {
    DEFAULT_CONTRACTORS
        .iter()
        .map(|(uid, department)| ContractorAssignment::new(*uid, *department))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = default_registry();
        let departments: Vec<_> = registry.iter().map(|a| a.department.as_str()).collect();
        assert_eq!(departments, ["Roads", "Water", "Power"]);
        assert_eq!(registry[1].claims(), ClaimsBundle::contractor("Water"));
    }
}
