//! Employee roles and their default workload.
//!
//! Selecting a role pre-populates the expected task quota and the
//! average clicks per task. Any other form field is left alone.

use crate::error::{EstimatorError, EstimatorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "Service Agent")]
    ServiceAgent,
    #[serde(rename = "Sales Development Rep")]
    SalesDevelopmentRep,
    #[serde(rename = "Account Executive")]
    AccountExecutive,
}

/// Default workload for a role, as form field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDefaults {
    pub tasks_per_day: &'static str,
    pub clicks_per_task: &'static str,
}

impl Role {
    /// Selection order of the role picker.
    pub const ALL: [Role; 3] = [
        Role::ServiceAgent,
        Role::SalesDevelopmentRep,
        Role::AccountExecutive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ServiceAgent => "Service Agent",
            Self::SalesDevelopmentRep => "Sales Development Rep",
            Self::AccountExecutive => "Account Executive",
        }
    }

    /// Stable snake_case identifier, used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ServiceAgent => "service_agent",
            Self::SalesDevelopmentRep => "sales_development_rep",
            Self::AccountExecutive => "account_executive",
        }
    }

    pub fn defaults(&self) -> RoleDefaults {
        match self {
            Self::ServiceAgent => RoleDefaults { tasks_per_day: "90", clicks_per_task: "23" },
            Self::SalesDevelopmentRep => RoleDefaults { tasks_per_day: "120", clicks_per_task: "22" },
            Self::AccountExecutive => RoleDefaults { tasks_per_day: "22", clicks_per_task: "200" },
        }
    }

    pub fn parse(name: &str) -> EstimatorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == name || r.id() == name)
            .ok_or_else(|| EstimatorError::UnknownRole { name: name.to_string() })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_ids() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.label()).unwrap(), role);
            assert_eq!(role.id().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn label_match_is_case_sensitive() {
        assert!(matches!(
            Role::parse("service agent"),
            Err(EstimatorError::UnknownRole { .. })
        ));
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Role::SalesDevelopmentRep).unwrap();
        assert_eq!(json, "\"Sales Development Rep\"");
    }
}
