//! Form state for one calculator instance.
//!
//! FormState is an immutable value. Every edit returns a new state and
//! leaves the old one untouched, so a host can keep or discard either.

use crate::{
    ept::{self, DEFAULT_EPT},
    error::{EstimatorError, EstimatorResult},
    estimator::{CalculationResult, EstimateInputs, ProductivityEstimator},
    input,
    role::Role,
    types::Seconds,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Cost,
    Employees,
    ExpectedTasksPerDay,
    ClicksPerTask,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Cost,
        FormField::Employees,
        FormField::ExpectedTasksPerDay,
        FormField::ClicksPerTask,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cost => "cost per employee",
            Self::Employees => "number of employees",
            Self::ExpectedTasksPerDay => "expected tasks/day",
            Self::ClicksPerTask => "clicks/task",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user action against a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "edit", rename_all = "snake_case")]
pub enum FormEdit {
    SetRole { role: Role },
    SetField { field: FormField, value: String },
    SetEpt { ept: Seconds },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub role: Role,
    pub cost: String,
    pub employees: String,
    pub ept: Seconds,
    pub expected_tasks_per_day: String,
    pub clicks_per_task: String,
}

impl Default for FormState {
    /// The state a freshly added form starts in.
    fn default() -> Self {
        Self {
            role: Role::ServiceAgent,
            cost: "45000".into(),
            employees: "1000".into(),
            ept: DEFAULT_EPT,
            expected_tasks_per_day: "90".into(),
            clicks_per_task: "20".into(),
        }
    }
}

impl FormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Cost => &self.cost,
            FormField::Employees => &self.employees,
            FormField::ExpectedTasksPerDay => &self.expected_tasks_per_day,
            FormField::ClicksPerTask => &self.clicks_per_task,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Cost => &mut self.cost,
            FormField::Employees => &mut self.employees,
            FormField::ExpectedTasksPerDay => &mut self.expected_tasks_per_day,
            FormField::ClicksPerTask => &mut self.clicks_per_task,
        }
    }

    /// Select a role. Overwrites expected tasks/day and clicks/task with
    /// the role defaults, discarding any edits to those two fields.
    pub fn with_role(&self, role: Role) -> Self {
        let defaults = role.defaults();
        Self {
            role,
            expected_tasks_per_day: defaults.tasks_per_day.to_string(),
            clicks_per_task: defaults.clicks_per_task.to_string(),
            ..self.clone()
        }
    }

    /// Propose new text for a numeric field. Rejected text yields an
    /// unchanged copy.
    pub fn with_input(&self, field: FormField, value: &str) -> Self {
        let mut next = self.clone();
        let accepted = input::filter(self.field(field), value).to_string();
        *next.field_mut(field) = accepted;
        next
    }

    /// Select an EPT level. Only the table levels are selectable.
    pub fn with_ept(&self, ept: Seconds) -> EstimatorResult<Self> {
        if !ept::is_supported(ept) {
            return Err(EstimatorError::UnknownEptLevel { ept });
        }
        Ok(Self { ept, ..self.clone() })
    }

    pub fn apply(&self, edit: &FormEdit) -> EstimatorResult<Self> {
        match edit {
            FormEdit::SetRole { role } => Ok(self.with_role(*role)),
            FormEdit::SetField { field, value } => Ok(self.with_input(*field, value)),
            FormEdit::SetEpt { ept } => self.with_ept(*ept),
        }
    }

    /// Parse the text fields. Empty fields count as 0.
    pub fn inputs(&self) -> EstimatorResult<EstimateInputs> {
        Ok(EstimateInputs {
            role: self.role,
            cost: input::parse(FormField::Cost, &self.cost)?,
            employees: input::parse(FormField::Employees, &self.employees)?,
            ept: self.ept,
            expected_tasks_per_day: input::parse(
                FormField::ExpectedTasksPerDay,
                &self.expected_tasks_per_day,
            )?,
            clicks_per_task: input::parse(FormField::ClicksPerTask, &self.clicks_per_task)?,
        })
    }

    pub fn calculate(&self, estimator: &ProductivityEstimator) -> EstimatorResult<CalculationResult> {
        estimator.estimate(&self.inputs()?)
    }
}
