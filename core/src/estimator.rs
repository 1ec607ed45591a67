//! ProductivityEstimator — the true-cost calculation.
//!
//! This is a PURE computation. It takes one set of form inputs and
//! returns one fresh, immutable CalculationResult. No state survives
//! between calls.
//!
//! STEPS (fixed order):
//!   1. clicks/min from the EPT table (exact match, 4.15 fallback)
//!   2. max clicks/day   = clicks/min × 360 minutes
//!   3. actual tasks/day = floor(max clicks/day ÷ clicks per task)
//!   4. productivity %   = actual tasks ÷ expected tasks × 100
//!   5. expected value   = cost × 2
//!   6. value produced   = productivity/100 × expected value
//!   7. true cost        = value produced − expected value
//!   8. total role value = true cost × employees
//!
//! A zero divisor in step 3 or 4 is a validation error, never an
//! infinite or NaN result.

use crate::{
    ept,
    error::{EstimatorError, EstimatorResult},
    form::FormField,
    role::Role,
    types::{Currency, Seconds},
};
use serde::{Deserialize, Serialize};

/// Effective minutes of interaction work in one day (6 hours).
pub const MINUTES_PER_WORKDAY: u32 = 360;

/// Value an employee is expected to generate, as a multiple of their cost.
pub const VALUE_MULTIPLIER: f64 = 2.0;

/// Parsed inputs for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInputs {
    pub role: Role,
    pub cost: u64,
    pub employees: u64,
    pub ept: Seconds,
    pub expected_tasks_per_day: u64,
    pub clicks_per_task: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub role: Role,
    pub cost: u64,
    pub expected_tasks: u64,
    /// Actual tasks completed per day at this EPT.
    pub tasks_per_day: u64,
    pub clicks_per_minute: f64,
    pub max_clicks_per_day: f64,
    /// Actual vs expected throughput, in percent.
    pub productivity: f64,
    pub value_produced: Currency,
    pub expected_value: Currency,
    /// Negative when productivity is below 100%.
    pub true_cost: Currency,
    pub total_role_value: Currency,
    pub employees: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductivityEstimator;

impl ProductivityEstimator {
    pub fn estimate(&self, inputs: &EstimateInputs) -> EstimatorResult<CalculationResult> {
        if inputs.clicks_per_task == 0 {
            return Err(EstimatorError::ZeroDivisor { field: FormField::ClicksPerTask });
        }
        if inputs.expected_tasks_per_day == 0 {
            return Err(EstimatorError::ZeroDivisor { field: FormField::ExpectedTasksPerDay });
        }

        let clicks_per_minute = ept::clicks_per_minute(inputs.ept);
        let max_clicks_per_day = clicks_per_minute * f64::from(MINUTES_PER_WORKDAY);
        let tasks_per_day = (max_clicks_per_day / inputs.clicks_per_task as f64).floor() as u64;
        let productivity =
            (tasks_per_day as f64 / inputs.expected_tasks_per_day as f64) * 100.0;

        let expected_value = inputs.cost as f64 * VALUE_MULTIPLIER;
        let value_produced = (productivity / 100.0) * expected_value;
        let true_cost = value_produced - expected_value;
        let total_role_value = true_cost * inputs.employees as f64;

        log::debug!(
            "{}: {tasks_per_day}/{} tasks/day at EPT {:.2}s, productivity {productivity:.2}%",
            inputs.role,
            inputs.expected_tasks_per_day,
            inputs.ept,
        );

        Ok(CalculationResult {
            role: inputs.role,
            cost: inputs.cost,
            expected_tasks: inputs.expected_tasks_per_day,
            tasks_per_day,
            clicks_per_minute,
            max_clicks_per_day,
            productivity,
            value_produced,
            expected_value,
            true_cost,
            total_role_value,
            employees: inputs.employees,
        })
    }
}

/// Run one calculation.
pub fn calculate(
    role: Role,
    cost: u64,
    employees: u64,
    ept: Seconds,
    expected_tasks_per_day: u64,
    clicks_per_task: u64,
) -> EstimatorResult<CalculationResult> {
    ProductivityEstimator.estimate(&EstimateInputs {
        role,
        cost,
        employees,
        ept,
        expected_tasks_per_day,
        clicks_per_task,
    })
}
