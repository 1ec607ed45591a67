//! Calculator session — an ordered set of form instances.
//!
//! The session is the host side of the form contract: it owns each
//! form's current state, receives every CalculationResult a form
//! produces, and hands out the one-shot scroll request raised when a
//! form is added.
//!
//! RULES:
//!   - A session always holds at least one form.
//!   - The first form has no delete action.
//!   - Deleting a form drops its result with it.

use crate::{
    error::{EstimatorError, EstimatorResult},
    estimator::{CalculationResult, ProductivityEstimator},
    form::{FormEdit, FormState},
    types::{Currency, FormId},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInstance {
    pub id: FormId,
    pub state: FormState,
    pub result: Option<CalculationResult>,
}

impl FormInstance {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            state: FormState::default(),
            result: None,
        }
    }
}

#[derive(Debug)]
pub struct CalculatorSession {
    forms: Vec<FormInstance>,
    pending_scroll: Option<FormId>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            forms: vec![FormInstance::new()],
            pending_scroll: None,
        }
    }

    pub fn forms(&self) -> &[FormInstance] {
        &self.forms
    }

    pub fn form(&self, id: &str) -> EstimatorResult<&FormInstance> {
        self.forms
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| EstimatorError::FormNotFound { id: id.to_string() })
    }

    fn position(&self, id: &str) -> EstimatorResult<usize> {
        self.forms
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| EstimatorError::FormNotFound { id: id.to_string() })
    }

    /// Append a form in its initial state and request that the host
    /// scroll it into view.
    pub fn add_form(&mut self) -> FormId {
        let form = FormInstance::new();
        let id = form.id.clone();
        log::info!("Added form {id} at index {}", self.forms.len());
        self.forms.push(form);
        self.pending_scroll = Some(id.clone());
        id
    }

    /// Whether the form at `id` offers a delete action.
    pub fn is_deletable(&self, id: &str) -> bool {
        matches!(self.position(id), Ok(index) if index > 0)
    }

    pub fn delete_form(&mut self, id: &str) -> EstimatorResult<FormInstance> {
        let index = self.position(id)?;
        if index == 0 {
            return Err(EstimatorError::FormNotDeletable { id: id.to_string() });
        }
        if self.pending_scroll.as_deref() == Some(id) {
            self.pending_scroll = None;
        }
        log::info!("Deleted form {id} at index {index}");
        Ok(self.forms.remove(index))
    }

    /// Replace a form's state with the result of `edit`. A failed edit
    /// leaves the form unchanged.
    pub fn edit(&mut self, id: &str, edit: &FormEdit) -> EstimatorResult<&FormState> {
        let index = self.position(id)?;
        let next = self.forms[index].state.apply(edit)?;
        self.forms[index].state = next;
        Ok(&self.forms[index].state)
    }

    /// Calculate the form and record its result. On error the previous
    /// result is kept.
    pub fn calculate(&mut self, id: &str) -> EstimatorResult<&CalculationResult> {
        let index = self.position(id)?;
        let result = self.forms[index].state.calculate(&ProductivityEstimator)?;
        Ok(&*self.forms[index].result.insert(result))
    }

    /// The form waiting to be scrolled into view. Returned once.
    pub fn take_scroll_request(&mut self) -> Option<FormId> {
        self.pending_scroll.take()
    }

    /// Recorded results in form order.
    pub fn results(&self) -> Vec<&CalculationResult> {
        self.forms.iter().filter_map(|f| f.result.as_ref()).collect()
    }

    pub fn total_role_value(&self) -> Currency {
        self.results().iter().map(|r| r.total_role_value).sum()
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}
