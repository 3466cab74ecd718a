// objective.rs — ObjectiveInput and the form that collects it.
//
// ObjectiveInput is the validated, immutable snapshot that gets submitted.
// ObjectiveForm is the mutable collection surface that mirrors the original
// entry form: it enforces the two invariants at the point of entry —
// every field non-empty, and due date never earlier than start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Separator used when joining the selected manager objectives into the
/// single delimited string the generation service expects.
pub const MANAGER_OBJECTIVE_SEPARATOR: &str = ", ";

/// A complete, validated OKR entry ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveInput {
    /// Department the objective belongs to.
    pub department: String,

    /// Job title of the person owning the objective.
    pub job_title: String,

    /// Selected manager objectives this OKR aligns with. Transmitted as a
    /// single string joined with [`MANAGER_OBJECTIVE_SEPARATOR`].
    pub manager_objectives: Vec<String>,

    /// Free-text description of the objective and its business impact.
    pub goal_description: String,

    /// Free-text description of the measurable key result.
    pub key_result: String,

    /// When work on the objective begins.
    pub start_date: NaiveDate,

    /// When the objective is due. Never earlier than `start_date`.
    pub due_date: NaiveDate,
}

impl ObjectiveInput {
    /// The manager objectives joined into the wire form.
    pub fn managers_goal(&self) -> String {
        self.manager_objectives.join(MANAGER_OBJECTIVE_SEPARATOR)
    }

    /// Re-check the form invariants on an already-built input.
    ///
    /// The form enforces these before `finish()`, but inputs can also be
    /// deserialized from files, so the coordinator re-checks defensively.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.department.trim().is_empty() {
            return Err(ValidationError::EmptyField("department"));
        }
        if self.job_title.trim().is_empty() {
            return Err(ValidationError::EmptyField("job_title"));
        }
        if self
            .manager_objectives
            .iter()
            .all(|o| o.trim().is_empty())
        {
            return Err(ValidationError::NoManagerObjective);
        }
        if self.goal_description.trim().is_empty() {
            return Err(ValidationError::EmptyField("goal_description"));
        }
        if self.key_result.trim().is_empty() {
            return Err(ValidationError::EmptyField("key_result"));
        }
        if self.due_date < self.start_date {
            return Err(ValidationError::DueDateBeforeStart {
                start: self.start_date,
                due: self.due_date,
            });
        }
        Ok(())
    }
}

/// The mutable OKR entry form.
///
/// Submittability is a pure function of field contents: the submit control
/// stays disabled until [`ObjectiveForm::is_submittable`] returns true.
#[derive(Debug, Clone, Default)]
pub struct ObjectiveForm {
    department: String,
    job_title: String,
    manager_objectives: Vec<String>,
    goal_description: String,
    key_result: String,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
}

impl ObjectiveForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_department(&mut self, value: impl Into<String>) {
        self.department = value.into();
    }

    pub fn set_job_title(&mut self, value: impl Into<String>) {
        self.job_title = value.into();
    }

    pub fn set_goal_description(&mut self, value: impl Into<String>) {
        self.goal_description = value.into();
    }

    pub fn set_key_result(&mut self, value: impl Into<String>) {
        self.key_result = value.into();
    }

    /// Toggle one of the predefined manager objectives on or off.
    pub fn toggle_manager_objective(&mut self, objective: &str) {
        if let Some(pos) = self.manager_objectives.iter().position(|o| o == objective) {
            self.manager_objectives.remove(pos);
        } else {
            self.manager_objectives.push(objective.to_string());
        }
    }

    /// The currently selected manager objectives, in selection order.
    pub fn manager_objectives(&self) -> &[String] {
        &self.manager_objectives
    }

    /// Set the start date. An already-chosen due date that would now fall
    /// before the new start date is cleared, same as a rejected due date.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = Some(date);
        if matches!(self.due_date, Some(due) if due < date) {
            self.due_date = None;
        }
    }

    /// Set the due date, enforcing the date-ordering invariant.
    ///
    /// A due date earlier than the chosen start date is rejected: the
    /// due-date field is cleared and the error carries the warning text
    /// shown to the user. No submission can happen with an invalid pair.
    pub fn set_due_date(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        if let Some(start) = self.start_date {
            if date < start {
                self.due_date = None;
                return Err(ValidationError::DueDateBeforeStart { start, due: date });
            }
        }
        self.due_date = Some(date);
        Ok(())
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// True once every field is filled in.
    pub fn is_submittable(&self) -> bool {
        !self.department.trim().is_empty()
            && !self.job_title.trim().is_empty()
            && self.manager_objectives.iter().any(|o| !o.trim().is_empty())
            && !self.goal_description.trim().is_empty()
            && !self.key_result.trim().is_empty()
            && self.start_date.is_some()
            && self.due_date.is_some()
    }

    /// Finalize the form into an immutable [`ObjectiveInput`].
    pub fn finish(&self) -> Result<ObjectiveInput, ValidationError> {
        if self.department.trim().is_empty() {
            return Err(ValidationError::EmptyField("department"));
        }
        if self.job_title.trim().is_empty() {
            return Err(ValidationError::EmptyField("job_title"));
        }
        if self.manager_objectives.iter().all(|o| o.trim().is_empty()) {
            return Err(ValidationError::NoManagerObjective);
        }
        if self.goal_description.trim().is_empty() {
            return Err(ValidationError::EmptyField("goal_description"));
        }
        if self.key_result.trim().is_empty() {
            return Err(ValidationError::EmptyField("key_result"));
        }
        let start_date = self.start_date.ok_or(ValidationError::MissingDate("start"))?;
        let due_date = self.due_date.ok_or(ValidationError::MissingDate("due"))?;
        Ok(ObjectiveInput {
            department: self.department.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            manager_objectives: self.manager_objectives.clone(),
            goal_description: self.goal_description.trim().to_string(),
            key_result: self.key_result.trim().to_string(),
            start_date,
            due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn filled_form() -> ObjectiveForm {
        let mut form = ObjectiveForm::new();
        form.set_department("Engineering");
        form.set_job_title("Backend Engineer");
        form.toggle_manager_objective("Improve platform reliability");
        form.set_goal_description("Reduce API error rate");
        form.set_key_result("Error rate below 0.1% by end of quarter");
        form.set_start_date(date("2026-01-01"));
        form.set_due_date(date("2026-03-31")).unwrap();
        form
    }

    #[test]
    fn empty_form_is_not_submittable() {
        assert!(!ObjectiveForm::new().is_submittable());
    }

    #[test]
    fn filled_form_is_submittable() {
        assert!(filled_form().is_submittable());
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        let mut form = filled_form();
        form.set_department("   ");
        assert!(!form.is_submittable());
        assert_eq!(
            form.finish(),
            Err(ValidationError::EmptyField("department"))
        );
    }

    #[test]
    fn no_manager_objective_blocks_submission() {
        let mut form = filled_form();
        // Toggling the same objective twice deselects it.
        form.toggle_manager_objective("Improve platform reliability");
        assert!(!form.is_submittable());
        assert_eq!(form.finish(), Err(ValidationError::NoManagerObjective));
    }

    #[test]
    fn due_date_before_start_is_rejected_and_cleared() {
        let mut form = filled_form();
        let result = form.set_due_date(date("2025-12-31"));
        assert!(matches!(
            result,
            Err(ValidationError::DueDateBeforeStart { .. })
        ));
        assert_eq!(form.due_date(), None);
        assert!(!form.is_submittable());
    }

    #[test]
    fn due_date_equal_to_start_is_accepted() {
        let mut form = filled_form();
        form.set_due_date(date("2026-01-01")).unwrap();
        assert_eq!(form.due_date(), Some(date("2026-01-01")));
    }

    #[test]
    fn moving_start_date_past_due_date_clears_due_date() {
        let mut form = filled_form();
        form.set_start_date(date("2026-06-01"));
        assert_eq!(form.due_date(), None);
        assert!(!form.is_submittable());
    }

    #[test]
    fn manager_objectives_join_into_single_string() {
        let mut form = filled_form();
        form.toggle_manager_objective("Grow revenue");
        let input = form.finish().unwrap();
        assert_eq!(
            input.managers_goal(),
            "Improve platform reliability, Grow revenue"
        );
    }

    #[test]
    fn finished_input_revalidates() {
        let input = filled_form().finish().unwrap();
        assert_eq!(input.validate(), Ok(()));

        let mut broken = input.clone();
        broken.key_result = String::new();
        assert_eq!(
            broken.validate(),
            Err(ValidationError::EmptyField("key_result"))
        );
    }

    #[test]
    fn missing_dates_reported() {
        let mut form = filled_form();
        form.due_date = None;
        assert_eq!(form.finish(), Err(ValidationError::MissingDate("due")));
    }
}
