use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::employee::{Employee, EmployeeChanges, EmployeeStatus, ACTIVE_TERM_DATE};

pub const TERMINATION_PROMPT: &str = "Please provide a termination date.";

/// Edit form pre-filled from the stored employee.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmployeeEditForm {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub status: EmployeeStatus,
    pub status_options: [EmployeeStatus; 2],
    /// Shown when the status is Terminated: the stored date, or today when there is none.
    pub termination_date_default: NaiveDate,
    pub prompt: Option<&'static str>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EmployeeEditSubmission {
    pub first_name: String,
    pub last_name: String,
    pub status: EmployeeStatus,
    pub termination_date: Option<NaiveDate>,
}

impl EmployeeEditForm {
    pub fn prefill(employee: &Employee, today: NaiveDate) -> Self {
        EmployeeEditForm {
            employee_id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            status: employee.status,
            status_options: [EmployeeStatus::Active, EmployeeStatus::Terminated],
            termination_date_default: employee.recorded_termination_date().unwrap_or(today),
            prompt: prompt_for(employee.status),
        }
    }

    /// Re-render after the operator toggles the status selector.
    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = status;
        self.prompt = prompt_for(status);
        self
    }

    /// Columns to write. Active always resets the termination date to the sentinel.
    pub fn submit(&self, submission: EmployeeEditSubmission) -> EmployeeChanges {
        let termination_date = match submission.status {
            EmployeeStatus::Active => ACTIVE_TERM_DATE,
            EmployeeStatus::Terminated => submission
                .termination_date
                .unwrap_or(self.termination_date_default),
        };
        EmployeeChanges {
            first_name: submission.first_name,
            last_name: submission.last_name,
            status: submission.status,
            termination_date,
        }
    }
}

fn prompt_for(status: EmployeeStatus) -> Option<&'static str> {
    match status {
        EmployeeStatus::Terminated => Some(TERMINATION_PROMPT),
        EmployeeStatus::Active => None,
    }
}
