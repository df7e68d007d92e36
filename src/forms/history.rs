use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::employee::Employee;
use crate::services::activity::DateRange;

/// History screen selection, as sent by the client.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct HistoryRequest {
    pub employee_id: Option<i64>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl HistoryRequest {
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start,
            end: self.end,
        }
    }
}

/// Resolves the selected employee, or returns the warning to show instead.
pub fn resolve_employee<'a>(request: &HistoryRequest, employees: &'a [Employee]) -> Result<&'a Employee, String> {
    let id = request
        .employee_id
        .ok_or_else(|| "Please select an employee.".to_string())?;
    if request.range().is_inverted() {
        return Err("Start date must not be after end date.".to_string());
    }
    employees
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| "No matching employee found.".to_string())
}
