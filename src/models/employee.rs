use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const EMPLOYEES_TABLE: &str = "Employees";

/// Termination date stored for everyone still employed.
pub const ACTIVE_TERM_DATE: NaiveDate = match NaiveDate::from_ymd_opt(9999, 12, 31) {
    Some(date) => date,
    None => panic!("invalid sentinel date"),
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Terminated,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(rename = "Adm_num")]
    pub id: i64,
    #[serde(rename = "EE_NameF", default)]
    pub first_name: String,
    #[serde(rename = "EE_NameL", default)]
    pub last_name: String,
    #[serde(rename = "EE_HireDate", default)]
    pub hire_date: Option<NaiveDate>,
    /// Kept loose: legacy rows may hold values that are not valid dates.
    #[serde(rename = "EE_TermDate", default)]
    pub termination_date: Option<String>,
    #[serde(rename = "EE_StatusCode")]
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Stored termination date when it parses and is a real date, not the sentinel.
    pub fn recorded_termination_date(&self) -> Option<NaiveDate> {
        self.termination_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
            .filter(|date| *date != ACTIVE_TERM_DATE)
    }
}

/// Add-employee payload. Only presence is checked; empty names are accepted.
#[derive(Deserialize, Debug, Clone)]
pub struct NewEmployee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
}

impl NewEmployee {
    pub fn into_record(self) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            hire_date: Some(self.hire_date),
            termination_date: Some(ACTIVE_TERM_DATE.format("%Y-%m-%d").to_string()),
            status: EmployeeStatus::Active,
        }
    }
}

/// Columns written by the edit form.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmployeeChanges {
    #[serde(rename = "EE_NameF")]
    pub first_name: String,
    #[serde(rename = "EE_NameL")]
    pub last_name: String,
    #[serde(rename = "EE_StatusCode")]
    pub status: EmployeeStatus,
    #[serde(rename = "EE_TermDate")]
    pub termination_date: NaiveDate,
}
