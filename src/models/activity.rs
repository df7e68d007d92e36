use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ACTIVITY_TABLE: &str = "EmployeeActivity";

pub mod columns {
    pub const EMPLOYEE_ID: &str = "EA_Adm_num";
    pub const FIRST_NAME: &str = "EA_NameF";
    pub const LAST_NAME: &str = "EA_NameL";
    pub const COURSE_ID: &str = "EA_Activity";
    pub const DATE: &str = "EA_ActivityDate";
    pub const HOURS: &str = "EA_ActivityHours";
    pub const COMMENTS: &str = "EA_Comments";
}

/// One sign-in of one employee to one course. Names are copied at insert time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    #[serde(rename = "EA_Adm_num")]
    pub employee_id: i64,
    #[serde(rename = "EA_NameF", default)]
    pub first_name: String,
    #[serde(rename = "EA_NameL", default)]
    pub last_name: String,
    #[serde(rename = "EA_Activity")]
    pub course_id: i64,
    #[serde(rename = "EA_ActivityDate")]
    pub date: NaiveDate,
    #[serde(rename = "EA_ActivityHours", default)]
    pub hours: f64,
    #[serde(rename = "EA_Comments", default)]
    pub comments: Option<String>,
}
