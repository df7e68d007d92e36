use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

pub const COURSES_TABLE: &str = "EmployeeActivityType";

/// Fixed training categories. Not stored server-side; courses carry the code.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub enum TrainingCategory {
    Osha,
    Technical,
}

impl TrainingCategory {
    pub const ALL: [TrainingCategory; 2] = [TrainingCategory::Osha, TrainingCategory::Technical];

    pub fn code(&self) -> i64 {
        match self {
            TrainingCategory::Osha => 1,
            TrainingCategory::Technical => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(TrainingCategory::Osha),
            2 => Some(TrainingCategory::Technical),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingCategory::Osha => "OSHA",
            TrainingCategory::Technical => "Technical",
        }
    }
}

impl TryFrom<i64> for TrainingCategory {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        TrainingCategory::from_code(code).ok_or_else(|| format!("unknown training code {}", code))
    }
}

impl From<TrainingCategory> for i64 {
    fn from(category: TrainingCategory) -> i64 {
        category.code()
    }
}

impl fmt::Display for TrainingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CourseType {
    #[serde(rename = "ID")]
    pub id: i64,
    /// Raw code; rows with codes outside the known categories still load.
    #[serde(rename = "EAT_TrainingCode", default)]
    pub training_code: Option<i64>,
    #[serde(rename = "EAT_ActivityType", default)]
    pub name: String,
}

impl CourseType {
    pub fn category(&self) -> Option<TrainingCategory> {
        self.training_code.and_then(TrainingCategory::from_code)
    }

    pub fn training_label(&self) -> String {
        match (self.category(), self.training_code) {
            (Some(category), _) => category.label().to_string(),
            (None, Some(code)) => format!("Unknown ({})", code),
            (None, None) => String::new(),
        }
    }
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CourseInput {
    pub category: TrainingCategory,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Columns written when a course is renamed or recategorised.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CourseChanges {
    #[serde(rename = "EAT_TrainingCode")]
    pub training_code: i64,
    #[serde(rename = "EAT_ActivityType")]
    pub name: String,
}
