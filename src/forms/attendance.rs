use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::course::{CourseType, TrainingCategory};
use crate::services::activity::DateRange;

/// Attendance screen selection. A category without a course means every course in it.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AttendanceRequest {
    pub category: Option<TrainingCategory>,
    pub course_id: Option<i64>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl AttendanceRequest {
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceScope {
    pub course_ids: Vec<i64>,
    /// Label for the totals row, naming the active filter.
    pub label: String,
}

pub fn resolve_scope(request: &AttendanceRequest, courses: &[CourseType]) -> Result<AttendanceScope, String> {
    if request.range().is_inverted() {
        return Err("Start date must not be after end date.".to_string());
    }
    match (request.course_id, request.category) {
        (Some(course_id), category) => {
            let course = courses
                .iter()
                .find(|c| c.id == course_id)
                .ok_or_else(|| "Selected course no longer exists.".to_string())?;
            if category.is_some_and(|category| course.category() != Some(category)) {
                return Err("Selected course is not in the chosen category.".to_string());
            }
            Ok(AttendanceScope {
                course_ids: vec![course.id],
                label: format!("Total for {}", course.name),
            })
        }
        (None, Some(category)) => {
            let course_ids: Vec<i64> = courses
                .iter()
                .filter(|c| c.category() == Some(category))
                .map(|c| c.id)
                .collect();
            if course_ids.is_empty() {
                return Err(format!("No courses found in the {} category.", category));
            }
            Ok(AttendanceScope {
                course_ids,
                label: format!("Total for all {} courses", category),
            })
        }
        (None, None) => Err("Please select a course.".to_string()),
    }
}
