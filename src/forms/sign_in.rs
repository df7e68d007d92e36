use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::course::{CourseType, TrainingCategory};
use crate::models::employee::Employee;
use crate::models::options::SelectOption;
use crate::services::activity::SignInDetails;
use crate::services::catalog::{category_options, course_options};
use crate::services::roster::employee_options;

/// Cascading selection state: category, then course.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SignInSelection {
    pub category: Option<TrainingCategory>,
    pub course_id: Option<i64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SignInView {
    pub categories: Vec<SelectOption>,
    pub selected_category: Option<TrainingCategory>,
    /// Empty until a category is chosen.
    pub courses: Vec<SelectOption>,
    pub selected_course: Option<i64>,
    /// Active employees only.
    pub employees: Vec<SelectOption>,
    pub warnings: Vec<String>,
}

pub fn sign_in_view(selection: &SignInSelection, courses: &[CourseType], employees: &[Employee]) -> SignInView {
    let mut warnings = Vec::new();
    if employees.is_empty() {
        warnings.push("No employees found in the database. Please add employees first.".to_string());
    }
    if courses.is_empty() {
        warnings.push("No courses found in the database. Please add courses first.".to_string());
    }

    let course_list = match selection.category {
        Some(category) => course_options(courses, Some(category)),
        None => Vec::new(),
    };
    let selected_course = selection
        .course_id
        .filter(|id| course_list.iter().any(|option| option.id == *id));
    if selection.course_id.is_some() && selected_course.is_none() {
        warnings.push("Selected course is not in the chosen category.".to_string());
    }

    SignInView {
        categories: category_options(),
        selected_category: selection.category,
        courses: course_list,
        selected_course,
        employees: employee_options(employees, true),
        warnings,
    }
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct SignInSubmission {
    pub category: Option<TrainingCategory>,
    pub course_id: Option<i64>,
    #[serde(default)]
    pub employee_ids: Vec<i64>,
    pub date: NaiveDate,
    #[validate(range(min = 0.0))]
    pub hours: f64,
    pub comments: Option<String>,
}

/// What a submit should do: write records, or show a warning and do nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SignInPlan {
    Ready {
        course_id: i64,
        employees: Vec<Employee>,
        details: SignInDetails,
    },
    Skipped(String),
}

/// Checks the submission against the current catalog and roster. Names are
/// taken from the roster as it is now, which is what the records will keep.
pub fn plan_sign_in(submission: SignInSubmission, courses: &[CourseType], roster: &[Employee]) -> SignInPlan {
    let Some(course_id) = submission.course_id else {
        return SignInPlan::Skipped("Please select a course.".to_string());
    };
    let Some(course) = courses.iter().find(|c| c.id == course_id) else {
        return SignInPlan::Skipped("Selected course no longer exists.".to_string());
    };
    if submission
        .category
        .is_some_and(|category| course.category() != Some(category))
    {
        return SignInPlan::Skipped("Selected course is not in the chosen category.".to_string());
    }
    if submission.employee_ids.is_empty() {
        return SignInPlan::Skipped("Please select at least one employee.".to_string());
    }

    let mut employees = Vec::with_capacity(submission.employee_ids.len());
    for id in &submission.employee_ids {
        match roster.iter().find(|e| e.id == *id && e.is_active()) {
            Some(employee) if !employees.iter().any(|e: &Employee| e.id == *id) => employees.push(employee.clone()),
            Some(_) => {}
            None => return SignInPlan::Skipped(format!("Employee {} is not available for sign-in.", id)),
        }
    }

    SignInPlan::Ready {
        course_id,
        employees,
        details: SignInDetails {
            date: submission.date,
            hours: submission.hours,
            comments: submission.comments.filter(|c| !c.trim().is_empty()),
        },
    }
}
