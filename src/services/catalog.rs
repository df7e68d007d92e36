use crate::db::{decode_rows, encode_row, Filter, Query, TableClient};
use crate::errors::QueryError;
use crate::models::course::{CourseChanges, CourseInput, CourseType, TrainingCategory, COURSES_TABLE};
use crate::models::options::SelectOption;

const COURSE_COLUMNS: [&str; 3] = ["ID", "EAT_TrainingCode", "EAT_ActivityType"];

pub async fn list_courses(client: &dyn TableClient) -> Result<Vec<CourseType>, QueryError> {
    let rows = client
        .select(&Query::table(COURSES_TABLE).select(&COURSE_COLUMNS).order_by("ID", false))
        .await?;
    decode_rows(rows)
}

pub async fn courses_in_category(
    client: &dyn TableClient,
    category: TrainingCategory,
) -> Result<Vec<CourseType>, QueryError> {
    let rows = client
        .select(
            &Query::table(COURSES_TABLE)
                .select(&COURSE_COLUMNS)
                .eq("EAT_TrainingCode", category.code())
                .order_by("ID", false),
        )
        .await?;
    decode_rows(rows)
}

/// One past the highest existing id. Two concurrent adds can compute the same value.
pub async fn next_course_id(client: &dyn TableClient) -> Result<i64, QueryError> {
    let rows = client
        .select(&Query::table(COURSES_TABLE).select(&["ID"]).order_by("ID", true).limit(1))
        .await?;
    let highest = rows.first().and_then(|row| row.get("ID")).and_then(|id| id.as_i64());
    Ok(highest.map_or(1, |id| id + 1))
}

pub async fn add_course(client: &dyn TableClient, input: CourseInput) -> Result<CourseType, QueryError> {
    let course = CourseType {
        id: next_course_id(client).await?,
        training_code: Some(input.category.code()),
        name: input.name,
    };
    client.insert(COURSES_TABLE, encode_row(&course)?).await?;
    log::info!("Course {} '{}' added", course.id, course.name);
    Ok(course)
}

pub async fn update_course(client: &dyn TableClient, id: i64, input: CourseInput) -> Result<u64, QueryError> {
    let changes = CourseChanges {
        training_code: input.category.code(),
        name: input.name,
    };
    let touched = client
        .update(
            COURSES_TABLE,
            encode_row(&changes)?,
            &[Filter::Eq("ID".to_string(), id.into())],
        )
        .await?;
    log::info!("Course {} updated ({} row(s))", id, touched);
    Ok(touched)
}

pub fn course_options(courses: &[CourseType], category: Option<TrainingCategory>) -> Vec<SelectOption> {
    courses
        .iter()
        .filter(|c| category.map_or(true, |category| c.category() == Some(category)))
        .map(SelectOption::from)
        .collect()
}

pub fn category_options() -> Vec<SelectOption> {
    TrainingCategory::ALL
        .iter()
        .map(|c| SelectOption {
            id: c.code(),
            label: c.label().to_string(),
        })
        .collect()
}
