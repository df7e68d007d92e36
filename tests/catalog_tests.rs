mod common;

use common::seeded_store;
use training_tracker::db::MemoryTableClient;
use training_tracker::models::course::{CourseInput, TrainingCategory};
use training_tracker::services::catalog;

#[tokio::test]
async fn first_course_gets_id_one() {
    let store = MemoryTableClient::new();
    assert_eq!(catalog::next_course_id(&store).await.unwrap(), 1);
    let course = catalog::add_course(
        &store,
        CourseInput {
            category: TrainingCategory::Technical,
            name: "Hydraulics".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(course.id, 1);
    assert_eq!(course.training_code, Some(2));
}

#[tokio::test]
async fn new_course_id_follows_the_current_maximum() {
    let store = seeded_store();
    let course = catalog::add_course(
        store.as_ref(),
        CourseInput {
            category: TrainingCategory::Osha,
            name: "Confined Space".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(course.id, 4);

    let osha = catalog::courses_in_category(store.as_ref(), TrainingCategory::Osha).await.unwrap();
    assert_eq!(osha.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3, 4]);
}

#[tokio::test]
async fn edit_renames_and_recategorises() {
    let store = seeded_store();
    let touched = catalog::update_course(
        store.as_ref(),
        2,
        CourseInput {
            category: TrainingCategory::Osha,
            name: "Lockout/Tagout".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(touched, 1);

    let courses = catalog::list_courses(store.as_ref()).await.unwrap();
    let course = courses.iter().find(|c| c.id == 2).unwrap();
    assert_eq!(course.name, "Lockout/Tagout");
    assert_eq!(course.category(), Some(TrainingCategory::Osha));
}

#[tokio::test]
async fn editing_a_missing_course_touches_nothing() {
    let store = seeded_store();
    let touched = catalog::update_course(
        store.as_ref(),
        42,
        CourseInput {
            category: TrainingCategory::Osha,
            name: "Ghost".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(touched, 0);
}
