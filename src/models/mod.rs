pub mod activity;
pub mod course;
pub mod employee;
pub mod options;
pub mod user;
