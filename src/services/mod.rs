//! Domain accessors: thin queries over the table client, reshaped into typed records.

pub mod activity;
pub mod auth;
pub mod catalog;
pub mod roster;
