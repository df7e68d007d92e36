//! Per-screen form controllers. Each one turns the current selection state into
//! the options to render and, on submit, into the typed values the accessors need.

pub mod attendance;
pub mod employee_edit;
pub mod history;
pub mod sign_in;
