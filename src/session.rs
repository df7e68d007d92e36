use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    #[serde(rename = "Login")]
    Login,
    #[serde(rename = "View Employees")]
    ViewEmployees,
    #[serde(rename = "Sign Employee Into Course")]
    SignIn,
    #[serde(rename = "View Employee History")]
    EmployeeHistory,
    #[serde(rename = "View Course Attendance")]
    CourseAttendance,
    #[serde(rename = "Manage Courses")]
    CourseCatalog,
}

impl Screen {
    /// Screens offered in the navigation menu once logged in.
    pub const MENU: [Screen; 5] = [
        Screen::ViewEmployees,
        Screen::SignIn,
        Screen::EmployeeHistory,
        Screen::CourseAttendance,
        Screen::CourseCatalog,
    ];
}

/// Per-request view of who is logged in and which screen they are on.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub screen: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            username: None,
            screen: Screen::Login,
        }
    }
}

impl Session {
    pub fn authenticated(username: &str, screen: Screen) -> Self {
        Session {
            username: Some(username.to_string()),
            screen,
        }
    }

    /// Session right after a successful login.
    pub fn after_login(username: &str) -> Self {
        Session::authenticated(username, Screen::SignIn)
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn require_auth(&self) -> Result<&str, AppError> {
        self.username
            .as_deref()
            .ok_or_else(|| AppError::Unauthorized("Please log in".to_string()))
    }

    pub fn navigate(&mut self, screen: Screen) -> Result<(), AppError> {
        self.require_auth()?;
        if screen == Screen::Login {
            return Err(AppError::Validation("Already logged in".to_string()));
        }
        self.screen = screen;
        Ok(())
    }

    pub fn logout(&mut self) {
        *self = Session::default();
    }
}
