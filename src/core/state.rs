//! # Application State
//!
//! Core business state for Atlas. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CountrySource>  // lookup backend
//! ├── status_message: String          // title bar text
//! ├── is_loading: bool                // lookup in flight
//! ├── error: Option<String>           // message from the last failed lookup
//! └── country: Option<Country>        // record from the last successful lookup
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! `error` and `country` are not mutually exclusive: a failing lookup never
//! clears the previous result, so a stale country can sit next to a fresh
//! error. The draw pass branches on `error` explicitly.

use crate::lookup::{Country, CountrySource};
use std::sync::Arc;

pub struct App {
    pub source: Arc<dyn CountrySource>,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub country: Option<Country>,
}

impl App {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            status_message: String::from("Welcome to Atlas!"),
            is_loading: false,
            error: None,
            country: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Atlas!");
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert!(app.country.is_none());
    }
}
