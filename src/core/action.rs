//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The lookup task settles? That's `Action::LookupFinished(result)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns the side effect it wants run.
//! No I/O here. That happens in the TUI adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.
//! All three observable fields (`is_loading`, `error`, `country`) are
//! written inside a single `update` call, so a draw pass between calls
//! never sees a half-applied transition.

use log::{debug, info, warn};

use crate::core::state::App;
use crate::lookup::{Country, LookupError};

#[derive(Debug)]
pub enum Action {
    /// User submitted a country name from the input box.
    Submit(String),
    /// The spawned lookup task settled, one way or the other.
    LookupFinished(Result<Country, LookupError>),
    /// User asked to exit (Esc or Ctrl+C).
    Quit,
}

/// Side effect requested by `update()`. The event loop executes these;
/// the reducer itself never does I/O.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a background task resolving the given country name.
    SpawnLookup(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(name) => {
            if app.is_loading {
                // One lookup at a time. The input box is gated too, but a
                // queued event could still land here.
                debug!("Submit dropped: lookup already in flight");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = format!("Looking up \"{name}\"");
            Effect::SpawnLookup(name)
        }
        Action::LookupFinished(Ok(country)) => {
            info!("Lookup succeeded: {}", country.name);
            app.status_message = format!("Showing {}", country.name);
            app.error = None;
            app.country = Some(country);
            app.is_loading = false;
            Effect::None
        }
        Action::LookupFinished(Err(e)) => {
            warn!("Lookup failed: {e:?}");
            app.status_message = String::from("Lookup failed");
            // The previous successful result is deliberately left in place.
            app.error = Some(e.to_string());
            app.is_loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingSource, norway, test_app};
    use std::sync::Arc;

    #[test]
    fn test_submit_sets_loading_and_requests_spawn() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("Norway".to_string()));
        assert!(app.is_loading);
        assert_eq!(effect, Effect::SpawnLookup("Norway".to_string()));
    }

    #[test]
    fn test_submit_while_loading_is_dropped() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Norway".to_string()));
        let effect = update(&mut app, Action::Submit("Sweden".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_success_publishes_result_and_clears_error() {
        let mut app = test_app();
        app.error = Some("old error".to_string());
        update(&mut app, Action::Submit("Norway".to_string()));

        let effect = update(&mut app, Action::LookupFinished(Ok(norway())));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.country.as_ref().map(|c| c.name.as_str()), Some("Norway"));
    }

    #[test]
    fn test_failure_sets_error_and_keeps_prior_country() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Norway".to_string()));
        update(&mut app, Action::LookupFinished(Ok(norway())));

        update(&mut app, Action::Submit("Zzznotacountry".to_string()));
        let effect = update(
            &mut app,
            Action::LookupFinished(Err(LookupError::InvalidName { status: 404 })),
        );
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some("Error: invalid country name"));
        // Stale result stays visible next to the fresh error.
        assert_eq!(app.country.as_ref().map(|c| c.name.as_str()), Some("Norway"));
    }

    #[test]
    fn test_loading_stays_false_after_settlement() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Norway".to_string()));
        update(&mut app, Action::LookupFinished(Ok(norway())));
        assert!(!app.is_loading);
        // No further action arrives; the flag does not flip on its own.
        assert!(!app.is_loading);
    }

    #[test]
    fn test_failing_source_surfaces_user_facing_message() {
        let mut app = App::new(Arc::new(FailingSource));
        update(&mut app, Action::Submit("Norway".to_string()));
        let result = tokio_test::block_on(app.source.clone().lookup("Norway"));
        update(&mut app, Action::LookupFinished(result));
        assert_eq!(app.error.as_deref(), Some("Error: invalid country name"));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_quit_requests_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
