//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns live here:
//!
//! - **Stateless components** receive everything as props and just render:
//!   `CountryPanel` (the looked-up record) and `StatusLine` (spinner, error,
//!   or idle hint).
//! - **Stateful components** manage local state and emit events: `InputBox`
//!   (the single-line country name field).
//!
//! Each component file contains its state types, event types, rendering
//! logic, and tests, so one file tells the whole story of a component.

pub mod country_panel;
pub mod input_box;
pub mod status_line;

pub use country_panel::CountryPanel;
pub use input_box::{InputBox, InputEvent};
pub use status_line::StatusLine;
