//! # Studio UI
//!
//! iced front end for Typst Studio.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] wrapping a `studio_core::Session`
//! - **Message**: Events that can occur
//! - **Update**: Pure function: (state, message) -> new state
//! - **View**: Pure function: state -> UI elements
//!
//! Presentation components never mutate state: the [`StatusBar`] in
//! particular is a pure function of the cursor position and saving flag
//! handed down by [`App`].

pub mod app;
pub mod status_bar;
pub mod theme;

pub use app::{run, App, Flags, Message};
pub use status_bar::StatusBar;
