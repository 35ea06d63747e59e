//! # Formforge UI
//!
//! Form builder UI using the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`], which owns the [`formforge_core::FormStore`]
//! - **Message**: user gestures (drag, click, typing)
//! - **Update**: turns a message into store actions
//! - **View**: renders the core view-models (sidebar, canvas, properties)
//!
//! All decisions about what a gesture means live in `formforge-core`;
//! this crate only maps them onto widgets.

pub mod app;
pub mod theme;

pub use app::{run, App, Flags};
pub use theme::Palette;
