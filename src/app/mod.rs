//! Application-Layer: Controller, State, Events und Handler des Spline-Editors.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Editor-State
///
/// Hält Spline, Optionen und das injizierte Darstellungs-Profil.
pub mod state;

pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use state::EditorState;
