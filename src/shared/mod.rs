//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, Profil und Szenen-Typen, die zwischen `app` und
//! einem Renderer geteilt werden, sowie reine Geometrie-Funktionen.

pub mod options;
pub mod profile;
mod render_scene;
pub mod spline_geometry;

pub use options::EditorOptions;
pub use profile::{ButtonBackgrounds, GuiProfile, ToggleIcons, ToolbarIcons};
pub use render_scene::{
    MarkerKind, SceneLine, SceneMarker, SplineScene, ToolbarAction, ToolbarButton,
};
