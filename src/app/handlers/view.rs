//! Handler für Sichtbarkeit, Editing-Modus und Frame-Einstellungen.

use crate::app::EditorState;
use crate::shared::EditorOptions;
use glam::Vec3;

/// Schaltet den Kurven-Linienzug um.
pub fn toggle_spline(state: &mut EditorState) {
    state.options.draw_spline = !state.options.draw_spline;
}

/// Schaltet die Tangenten-Linien um.
pub fn toggle_tangent(state: &mut EditorState) {
    state.options.draw_tangent = !state.options.draw_tangent;
}

/// Schaltet die Anker-Handles um.
pub fn toggle_main_handles(state: &mut EditorState) {
    state.options.draw_main_handles = !state.options.draw_main_handles;
}

/// Schaltet die Kontrollpunkt-Handles um.
pub fn toggle_control_handles(state: &mut EditorState) {
    state.options.draw_control_handles = !state.options.draw_control_handles;
}

/// Schaltet Smooth-Editing um.
pub fn toggle_smooth_editing(state: &mut EditorState) {
    state.options.smooth_editing = !state.options.smooth_editing;
    log::info!(
        "Smooth-Editing {}",
        if state.options.smooth_editing {
            "aktiv"
        } else {
            "inaktiv"
        }
    );
}

/// Setzt den Frame-Modus der Spline.
pub fn set_relative_position(state: &mut EditorState, enabled: bool) {
    state.spline.relative_position = enabled;
}

/// Setzt den Welt-Ursprung der Spline.
pub fn set_origin(state: &mut EditorState, origin: Vec3) {
    state.spline.origin = origin;
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) {
    state.options = options;
}

/// Setzt die Anzahl Linien-Segmente des Kurven-Linienzugs.
pub fn set_resolution(state: &mut EditorState, resolution: usize) {
    state.spline.resolution = resolution;
}
