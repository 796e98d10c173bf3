//! Zustand des Spline-Editors.

use crate::core::BezierSpline;
use crate::shared::{EditorOptions, GuiProfile};

/// Hauptzustand des Editors: Spline, Optionen und Darstellungs-Profil.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Bearbeitete Spline
    pub spline: BezierSpline,
    /// Laufzeit-Optionen (Sichtbarkeit, Editing-Modus, Abtastung)
    pub options: EditorOptions,
    /// Farben und Icons, beim Erzeugen übergeben
    pub profile: GuiProfile,
}

impl EditorState {
    /// Erstellt einen Editor-Zustand mit injiziertem Profil.
    pub fn new(spline: BezierSpline, options: EditorOptions, profile: GuiProfile) -> Self {
        Self {
            spline,
            options,
            profile,
        }
    }
}
