//! Gizmo-Szene als expliziter Übergabevertrag zwischen Editor und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein beliebiger Renderer sie
//! konsumiert. Alle Positionen sind bereits um die Frame-Korrektur verschoben.

use crate::core::HandleSide;
use glam::Vec3;
use std::path::PathBuf;

/// Art eines Punkt-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Ankerpunkt auf der Kurve
    MainPoint,
    /// Tangenten-Handle
    ControlPoint(HandleSide),
}

/// Würfel-Marker an einem Anker oder Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneMarker {
    pub node_index: usize,
    pub kind: MarkerKind,
    pub position: Vec3,
    /// Kantenlänge des Markers
    pub size: f32,
    pub color: [f32; 4],
    /// Marker trägt ein verschiebbares Positions-Handle
    pub editable: bool,
}

/// Einzelne Linie (Tangente Anker → Handle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 4],
}

/// Buttons der Editor-Toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    ToggleSpline,
    ToggleTangent,
    ToggleMainPointAxis,
    ToggleControlPointAxis,
    ToggleSmooth,
    NewNode,
}

/// Button-Zustand inklusive aufgelöstem Icon aus dem Profil.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    /// Schaltzustand (bei `NewNode` immer `false`)
    pub active: bool,
    pub icon: Option<PathBuf>,
    /// Ruhe-Hintergrund (on/off nach Schaltzustand)
    pub background: Option<PathBuf>,
    pub pressed_background: Option<PathBuf>,
    pub hover_background: Option<PathBuf>,
}

/// Read-only Daten für einen Gizmo-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplineScene {
    /// Linienzug der Kurve (leer wenn ausgeblendet oder < 2 Nodes)
    pub curve: Vec<Vec3>,
    pub curve_color: [f32; 4],
    /// Marker für Anker und Handles
    pub markers: Vec<SceneMarker>,
    /// Tangenten-Linien (leer wenn ausgeblendet)
    pub tangent_lines: Vec<SceneLine>,
    pub toolbar: Vec<ToolbarButton>,
}

impl SplineScene {
    /// Gibt zurück, ob ein Kurven-Linienzug vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.curve.len() >= 2
    }

    /// Alle verschiebbaren Marker.
    pub fn editable_markers(&self) -> impl Iterator<Item = &SceneMarker> {
        self.markers.iter().filter(|m| m.editable)
    }
}
