use crate::core::{BezierNode, HandleSide};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Anker verschieben, Handles wandern mit
    MoveMainPoint { index: usize, world_position: Vec3 },
    /// Einzelnes Handle verschieben, optional Gegenstück spiegeln
    MoveControlPoint {
        index: usize,
        side: HandleSide,
        world_position: Vec3,
        smooth: bool,
    },
    /// Node in Tangenten-Verlängerung anhängen
    AddNodeAuto,
    /// Vollständig spezifizierten Node anhängen
    AppendNode { node: BezierNode },
    /// Node entfernen
    RemoveNode { index: usize },
    /// Kurven-Linienzug ein/aus
    ToggleSpline,
    /// Tangenten-Linien ein/aus
    ToggleTangent,
    /// Anker-Handles ein/aus
    ToggleMainHandles,
    /// Kontrollpunkt-Handles ein/aus
    ToggleControlHandles,
    /// Smooth-Editing ein/aus
    ToggleSmoothEditing,
    /// Frame-Modus setzen
    SetRelativePosition { enabled: bool },
    /// Welt-Ursprung setzen
    SetOrigin { origin: Vec3 },
    /// Linienzug-Auflösung der Spline setzen
    SetResolution { resolution: usize },
    /// Optionen ersetzen
    ApplyOptions { options: EditorOptions },
}
