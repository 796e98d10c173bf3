use crate::core::BezierNode;
use crate::shared::{EditorOptions, MarkerKind, ToolbarAction};
use glam::Vec3;

/// Editor-Intents sind Eingaben aus UI/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Positions-Handle eines Ankers oder Kontrollpunkts wurde gezogen
    HandleDragged {
        node_index: usize,
        kind: MarkerKind,
        /// Neue Position in Welt-Koordinaten (inkl. Frame-Korrektur)
        world_position: Vec3,
    },
    /// Toolbar-Button geklickt
    ToolbarClicked { action: ToolbarAction },
    /// Vollständig spezifizierten Node anhängen
    AppendNodeRequested { node: BezierNode },
    /// Node per Index entfernen
    RemoveNodeRequested { index: usize },
    /// Ausgabe im Welt-Frame (true) oder Spline-Raum (false)
    RelativePositionChanged { enabled: bool },
    /// Ursprung des Welt-Frames hat sich geändert (Host-Transform)
    OriginChanged { origin: Vec3 },
    /// Anzahl Linien-Segmente für den Kurven-Linienzug geändert
    ResolutionChanged { resolution: usize },
    /// Optionen aus Dialog oder Datei übernehmen
    OptionsChanged { options: EditorOptions },
}
