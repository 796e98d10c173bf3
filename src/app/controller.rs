//! Editor-Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{EditorCommand, EditorIntent, EditorState};
use crate::shared::SplineScene;

/// Orchestriert UI-Events und Handler auf den EditorState.
#[derive(Debug, Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Nodes ===
            EditorCommand::MoveMainPoint {
                index,
                world_position,
            } => handlers::editing::move_main_point(state, index, world_position)?,
            EditorCommand::MoveControlPoint {
                index,
                side,
                world_position,
                smooth,
            } => handlers::editing::move_control_point(state, index, side, world_position, smooth)?,
            EditorCommand::AddNodeAuto => handlers::editing::add_node_auto(state),
            EditorCommand::AppendNode { node } => handlers::editing::append_node(state, node),
            EditorCommand::RemoveNode { index } => handlers::editing::remove_node(state, index)?,

            // === Sichtbarkeit & Modus ===
            EditorCommand::ToggleSpline => handlers::view::toggle_spline(state),
            EditorCommand::ToggleTangent => handlers::view::toggle_tangent(state),
            EditorCommand::ToggleMainHandles => handlers::view::toggle_main_handles(state),
            EditorCommand::ToggleControlHandles => handlers::view::toggle_control_handles(state),
            EditorCommand::ToggleSmoothEditing => handlers::view::toggle_smooth_editing(state),

            // === Frame & Optionen ===
            EditorCommand::SetRelativePosition { enabled } => {
                handlers::view::set_relative_position(state, enabled)
            }
            EditorCommand::SetOrigin { origin } => handlers::view::set_origin(state, origin),
            EditorCommand::SetResolution { resolution } => {
                handlers::view::set_resolution(state, resolution)
            }
            EditorCommand::ApplyOptions { options } => handlers::view::apply_options(state, options),
        }

        Ok(())
    }

    /// Baut die Gizmo-Szene für den aktuellen Zustand.
    pub fn build_scene(&self, state: &EditorState) -> SplineScene {
        render_scene::build(state)
    }
}
