//! Mapping von UI-Intents auf mutierende Editor-Commands.

use super::{EditorCommand, EditorIntent, EditorState};
use crate::shared::{MarkerKind, ToolbarAction};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
///
/// Handle-Drags auf ausgeblendete Handle-Gruppen erzeugen keinen Command.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::HandleDragged {
            node_index,
            kind,
            world_position,
        } => match kind {
            MarkerKind::MainPoint if state.options.draw_main_handles => {
                vec![EditorCommand::MoveMainPoint {
                    index: node_index,
                    world_position,
                }]
            }
            MarkerKind::ControlPoint(side) if state.options.draw_control_handles => {
                vec![EditorCommand::MoveControlPoint {
                    index: node_index,
                    side,
                    world_position,
                    smooth: state.options.smooth_editing,
                }]
            }
            _ => {
                log::warn!(
                    "Handle-Drag auf ausgeblendetes Handle ignoriert: Node {} ({:?})",
                    node_index,
                    kind
                );
                vec![]
            }
        },
        EditorIntent::ToolbarClicked { action } => vec![match action {
            ToolbarAction::ToggleSpline => EditorCommand::ToggleSpline,
            ToolbarAction::ToggleTangent => EditorCommand::ToggleTangent,
            ToolbarAction::ToggleMainPointAxis => EditorCommand::ToggleMainHandles,
            ToolbarAction::ToggleControlPointAxis => EditorCommand::ToggleControlHandles,
            ToolbarAction::ToggleSmooth => EditorCommand::ToggleSmoothEditing,
            ToolbarAction::NewNode => EditorCommand::AddNodeAuto,
        }],
        EditorIntent::AppendNodeRequested { node } => vec![EditorCommand::AppendNode { node }],
        EditorIntent::RemoveNodeRequested { index } => vec![EditorCommand::RemoveNode { index }],
        EditorIntent::RelativePositionChanged { enabled } => {
            vec![EditorCommand::SetRelativePosition { enabled }]
        }
        EditorIntent::OriginChanged { origin } => vec![EditorCommand::SetOrigin { origin }],
        EditorIntent::ResolutionChanged { resolution } => {
            vec![EditorCommand::SetResolution { resolution }]
        }
        EditorIntent::OptionsChanged { options } => vec![EditorCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;
