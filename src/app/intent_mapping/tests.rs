use super::*;
use crate::core::{BezierSpline, HandleSide};
use crate::shared::{EditorOptions, GuiProfile};
use glam::Vec3;

fn state_with(options: EditorOptions) -> EditorState {
    EditorState::new(BezierSpline::new(), options, GuiProfile::default())
}

#[test]
fn test_anker_drag_wird_zu_move_main_point() {
    let state = state_with(EditorOptions::default());
    let commands = map_intent_to_commands(
        &state,
        EditorIntent::HandleDragged {
            node_index: 0,
            kind: MarkerKind::MainPoint,
            world_position: Vec3::X,
        },
    );
    assert_eq!(
        commands,
        vec![EditorCommand::MoveMainPoint {
            index: 0,
            world_position: Vec3::X
        }]
    );
}

#[test]
fn test_handle_drag_uebernimmt_smooth_modus() {
    let state = state_with(EditorOptions {
        draw_control_handles: true,
        smooth_editing: true,
        ..EditorOptions::default()
    });
    let commands = map_intent_to_commands(
        &state,
        EditorIntent::HandleDragged {
            node_index: 0,
            kind: MarkerKind::ControlPoint(HandleSide::Previous),
            world_position: Vec3::Y,
        },
    );
    assert_eq!(
        commands,
        vec![EditorCommand::MoveControlPoint {
            index: 0,
            side: HandleSide::Previous,
            world_position: Vec3::Y,
            smooth: true,
        }]
    );
}

#[test]
fn test_drag_auf_ausgeblendete_handles_wird_ignoriert() {
    // Default: Kontrollpunkt-Handles ausgeblendet
    let state = state_with(EditorOptions::default());
    let commands = map_intent_to_commands(
        &state,
        EditorIntent::HandleDragged {
            node_index: 0,
            kind: MarkerKind::ControlPoint(HandleSide::Next),
            world_position: Vec3::Y,
        },
    );
    assert!(commands.is_empty());

    let state = state_with(EditorOptions {
        draw_main_handles: false,
        ..EditorOptions::default()
    });
    let commands = map_intent_to_commands(
        &state,
        EditorIntent::HandleDragged {
            node_index: 0,
            kind: MarkerKind::MainPoint,
            world_position: Vec3::Y,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_toolbar_new_node() {
    let state = state_with(EditorOptions::default());
    let commands = map_intent_to_commands(
        &state,
        EditorIntent::ToolbarClicked {
            action: ToolbarAction::NewNode,
        },
    );
    assert_eq!(commands, vec![EditorCommand::AddNodeAuto]);
}

#[test]
fn test_aufloesung_wird_zu_set_resolution() {
    let state = state_with(EditorOptions::default());
    let commands = map_intent_to_commands(
        &state,
        EditorIntent::ResolutionChanged { resolution: 8 },
    );
    assert_eq!(commands, vec![EditorCommand::SetResolution { resolution: 8 }]);
}
