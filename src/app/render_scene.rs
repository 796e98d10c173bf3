//! Builder für Gizmo-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::core::HandleSide;
use crate::shared::{
    MarkerKind, SceneLine, SceneMarker, SplineScene, ToolbarAction, ToolbarButton,
};
use std::path::Path;

/// Baut eine SplineScene aus dem aktuellen EditorState.
pub fn build(state: &EditorState) -> SplineScene {
    let spline = &state.spline;
    let options = &state.options;
    let profile = &state.profile;
    let offset = spline.position_offset();

    // Linienzug nur mit mindestens zwei Nodes und positiver Auflösung
    let curve = match spline.curve() {
        Ok(curve) if options.draw_spline && spline.resolution > 0 => {
            curve.polyline(spline.resolution)
        }
        _ => Vec::new(),
    };

    let mut markers = Vec::with_capacity(spline.node_count() * 3);
    let mut tangent_lines = Vec::new();

    for (node_index, node) in spline.nodes().iter().enumerate() {
        let main = node.main_point + offset;
        markers.push(SceneMarker {
            node_index,
            kind: MarkerKind::MainPoint,
            position: main,
            size: options.point_radius,
            color: profile.main_point_color,
            editable: options.draw_main_handles,
        });

        for side in [HandleSide::Previous, HandleSide::Next] {
            let handle = node.control_point(side) + offset;
            markers.push(SceneMarker {
                node_index,
                kind: MarkerKind::ControlPoint(side),
                position: handle,
                size: options.point_radius,
                color: profile.control_point_color,
                editable: options.draw_control_handles,
            });

            if options.draw_tangent {
                tangent_lines.push(SceneLine {
                    start: main,
                    end: handle,
                    color: profile.tangent_color,
                });
            }
        }
    }

    SplineScene {
        curve,
        curve_color: profile.spline_color,
        markers,
        tangent_lines,
        toolbar: build_toolbar(state),
    }
}

/// Toolbar-Buttons in Anzeigereihenfolge mit zustandsabhängigem Icon und Hintergrund.
fn build_toolbar(state: &EditorState) -> Vec<ToolbarButton> {
    let options = &state.options;
    let icons = &state.profile.icons;
    let backgrounds = &icons.background;
    let button = |action: ToolbarAction, active: bool, icon: Option<&Path>| ToolbarButton {
        action,
        active,
        icon: icon.map(Path::to_path_buf),
        background: backgrounds.for_state(active).map(Path::to_path_buf),
        pressed_background: backgrounds.pressed.clone(),
        hover_background: backgrounds.hover.clone(),
    };

    let toggles = [
        (ToolbarAction::ToggleSpline, options.draw_spline, &icons.spline),
        (ToolbarAction::ToggleTangent, options.draw_tangent, &icons.tangent),
        (
            ToolbarAction::ToggleMainPointAxis,
            options.draw_main_handles,
            &icons.main_point_axis,
        ),
        (
            ToolbarAction::ToggleControlPointAxis,
            options.draw_control_handles,
            &icons.control_point_axis,
        ),
        (ToolbarAction::ToggleSmooth, options.smooth_editing, &icons.smooth),
    ];

    let mut buttons: Vec<ToolbarButton> = toggles
        .into_iter()
        .map(|(action, active, toggle_icons)| {
            button(action, active, toggle_icons.for_state(active))
        })
        .collect();

    buttons.push(button(ToolbarAction::NewNode, false, icons.new_node.as_deref()));
    buttons
}
