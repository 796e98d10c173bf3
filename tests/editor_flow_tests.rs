//! Integrationstests für den Editor-Flow über Intents:
//! Handle-Drags, Smooth-Editing, Toolbar und Gizmo-Szene.

use bezier_spline_tools::shared::{ButtonBackgrounds, ToggleIcons};
use bezier_spline_tools::{
    BezierNode, BezierSpline, EditorController, EditorIntent, EditorOptions,
    EditorState, GuiProfile, HandleSide, MarkerKind, ToolbarAction,
};
use glam::Vec3;
use std::path::PathBuf;

fn straight_state(options: EditorOptions) -> EditorState {
    let spline = BezierSpline::with_nodes(vec![
        BezierNode::new(Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0), Vec3::X),
        BezierNode::new(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(9.0, 0.0, 0.0),
            Vec3::new(11.0, 0.0, 0.0),
        ),
    ]);
    EditorState::new(spline, options, GuiProfile::default())
}

fn options_all_handles() -> EditorOptions {
    EditorOptions {
        draw_main_handles: true,
        draw_control_handles: true,
        ..EditorOptions::default()
    }
}

fn click(controller: &mut EditorController, state: &mut EditorState, action: ToolbarAction) {
    controller
        .handle_intent(state, EditorIntent::ToolbarClicked { action })
        .expect("Toolbar-Intent sollte funktionieren");
}

#[test]
fn test_anker_drag_im_welt_frame() {
    let mut controller = EditorController::new();
    let mut state = straight_state(options_all_handles());
    state.spline.relative_position = true;
    state.spline.origin = Vec3::new(100.0, 0.0, 0.0);

    controller
        .handle_intent(
            &mut state,
            EditorIntent::HandleDragged {
                node_index: 1,
                kind: MarkerKind::MainPoint,
                world_position: Vec3::new(110.0, 5.0, 0.0),
            },
        )
        .expect("Drag sollte funktionieren");

    let node = state.spline.nodes()[1];
    assert_eq!(node.main_point, Vec3::new(10.0, 5.0, 0.0));
    // Handles wandern mit
    assert_eq!(node.previous_control_point, Vec3::new(9.0, 5.0, 0.0));
    assert_eq!(node.next_control_point, Vec3::new(11.0, 5.0, 0.0));
    assert_eq!(
        state.spline.evaluate(1.0).unwrap(),
        Vec3::new(110.0, 5.0, 0.0)
    );
}

#[test]
fn test_smooth_drag_spiegelt_gegenueber() {
    let mut controller = EditorController::new();
    let mut state = straight_state(options_all_handles());
    click(&mut controller, &mut state, ToolbarAction::ToggleSmooth);
    assert!(state.options.smooth_editing);

    controller
        .handle_intent(
            &mut state,
            EditorIntent::HandleDragged {
                node_index: 0,
                kind: MarkerKind::ControlPoint(HandleSide::Next),
                world_position: Vec3::new(0.0, 2.0, 0.0),
            },
        )
        .expect("Drag sollte funktionieren");

    let node = state.spline.nodes()[0];
    assert_eq!(node.next_control_point, Vec3::new(0.0, 2.0, 0.0));
    // Richtung gespiegelt, Länge des Gegen-Handles (1.0) bleibt
    let mirrored = node.previous_control_point;
    assert!((mirrored - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);
}

#[test]
fn test_drag_ohne_smooth_laesst_gegenueber_stehen() {
    let mut controller = EditorController::new();
    let mut state = straight_state(options_all_handles());

    controller
        .handle_intent(
            &mut state,
            EditorIntent::HandleDragged {
                node_index: 1,
                kind: MarkerKind::ControlPoint(HandleSide::Previous),
                world_position: Vec3::new(9.0, 3.0, 0.0),
            },
        )
        .expect("Drag sollte funktionieren");

    let node = state.spline.nodes()[1];
    assert_eq!(node.previous_control_point, Vec3::new(9.0, 3.0, 0.0));
    assert_eq!(node.next_control_point, Vec3::new(11.0, 0.0, 0.0));
}

#[test]
fn test_drag_auf_ausgeblendete_handles_wird_ignoriert() {
    let mut controller = EditorController::new();
    let options = EditorOptions {
        draw_control_handles: false,
        ..EditorOptions::default()
    };
    let mut state = straight_state(options);
    let before = state.spline.clone();

    controller
        .handle_intent(
            &mut state,
            EditorIntent::HandleDragged {
                node_index: 0,
                kind: MarkerKind::ControlPoint(HandleSide::Next),
                world_position: Vec3::new(5.0, 5.0, 5.0),
            },
        )
        .expect("Ignorierter Drag ist kein Fehler");

    assert_eq!(state.spline, before);
}

#[test]
fn test_new_node_button_haengt_in_tangentenrichtung_an() {
    let mut controller = EditorController::new();
    let mut state = straight_state(options_all_handles());

    click(&mut controller, &mut state, ToolbarAction::NewNode);

    assert_eq!(state.spline.node_count(), 3);
    let node = state.spline.nodes()[2];
    assert!((node.main_point - Vec3::new(11.0, 0.0, 0.0)).length() < 1e-5);
    assert!((node.previous_control_point - Vec3::new(10.9, 0.0, 0.0)).length() < 1e-5);
    assert!((node.next_control_point - Vec3::new(11.1, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_ungueltiger_index_laesst_spline_unveraendert() {
    let mut controller = EditorController::new();
    let mut state = straight_state(options_all_handles());

    let result =
        controller.handle_intent(&mut state, EditorIntent::RemoveNodeRequested { index: 7 });

    assert!(result.is_err());
    assert_eq!(state.spline.node_count(), 2);

    controller
        .handle_intent(&mut state, EditorIntent::RemoveNodeRequested { index: 1 })
        .expect("Entfernen sollte funktionieren");
    assert_eq!(state.spline.nodes()[0].main_point, Vec3::ZERO);
}

#[test]
fn test_append_und_frame_intents() {
    let mut controller = EditorController::new();
    let mut state = straight_state(options_all_handles());
    let node = BezierNode::new(
        Vec3::new(20.0, 0.0, 0.0),
        Vec3::new(19.0, 0.0, 0.0),
        Vec3::new(21.0, 0.0, 0.0),
    );

    controller
        .handle_intent(&mut state, EditorIntent::AppendNodeRequested { node })
        .expect("Anhängen sollte funktionieren");
    controller
        .handle_intent(&mut state, EditorIntent::OriginChanged { origin: Vec3::Y })
        .expect("Ursprung setzen sollte funktionieren");

    // Ohne relative Position bleibt der Ursprung wirkungslos
    assert_eq!(state.spline.evaluate(1.0).unwrap(), Vec3::new(20.0, 0.0, 0.0));

    controller
        .handle_intent(&mut state, EditorIntent::RelativePositionChanged { enabled: true })
        .expect("Umschalten sollte funktionieren");
    assert_eq!(state.spline.evaluate(1.0).unwrap(), Vec3::new(20.0, 1.0, 0.0));
}

#[test]
fn test_aufloesung_kommt_nur_von_der_spline() {
    let mut controller = EditorController::new();
    let mut state = straight_state(EditorOptions::default());

    controller
        .handle_intent(&mut state, EditorIntent::ResolutionChanged { resolution: 4 })
        .expect("Auflösung setzen sollte funktionieren");
    assert_eq!(state.spline.resolution, 4);
    assert_eq!(controller.build_scene(&state).curve.len(), 5);

    // Neue Optionen lassen die Auflösung der Spline unberührt
    let options = EditorOptions {
        smooth_editing: true,
        ..EditorOptions::default()
    };
    controller
        .handle_intent(&mut state, EditorIntent::OptionsChanged { options })
        .expect("Optionen übernehmen sollte funktionieren");
    assert!(state.options.smooth_editing);
    assert_eq!(state.spline.resolution, 4);
    assert_eq!(controller.build_scene(&state).curve.len(), 5);
}

// ─── Gizmo-Szene ─────────────────────────────────────────────────────────────

#[test]
fn test_szene_folgt_sichtbarkeit() {
    let mut controller = EditorController::new();
    let mut state = straight_state(EditorOptions::default());

    let scene = controller.build_scene(&state);
    assert!(scene.has_curve());
    assert_eq!(scene.markers.len(), 6);
    assert_eq!(scene.tangent_lines.len(), 4);
    // Standard: nur Anker verschiebbar
    assert!(scene
        .editable_markers()
        .all(|m| m.kind == MarkerKind::MainPoint));
    assert_eq!(scene.editable_markers().count(), 2);

    click(&mut controller, &mut state, ToolbarAction::ToggleSpline);
    click(&mut controller, &mut state, ToolbarAction::ToggleTangent);
    click(&mut controller, &mut state, ToolbarAction::ToggleControlPointAxis);

    let scene = controller.build_scene(&state);
    assert!(!scene.has_curve());
    assert!(scene.tangent_lines.is_empty());
    assert_eq!(scene.editable_markers().count(), 6);
}

#[test]
fn test_szene_mit_einem_node_ohne_kurve() {
    let controller = EditorController::new();
    let state = EditorState::new(
        BezierSpline::new(),
        EditorOptions::default(),
        GuiProfile::default(),
    );

    let scene = controller.build_scene(&state);
    assert!(scene.curve.is_empty());
    assert_eq!(scene.markers.len(), 3);
}

#[test]
fn test_szene_verwendet_injiziertes_profil() {
    let mut profile = GuiProfile::default();
    profile.spline_color = [0.1, 0.2, 0.3, 1.0];
    profile.icons.smooth = ToggleIcons {
        on: Some(PathBuf::from("smooth_on.png")),
        off: Some(PathBuf::from("smooth_off.png")),
    };
    profile.icons.background = ButtonBackgrounds {
        on: Some(PathBuf::from("bg_on.png")),
        off: Some(PathBuf::from("bg_off.png")),
        pressed: Some(PathBuf::from("bg_pressed.png")),
        hover: Some(PathBuf::from("bg_hover.png")),
    };
    let spline = BezierSpline::with_nodes(vec![BezierNode::seed(), BezierNode::default()]);
    let mut state = EditorState::new(spline, EditorOptions::default(), profile);
    let mut controller = EditorController::new();

    assert_eq!(
        toolbar_icon(&state, ToolbarAction::ToggleSmooth),
        Some(PathBuf::from("smooth_off.png"))
    );

    click(&mut controller, &mut state, ToolbarAction::ToggleSmooth);
    assert_eq!(
        toolbar_icon(&state, ToolbarAction::ToggleSmooth),
        Some(PathBuf::from("smooth_on.png"))
    );

    let scene = controller.build_scene(&state);
    assert_eq!(scene.curve_color, [0.1, 0.2, 0.3, 1.0]);

    // Hintergrund folgt dem Schaltzustand, pressed/hover gelten für alle Buttons
    let smooth = scene
        .toolbar
        .iter()
        .find(|b| b.action == ToolbarAction::ToggleSmooth)
        .expect("Smooth-Button erwartet");
    assert_eq!(smooth.background, Some(PathBuf::from("bg_on.png")));
    let control_axis = scene
        .toolbar
        .iter()
        .find(|b| b.action == ToolbarAction::ToggleControlPointAxis)
        .expect("Kontrollpunkt-Button erwartet");
    assert!(!control_axis.active);
    assert_eq!(control_axis.background, Some(PathBuf::from("bg_off.png")));
    assert!(scene.toolbar.iter().all(|b| {
        b.pressed_background == Some(PathBuf::from("bg_pressed.png"))
            && b.hover_background == Some(PathBuf::from("bg_hover.png"))
    }));
    assert_eq!(
        scene.toolbar.last().map(|b| b.action),
        Some(ToolbarAction::NewNode)
    );
}

fn toolbar_icon(state: &EditorState, action: ToolbarAction) -> Option<PathBuf> {
    EditorController::new()
        .build_scene(state)
        .toolbar
        .into_iter()
        .find(|b| b.action == action)
        .and_then(|b| b.icon)
}
