//! Handler für Node-Bearbeitung: Anker, Handles, Anhängen, Entfernen.

use crate::app::EditorState;
use crate::core::{BezierNode, HandleSide};
use anyhow::Context;
use glam::Vec3;

/// Verschiebt einen Anker auf eine Weltposition; beide Handles wandern mit.
pub fn move_main_point(
    state: &mut EditorState,
    index: usize,
    world_position: Vec3,
) -> anyhow::Result<()> {
    let local = world_position - state.spline.position_offset();
    let node = state
        .spline
        .node_mut(index)
        .context("Anker verschieben fehlgeschlagen")?;
    node.set_main_point(local);
    log::debug!("Anker {} verschoben nach {:?}", index, local);
    Ok(())
}

/// Verschiebt ein Handle auf eine Weltposition.
///
/// Bei `smooth` wird das gegenüberliegende Handle gespiegelt
/// (siehe [`BezierNode::set_control_point`]).
pub fn move_control_point(
    state: &mut EditorState,
    index: usize,
    side: HandleSide,
    world_position: Vec3,
    smooth: bool,
) -> anyhow::Result<()> {
    let local = world_position - state.spline.position_offset();
    let node = state
        .spline
        .node_mut(index)
        .context("Handle verschieben fehlgeschlagen")?;
    node.set_control_point(side, local, smooth);
    log::debug!("Handle {:?} von Node {} verschoben nach {:?}", side, index, local);
    Ok(())
}

/// Hängt einen Node in Verlängerung der letzten Tangente an.
pub fn add_node_auto(state: &mut EditorState) {
    state.spline.append_node_auto();
}

/// Hängt einen vollständig spezifizierten Node an.
pub fn append_node(state: &mut EditorState, node: BezierNode) {
    state.spline.append_node(
        node.main_point,
        node.previous_control_point,
        node.next_control_point,
    );
}

/// Entfernt einen Node per Index.
pub fn remove_node(state: &mut EditorState, index: usize) -> anyhow::Result<()> {
    state
        .spline
        .remove_node(index)
        .context("Node entfernen fehlgeschlagen")?;
    log::debug!("Node {} entfernt", index);
    Ok(())
}
