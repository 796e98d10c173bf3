//! BezierSpline: Node-Kette, Parametrisierung und Kurven-Auswertung.

use super::error::SplineError;
use super::node::BezierNode;
use crate::shared::spline_geometry::cubic_point;
use glam::Vec3;

/// Standard-Auflösung für diskretisierte Konsumenten (Gizmo-Linienzug).
pub const DEFAULT_RESOLUTION: usize = 32;

/// Abstand der Handles eines automatisch angehängten Nodes zum Anker.
const AUTO_NODE_HANDLE_OFFSET: f32 = 0.1;

/// Abstand eines automatisch angehängten Nodes zum letzten Anker.
const AUTO_NODE_DISTANCE: f32 = 1.0;

/// Kette kubischer Bézier-Segmente.
///
/// Segment `i` wird durch `(nodes[i].main_point, nodes[i].next_control_point,
/// nodes[i + 1].previous_control_point, nodes[i + 1].main_point)` definiert.
/// Der globale Parameterbereich [0, 1] ist in `node_count - 1` gleich lange
/// Teilintervalle aufgeteilt, eines pro Segment.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSpline {
    nodes: Vec<BezierNode>,
    /// Ausgabe relativ zu `origin` (true) oder im Spline-Raum (false)
    pub relative_position: bool,
    /// Ursprung des Welt-Frames, wird bei `relative_position` addiert
    pub origin: Vec3,
    /// Schrittzahl für Linienzüge (nur für diskretisierte Konsumenten)
    pub resolution: usize,
}

impl BezierSpline {
    /// Erstellt eine Spline mit genau einem Start-Node (siehe [`BezierNode::seed`]).
    pub fn new() -> Self {
        Self::with_nodes(vec![BezierNode::seed()])
    }

    /// Erstellt eine Spline aus einer beliebigen Node-Liste (auch leer).
    pub fn with_nodes(nodes: Vec<BezierNode>) -> Self {
        Self {
            nodes,
            relative_position: false,
            origin: Vec3::ZERO,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Read-only Sicht auf alle Nodes in Kurvenreihenfolge.
    pub fn nodes(&self) -> &[BezierNode] {
        &self.nodes
    }

    /// Einzelner Node per Index.
    pub fn node(&self, index: usize) -> Result<&BezierNode, SplineError> {
        let count = self.nodes.len();
        self.nodes
            .get(index)
            .ok_or(SplineError::IndexOutOfRange { index, count })
    }

    /// Mutable Zugriff auf einen Node (Editor-Layer).
    pub fn node_mut(&mut self, index: usize) -> Result<&mut BezierNode, SplineError> {
        let count = self.nodes.len();
        self.nodes
            .get_mut(index)
            .ok_or(SplineError::IndexOutOfRange { index, count })
    }

    /// Anzahl der Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Segmente (`node_count - 1`, mindestens 0).
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Frame-Korrektur: Null im Spline-Raum, sonst der Welt-Ursprung.
    pub fn position_offset(&self) -> Vec3 {
        if self.relative_position {
            self.origin
        } else {
            Vec3::ZERO
        }
    }

    /// Validierte Sicht für Auswertung und Bogenlängen-Abtastung.
    ///
    /// Prüft einmalig, dass mindestens zwei Nodes vorhanden sind.
    pub fn curve(&self) -> Result<Curve<'_>, SplineError> {
        if self.nodes.len() < 2 {
            return Err(SplineError::InsufficientNodes {
                count: self.nodes.len(),
            });
        }
        Ok(Curve { spline: self })
    }

    /// Bildet den globalen Parameter auf `(segment_index, local_t)` ab.
    pub fn global_to_local(&self, t: f32) -> Result<(usize, f32), SplineError> {
        Ok(self.curve()?.global_to_local(t))
    }

    /// Wertet ein einzelnes Segment am lokalen Parameter aus.
    ///
    /// `index == node_count - 1` liefert den letzten Anker (degeneriertes
    /// Tail-Segment); größere Indizes sind ein Fehler.
    pub fn evaluate_segment(&self, index: usize, local_t: f32) -> Result<Vec3, SplineError> {
        let count = self.nodes.len();
        if index >= count {
            return Err(SplineError::IndexOutOfRange { index, count });
        }
        Ok(segment_point(&self.nodes, index, local_t) + self.position_offset())
    }

    /// Wertet die Kurve am globalen Parameter `t` aus.
    pub fn evaluate(&self, t: f32) -> Result<Vec3, SplineError> {
        Ok(self.curve()?.evaluate(t))
    }

    /// Linienzug aus `resolution + 1` Punkten, gleichmäßig im Parameter verteilt.
    pub fn polyline(&self, resolution: usize) -> Result<Vec<Vec3>, SplineError> {
        Ok(self.curve()?.polyline(resolution))
    }

    /// Hängt einen vollständig spezifizierten Node an.
    pub fn append_node(&mut self, position: Vec3, previous_control: Vec3, next_control: Vec3) {
        self.nodes
            .push(BezierNode::new(position, previous_control, next_control));
    }

    /// Hängt einen Node in Verlängerung der ausgehenden Tangente des letzten Nodes an.
    ///
    /// Der neue Anker liegt eine Einheit entlang der Tangente, seine Handles
    /// ±0.1 entlang derselben Richtung. Bei degenerierter Tangente fällt der
    /// neue Node auf den letzten Anker. Eine leere Spline erhält den Start-Node.
    pub fn append_node_auto(&mut self) -> &BezierNode {
        let node = match self.nodes.last() {
            Some(last) => {
                let direction = last.outgoing_direction();
                let position = last.main_point + direction * AUTO_NODE_DISTANCE;
                BezierNode::new(
                    position,
                    position - direction * AUTO_NODE_HANDLE_OFFSET,
                    position + direction * AUTO_NODE_HANDLE_OFFSET,
                )
            }
            None => BezierNode::seed(),
        };
        log::debug!(
            "Node {} automatisch angehängt bei {:?}",
            self.nodes.len(),
            node.main_point
        );
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Entfernt einen Node per Index und gibt ihn zurück.
    pub fn remove_node(&mut self, index: usize) -> Result<BezierNode, SplineError> {
        let count = self.nodes.len();
        if index >= count {
            return Err(SplineError::IndexOutOfRange { index, count });
        }
        Ok(self.nodes.remove(index))
    }

    /// Entfernt alle Nodes.
    pub fn clear_nodes(&mut self) {
        self.nodes.clear();
    }
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::new()
    }
}

/// Punkt auf Segment `index` im Spline-Raum (ohne Frame-Korrektur).
///
/// Erwartet `index < nodes.len()`.
fn segment_point(nodes: &[BezierNode], index: usize, local_t: f32) -> Vec3 {
    match nodes.get(index + 1) {
        Some(next) => {
            let current = &nodes[index];
            cubic_point(
                current.main_point,
                current.next_control_point,
                next.previous_control_point,
                next.main_point,
                local_t,
            )
        }
        None => nodes[index].main_point,
    }
}

/// Ausgewertete Sicht auf eine Spline mit mindestens zwei Nodes.
///
/// Alle Auswertungen sind unfehlbar, da die Vorbedingung beim Erzeugen
/// über [`BezierSpline::curve`] geprüft wurde.
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a> {
    spline: &'a BezierSpline,
}

impl<'a> Curve<'a> {
    /// Siehe [`BezierSpline::global_to_local`].
    ///
    /// Negative `t` werden auf Segment 0 abgebildet (Extrapolation des
    /// ersten Segments), `t >= 1` auf das Ende des letzten Segments.
    pub fn global_to_local(&self, t: f32) -> (usize, f32) {
        let segment_count = self.spline.segment_count();
        // Ende exakt treffen, unabhängig von Rundung in `t / step`
        if t >= 1.0 {
            return (segment_count - 1, 1.0);
        }
        let step = 1.0 / segment_count as f32;
        let scaled = t / step;
        // `as usize` sättigt: negative Werte und NaN werden 0
        let index = scaled.floor() as usize;
        if index > segment_count - 1 {
            return (segment_count - 1, 1.0);
        }
        (index, scaled - index as f32)
    }

    /// Siehe [`BezierSpline::evaluate`].
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let (index, local_t) = self.global_to_local(t);
        segment_point(&self.spline.nodes, index, local_t) + self.spline.position_offset()
    }

    /// Siehe [`BezierSpline::polyline`]. `resolution == 0` liefert nur den Startpunkt.
    pub fn polyline(&self, resolution: usize) -> Vec<Vec3> {
        if resolution == 0 {
            return vec![self.evaluate(0.0)];
        }
        (0..=resolution)
            .map(|i| self.evaluate(i as f32 / resolution as f32))
            .collect()
    }
}
