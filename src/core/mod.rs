//! Core-Domänentypen: Nodes, Spline, Auswertung und Bogenlängen-Abtastung.

pub mod arc_length;
pub mod error;
pub mod node;
/// Spline-Datenmodell und Kurven-Auswertung
///
/// - BezierSpline: geordnete Node-Kette mit Frame-Korrektur
/// - Curve: validierte Sicht (mindestens zwei Nodes) mit unfehlbarer Auswertung
pub mod spline;

pub use arc_length::{DistanceSamples, ScanOutcome, ScanResult, DEFAULT_MAX_SCAN_STEPS};
pub use error::SplineError;
pub use node::{BezierNode, HandleSide};
pub use spline::{BezierSpline, Curve, DEFAULT_RESOLUTION};
