//! Bézier Spline Tools Library.
//! Kurven-Auswertung, Bogenlängen-Abtastung und Handle-Editing als Library
//! exportiert für Tests, CLI und Host-Integration.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{EditorCommand, EditorController, EditorIntent, EditorState};
pub use crate::core::{
    BezierNode, BezierSpline, Curve, DistanceSamples, HandleSide, ScanOutcome, ScanResult,
    SplineError, DEFAULT_MAX_SCAN_STEPS,
};
pub use crate::shared::{EditorOptions, GuiProfile, MarkerKind, SplineScene, ToolbarAction};
