//! Fehlertypen der Kurven-Auswertung.

use thiserror::Error;

/// Fehler bei Auswertung, Parametrisierung und Bogenlängen-Abtastung.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplineError {
    /// Auswertung braucht mindestens zwei Nodes
    #[error("Spline enthält nur {count} Node(s), mindestens 2 benötigt")]
    InsufficientNodes { count: usize },
    /// Segment- oder Node-Index jenseits der Node-Liste
    #[error("Index {index} außerhalb des gültigen Bereichs (Node-Anzahl {count})")]
    IndexOutOfRange { index: usize, count: usize },
    /// Abtastung hat das Schritt-Limit erreicht, bevor das Ziel erreicht war
    #[error("Abtastung nach {steps} Schritten abgebrochen (t = {t})")]
    ScanExhausted { t: f32, steps: usize },
}
