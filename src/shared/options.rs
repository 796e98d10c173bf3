//! Zentrale Konfiguration für Spline-Editor und Kurven-Abtastung.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DEFAULT_MAX_SCAN_STEPS;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Gizmos ──────────────────────────────────────────────────────────

/// Kantenlänge der Marker für Anker und Handles (Welteinheiten).
pub const POINT_RADIUS: f32 = 0.1;

// ── Abtastung ───────────────────────────────────────────────────────

/// Standard-Schrittweite im globalen Parameter für Bogenlängen-Abtastung.
pub const SCAN_STEP: f32 = 0.001;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_spline_tools.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Darstellung ─────────────────────────────────────────────
    /// Marker-Größe für Anker und Handles
    pub point_radius: f32,
    /// Kurve zeichnen
    pub draw_spline: bool,
    /// Tangenten-Linien (Anker → Handle) zeichnen
    pub draw_tangent: bool,

    // ── Editing ─────────────────────────────────────────────────
    /// Anker-Handles anzeigen und verschiebbar machen
    pub draw_main_handles: bool,
    /// Kontrollpunkt-Handles anzeigen und verschiebbar machen
    pub draw_control_handles: bool,
    /// Gegenüberliegendes Handle beim Verschieben spiegeln
    pub smooth_editing: bool,

    // ── Abtastung ───────────────────────────────────────────────
    /// Schrittweite im globalen Parameter
    pub scan_step: f32,
    /// Obergrenze der Abtastschritte
    pub max_scan_steps: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            draw_spline: true,
            draw_tangent: true,

            draw_main_handles: true,
            draw_control_handles: false,
            smooth_editing: false,

            scan_step: SCAN_STEP,
            max_scan_steps: DEFAULT_MAX_SCAN_STEPS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_spline_tools"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_spline_tools.toml")
    }
}
