//! Darstellungs-Profil: Farben und Toolbar-Icons des Spline-Editors.
//!
//! Das Profil wird dem Editor beim Erzeugen explizit übergeben; es gibt
//! keine globale Suche nach geladenen Profilen.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Farbe der Kurve (RGBA: Grün).
pub const SPLINE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe der Anker-Marker (RGBA: Cyan).
pub const MAIN_POINT_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
/// Farbe der Handle-Marker (RGBA: Gelb).
pub const CONTROL_POINT_COLOR: [f32; 4] = [1.0, 0.92, 0.016, 1.0];
/// Farbe der Tangenten-Linien (RGBA: Gelb).
pub const TANGENT_COLOR: [f32; 4] = [1.0, 0.92, 0.016, 1.0];

/// Icon-Paar für einen Umschalt-Button.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToggleIcons {
    pub on: Option<PathBuf>,
    pub off: Option<PathBuf>,
}

impl ToggleIcons {
    /// Icon passend zum Schaltzustand.
    pub fn for_state(&self, enabled: bool) -> Option<&Path> {
        if enabled {
            self.on.as_deref()
        } else {
            self.off.as_deref()
        }
    }
}

/// Hintergrund-Texturen der Toolbar-Buttons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ButtonBackgrounds {
    pub on: Option<PathBuf>,
    pub off: Option<PathBuf>,
    pub pressed: Option<PathBuf>,
    pub hover: Option<PathBuf>,
}

impl ButtonBackgrounds {
    /// Ruhe-Hintergrund passend zum Schaltzustand.
    pub fn for_state(&self, enabled: bool) -> Option<&Path> {
        if enabled {
            self.on.as_deref()
        } else {
            self.off.as_deref()
        }
    }
}

/// Icons aller Toolbar-Buttons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolbarIcons {
    /// Kurve ein/aus
    pub spline: ToggleIcons,
    /// Tangenten ein/aus
    pub tangent: ToggleIcons,
    /// Anker-Handles ein/aus
    pub main_point_axis: ToggleIcons,
    /// Kontrollpunkt-Handles ein/aus
    pub control_point_axis: ToggleIcons,
    /// Smooth-Editing ein/aus
    pub smooth: ToggleIcons,
    /// Node anhängen
    pub new_node: Option<PathBuf>,
    pub background: ButtonBackgrounds,
}

/// Farben und Icons für Gizmos und Toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuiProfile {
    pub spline_color: [f32; 4],
    pub main_point_color: [f32; 4],
    pub control_point_color: [f32; 4],
    pub tangent_color: [f32; 4],
    pub icons: ToolbarIcons,
}

impl Default for GuiProfile {
    fn default() -> Self {
        Self {
            spline_color: SPLINE_COLOR,
            main_point_color: MAIN_POINT_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
            tangent_color: TANGENT_COLOR,
            icons: ToolbarIcons::default(),
        }
    }
}

impl GuiProfile {
    /// Lädt ein Profil aus einer TOML-Datei.
    ///
    /// Anders als die Editor-Optionen gibt es hier keinen stillen Fallback:
    /// wer ein Profil-File angibt, bekommt es oder einen Fehler.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Profil nicht lesbar: {}", path.display()))?;
        let profile = toml::from_str(&content)
            .with_context(|| format!("Profil fehlerhaft: {}", path.display()))?;
        log::info!("Profil geladen aus: {}", path.display());
        Ok(profile)
    }

    /// Speichert das Profil als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Profil nicht schreibbar: {}", path.display()))?;
        log::info!("Profil gespeichert nach: {}", path.display());
        Ok(())
    }
}
