//! Centralized navigation options with TOML preset support.
//!
//! Trackball, fly camera, and key-binding settings are consolidated here.
//! Options serialize to/from TOML so navigation presets can live next to
//! an application's other configuration.

mod fly;
mod trackball;

use std::path::Path;

pub use fly::FlyOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use trackball::{TrackballOptions, DEFAULT_ZOOM_STEP};

use crate::error::NavError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[trackball]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Trackball controller parameters.
    pub trackball: TrackballOptions,
    /// Fly camera parameters.
    pub fly: FlyOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("Loaded navigation options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)?;
        log::info!("Saved navigation options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<(), NavError> {
        let tb = &self.trackball;
        if !(tb.radius > 0.0 && tb.radius.is_finite()) {
            return Err(invalid(format!(
                "trackball.radius must be positive, got {}",
                tb.radius
            )));
        }
        if !(tb.zoom_step > 0.0 && tb.zoom_step.is_finite()) {
            return Err(invalid(format!(
                "trackball.zoom_step must be positive, got {}",
                tb.zoom_step
            )));
        }
        if !(tb.znear > 0.0 && tb.zfar > tb.znear) {
            return Err(invalid(format!(
                "trackball clip planes must satisfy 0 < znear < zfar, got {} / {}",
                tb.znear, tb.zfar
            )));
        }
        if !(tb.fovy > 0.0 && tb.fovy < 180.0) {
            return Err(invalid(format!(
                "trackball.fovy must be in (0, 180), got {}",
                tb.fovy
            )));
        }
        if !(self.fly.speed > 0.0 && self.fly.speed.is_finite()) {
            return Err(invalid(format!(
                "fly.speed must be positive, got {}",
                self.fly.speed
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> NavError {
    log::error!("Rejected navigation options: {msg}");
    NavError::InvalidOptions(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCommandTag;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("trackball-options-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[trackball]
radius = 0.6
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.trackball.radius, 0.6);
        // Everything else should be default
        assert_eq!(opts.trackball.zoom_step, DEFAULT_ZOOM_STEP);
        assert_eq!(opts.trackball.default_translation, [0.0, 0.0, -4.0]);
        assert_eq!(opts.fly, FlyOptions::default());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyCommandTag::Reset));
        assert_eq!(
            opts.keybindings.lookup("Minus"),
            Some(KeyCommandTag::ZoomOut)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_parse_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
Home = "reset"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Home"), Some(KeyCommandTag::Reset));
        assert_eq!(opts.keybindings.lookup("KeyR"), None);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut opts = Options::default();
        assert!(opts.validate().is_ok());

        opts.trackball.radius = 0.0;
        assert!(matches!(opts.validate(), Err(NavError::InvalidOptions(_))));

        opts = Options::default();
        opts.trackball.znear = 10.0;
        opts.trackball.zfar = 1.0;
        assert!(opts.validate().is_err());

        opts = Options::default();
        opts.fly.speed = f32::NAN;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_then_load_preset() {
        let dir = temp_dir("save");
        let path = dir.join("orbit.toml");
        let mut opts = Options::default();
        opts.trackball.fovy = 60.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["orbit".to_owned()]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_parse_and_io_errors() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = temp_dir("errors");
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(NavError::Io(_))
        ));

        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[trackball\nradius = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(NavError::OptionsParse(_))
        ));

        std::fs::write(&path, "[trackball]\nradius = -1.0\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(NavError::InvalidOptions(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("trackball"));
        assert!(props.contains_key("fly"));
        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        let trackball = &props["trackball"]["properties"];
        assert!(trackball.get("radius").is_some());
        assert!(trackball.get("zoom_step").is_some());
        assert!(trackball.get("default_translation").is_none());
        assert!(trackball.get("znear").is_none());
    }
}
