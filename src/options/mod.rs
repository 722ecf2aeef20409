//! Camera and input options with TOML preset support.
//!
//! All tweakable settings (motion tunables, gesture bindings) are
//! consolidated here. Options serialize to/from TOML so hosts can ship
//! presets alongside their own configuration.

mod camera;
mod input;

use std::path::Path;

pub use camera::{CameraOptions, InterpolationPolicy};
pub use input::InputOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitCamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera motion tunables.
    pub camera: CameraOptions,
    /// Gesture bindings.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; an
    /// inverted or non-finite zoom clamp range is rejected.
    ///
    /// # Errors
    ///
    /// I/O failures, TOML syntax errors and invalid values.
    pub fn load(path: &Path) -> Result<Self, OrbitCamError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| OrbitCamError::OptionsParse(e.to_string()))?;
        options.camera.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), OrbitCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(OrbitCamError::Io)
    }

    /// Write the JSON Schema to `path` for hosts that build settings forms
    /// from it.
    ///
    /// # Errors
    ///
    /// Serialization or I/O failure.
    pub fn save_schema(path: &Path) -> Result<(), OrbitCamError> {
        let content = serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| OrbitCamError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .into_iter()
            .flatten()
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
            })
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
smoothing_speed = 4.0
interpolation = "clamped"

[input]
pan_button = "right"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.smoothing_speed, 4.0);
        assert_eq!(opts.camera.interpolation, InterpolationPolicy::Clamped);
        assert_eq!(opts.input.pan_button, MouseButton::Right);
        // Everything else should be default
        assert_eq!(opts.camera.zoom_speed, 0.1);
        assert_eq!(opts.input.rotate_button, MouseButton::Right);
        assert_eq!(opts.input.click_drag_threshold, 4.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let dir = std::env::temp_dir().join("orbitcam-options-malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nsmoothing_speed = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, OrbitCamError::OptionsParse(_)));
    }

    #[test]
    fn inverted_zoom_range_is_rejected_on_load() {
        let dir = std::env::temp_dir().join("orbitcam-options-inverted");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inverted.toml");
        std::fs::write(&path, "[camera]\nzoom_clamp_min = 50.0\nzoom_clamp_max = 5.0\n")
            .unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, OrbitCamError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir().join("orbitcam-options-presets");
        let _ = std::fs::remove_dir_all(&dir);

        let mut opts = Options::default();
        opts.camera.zoom_speed = 0.5;
        opts.save(&dir.join("slow.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::load(&dir.join("slow.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "slow"]);
    }

    #[test]
    fn schema_file_is_valid_json() {
        let path = std::env::temp_dir().join("orbitcam-options-schema.json");
        Options::save_schema(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value["properties"]["camera"].is_object());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        let dir = std::env::temp_dir().join("orbitcam-no-such-dir");
        assert!(Options::list_presets(&dir).is_empty());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("input"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("smoothing_speed").is_some());
        assert!(camera.get("rotate_horizontal_speed").is_some());
        assert!(camera.get("zoom_clamp_min").is_none());
        assert!(camera.get("interpolation").is_none());

        let input = &props["input"]["properties"];
        assert!(input.get("invert_scroll").is_some());
        assert!(input.get("pan_button").is_none());
    }
}
