//! Configuration file support for face-trigger.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/face-trigger/config.toml` (lowest priority)
//! - Project-local: `.face-trigger.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Smile evaluator settings.
    pub smile: EvaluatorConfig,
    /// Blink evaluator settings.
    pub blink: EvaluatorConfig,
    /// Lowered-brow evaluator settings.
    pub brow_down: EvaluatorConfig,
    /// Raised-brow evaluator settings.
    pub brow_up: EvaluatorConfig,
    /// Squint evaluator settings.
    pub squint: EvaluatorConfig,
    /// Pucker evaluator settings.
    pub mouth_pucker: EvaluatorConfig,
    /// Jaw-open evaluator settings.
    pub jaw_open: EvaluatorConfig,
    /// Jaw-left evaluator settings.
    pub jaw_left: EvaluatorConfig,
    /// Jaw-right evaluator settings.
    pub jaw_right: EvaluatorConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// Settings shared by every evaluator section.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Enable/disable the evaluator.
    pub enabled: Option<bool>,
    /// Activation threshold (0.0-1.0).
    pub threshold: Option<f32>,
}

impl EvaluatorConfig {
    fn merge(&mut self, other: Self) {
        self.enabled = other.enabled.or(self.enabled);
        self.threshold = other.threshold.or(self.threshold);
    }
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/face-trigger/config.toml`
    /// 2. Project-local: `.face-trigger.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Returns the section for an evaluator name.
    #[must_use]
    pub fn evaluator(&self, name: &str) -> Option<&EvaluatorConfig> {
        self.sections()
            .into_iter()
            .find(|(section, _)| *section == name)
            .map(|(_, config)| config)
    }

    fn sections(&self) -> [(&'static str, &EvaluatorConfig); 9] {
        [
            ("smile", &self.smile),
            ("blink", &self.blink),
            ("brow_down", &self.brow_down),
            ("brow_up", &self.brow_up),
            ("squint", &self.squint),
            ("mouth_pucker", &self.mouth_pucker),
            ("jaw_open", &self.jaw_open),
            ("jaw_left", &self.jaw_left),
            ("jaw_right", &self.jaw_right),
        ]
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        for (name, section) in self.sections() {
            if let Some(t) = section.threshold {
                if !(0.0..=1.0).contains(&t) {
                    return Err(format!("{name}.threshold must be 0.0-1.0, got {t}"));
                }
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!(
                    "output.format must be 'json' or 'jsonl', got '{f}'"
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.smile.merge(other.smile);
        self.blink.merge(other.blink);
        self.brow_down.merge(other.brow_down);
        self.brow_up.merge(other.brow_up);
        self.squint.merge(other.squint);
        self.mouth_pucker.merge(other.mouth_pucker);
        self.jaw_open.merge(other.jaw_open);
        self.jaw_left.merge(other.jaw_left);
        self.jaw_right.merge(other.jaw_right);

        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("face-trigger").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.face-trigger.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".face-trigger.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.smile.threshold.is_none());
        assert!(config.blink.enabled.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(config.jaw_open.enabled.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[smile]
threshold = 0.6

[blink]
enabled = true
threshold = 0.5

[squint]
enabled = false

[jaw_left]
threshold = 0.4

[output]
format = 'json'
pretty = true
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.smile.threshold, Some(0.6));
        assert_eq!(config.blink.enabled, Some(true));
        assert_eq!(config.blink.threshold, Some(0.5));
        assert_eq!(config.squint.enabled, Some(false));
        assert_eq!(config.jaw_left.threshold, Some(0.4));
        assert_eq!(config.output.format, Some("json".to_string()));
        assert_eq!(config.output.pretty, Some(true));
    }

    #[test]
    fn test_merge_configs() {
        let mut base: AppConfig = toml::from_str(
            r"
[smile]
threshold = 0.5

[blink]
threshold = 0.8
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[smile]
threshold = 0.75

[brow_up]
enabled = false
",
        )
        .expect("parse override");

        base.merge(override_config);

        assert_eq!(base.smile.threshold, Some(0.75));
        assert_eq!(base.blink.threshold, Some(0.8));
        assert_eq!(base.brow_up.enabled, Some(false));
    }

    #[test]
    fn test_merge_preserves_base_when_override_is_none() {
        let mut base: AppConfig = toml::from_str(
            r"
[jaw_open]
enabled = true
threshold = 0.9

[output]
format = 'json'
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[jaw_open]
threshold = 0.7
",
        )
        .expect("parse override");

        base.merge(override_config);

        assert_eq!(base.jaw_open.threshold, Some(0.7));
        assert_eq!(base.jaw_open.enabled, Some(true));
        assert_eq!(base.output.format, Some("json".to_string()));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str("[squint]\nthreshold = 0.6\n").expect("parse base");
        base.merge(AppConfig::default());
        assert_eq!(base.squint.threshold, Some(0.6));
    }

    #[test]
    fn test_evaluator_lookup() {
        let config: AppConfig =
            toml::from_str("[mouth_pucker]\nenabled = false\n").expect("parse config");

        assert_eq!(
            config.evaluator("mouth_pucker").and_then(|c| c.enabled),
            Some(false)
        );
        assert!(config.evaluator("frown").is_none());
    }

    #[test]
    fn test_sections_cover_stock_evaluators() {
        let config = AppConfig::default();
        for name in face_trigger_core::TriggerConfig::EVALUATOR_NAMES {
            assert!(config.evaluator(name).is_some(), "missing section {name}");
        }
    }

    // === Invalid TOML Graceful Fallback ===

    #[test]
    fn test_invalid_toml_syntax_handled() {
        let toml = r"
[smile
threshold = 0.5
";
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "invalid TOML should return error");
    }

    #[test]
    fn test_invalid_field_type_handled() {
        let toml = r#"
[blink]
threshold = "high"
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "type mismatch should return error");
    }

    // === Validation Tests ===

    #[test]
    fn test_validate_threshold_out_of_range() {
        let mut config = AppConfig::default();
        config.brow_down.threshold = Some(1.5);

        let result = config.validate();
        assert!(result.unwrap_err().contains("brow_down.threshold"));

        let mut config = AppConfig::default();
        config.jaw_right.threshold = Some(-0.1);
        assert!(config.validate().unwrap_err().contains("jaw_right.threshold"));
    }

    #[test]
    fn test_validate_output_format_invalid() {
        let mut config = AppConfig::default();
        config.output.format = Some("xml".to_string());

        let result = config.validate();
        assert!(result.unwrap_err().contains("output.format"));
    }

    #[test]
    fn test_validate_valid_config_passes() {
        let config: AppConfig = toml::from_str(
            r"
[smile]
threshold = 0.0

[blink]
threshold = 1.0

[output]
format = 'jsonl'
",
        )
        .expect("parse valid config");

        assert!(config.validate().is_ok());
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_find_config_in_parents() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".face-trigger.toml"), "").unwrap();

        let found = find_config_in_parents(&nested).unwrap();
        assert_eq!(found, root.path().join(".face-trigger.toml"));
    }
}
