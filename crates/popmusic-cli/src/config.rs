use crate::error::{CliError, Result};
use popmusic::engine::config::{SessionConfig, SessionConfigBuilder};
use popmusic::engine::criteria::Criteria;
use popmusic::engine::selection::SelectionMode;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub annotation_prefix: Option<String>,
    pub selection_mode: Option<SelectionMode>,
    pub criteria: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSessionConfig {
    #[serde(rename = "annotation-prefix")]
    annotation_prefix: Option<String>,
    #[serde(rename = "selection-mode")]
    selection_mode: Option<SelectionMode>,
    criteria: Option<String>,
}

impl PartialSessionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(self, overrides: &CliOverrides) -> Result<SessionConfig> {
        let mut builder = SessionConfigBuilder::new();

        if let Some(prefix) = overrides
            .annotation_prefix
            .clone()
            .or(self.annotation_prefix)
        {
            builder = builder.annotation_prefix(prefix);
        }
        if let Some(mode) = overrides.selection_mode.or(self.selection_mode) {
            builder = builder.selection_mode(mode);
        }
        if let Some(codes) = overrides.criteria.as_ref().or(self.criteria.as_ref()) {
            builder = builder.criteria(codes.parse::<Criteria>()?);
        }

        let config = builder.build()?;
        debug!("Final session configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("popmusic.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_config_yields_defaults() {
        let config = PartialSessionConfig::load(None)
            .unwrap()
            .merge_with_cli(&CliOverrides::default())
            .unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn file_values_are_applied() {
        let (_dir, path) = write_config(
            r#"
annotation-prefix = "pm_"
selection-mode = "all"
criteria = "dhcp"
"#,
        );
        let config = PartialSessionConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&CliOverrides::default())
            .unwrap();
        assert_eq!(config.annotation_prefix, "pm_");
        assert_eq!(config.selection_mode, SelectionMode::All);
        assert_eq!(config.criteria.to_string(), "dhcp");
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let (_dir, path) = write_config("selection-mode = \"all\"\ncriteria = \"p\"\n");
        let overrides = CliOverrides {
            annotation_prefix: Some("x_".into()),
            selection_mode: Some(SelectionMode::Conservative),
            criteria: Some("chp".into()),
        };
        let config = PartialSessionConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&overrides)
            .unwrap();
        assert_eq!(config.annotation_prefix, "x_");
        assert_eq!(config.selection_mode, SelectionMode::Conservative);
        assert_eq!(config.criteria.to_string(), "chp");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let (_dir, path) = write_config("colour = \"red\"\n");
        assert!(matches!(
            PartialSessionConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn invalid_criteria_is_an_argument_error() {
        let (_dir, path) = write_config("criteria = \"xyz\"\n");
        let result = PartialSessionConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&CliOverrides::default());
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn invalid_prefix_is_a_config_error() {
        let overrides = CliOverrides {
            annotation_prefix: Some("bad prefix".into()),
            ..Default::default()
        };
        let result = PartialSessionConfig::default().merge_with_cli(&overrides);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
