use super::annotation::DEFAULT_ANNOTATION_PREFIX;
use super::criteria::Criteria;
use super::selection::SelectionMode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid annotation prefix '{0}': use letters, digits and underscores only")]
    InvalidAnnotationPrefix(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub annotation_prefix: String,
    pub selection_mode: SelectionMode,
    pub criteria: Criteria,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            annotation_prefix: DEFAULT_ANNOTATION_PREFIX.to_string(),
            selection_mode: SelectionMode::default(),
            criteria: Criteria::default(),
        }
    }
}

#[derive(Default)]
pub struct SessionConfigBuilder {
    annotation_prefix: Option<String>,
    selection_mode: Option<SelectionMode>,
    criteria: Option<Criteria>,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn annotation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.annotation_prefix = Some(prefix.into());
        self
    }
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = Some(mode);
        self
    }
    pub fn criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = Some(criteria);
        self
    }

    /// Builds the configuration; unset values take their defaults.
    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        let defaults = SessionConfig::default();
        let annotation_prefix = self
            .annotation_prefix
            .unwrap_or(defaults.annotation_prefix);
        if annotation_prefix.is_empty()
            || !annotation_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::InvalidAnnotationPrefix(annotation_prefix));
        }

        Ok(SessionConfig {
            annotation_prefix,
            selection_mode: self.selection_mode.unwrap_or(defaults.selection_mode),
            criteria: self.criteria.unwrap_or(defaults.criteria),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_defaults() {
        let config = SessionConfigBuilder::new().build().unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.annotation_prefix, "popmusic_");
        assert_eq!(config.selection_mode, SelectionMode::Conservative);
        assert_eq!(config.criteria.to_string(), "cp");
    }

    #[test]
    fn builder_overrides_each_value() {
        let config = SessionConfigBuilder::new()
            .annotation_prefix("pm_")
            .selection_mode(SelectionMode::All)
            .criteria(Criteria::interactive())
            .build()
            .unwrap();
        assert_eq!(config.annotation_prefix, "pm_");
        assert_eq!(config.selection_mode, SelectionMode::All);
        assert_eq!(config.criteria, Criteria::interactive());
    }

    #[test]
    fn builder_rejects_invalid_prefixes() {
        for prefix in ["", "pop music", "pm-"] {
            assert_eq!(
                SessionConfigBuilder::new().annotation_prefix(prefix).build(),
                Err(ConfigError::InvalidAnnotationPrefix(prefix.to_string()))
            );
        }
    }
}
