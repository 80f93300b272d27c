//! Encoder chain configuration types.

/// Log level used for parameter descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log descriptions at debug level.
    #[default]
    Debug,
    /// Log descriptions at info level.
    Info,
}

/// Configuration for an [`EncoderChain`](crate::EncoderChain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Whether parameter descriptions are logged at all.
    pub log_descriptions: bool,
    /// Level of the description events.
    pub log_level: LogLevel,
    /// Descriptions longer than this many characters are truncated.
    pub max_description_len: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            log_descriptions: true,
            log_level: LogLevel::Debug,
            max_description_len: 4096,
        }
    }
}

impl EncoderConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }
}

/// Builder for [`EncoderConfig`].
#[derive(Debug, Clone, Default)]
pub struct EncoderConfigBuilder {
    log_descriptions: Option<bool>,
    log_level: Option<LogLevel>,
    max_description_len: Option<usize>,
}

impl EncoderConfigBuilder {
    /// Set whether parameter descriptions are logged.
    #[must_use]
    pub const fn log_descriptions(mut self, enabled: bool) -> Self {
        self.log_descriptions = Some(enabled);
        self
    }

    /// Set the level of the description events.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the maximum logged description length, in characters.
    #[must_use]
    pub const fn max_description_len(mut self, len: usize) -> Self {
        self.max_description_len = Some(len);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> EncoderConfig {
        let defaults = EncoderConfig::default();
        EncoderConfig {
            log_descriptions: self.log_descriptions.unwrap_or(defaults.log_descriptions),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            max_description_len: self
                .max_description_len
                .unwrap_or(defaults.max_description_len),
        }
    }
}
