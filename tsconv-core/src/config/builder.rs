// ============================================================================
// tsconv-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ReadConfig
//
// This module implements the builder pattern for the ReadConfig structure,
// providing a fluent API for creating and configuring ReadConfig instances.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for ReadConfig

// ---- Internal crate imports ----
use super::{ReadConfig, SourceFormat};

/// Builder for creating ReadConfig instances.
///
/// # Examples
///
/// ```rust
/// use tsconv_core::config::{ReadConfigBuilder, SourceFormat};
///
/// let config = ReadConfigBuilder::new()
///     .source(SourceFormat::Edl)
///     .build();
/// assert_eq!(config.source, SourceFormat::Edl);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadConfigBuilder {
    source: SourceFormat,
    use_stream_markers: bool,
    include_date_time: bool,
}

impl ReadConfigBuilder {
    /// Creates a new ReadConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input format.
    #[must_use]
    pub fn source(mut self, source: SourceFormat) -> Self {
        self.source = source;
        self
    }

    /// Selects stream markers instead of record markers (InfoWriter only).
    #[must_use]
    pub fn use_stream_markers(mut self, use_stream_markers: bool) -> Self {
        self.use_stream_markers = use_stream_markers;
        self
    }

    /// Appends the event date and time to marker names (InfoWriter only).
    #[must_use]
    pub fn include_date_time(mut self, include_date_time: bool) -> Self {
        self.include_date_time = include_date_time;
        self
    }

    /// Builds the ReadConfig instance.
    pub fn build(self) -> ReadConfig {
        ReadConfig {
            source: self.source,
            use_stream_markers: self.use_stream_markers,
            include_date_time: self.include_date_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_config_default() {
        assert_eq!(ReadConfigBuilder::new().build(), ReadConfig::default());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = ReadConfigBuilder::new()
            .source(SourceFormat::InfoWriter)
            .use_stream_markers(true)
            .include_date_time(true)
            .build();
        assert!(config.use_stream_markers);
        assert!(config.include_date_time);
    }
}
