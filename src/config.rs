pub(crate) const DEFAULT_CHANGE_EVENT_NAME: &str = "input";
pub(crate) const DEFAULT_NUMERIC_TYPE_PATTERN: &str = "^(number|range)";
pub(crate) const DEFAULT_DATE_TYPE_PATTERN: &str = "^(date|month)";
pub(crate) const DEFAULT_DIGEST_LIMIT: usize = 10;

/// Settings fixed when a control is attached.
///
/// The type patterns decide the control's [`Category`](crate::Category) once,
/// so changing them later has no effect on an existing binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustConfig {
    pub change_event_name: String,
    pub numeric_type_pattern: String,
    pub date_type_pattern: String,
    pub digest_limit: usize,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            change_event_name: DEFAULT_CHANGE_EVENT_NAME.to_string(),
            numeric_type_pattern: DEFAULT_NUMERIC_TYPE_PATTERN.to_string(),
            date_type_pattern: DEFAULT_DATE_TYPE_PATTERN.to_string(),
            digest_limit: DEFAULT_DIGEST_LIMIT,
        }
    }
}

impl AdjustConfig {
    pub fn with_change_event_name(mut self, name: &str) -> Self {
        self.change_event_name = name.to_string();
        self
    }

    pub fn with_numeric_type_pattern(mut self, pattern: &str) -> Self {
        self.numeric_type_pattern = pattern.to_string();
        self
    }

    pub fn with_date_type_pattern(mut self, pattern: &str) -> Self {
        self.date_type_pattern = pattern.to_string();
        self
    }

    pub fn with_digest_limit(mut self, limit: usize) -> Self {
        self.digest_limit = limit;
        self
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.digest_limit == 0 {
            return Err(crate::Error::InvalidConfig(
                "digest_limit requires at least 1 pass".into(),
            ));
        }
        if self.change_event_name.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "change_event_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
