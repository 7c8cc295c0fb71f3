use super::*;

/// Compiled `kind` matcher backed by `fancy_regex`.
#[derive(Debug, Clone)]
pub(crate) struct TypePattern {
    source: String,
    backend: fancy_regex::Regex,
}

impl TypePattern {
    pub(crate) fn new(pattern: &str) -> std::result::Result<Self, TypePatternError> {
        let backend = fancy_regex::RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(TypePatternError::from)?;
        Ok(Self {
            source: pattern.to_string(),
            backend,
        })
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    /// Backtracking failures count as a non-match.
    pub(crate) fn is_match(&self, input: &str) -> bool {
        self.backend.is_match(input).unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypePatternError {
    message: String,
}

impl TypePatternError {
    pub(crate) fn into_error(self, pattern: &str) -> Error {
        Error::InvalidTypePattern {
            pattern: pattern.to_string(),
            message: self.message,
        }
    }
}

impl fmt::Display for TypePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for TypePatternError {}

impl From<fancy_regex::Error> for TypePatternError {
    fn from(value: fancy_regex::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}
