use super::*;

/// Which clamping rules apply to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Numeric,
    Date,
    Other,
}

impl Category {
    /// `min`/`max` only apply to numeric and date kinds; every other kind is
    /// limited by `maxlength` instead.
    pub fn uses_range(self) -> bool {
        matches!(self, Self::Numeric | Self::Date)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Date => write!(f, "date"),
            Self::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeClassifier {
    numeric: TypePattern,
    date: TypePattern,
}

impl TypeClassifier {
    pub fn new(numeric_pattern: &str, date_pattern: &str) -> Result<Self> {
        let numeric = TypePattern::new(numeric_pattern)
            .map_err(|err| err.into_error(numeric_pattern))?;
        let date =
            TypePattern::new(date_pattern).map_err(|err| err.into_error(date_pattern))?;
        Ok(Self { numeric, date })
    }

    pub fn from_config(config: &AdjustConfig) -> Result<Self> {
        Self::new(&config.numeric_type_pattern, &config.date_type_pattern)
    }

    /// Numeric wins when a kind matches both families.
    pub fn classify(&self, kind: &str) -> Category {
        let kind = kind.trim();
        if self.numeric.is_match(kind) {
            Category::Numeric
        } else if self.date.is_match(kind) {
            Category::Date
        } else {
            Category::Other
        }
    }

    pub fn numeric_pattern(&self) -> &str {
        self.numeric.source()
    }

    pub fn date_pattern(&self) -> &str {
        self.date.source()
    }
}
