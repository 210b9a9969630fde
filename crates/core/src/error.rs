use std::fmt;

/// Malformed caller input. Detected before any fitting happens.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Position of the offending record in the request, when the error is about a record.
    pub index: Option<usize>,
    pub field: &'static str,
    pub detail: String,
}

impl ValidationError {
    pub fn new(field: &'static str, detail: impl Into<String>) -> Self {
        Self {
            index: None,
            field,
            detail: detail.into(),
        }
    }

    pub fn at(index: usize, field: &'static str, detail: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            field,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "invalid {} at historical_data[{i}]: {}", self.field, self.detail),
            None => write!(f, "invalid {}: {}", self.field, self.detail),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Numeric or calendar failure while producing a forecast from validated input.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationError {
    pub detail: String,
}

impl ComputationError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "forecast computation failed: {}", self.detail)
    }
}

impl std::error::Error for ComputationError {}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    Validation(ValidationError),
    Computation(ComputationError),
}

impl AnalyticsError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => e.fmt(f),
            Self::Computation(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for AnalyticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Computation(e) => Some(e),
        }
    }
}

impl From<ValidationError> for AnalyticsError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ComputationError> for AnalyticsError {
    fn from(e: ComputationError) -> Self {
        Self::Computation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_record_and_field() {
        let e = ValidationError::at(2, "date", "expected YYYY-MM-DD (got \"soon\")");
        assert_eq!(
            e.to_string(),
            "invalid date at historical_data[2]: expected YYYY-MM-DD (got \"soon\")"
        );

        let e = AnalyticsError::from(ValidationError::new("days_to_predict", "must be <= 30"));
        assert!(e.is_validation());
        assert_eq!(e.to_string(), "invalid days_to_predict: must be <= 30");
    }

    #[test]
    fn converts_into_anyhow() {
        let e: anyhow::Error = AnalyticsError::from(ComputationError::new("date out of range")).into();
        assert!(e.downcast_ref::<AnalyticsError>().is_some());
        assert_eq!(e.to_string(), "forecast computation failed: date out of range");
    }
}
