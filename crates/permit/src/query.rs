#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a permit number.")]
    Empty,
}

/// A trimmed, non-empty permit number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitQuery(String);

impl PermitQuery {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{PermitQuery, ValidationError};

    #[test]
    fn trims_surrounding_whitespace() {
        let query = PermitQuery::parse("  ILP/2025/0042 \n").expect("valid");
        assert_eq!(query.as_str(), "ILP/2025/0042");
    }

    #[test]
    fn blank_input_is_rejected_with_literal_message() {
        for raw in ["", "   ", "\t\n"] {
            assert_eq!(PermitQuery::parse(raw), Err(ValidationError::Empty));
        }
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please enter a permit number."
        );
    }
}
