/// Error kinds surfaced by the scoring pipeline.
///
/// Numerical edge cases (rank deficiency, near-singular matrices) are not
/// errors; they show up as diagnostics on the solve report instead.
#[derive(Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Missing/unknown column, non-numeric cell, or a bad candidate key set.
    Schema(String),
    /// Shape mismatch between matrix, vector, and weight operands.
    Dimension(String),
    /// A zero-row or zero-column system.
    EmptyInput(String),
    /// All target values are identical, so R² is undefined.
    DegenerateTarget(String),
    /// File or serialization failure at the boundary.
    Io(String),
}

impl ModelError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    pub fn dimension(message: impl Into<String>) -> Self {
        Self::Dimension(message.into())
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput(message.into())
    }

    pub fn degenerate_target(message: impl Into<String>) -> Self {
        Self::DegenerateTarget(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Stable process exit code per kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 2,
            Self::Schema(_) => 3,
            Self::Dimension(_) => 4,
            Self::EmptyInput(_) => 5,
            Self::DegenerateTarget(_) => 6,
        }
    }

    fn kind_label(&self) -> &'static str {
        match self {
            Self::Schema(_) => "schema error",
            Self::Dimension(_) => "dimension error",
            Self::EmptyInput(_) => "empty input",
            Self::DegenerateTarget(_) => "degenerate target",
            Self::Io(_) => "io error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Schema(m)
            | Self::Dimension(m)
            | Self::EmptyInput(m)
            | Self::DegenerateTarget(m)
            | Self::Io(m) => m,
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind_label(), self.message())
    }
}

impl std::fmt::Debug for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelError")
            .field("kind", &self.kind_label())
            .field("message", &self.message())
            .finish()
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let errors = [
            ModelError::io("x"),
            ModelError::schema("x"),
            ModelError::dimension("x"),
            ModelError::empty_input("x"),
            ModelError::degenerate_target("x"),
        ];
        let mut codes: Vec<u8> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = ModelError::schema("target column 'x' not found");
        assert_eq!(format!("{err}"), "schema error: target column 'x' not found");
    }
}
