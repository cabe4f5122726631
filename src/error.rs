use thiserror::Error;

/// Exit status for file, parse, schema and lookup failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status when the chart version does not advance past the index.
pub const EXIT_GATE_FAILURE: i32 = 126;

/// Unified error type for chart version checks
#[derive(Error, Debug)]
pub enum ChartCheckError {
    #[error("Cannot read file '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse '{origin}': {message}")]
    Parse { origin: String, message: String },

    #[error("{0}")]
    Schema(String),

    #[error("{0}")]
    NotFound(String),

    #[error("The chart version ({candidate}) should be greater than the latest published version ({latest})")]
    GateFailure { candidate: String, latest: String },
}

/// Convenience type alias for Results in chart-version-check
pub type Result<T> = std::result::Result<T, ChartCheckError>;

impl ChartCheckError {
    /// Create a file error for the given path
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        ChartCheckError::File {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with the document origin
    pub fn parse(origin: impl Into<String>, message: impl Into<String>) -> Self {
        ChartCheckError::Parse {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Create a schema error with context
    pub fn schema(msg: impl Into<String>) -> Self {
        ChartCheckError::Schema(msg.into())
    }

    /// Create a not-found error with context
    pub fn not_found(msg: impl Into<String>) -> Self {
        ChartCheckError::NotFound(msg.into())
    }

    pub fn gate_failure(candidate: impl ToString, latest: impl ToString) -> Self {
        ChartCheckError::GateFailure {
            candidate: candidate.to_string(),
            latest: latest.to_string(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChartCheckError::GateFailure { .. } => EXIT_GATE_FAILURE,
            _ => EXIT_FAILURE,
        }
    }
}
