use rulediff_core_types::RunId;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and process exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,

    // Decoding
    /// Document bytes are not UTF-8 JSON, the root is not an object, or the
    /// rule collection is not an array
    InvalidDocument,
    /// A single rule record could not be decoded (recoverable: the record is skipped)
    InvalidRecord,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::InvalidRecord => "ERR_INVALID_RECORD",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, file path, record index, run id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    index: Option<usize>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            index: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add record index context
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the record index context, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the run ID context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for rulediff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleDiffError {
    // ===== Document Errors =====
    /// Document bytes are not valid UTF-8
    #[error("Document is not valid UTF-8: {reason}")]
    DocumentNotUtf8 { reason: String },

    /// Document text is not valid JSON
    #[error("Document is not valid JSON: {reason}")]
    DocumentNotJson { reason: String },

    /// Document root is not a JSON object
    #[error("Document root must be a JSON object")]
    DocumentRootNotObject,

    /// The rule collection key exists but does not hold an array
    #[error("Rule collection `{key}` must be an array")]
    CollectionNotArray { key: String },

    // ===== Record Errors =====
    /// A single rule record failed to decode
    #[error("Failed to decode rule at index {index}: {reason}")]
    RecordDecode { index: usize, reason: String },

    // ===== Configuration Errors =====
    /// Configuration file could not be read
    #[error("Failed to read config {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    /// Configuration text is not valid TOML for the config schema
    #[error("Invalid configuration: {reason}")]
    ConfigParse { reason: String },

    // ===== Report Errors =====
    /// The report target could not be written
    #[error("Failed to write report: {reason}")]
    ReportWrite { path: Option<String>, reason: String },

    /// The diff could not be serialized
    #[error("Failed to serialize diff: {reason}")]
    Serialization { reason: String },
}

impl From<RuleDiffError> for ExError {
    fn from(err: RuleDiffError) -> Self {
        let message = err.to_string();
        match err {
            RuleDiffError::DocumentNotUtf8 { .. }
            | RuleDiffError::DocumentNotJson { .. }
            | RuleDiffError::DocumentRootNotObject
            | RuleDiffError::CollectionNotArray { .. } => {
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_op("decode_rules")
                    .with_message(message)
            }

            RuleDiffError::RecordDecode { index, .. } => ExError::new(ExErrorKind::InvalidRecord)
                .with_op("decode_rules")
                .with_index(index)
                .with_message(message),

            RuleDiffError::ConfigRead { path, .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_path(path)
                .with_message(message),

            RuleDiffError::ConfigParse { .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(message),

            RuleDiffError::ReportWrite { path, .. } => {
                let ex = ExError::new(ExErrorKind::Io)
                    .with_op("write_report")
                    .with_message(message);
                match path {
                    Some(p) => ex.with_path(p),
                    None => ex,
                }
            }

            RuleDiffError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("render_json")
                .with_message(message),
        }
    }
}
