use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetError>;

/// Everything that can go wrong between parsing plate lines and writing the
/// finished Sample Sheet. All of these stem from invalid input, so none are
/// retried; the caller reports and aborts (or re-prompts).
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("well number {0} is outside the 96-well plate (expected 1-96)")]
    UnknownWell(usize),

    #[error("well label '{0}' is not a valid plate coordinate (expected A01-H12)")]
    UnknownWellLabel(String),

    #[error("invalid well range {start}-{end} (expected 1 <= start <= end <= 96)")]
    InvalidRange { start: usize, end: usize },

    #[error("duplicate plate name '{0}': plate names must be unique across a run")]
    DuplicatePlateName(String),

    #[error("plate name '{0}' contains an underscore, which Illumina reserves in sample names")]
    InvalidPlateName(String),

    #[error("plate '{0}' has no i5 index, required for a paired-end run")]
    MissingI5(String),

    #[error("Workflow B is dual-indexed; single-end runs must use Workflow A")]
    WorkflowReadTypeMismatch,

    #[error("could not parse '{line}': {reason}")]
    Parse { line: String, reason: String },

    #[error("output file '{0}' already exists, refusing to overwrite")]
    OutputExists(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl SheetError {
    pub fn parse(line: &str, reason: impl Into<String>) -> Self {
        SheetError::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
