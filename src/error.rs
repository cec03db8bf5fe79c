use thiserror::Error;

/// Why a single line could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Reading block is not closed in key {0:?}")]
    MalformedKey(String),
    #[error("Annotation group is not closed in gloss {0:?}")]
    MalformedGloss(String),
    #[error("Expected a key, at least one gloss and a sequence identifier")]
    MissingFields,
}

/// A [`SyntaxError`] together with the raw line it was found in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (in line {line:?})")]
pub struct LineError {
    pub line: String,
    #[source]
    pub kind: SyntaxError,
}

impl LineError {
    pub(crate) fn new(line: &str, kind: SyntaxError) -> Self {
        Self {
            line: line.to_owned(),
            kind,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown annotation code: {0:?}")]
pub struct UnknownCode(pub String);

#[derive(Error, Debug)]
pub enum EdictError {
    #[error("Parse error at line {number}: {error}")]
    LineParseFailure {
        number: usize,
        #[source]
        error: LineError,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),
    #[error("The dictionary file contains no entries.")]
    NoEntries,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),
}
