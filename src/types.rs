use std::path::PathBuf;

/// Column names promoted to the front of the CSV header, in this order,
/// when present in the data.
pub const PRIORITY_COLUMNS: [&str; 7] = ["id", "source", "target", "label", "group", "amount", "type"];

/// Array keys looked up in the document by default.
pub const DEFAULT_KEYS: [&str; 2] = ["nodes", "links"];

#[derive(Debug, Clone, PartialEq)]
pub struct RepairAction {
    pub op: String,
    pub at: Option<usize>,
    pub note: Option<String>,
}

impl RepairAction {
    pub fn new(op: &str) -> Self {
        Self {
            op: op.to_string(),
            at: None,
            note: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Keys to look up; each produces `<key>.csv` on success.
    pub keys: Vec<String>,
    /// Directory output files and diagnostic dumps are written to.
    pub out_dir: PathBuf,
    /// Explicit priority-column list handed to the writer.
    pub priority_columns: Vec<String>,
    /// Persist `debug_<name>.txt` with the repaired text on parse failure.
    pub debug_dump: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            keys: DEFAULT_KEYS.iter().map(|k| k.to_string()).collect(),
            out_dir: PathBuf::from("."),
            priority_columns: PRIORITY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            debug_dump: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// No `<key>: [ { ... ]` structure in the document; nothing written.
    NotFound,
    Written {
        path: PathBuf,
        rows: usize,
    },
    /// Evaluation failed or the result was not a non-empty array of records.
    /// `dump` names the persisted diagnostic file, when one was written.
    ParseFailed {
        message: String,
        dump: Option<PathBuf>,
    },
    WriteFailed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyReport {
    pub key: String,
    pub filename: String,
    pub outcome: KeyOutcome,
}
