use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::literal::parse_records;
use crate::locate::locate_array;
use crate::repair::repair_literal;
use crate::table::{column_order, write_csv};
use crate::types::{ExtractOptions, KeyOutcome, KeyReport};

/// Runs the locate → repair → parse → write pipeline for every requested
/// key. Keys are processed fully independently; a failure on one never
/// aborts the others.
pub fn process_document(doc: &str, options: &ExtractOptions) -> Vec<KeyReport> {
    options
        .keys
        .iter()
        .map(|key| {
            let filename = format!("{key}.csv");
            let outcome = process_key(doc, key, &filename, options);
            KeyReport {
                key: key.clone(),
                filename,
                outcome,
            }
        })
        .collect()
}

pub fn process_key(doc: &str, key: &str, filename: &str, options: &ExtractOptions) -> KeyOutcome {
    let located = match locate_array(doc, key) {
        Some(l) => l,
        None => return KeyOutcome::NotFound,
    };
    debug!(key, start = located.span.0, end = located.span.1, "array literal located");

    let (repaired, repairs) = repair_literal(&located.text);
    for action in &repairs {
        debug!(op = %action.op, at = ?action.at, note = ?action.note, "repair applied");
    }

    let records = match parse_records(&repaired) {
        Ok(records) => records,
        Err(e) => {
            let dump = if options.debug_dump {
                persist_dump(&options.out_dir, filename, &repaired)
            } else {
                None
            };
            return KeyOutcome::ParseFailed {
                message: e.to_string(),
                dump,
            };
        }
    };

    let columns = column_order(&records, &options.priority_columns);
    debug!(key, rows = records.len(), columns = ?columns, "writing csv");
    let path = options.out_dir.join(filename);
    match write_csv(&path, &records, &columns) {
        Ok(rows) => KeyOutcome::Written { path, rows },
        Err(e) => KeyOutcome::WriteFailed { message: e.to_string() },
    }
}

fn persist_dump(out_dir: &Path, filename: &str, repaired: &str) -> Option<PathBuf> {
    let path = out_dir.join(format!("debug_{filename}.txt"));
    match fs::write(&path, repaired) {
        Ok(()) => Some(path),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not persist diagnostic dump");
            None
        }
    }
}
