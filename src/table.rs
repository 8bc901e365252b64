use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Error;
use crate::literal::{Record, Value};

/// Column order for a set of heterogeneous records: the union of all keys
/// sorted lexicographically, then each priority name (taken in reverse
/// priority order) moved to the front. Net effect: priority names in their
/// declared order, remaining columns alphabetical. Every key present in any
/// record appears exactly once.
pub fn column_order(records: &[Record], priority: &[String]) -> Vec<String> {
    let keys: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.iter().map(|(k, _)| k.as_str()))
        .collect();
    let mut columns: Vec<String> = keys.into_iter().map(str::to_string).collect();
    for name in priority.iter().rev() {
        if let Some(pos) = columns.iter().position(|c| c == name) {
            let col = columns.remove(pos);
            columns.insert(0, col);
        }
    }
    columns
}

/// Scalars render in canonical form, null renders empty, and nested
/// arrays/objects fall back to compact literal text.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::NumberI64(n) => n.to_string(),
        Value::NumberU64(n) => n.to_string(),
        Value::NumberF64(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_compact_string(),
    }
}

// Duplicate keys in a source record keep their last value.
fn field<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    record.iter().rev().find(|(k, _)| k == name).map(|(_, v)| v)
}

/// Writes header plus one row per record. Records missing a column render an
/// empty cell. Creates or overwrites exactly one file; returns the number of
/// data rows written.
pub fn write_csv(path: &Path, records: &[Record], columns: &[String]) -> Result<usize, Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(columns)?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| field(record, c).map(render_cell).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(records.len())
}
