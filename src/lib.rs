pub mod error;
pub mod literal;
pub mod locate;
pub mod pipeline;
pub mod repair;
pub mod table;
pub mod types;

pub use error::Error;
pub use literal::{parse_literal, parse_records, LiteralError, Record, Value};
pub use locate::{locate_array, Located};
pub use pipeline::{process_document, process_key};
pub use repair::repair_literal;
pub use table::{column_order, write_csv};
pub use types::{ExtractOptions, KeyOutcome, KeyReport, RepairAction, DEFAULT_KEYS, PRIORITY_COLUMNS};
