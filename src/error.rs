use std::io;

use thiserror::Error;

use crate::literal::LiteralError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("literal error: {0}")]
    Literal(#[from] LiteralError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
