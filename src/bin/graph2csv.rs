use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use memmap2::{Mmap, MmapOptions};
use tracing_subscriber::EnvFilter;

use graph2csv::types::{ExtractOptions, KeyOutcome};

const FALLBACK_INPUT: &str = "index.html";

#[derive(Parser, Debug)]
#[command(version, about = "Extract embedded nodes/links array literals from an HTML document into CSV files")]
struct Cli {
    /// Input document; `-` reads stdin. Defaults to ./index.html when omitted.
    input: Option<PathBuf>,

    /// Directory the CSV files and diagnostic dumps are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Read the input with a plain read instead of a memory map.
    #[arg(long)]
    no_mmap: bool,

    /// Skip writing debug_<name>.txt dumps on parse failures.
    #[arg(long)]
    no_debug_dump: bool,
}

enum InputData {
    Owned(Vec<u8>),
    Mapped { _file: File, mmap: Mmap },
}

impl InputData {
    fn as_bytes(&self) -> &[u8] {
        match self {
            InputData::Owned(v) => v.as_slice(),
            InputData::Mapped { mmap, .. } => mmap.as_ref(),
        }
    }
}

fn read_input(path: &Path, no_mmap: bool) -> io::Result<InputData> {
    if path.as_os_str() == "-" {
        let mut buf: Vec<u8> = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(InputData::Owned(buf));
    }
    if no_mmap {
        return Ok(InputData::Owned(std::fs::read(path)?));
    }
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(InputData::Owned(Vec::new()));
    }
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    Ok(InputData::Mapped { _file: file, mmap })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match &cli.input {
        Some(path) => path.clone(),
        None => {
            let fallback = PathBuf::from(FALLBACK_INPUT);
            if !fallback.exists() {
                println!("No {FALLBACK_INPUT} found in the current directory.");
                println!("Pass an input document explicitly: graph2csv <file.html>");
                return Ok(());
            }
            fallback
        }
    };

    let data = read_input(&input, cli.no_mmap)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let doc = String::from_utf8_lossy(data.as_bytes()).to_string();

    println!("Processing {}...", input.display());

    let options = ExtractOptions {
        out_dir: cli.out_dir,
        debug_dump: !cli.no_debug_dump,
        ..ExtractOptions::default()
    };

    for report in graph2csv::process_document(&doc, &options) {
        match &report.outcome {
            KeyOutcome::NotFound => {
                println!("No '{}: [...]' structure found", report.key);
            }
            KeyOutcome::Written { rows, .. } => {
                println!("'{}' array found. Extracting...", report.key);
                println!("  [OK] '{}' written ({rows} rows).", report.filename);
            }
            KeyOutcome::ParseFailed { message, dump } => {
                println!("'{}' array found. Extracting...", report.key);
                println!("  [ERROR] failed to process {}: {message}", report.filename);
                if let Some(dump) = dump {
                    println!("  (saved '{}' for inspection)", dump.display());
                }
            }
            KeyOutcome::WriteFailed { message } => {
                println!("'{}' array found. Extracting...", report.key);
                println!("  [ERROR] failed to write {}: {message}", report.filename);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_file_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        let uniq = std::process::id();
        p.push(format!("graph2csv_{uniq}_{name}"));
        p
    }

    #[test]
    fn mmap_and_read_match() {
        let path = tmp_file_path("input.html");
        let data = b"<html>nodes: [\n{ id: 1 }\n]</html>";
        std::fs::write(&path, data).expect("write temp file");

        let mapped = read_input(&path, false).expect("mmap read");
        let owned = read_input(&path, true).expect("fs read");
        assert_eq!(mapped.as_bytes(), owned.as_bytes());

        let _ = std::fs::remove_file(&path);
    }
}
