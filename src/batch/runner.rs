// Batch driver for largest-object extraction.
//
// Walks a directory of ARC puzzle files, labels the first training input
// of each, and accumulates one output record per successfully processed
// file. A failing file is logged and skipped; the batch keeps going.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::core::error::ScanError;
use crate::perception::grid::{grid_dimensions, grid_to_string, load_puzzle, unique_colors};
use crate::perception::objects::largest_object;
use super::output::OutputRecord;

#[derive(Debug)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub elapsed_ms: u64,
    pub by_cause: Vec<(String, usize)>,
    pub records: Vec<OutputRecord>,
}

/// List the `.json` puzzle files in `dir`, sorted by file name for a
/// deterministic batch order.
pub fn discover_puzzles(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Err(ScanError::MissingDataDir(dir.to_path_buf())),
    };

    let mut entries: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    if entries.is_empty() {
        return Err(ScanError::NoPuzzleFiles(dir.to_path_buf()));
    }
    Ok(entries.iter().map(|e| e.path()).collect())
}

/// Process each file in order: read, parse, label, package. Skips are
/// counted per cause for the summary.
pub fn run_batch(files: &[PathBuf]) -> BatchReport {
    let start = Instant::now();
    let mut records = Vec::new();
    let mut skip_counts: FxHashMap<&'static str, usize> = FxHashMap::default();

    for (i, path) in files.iter().enumerate() {
        println!("\n=== file {}/{}: {} ===", i + 1, files.len(), path.display());

        match process_file(path) {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!("skipping '{}': {:#}", path.display(), e);
                *skip_counts.entry(skip_cause(&e)).or_default() += 1;
            }
        }
    }

    let mut by_cause: Vec<(String, usize)> = skip_counts
        .into_iter()
        .map(|(cause, n)| (cause.to_string(), n))
        .collect();
    by_cause.sort_by(|a, b| b.1.cmp(&a.1));

    BatchReport {
        processed: records.len(),
        skipped: files.len() - records.len(),
        elapsed_ms: start.elapsed().as_millis() as u64,
        by_cause,
        records,
    }
}

fn process_file(path: &Path) -> anyhow::Result<OutputRecord> {
    let grid = load_puzzle(path)?
        .first_input()
        .ok_or_else(|| ScanError::EmptyTrain(path.display().to_string()))?;

    let (rows, cols) = grid_dimensions(&grid);
    println!("{}x{} grid, {} colors", rows, cols, unique_colors(&grid).len());
    println!("{}", grid_to_string(&grid));

    match largest_object(&grid) {
        Some(obj) => {
            let (_, _, h, w) = obj.bounding_box();
            println!("largest object: color {}, {} cells, {}x{} box", obj.color, obj.area(), h, w);
            let coordinates = obj.cells.iter().map(|&(r, c)| [r, c]).collect();
            Ok(OutputRecord::new(path, grid, coordinates))
        }
        None => {
            println!("no foreground cells");
            Ok(OutputRecord::new(path, grid, Vec::new()))
        }
    }
}

/// Coarse skip category for summary counting.
fn skip_cause(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<std::io::Error>().is_some() {
        "read"
    } else if err.downcast_ref::<serde_json::Error>().is_some() {
        "parse"
    } else if err.downcast_ref::<ScanError>().is_some() {
        "shape"
    } else {
        "other"
    }
}

impl BatchReport {
    pub fn print_summary(&self) {
        println!("\n=== Batch results ===");
        println!("Files: {} | Processed: {} | Skipped: {}",
            self.processed + self.skipped, self.processed, self.skipped);
        println!("Time: {}ms", self.elapsed_ms);
        if !self.by_cause.is_empty() {
            println!("Skips by cause:");
            for (cause, count) in &self.by_cause {
                println!("  {}: {}", cause, count);
            }
        }
    }
}
