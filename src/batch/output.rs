use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::perception::grid::Grid;

/// One line of the result stream. Declaration order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    pub source_file: String,
    pub input_puzzle: Grid,
    pub largest_object_coordinates: Vec<[usize; 2]>,
}

impl OutputRecord {
    pub fn new(source: &Path, input_puzzle: Grid, coordinates: Vec<[usize; 2]>) -> Self {
        Self {
            source_file: normalize_separators(source),
            input_puzzle,
            largest_object_coordinates: coordinates,
        }
    }
}

/// Records compare equal across platforms, so backslash separators are
/// rewritten to forward slashes.
fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Write one compact JSON record per line.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> anyhow::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_compact_in_declaration_order() {
        let record = OutputRecord::new(
            Path::new("data/training/t1.json"),
            vec![vec![0, 1], vec![1, 0]],
            vec![[0, 1], [1, 0]],
        );
        let line = serde_json::to_string(&record).unwrap();
        assert_eq!(
            line,
            r#"{"source_file":"data/training/t1.json","input_puzzle":[[0,1],[1,0]],"largest_object_coordinates":[[0,1],[1,0]]}"#
        );
    }

    #[test]
    fn backslash_paths_are_normalized() {
        let record = OutputRecord::new(Path::new(r"data\training\t1.json"), vec![], vec![]);
        assert_eq!(record.source_file, "data/training/t1.json");
    }

    #[test]
    fn writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let records = vec![
            OutputRecord::new(Path::new("a.json"), vec![vec![1]], vec![[0, 0]]),
            OutputRecord::new(Path::new("b.json"), vec![vec![0]], vec![]),
        ];

        write_records(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let parsed: OutputRecord = serde_json::from_str(line).unwrap();
            assert!(parsed.source_file.ends_with(".json"));
        }
        assert!(content.ends_with('\n'));
    }
}
