use std::path::Path;

use serde::{Serialize, Deserialize};

pub type Grid = Vec<Vec<u8>>;

/// One ARC puzzle document. Only the training inputs are modeled; the
/// `test` section and the training `output` grids are ignored on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleFile {
    pub train: Vec<TrainExample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainExample {
    pub input: Grid,
}

impl PuzzleFile {
    /// First training input grid, if the file carries any training pairs.
    pub fn first_input(self) -> Option<Grid> {
        self.train.into_iter().next().map(|ex| ex.input)
    }
}

/// Read and parse a puzzle file. A document without a `train` array, or
/// whose examples lack an `input` grid, is a parse error.
pub fn load_puzzle(path: &Path) -> anyhow::Result<PuzzleFile> {
    let content = std::fs::read_to_string(path)?;
    let puzzle: PuzzleFile = serde_json::from_str(&content)?;
    Ok(puzzle)
}

pub fn grid_dimensions(grid: &Grid) -> (usize, usize) {
    if grid.is_empty() { return (0, 0); }
    (grid.len(), grid[0].len())
}

/// Distinct non-zero colors in ascending order.
pub fn unique_colors(grid: &Grid) -> Vec<u8> {
    let mut seen = [false; 256];
    let mut colors = Vec::new();
    for row in grid {
        for &c in row {
            if c != 0 && !seen[c as usize] {
                seen[c as usize] = true;
                colors.push(c);
            }
        }
    }
    colors.sort();
    colors
}

pub fn grid_to_string(grid: &Grid) -> String {
    grid.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
