pub mod grid;
pub mod objects;
