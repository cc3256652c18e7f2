pub mod json_lines_reader;
pub mod snapshot_reader;

pub use json_lines_reader::JsonLinesSnapshotReader;
pub use snapshot_reader::GameStateReader;
