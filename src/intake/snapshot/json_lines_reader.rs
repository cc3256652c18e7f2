use std::io::BufRead;

use crate::{
    error::AppError, intake::snapshot::GameStateReader, pipeline::types::GameStateSnapshot,
};

/// Reads one JSON snapshot per line, skipping blank lines.
pub struct JsonLinesSnapshotReader<R> {
    reader: R,
    line: String,
    line_number: usize,
}

impl<R: BufRead> JsonLinesSnapshotReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> GameStateReader for JsonLinesSnapshotReader<R> {
    fn read_snapshot(&mut self) -> Result<Option<GameStateSnapshot>, AppError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let snapshot = serde_json::from_str(trimmed).map_err(|e| {
                tracing::warn!("Malformed snapshot on line {}: {}", self.line_number, e);
                AppError::Json(e)
            })?;
            return Ok(Some(snapshot));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const A: &str = r#"{"location":{"map_id":0,"map_name":"Pallet Town","x":5,"y":5},"badges":0,"levels":[6],"xp":[10]}"#;
    const B: &str = r#"{"location":{"map_id":0,"map_name":"Pallet Town","x":6,"y":5},"badges":0,"levels":[6],"xp":[30],"on_grass":true}"#;

    #[test]
    fn test_reads_snapshots_until_eof() {
        let input = format!("{}\n\n{}\n", A, B);
        let mut reader = JsonLinesSnapshotReader::new(Cursor::new(input));

        let first = reader.read_snapshot().unwrap().expect("first snapshot");
        assert_eq!(first.location.x, 5);
        let second = reader.read_snapshot().unwrap().expect("second snapshot");
        assert!(second.on_grass);
        assert_eq!(reader.line_number(), 3);
        assert!(reader.read_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = JsonLinesSnapshotReader::new(Cursor::new(A.to_string()));
        assert!(reader.read_snapshot().unwrap().is_some());
        assert!(reader.read_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let mut reader = JsonLinesSnapshotReader::new(Cursor::new("{not json}\n".to_string()));
        assert!(matches!(reader.read_snapshot(), Err(AppError::Json(_))));
    }
}
