use crate::{error::AppError, pipeline::types::GameStateSnapshot};

/// Pulls game state from whatever drives the emulator.
///
/// Every field of a returned snapshot must come from the same frame.
pub trait GameStateReader {
    /// `Ok(None)` once the source has no more frames.
    fn read_snapshot(&mut self) -> Result<Option<GameStateSnapshot>, AppError>;
}
