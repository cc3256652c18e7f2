use std::io::Write;

use crate::{
    config::{Configuration, CoordinateScope},
    error::AppError,
    intake::snapshot::GameStateReader,
    pipeline::services::learning::{EpisodeSession, SessionStats},
};

/// Drives one session over a snapshot stream and writes every outcome as a JSON line.
pub struct Coordinator {
    configuration: Configuration,
}

impl Coordinator {
    fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Returns `Ok(None)` when the stream held no snapshot at all.
    pub fn run<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<Option<SessionStats>, AppError>
    where
        R: GameStateReader,
        W: Write,
    {
        let Some(initial) = reader.read_snapshot()? else {
            tracing::warn!("Snapshot stream was empty");
            return Ok(None);
        };
        let mut session = EpisodeSession::new(&self.configuration, initial)?;

        while let Some(snapshot) = reader.read_snapshot()? {
            let outcome = session.step(snapshot)?;
            serde_json::to_writer(&mut *writer, &outcome)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        let stats = session.get_stats();
        tracing::info!(
            "Replay finished: {} steps, {} episodes completed",
            stats.total_steps,
            stats.episodes_completed
        );
        Ok(Some(stats))
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    // Sets the step budget, this will override the default configuration.
    pub fn max_steps(mut self, max_steps: u32) -> Self {
        self.configuration.episode.max_steps = max_steps;
        self
    }

    // Sets how far coordinate novelty reaches, this will override the default configuration.
    pub fn coordinate_scope(mut self, coordinate_scope: CoordinateScope) -> Self {
        self.configuration.episode.coordinate_scope = coordinate_scope;
        self
    }

    pub fn build(self) -> Result<Coordinator, AppError> {
        self.configuration.validate()?;
        Ok(Coordinator::new(self.configuration))
    }
}
