use std::collections::HashSet;

use crate::config::CoordinateScope;
use crate::pipeline::types::MapId;

/// Visited tiles and maps for one episode.
///
/// Both queries record what they are asked about, so a tile or map is novel
/// exactly once until the memory is cleared.
#[derive(Debug, Clone, Default)]
pub struct ExplorationMemory {
    scope: CoordinateScope,
    current_map: Option<MapId>,
    visited_coordinates: HashSet<(Option<MapId>, i32, i32)>,
    visited_maps: HashSet<MapId>,
    resets: usize,
}

impl ExplorationMemory {
    pub fn new(scope: CoordinateScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Returns true the first time `(x, y)` is seen in the current coordinate scope.
    pub fn is_new_coordinate(&mut self, x: i32, y: i32) -> bool {
        let map = match self.scope {
            CoordinateScope::PerMap => None,
            CoordinateScope::Global => self.current_map,
        };
        self.visited_coordinates.insert((map, x, y))
    }

    /// Returns true the first time `map_id` is seen this episode.
    ///
    /// Moving to a different map than the previous call clears per-map
    /// coordinate memory, whether or not that map was visited before.
    pub fn is_new_map(&mut self, map_id: MapId) -> bool {
        if self.current_map != Some(map_id) {
            if self.scope == CoordinateScope::PerMap {
                self.visited_coordinates.clear();
            }
            self.current_map = Some(map_id);
        }
        self.visited_maps.insert(map_id)
    }

    pub fn reset(&mut self) {
        self.current_map = None;
        self.visited_coordinates.clear();
        self.visited_maps.clear();
        self.resets += 1;
    }

    /// Number of `reset()` calls over the memory's lifetime.
    pub fn reset_count(&self) -> usize {
        self.resets
    }

    pub fn visited_coordinate_count(&self) -> usize {
        self.visited_coordinates.len()
    }

    pub fn visited_map_count(&self) -> usize {
        self.visited_maps.len()
    }
}
