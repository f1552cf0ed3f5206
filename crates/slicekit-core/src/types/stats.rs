use serde::{Deserialize, Serialize};

/// Aggregate print metrics re-derived from G-code text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintStats {
    /// Estimated print time (minutes).
    pub print_time: f64,
    /// Filament consumed (mm).
    pub filament_used: f64,
    pub layer_count: usize,
    pub total_moves: usize,
}

impl PrintStats {
    pub fn is_empty(&self) -> bool {
        self.total_moves == 0
    }
}
