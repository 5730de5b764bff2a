//! Core configuration for scrollweave-core.

use serde::{Deserialize, Serialize};

/// Engine tuning knobs. Keep this minimal; expand as needed without
/// breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Quiet period after the last resize input before layout-dependent
    /// quantities (region distances, document metrics) are recomputed.
    pub resize_debounce_ms: f32,

    /// Visible-fraction threshold used when a registration does not
    /// specify one.
    pub default_threshold: f32,

    /// Pointer-relative overlay offset in pixels (x right, y up) so the
    /// overlay never occludes the hovered mark.
    pub overlay_offset: [f32; 2],

    /// Maximum events retained per tick before older ones are dropped.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250.0,
            default_threshold: 0.1,
            overlay_offset: [10.0, -10.0],
            max_events_per_tick: 1024,
        }
    }
}
