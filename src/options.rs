use serde::{Deserialize, Serialize};

/// Bin count used by histograms when none is given.
pub const DEFAULT_NUM_BINS: usize = 10;

/// Presentation settings shared by the render entry points.
///
/// Missing fields deserialize to their defaults, so a partial JSON object
/// such as `{"num_bins": 20}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Inner size of the plot window, in points.
    pub window_size: [f32; 2],
    /// Draw every channel's line under the channel average.
    pub show_channel_lines: bool,
    pub num_bins: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            window_size: [900.0, 600.0],
            show_channel_lines: false,
            num_bins: DEFAULT_NUM_BINS,
        }
    }
}
