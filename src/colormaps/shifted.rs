//! Midpoint-shifted colormaps.
//!
//! Diverging colormaps put their neutral color at the center of the
//! normalized domain. When the data range is asymmetric around zero (say
//! biases from -2 to +4) that center no longer corresponds to zero. A
//! shifted colormap relocates the base map's center to
//! `midpoint = 1 - |vmax| / (|vmax| + |vmin|)`, so that zero data renders
//! in the neutral color.

use super::colormap::Colormap;
use crate::error::{FerrelError, Result};

/// Number of resampled stops: 128 below the midpoint, 129 at and above it.
const STOP_COUNT: usize = 257;

/// A base colormap resampled onto a shifted position schedule.
///
/// Holds `(position, rgba)` stops with strictly ascending positions; colors
/// between stops are linearly interpolated.
pub struct ShiftedColormap {
    name: String,
    stops: Vec<(f32, [u8; 4])>,
}

impl ShiftedColormap {
    /// The normalized position the base map's center was moved to
    pub fn midpoint(&self) -> f32 {
        self.stops[STOP_COUNT / 2].0
    }
}

/// Shift the center of a diverging colormap to the zero data value.
///
/// The base map is sampled at 257 evenly spaced points which are reassigned
/// to a piecewise-linear schedule: 128 points in `[0, midpoint)` and 129
/// points in `[midpoint, 1.0]`. `vmin == 0 && vmax == 0` leaves the
/// midpoint undefined and is rejected.
pub fn shift_colormap(vmin: f32, vmax: f32, base: &dyn Colormap) -> Result<ShiftedColormap> {
    if vmin == 0.0 && vmax == 0.0 {
        return Err(FerrelError::InvalidParameter {
            param: "vmin/vmax".to_string(),
            message: "Degenerate data range: vmin and vmax are both 0".to_string(),
        });
    }

    let midpoint = 1.0 - vmax.abs() / (vmax.abs() + vmin.abs());

    let mut stops = Vec::with_capacity(STOP_COUNT);
    for i in 0..STOP_COUNT {
        let regular = i as f32 / (STOP_COUNT - 1) as f32;
        let shifted = if i < STOP_COUNT / 2 {
            midpoint * i as f32 / 128.0
        } else {
            midpoint + (1.0 - midpoint) * (i - 128) as f32 / 128.0
        };
        stops.push((shifted, base.map_normalized(regular)));
    }

    Ok(ShiftedColormap {
        name: format!("shifted_{}", base.name()),
        stops,
    })
}

impl Colormap for ShiftedColormap {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        let value = value.clamp(0.0, 1.0);

        // Index of the first stop strictly above the value. Positions may
        // repeat (one-sided ranges collapse a whole half onto the
        // midpoint); an exact hit resolves to the last stop at that
        // position so the upper side of the discontinuity wins.
        let upper = self.stops.partition_point(|(position, _)| *position <= value);
        if upper == 0 {
            return self.stops[0].1;
        }
        if upper == STOP_COUNT {
            return self.stops[STOP_COUNT - 1].1;
        }

        let (p1, c1) = self.stops[upper - 1];
        let (p2, c2) = self.stops[upper];
        let t = (value - p1) / (p2 - p1);
        let rgb = super::colormap::lerp_color([c1[0], c1[1], c1[2]], [c2[0], c2[1], c2[2]], t);
        // Alpha follows the nearer stop
        let alpha = if t < 0.5 { c1[3] } else { c2[3] };
        [rgb[0], rgb[1], rgb[2], alpha]
    }

    fn name(&self) -> &str {
        &self.name
    }
}
