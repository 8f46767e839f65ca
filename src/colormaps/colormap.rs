//! Colormap trait and utilities.
//!
//! This module defines the common interface for all colormaps.

use crate::error::{FerrelError, Result};

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f32) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f32, min: f32, max: f32) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Get a colormap by name
pub fn get_colormap(name: &str) -> Result<Box<dyn Colormap>> {
    use super::diverging::*;

    match name.to_lowercase().as_str() {
        "seismic" => Ok(Box::new(Seismic)),
        "coolwarm" => Ok(Box::new(Coolwarm)),
        "rdbu" => Ok(Box::new(RdBu)),
        _ => Err(FerrelError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        }),
    }
}

/// The default base colormap for shifting: seismic.
pub fn default_colormap() -> Box<dyn Colormap> {
    Box::new(super::diverging::Seismic)
}

/// Linear interpolation between two colors, rounded to the nearest channel value
pub fn lerp_color(c1: [u8; 3], c2: [u8; 3], t: f32) -> [u8; 3] {
    [
        (c1[0] as f32 * (1.0 - t) + c2[0] as f32 * t).round() as u8,
        (c1[1] as f32 * (1.0 - t) + c2[1] as f32 * t).round() as u8,
        (c1[2] as f32 * (1.0 - t) + c2[2] as f32 * t).round() as u8,
    ]
}

/// Sample a lookup table of RGB stops at a normalized position.
///
/// The stops are assumed evenly spaced over [0, 1]; positions between two
/// stops are linearly interpolated.
pub(crate) fn sample_lut(colors: &[[u8; 3]], value: f32) -> [u8; 4] {
    let position = value * (colors.len() - 1) as f32;
    let index = position.floor() as usize;

    if index >= colors.len() - 1 {
        let last = colors[colors.len() - 1];
        return [last[0], last[1], last[2], 255];
    }

    let t = position - index as f32;
    let rgb = lerp_color(colors[index], colors[index + 1], t);
    [rgb[0], rgb[1], rgb[2], 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color() {
        let black = [0, 0, 0];
        let white = [255, 255, 255];

        let mid = lerp_color(black, white, 0.5);
        assert_eq!(mid, [128, 128, 128]);
    }

    #[test]
    fn test_sample_lut_endpoints() {
        let lut = [[0, 0, 0], [255, 255, 255]];
        assert_eq!(sample_lut(&lut, 0.0), [0, 0, 0, 255]);
        assert_eq!(sample_lut(&lut, 1.0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_get_colormap() {
        assert!(get_colormap("seismic").is_ok());
        assert!(get_colormap("Seismic").is_ok());
        assert!(get_colormap("viridis").is_err());
    }

    #[test]
    fn test_default_colormap_is_seismic() {
        assert_eq!(default_colormap().name(), "seismic");
    }
}
