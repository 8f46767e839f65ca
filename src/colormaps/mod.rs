//! Colormap implementations for diverging climate data.
//!
//! This module provides matplotlib-inspired diverging colormaps and the
//! midpoint-shifting transform used to pin their neutral color to zero.

pub mod colormap;
pub mod diverging;
pub mod shifted;

pub use colormap::{default_colormap, get_colormap, Colormap};
pub use diverging::{Coolwarm, RdBu, Seismic};
pub use shifted::{shift_colormap, ShiftedColormap};
