//! Bilinear resize kernels for 4-D feature maps stored in a channel-blocked
//! (`nChw{B}c`) layout.
//!
//! The resize is a flat data-parallel map: per-axis interpolation weights are
//! precomputed once, then every output row of blocks is produced
//! independently from four source corners. Scalar and SIMD block kernels
//! share the same arithmetic order, so the selected variant never changes
//! the result.

pub mod kernels;
pub mod layout;

pub use kernels::{resize_bilinear, Isa};
pub use layout::{BlockedDesc, LayoutError};
