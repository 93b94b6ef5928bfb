#[cfg(target_arch = "x86_64")]
pub mod avx;
#[cfg(target_arch = "aarch64")]
pub mod neon;
pub mod resize;
pub mod weights;
pub use resize::{lerp_block, resize_bilinear, Isa};
pub use weights::{interpolation_weights, scale_rate, InterpWeight};
