//! Image synthesis: base texture, per-layer compositing and final overlays

/// Parallel batch generation with independent seeds
pub mod batch;
/// Compositing driver that runs the full pipeline for one image
pub mod executor;
/// Per-pixel brightness texture for solid layers
pub mod modulation;
/// Low-frequency base noise and the dark base image
pub mod noise;
/// Black boundary bands around composited regions
pub mod outline;
/// Rain streaks and occlusion grid drawn over the composite
pub mod overlay;
/// Layer-dependent generator parameters
pub mod progression;
