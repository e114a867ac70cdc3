//! Cross-crate golden tests and the scalar/vector parity harness.
//!
//! This crate has no public API of its own; it exists so the integration
//! tests under `tests/` can exercise `raster-core`, `raster-math`,
//! `raster-color`, and `raster-compositor` together the way a painter
//! crate built on top of this workspace would.
