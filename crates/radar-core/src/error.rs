// File: crates/radar-core/src/error.rs
// Summary: Error type for the fallible edges of the crate (config resolution, raster export).

/// Errors raised while resolving configuration or exporting a raster surface.
/// Drawing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RadarError {
    /// A color string that is neither hex, `rgb()`/`rgba()` nor a known name.
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    /// Skia could not allocate a raster backing store.
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RadarError>;
