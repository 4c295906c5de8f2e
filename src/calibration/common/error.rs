use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Raw buffer size mismatch: expected {expected} bytes, got {actual}")]
    RawSizeMismatch { expected: usize, actual: usize },

    #[error("Container magic mismatch: expected {expected:?}, got {actual:?}")]
    BadContainerMagic { expected: [u8; 4], actual: [u8; 4] },

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Unsupported sensor layout: {0}")]
    UnsupportedLayout(String),

    #[error("LUT axis needs at least 2 lattice points, got {0}")]
    InvalidLatticeSize(usize),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Fit did not converge after {sweeps} sweeps (last diff: {diff})")]
    DidNotConverge { sweeps: usize, diff: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalibrationError>;
