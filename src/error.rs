use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Error {
    /// Attempted to invert a high-precision number with vanishing norm
    #[error("pade_approximant: division by zero in high-precision arithmetic")]
    DivisionByZero,
    #[error("Need points for reconstruction")]
    Empty,
    #[error("Number of nodes ({nodes}) and values ({values}) differ")]
    LengthMismatch { nodes: usize, values: usize },
    #[error("Unsupported precision: {0} bits")]
    InvalidPrecision(u32),
    #[error("Need {needed} points, but only {available} are available")]
    NotEnoughPoints { needed: usize, available: usize },
}
