/// Complex numbers with arbitrary-precision parts
pub mod complex;
/// Precision settings for high-precision arithmetic
pub mod prec;
