/// Thiele's reciprocal differences in high precision
pub mod thiele;
