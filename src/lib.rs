//! Padé approximants from complex samples
//!
//! The approximant is computed with Thiele's reciprocal differences in
//! high precision and evaluated as a continued fraction in double
//! precision. The main application is the analytic continuation of
//! functions known on the imaginary axis, see
//! H. J. Vidberg, J. W. Serene, J. Low Temp. Phys. 29, 179 (1977).
//!
//! ```
//! use pade::{traits::Eval, Complex64, Pade};
//!
//! let nodes = [1., 2., 3.].map(|x| Complex64::new(x, 0.));
//! let values = [1., 1. / 2., 1. / 3.].map(|x| Complex64::new(x, 0.));
//! let pade = Pade::new(&nodes, &values)?;
//! let res = pade.eval(&Complex64::new(4., 0.));
//! assert!((res - Complex64::new(0.25, 0.)).norm() < 1e-3);
//! # Ok::<(), pade::Error>(())
//! ```

/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
mod error;
pub mod traits;

/// High-precision arithmetic
pub mod algebra;

/// Continued fraction coefficients
pub mod rec;

/// Padé approximants
pub mod pade;

/// Analytic continuation from Matsubara frequencies
#[cfg(feature = "matsubara")]
pub mod matsubara;

pub use error::Error;
pub use num_complex::Complex64;
pub use pade::Pade;
pub use rug::Float;
