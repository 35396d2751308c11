use std::{
    fmt::{self, Display},
    ops::{Add, Mul, Sub},
};

use num_complex::Complex64;
use rug::{Assign, Complex, Float};

use crate::{algebra::prec::default_prec, Error};

/// Complex number with arbitrary-precision real and imaginary parts
///
/// The precision is fixed when a value is constructed. Results of
/// arithmetic operations carry the precision of the left-hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct BigComplex(Complex);

impl BigComplex {
    /// # Panics
    ///
    /// Panics if `prec` is not supported by `rug`, see
    /// [crate::algebra::prec::check_prec].
    pub fn with_val(prec: u32, z: Complex64) -> Self {
        Self(Complex::with_val(prec, (z.re, z.im)))
    }

    pub fn from_parts(re: Float, im: Float) -> Self {
        Self(Complex::from((re, im)))
    }

    /// # Panics
    ///
    /// Panics under the same conditions as [BigComplex::with_val].
    pub fn zero(prec: u32) -> Self {
        Self::with_val(prec, Complex64::new(0., 0.))
    }

    /// # Panics
    ///
    /// Panics under the same conditions as [BigComplex::with_val].
    pub fn one(prec: u32) -> Self {
        Self::with_val(prec, Complex64::new(1., 0.))
    }

    pub fn prec(&self) -> u32 {
        self.0.prec().0
    }

    pub fn real(&self) -> &Float {
        self.0.real()
    }

    pub fn imag(&self) -> &Float {
        self.0.imag()
    }

    /// Squared norm `re^2 + im^2`
    pub fn norm(&self) -> Float {
        Float::with_val(self.prec(), self.0.norm_ref())
    }

    pub fn inv(&self) -> Result<Self, Error> {
        if self.norm().is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(Complex::with_val(self.prec(), self.0.recip_ref())))
    }

    pub fn try_div(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self * &rhs.inv()?)
    }

    pub fn assign(&mut self, z: Complex64) {
        self.0.assign((z.re, z.im));
    }

    /// Round to standard precision
    pub fn to_complex64(&self) -> Complex64 {
        Complex64::new(self.real().to_f64(), self.imag().to_f64())
    }
}

impl Default for BigComplex {
    fn default() -> Self {
        Self::zero(default_prec())
    }
}

impl<'a> Add<&'a BigComplex> for &'a BigComplex {
    type Output = BigComplex;

    fn add(self, rhs: &'a BigComplex) -> Self::Output {
        BigComplex(Complex::with_val(self.prec(), &self.0 + &rhs.0))
    }
}

impl<'a> Sub<&'a BigComplex> for &'a BigComplex {
    type Output = BigComplex;

    fn sub(self, rhs: &'a BigComplex) -> Self::Output {
        BigComplex(Complex::with_val(self.prec(), &self.0 - &rhs.0))
    }
}

impl<'a> Mul<&'a BigComplex> for &'a BigComplex {
    type Output = BigComplex;

    fn mul(self, rhs: &'a BigComplex) -> Self::Output {
        BigComplex(Complex::with_val(self.prec(), &self.0 * &rhs.0))
    }
}

impl Display for BigComplex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.real(), self.imag())
    }
}
