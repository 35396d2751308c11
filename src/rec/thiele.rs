use itertools::Itertools;
use log::{debug, trace};
use num_complex::Complex64;

use crate::{
    algebra::{
        complex::BigComplex,
        prec::{check_prec, default_prec},
    },
    Error,
};

/// Squared norm below which a pivot ends the continued fraction
pub const TRUNCATION_THRESHOLD: f64 = 1.0e-20;

/// Value of all coefficients that are not computed because the
/// continued fraction was truncated
pub const TRUNCATION_FILL: Complex64 = Complex64::new(0., 0.);

/// Padé coefficients from Thiele's reciprocal differences
///
/// The differences are computed in high precision to avoid
/// cancellations, see H. J. Vidberg, J. W. Serene,
/// J. Low Temp. Phys. 29, 179 (1977).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThieleRec {
    prec: u32,
    threshold: f64,
}

impl Default for ThieleRec {
    fn default() -> Self {
        Self::new()
    }
}

impl ThieleRec {
    /// Reconstruction with the current default precision
    pub fn new() -> Self {
        Self {
            prec: default_prec(),
            threshold: TRUNCATION_THRESHOLD,
        }
    }

    pub fn with_prec(prec: u32) -> Result<Self, Error> {
        Ok(Self {
            prec: check_prec(prec)?,
            threshold: TRUNCATION_THRESHOLD,
        })
    }

    /// Change the squared norm below which the continued fraction is truncated
    pub fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    pub fn prec(&self) -> u32 {
        self.prec
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compute the continued fraction coefficients for the samples
    /// `values[i]` at `nodes[i]`
    ///
    /// Nodes have to be pairwise distinct. Coinciding nodes lead to a
    /// division by zero unless the continued fraction is truncated
    /// before they are reached.
    pub fn rec(
        &self,
        nodes: &[Complex64],
        values: &[Complex64],
    ) -> Result<Coefficients, Error> {
        check_sizes(nodes, values)?;
        let n = nodes.len();
        debug!(
            "Thiele reconstruction from {n} points with {} bits",
            self.prec
        );

        // Row p of the triangular table g(p, j), j >= p, overwrites row
        // p - 1 in place. Entry j is final once row j is done.
        let mut g = Vec::from_iter(
            values.iter().map(|u| BigComplex::with_val(self.prec, *u)),
        );
        let one = BigComplex::one(self.prec);
        let mut truncated_at = None;
        for p in 1..n {
            let (done, row) = g.split_at_mut(p);
            let pivot = &done[p - 1];
            if pivot.norm() < self.threshold {
                debug!("Truncating continued fraction at order {p}");
                truncated_at = Some(p);
                break;
            }
            for (g_pj, z_j) in row.iter_mut().zip(&nodes[p..]) {
                let x = &pivot.try_div(g_pj)? - &one;
                let y = BigComplex::with_val(self.prec, z_j - nodes[p - 1]);
                *g_pj = x.try_div(&y)?;
            }
            trace!("g({p}, {p}) = {}", row[0]);
        }

        let computed = truncated_at.unwrap_or(n);
        let mut coeffs = vec![TRUNCATION_FILL; n];
        for (a, g_jj) in coeffs.iter_mut().zip(&g[..computed]) {
            *a = g_jj.to_complex64();
        }
        debug!("Padé coefficients: [{}]", coeffs.iter().format(", "));
        Ok(Coefficients {
            coeffs,
            truncated_at,
        })
    }
}

pub(crate) fn check_sizes(
    nodes: &[Complex64],
    values: &[Complex64],
) -> Result<(), Error> {
    if nodes.len() != values.len() {
        return Err(Error::LengthMismatch {
            nodes: nodes.len(),
            values: values.len(),
        });
    }
    if nodes.is_empty() {
        return Err(Error::Empty);
    }
    Ok(())
}

/// Continued fraction coefficients
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Coefficients {
    coeffs: Vec<Complex64>,
    truncated_at: Option<usize>,
}

impl Coefficients {
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Index of the first coefficient that was not computed
    ///
    /// All coefficients from this index onwards are `TRUNCATION_FILL`.
    /// `None` if the continued fraction was not truncated.
    pub fn truncated_at(&self) -> Option<usize> {
        self.truncated_at
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn into_vec(self) -> Vec<Complex64> {
        self.coeffs
    }
}
