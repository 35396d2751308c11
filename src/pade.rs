use std::fmt::{self, Display};

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::{
    rec::thiele::{check_sizes, ThieleRec},
    traits::{Eval, TryEval},
    Error,
};

/// Padé approximant in continued fraction form
///
/// ```text
/// a0 / (1 + a1 (x - z0) / (1 + a2 (x - z1) / (1 + ...)))
/// ```
///
/// The approximant is immutable after construction, so it can be
/// evaluated concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct Pade {
    nodes: Vec<Complex64>,
    coeffs: Vec<Complex64>,
    truncated_at: Option<usize>,
}

impl Pade {
    /// Construct the approximant interpolating `values[i]` at `nodes[i]`
    ///
    /// Coefficients are computed with the current default precision.
    pub fn new(nodes: &[Complex64], values: &[Complex64]) -> Result<Self, Error> {
        Self::with_rec(ThieleRec::new(), nodes, values)
    }

    pub fn with_rec(
        rec: ThieleRec,
        nodes: &[Complex64],
        values: &[Complex64],
    ) -> Result<Self, Error> {
        let coeffs = rec.rec(nodes, values)?;
        let truncated_at = coeffs.truncated_at();
        Ok(Self {
            nodes: nodes.to_vec(),
            coeffs: coeffs.into_vec(),
            truncated_at,
        })
    }

    /// Construct from precomputed continued fraction coefficients
    pub fn from_parts(
        nodes: Vec<Complex64>,
        coeffs: Vec<Complex64>,
    ) -> Result<Self, Error> {
        check_sizes(&nodes, &coeffs)?;
        Ok(Self {
            nodes,
            coeffs,
            truncated_at: None,
        })
    }

    pub fn nodes(&self) -> &[Complex64] {
        &self.nodes
    }

    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// See [ThieleRec::rec] and [crate::rec::thiele::Coefficients::truncated_at]
    pub fn truncated_at(&self) -> Option<usize> {
        self.truncated_at
    }

    pub fn eval_many<I>(&self, pts: I) -> Vec<Complex64>
    where
        I: IntoIterator<Item = Complex64>,
    {
        pts.into_iter().map(|pt| self.eval(&pt)).collect()
    }

    // Forward recurrence for the convergents A_n / B_n, normalised by B_n
    // in every step. Stops with `None` at a vanishing denominator if
    // `strict` is set.
    fn convergents(&self, e: Complex64, strict: bool) -> Option<Complex64> {
        let Some((a0, rest)) = self.coeffs.split_first() else {
            return Some(Complex64::zero());
        };
        let mut a1 = Complex64::zero();
        let mut a2 = *a0;
        let mut b1 = Complex64::one();
        for (z, a) in self.nodes.iter().zip(rest) {
            let t = (e - z) * a;
            let a_new = a2 + t * a1;
            let b_new = Complex64::one() + t * b1;
            if strict && b_new.is_zero() {
                return None;
            }
            a1 = a2 / b_new;
            a2 = a_new / b_new;
            b1 = Complex64::one() / b_new;
        }
        Some(a2)
    }
}

impl Eval<Complex64> for Pade {
    type Output = Complex64;

    /// Value of the approximant at `e`
    ///
    /// A vanishing denominator in one of the convergents results in
    /// a non-finite value. Use `try_eval` to detect this.
    fn eval(&self, e: &Complex64) -> Complex64 {
        self.convergents(*e, false)
            .unwrap_or_else(|| Complex64::new(f64::NAN, f64::NAN))
    }
}

impl TryEval<Complex64> for Pade {
    type Output = Complex64;

    /// Value of the approximant at `e`
    ///
    /// Returns `None` if the denominator of a convergent vanishes or the
    /// result is not finite.
    fn try_eval(&self, e: &Complex64) -> Option<Complex64> {
        self.convergents(*e, true).filter(|res| res.is_finite())
    }
}

impl Display for Pade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some((a0, rest)) = self.coeffs.split_first() else {
            return write!(f, "0");
        };
        write!(f, "({a0})")?;
        for (z, a) in self.nodes.iter().zip(rest) {
            write!(f, " / (1 + ({a}) * (x - ({z}))")?;
        }
        for _ in rest {
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ::rand::{Rng, SeedableRng};

    use super::*;
    use crate::{
        _test_util::{c, default_prec_lock, rand_complex, rand_samples, PoleSum},
        algebra::prec::default_prec,
    };

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn constant() {
        log_init();
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
        let u = c(0.3, -1.5);
        let pade = Pade::new(&[c(0., 1.)], &[u]).unwrap();
        assert_eq!(pade.len(), 1);
        assert_eq!(pade.eval(&c(0., 1.)), u);
        for _ in 0..10 {
            let e = 10. * rand_complex(&mut rng);
            assert_eq!(pade.eval(&e), u);
        }
    }

    #[test]
    fn inverse_x() {
        log_init();
        let nodes = [c(1., 0.), c(2., 0.), c(3., 0.)];
        let values = [c(1., 0.), c(0.5, 0.), c(1. / 3., 0.)];
        let pade = Pade::new(&nodes, &values).unwrap();
        assert!((pade.eval(&c(4., 0.)) - c(0.25, 0.)).norm() < 1e-3);
        assert!((pade.eval(&c(10., 0.)) - c(0.1, 0.)).norm() < 1e-3);
    }

    #[test]
    fn interpolation() {
        log_init();
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
        for _ in 0..20 {
            let n = rng.gen_range(1..=10);
            let (nodes, values) = rand_samples(n, &mut rng);
            let pade = Pade::new(&nodes, &values).unwrap();
            assert_eq!(pade.truncated_at(), None);
            for (z, u) in nodes.iter().zip(&values) {
                let res = pade.eval(z);
                assert!((res - u).norm() < 1e-6 * u.norm(), "{res} != {u}");
            }
        }
    }

    #[test]
    fn idempotent() {
        log_init();
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(2);
        let (nodes, values) = rand_samples(8, &mut rng);
        let pade = Pade::new(&nodes, &values).unwrap();
        for _ in 0..10 {
            let e = rand_complex(&mut rng);
            let res = pade.eval(&e);
            assert_eq!(res.re.to_bits(), pade.eval(&e).re.to_bits());
            assert_eq!(res.im.to_bits(), pade.eval(&e).im.to_bits());
        }
    }

    #[test]
    fn concurrent_eval() {
        log_init();
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(3);
        let (nodes, values) = rand_samples(8, &mut rng);
        let pade = Pade::new(&nodes, &values).unwrap();
        let pts = Vec::from_iter((0..100).map(|_| rand_complex(&mut rng)));
        let expected = pade.eval_many(pts.iter().copied());
        std::thread::scope(|s| {
            let mut handles = Vec::new();
            for _ in 0..4 {
                handles.push(s.spawn(|| pade.eval_many(pts.iter().copied())));
            }
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn pole() {
        log_init();
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(4);
        let g = PoleSum::rand(1, &mut rng);
        let nodes = Vec::from_iter((1..=20).map(|n| c(0., n as f64)));
        let values = Vec::from_iter(nodes.iter().map(|z| g.eval(*z)));
        let pade = Pade::new(&nodes, &values).unwrap();
        assert!(pade.truncated_at().is_some());
        for _ in 0..10 {
            let e = c(rng.gen_range(-3.0..3.), 0.1);
            let res = pade.eval(&e);
            let expected = g.eval(e);
            assert!((res - expected).norm() < 1e-8 * expected.norm());
        }
    }

    #[test]
    fn truncated() {
        log_init();
        let nodes = [c(1., 0.), c(2., 0.), c(3., 0.), c(4., 0.)];
        let values = [c(1., 0.), c(1., 0.), c(2., 0.), c(3., 0.)];
        let pade = Pade::new(&nodes, &values).unwrap();
        assert_eq!(pade.truncated_at(), Some(2));
        assert_eq!(pade.eval(&c(7., 3.)), c(1., 0.));
        assert_eq!(pade.try_eval(&c(7., 3.)), Some(c(1., 0.)));
    }

    #[test]
    fn failed_construction() {
        log_init();
        let _lock = default_prec_lock();
        let before = default_prec();
        let nodes = [c(0., 1.), c(0., 1.)];
        let values = [c(1., 0.), c(2., 0.)];
        assert_eq!(Pade::new(&nodes, &values), Err(Error::DivisionByZero));
        assert_eq!(default_prec(), before);
    }

    #[test]
    fn zero_denominator() {
        log_init();
        let pade =
            Pade::from_parts(vec![c(0., 0.), c(0., 0.)], vec![c(1., 0.), c(1., 0.)])
                .unwrap();
        let res = pade.eval(&c(-1., 0.));
        assert!(!res.is_finite());
        assert_eq!(pade.try_eval(&c(-1., 0.)), None);
        assert_eq!(pade.try_eval(&c(1., 0.)), Some(c(0.5, 0.)));
    }

    #[test]
    fn from_parts_sizes() {
        assert_eq!(
            Pade::from_parts(vec![c(0., 0.)], vec![]),
            Err(Error::LengthMismatch {
                nodes: 1,
                values: 0
            })
        );
        assert_eq!(Pade::from_parts(vec![], vec![]), Err(Error::Empty));
    }

    #[test]
    fn display() {
        let pade = Pade::from_parts(
            vec![c(1., 0.), c(2., 0.)],
            vec![c(1., 0.), c(2., 0.)],
        )
        .unwrap();
        assert_eq!(pade.to_string(), "(1+0i) / (1 + (2+0i) * (x - (1+0i)))");
    }
}
