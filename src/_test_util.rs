use std::{
    f64::consts::PI,
    sync::{Mutex, MutexGuard},
};

use num_complex::Complex64;
use rand::Rng;

static DEFAULT_PREC_LOCK: Mutex<()> = Mutex::new(());

// serialise tests that change or depend on the default precision
pub fn default_prec_lock() -> MutexGuard<'static, ()> {
    DEFAULT_PREC_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

// random complex number with modulus between 1/2 and 2
pub fn rand_complex(mut rng: impl Rng) -> Complex64 {
    let r = rng.gen_range(0.5..2.);
    let phi = rng.gen_range(0.0..(2. * PI));
    Complex64::from_polar(r, phi)
}

// `n` random values on the first `n` fermionic Matsubara frequencies
// for inverse temperature 10
pub fn rand_samples(
    n: usize,
    mut rng: impl Rng,
) -> (Vec<Complex64>, Vec<Complex64>) {
    const BETA: f64 = 10.;
    let nodes = (0..n)
        .map(|k| c(0., (2 * k + 1) as f64 * PI / BETA))
        .collect();
    let values = (0..n).map(|_| rand_complex(&mut rng)).collect();
    (nodes, values)
}

/// Sum of simple poles `Σ_k r_k / (z - ε_k)`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoleSum {
    pub poles: Vec<(Complex64, Complex64)>,
}

impl PoleSum {
    // poles on the real axis between -2 and 2 with positive weights
    pub fn rand(n: usize, mut rng: impl Rng) -> Self {
        let poles = (0..n)
            .map(|_| {
                let eps = rng.gen_range(-2.0..2.);
                let weight = rng.gen_range(0.1..1.);
                (c(eps, 0.), c(weight, 0.))
            })
            .collect();
        Self { poles }
    }

    pub fn eval(&self, z: Complex64) -> Complex64 {
        self.poles.iter().map(|(eps, r)| r / (z - eps)).sum()
    }
}
