use std::f64::consts::PI;

use log::debug;
use num_complex::Complex64;

use crate::{pade::Pade, rec::thiele::ThieleRec, traits::Eval, Error};

/// Particle statistics determining the Matsubara frequencies
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Statistic {
    Fermion,
    Boson,
}

/// The `n`th Matsubara frequency for inverse temperature `beta`
pub fn matsubara_freq(beta: f64, n: i64, statistic: Statistic) -> Complex64 {
    let m = match statistic {
        Statistic::Fermion => 2. * n as f64 + 1.,
        Statistic::Boson => 2. * n as f64,
    };
    Complex64::new(0., m * PI / beta)
}

/// The first `n_points` non-negative Matsubara frequencies
pub fn matsubara_mesh(
    beta: f64,
    n_points: usize,
    statistic: Statistic,
) -> Vec<Complex64> {
    (0..n_points as i64)
        .map(|n| matsubara_freq(beta, n, statistic))
        .collect()
}

/// `n` equidistant points from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Analytic continuation from the imaginary axis
#[derive(Clone, Debug, PartialEq)]
pub struct Continuation {
    pade: Pade,
}

impl Continuation {
    /// Continuation from the first `n_points` samples `values[i]` at the
    /// Matsubara frequencies `mesh[i]`
    ///
    /// `n_points == 0` means all samples are used.
    pub fn from_imfreq(
        mesh: &[Complex64],
        values: &[Complex64],
        n_points: usize,
    ) -> Result<Self, Error> {
        Self::from_imfreq_with_rec(ThieleRec::new(), mesh, values, n_points)
    }

    pub fn from_imfreq_with_rec(
        rec: ThieleRec,
        mesh: &[Complex64],
        values: &[Complex64],
        n_points: usize,
    ) -> Result<Self, Error> {
        if n_points == 0 {
            debug!("Analytic continuation from all Matsubara frequencies");
            let pade = Pade::with_rec(rec, mesh, values)?;
            return Ok(Self { pade });
        }
        let available = std::cmp::min(mesh.len(), values.len());
        if n_points > available {
            return Err(Error::NotEnoughPoints {
                needed: n_points,
                available,
            });
        }
        debug!("Analytic continuation from {n_points} Matsubara frequencies");
        let pade =
            Pade::with_rec(rec, &mesh[..n_points], &values[..n_points])?;
        Ok(Self { pade })
    }

    pub fn pade(&self) -> &Pade {
        &self.pade
    }

    pub fn into_pade(self) -> Pade {
        self.pade
    }

    /// Evaluate at `omega + i freq_offset` for all real frequencies `omega`
    pub fn on_real_axis(
        &self,
        omegas: &[f64],
        freq_offset: f64,
    ) -> Vec<Complex64> {
        omegas
            .iter()
            .map(|omega| self.pade.eval(&Complex64::new(*omega, freq_offset)))
            .collect()
    }
}
