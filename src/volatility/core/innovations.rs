//! Standardized innovation distributions for GARCH simulation.
//!
//! Every sampler produces draws `z` with `E[z] = 0` and `Var[z] = 1`, so a
//! simulated return is `r_t = σ_t · z_t`.
//!
//! ## Supported distributions
//! - [`Innovation::Normal`]: standard Gaussian (the default).
//! - [`Innovation::StudentT`]: Student-t with `ν > 2` degrees of freedom,
//!   rescaled by `sqrt((ν − 2) / ν)`.
//! - [`Innovation::SkewedStudentT`]: Hansen (1994) skewed-t with `ν > 2` and
//!   skewness `λ ∈ (−1, 1)`, standardized by construction.
//!
//! Custom families plug in by implementing [`InnovationSampler`].
use crate::volatility::errors::{GarchError, GarchResult};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal, StudentT};
use statrs::function::gamma::ln_gamma;

/// Source of zero-mean, unit-variance shocks.
pub trait InnovationSampler: Send + Sync {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;
}

/// Built-in innovation families.
#[derive(Debug, Clone, Default)]
pub enum Innovation {
    #[default]
    Normal,
    StudentT(StandardizedStudentT),
    SkewedStudentT(HansenSkewedT),
}

impl Innovation {
    pub const fn normal() -> Self {
        Innovation::Normal
    }

    /// Standardized Student-t innovations.
    ///
    /// # Errors
    /// - [`GarchError::InvalidInnovationParam`] if `nu` is not finite or `nu <= 2`.
    pub fn student_t(nu: f64) -> GarchResult<Self> {
        Ok(Innovation::StudentT(StandardizedStudentT::new(nu)?))
    }

    /// Hansen skewed-t innovations.
    ///
    /// # Errors
    /// - [`GarchError::InvalidInnovationParam`] if `nu <= 2` or `|lambda| >= 1`.
    pub fn skewed_student_t(nu: f64, lambda: f64) -> GarchResult<Self> {
        Ok(Innovation::SkewedStudentT(HansenSkewedT::new(nu, lambda)?))
    }
}

impl InnovationSampler for Innovation {
    #[inline]
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Innovation::Normal => StandardNormal.sample(rng),
            Innovation::StudentT(inner) => inner.draw(rng),
            Innovation::SkewedStudentT(inner) => inner.draw(rng),
        }
    }
}

/// Student-t scaled to unit variance.
#[derive(Debug, Clone)]
pub struct StandardizedStudentT {
    nu: f64,
    scale: f64,
    dist: StudentT<f64>,
}

impl StandardizedStudentT {
    pub fn new(nu: f64) -> GarchResult<Self> {
        let dist = build_student_t(nu)?;
        Ok(StandardizedStudentT { nu, scale: ((nu - 2.0) / nu).sqrt(), dist })
    }

    pub fn nu(&self) -> f64 {
        self.nu
    }
}

impl InnovationSampler for StandardizedStudentT {
    #[inline]
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.scale * self.dist.sample(rng)
    }
}

/// Hansen's skewed Student-t.
///
/// With `c = Γ((ν+1)/2) / (sqrt(π(ν−2)) Γ(ν/2))`, `a = 4λc(ν−2)/(ν−1)` and
/// `b = sqrt(1 + 3λ² − a²)`, a draw is obtained from a Student-t variate `T`
/// and a uniform `u`: the left branch `−|T|(1 − λ)` is taken with probability
/// `(1 − λ)/2`, the right branch `|T|(1 + λ)` otherwise, and the result `y`
/// is mapped to `(y · sqrt(1 − 2/ν) − a) / b`.
#[derive(Debug, Clone)]
pub struct HansenSkewedT {
    nu: f64,
    lambda: f64,
    a: f64,
    b: f64,
    dist: StudentT<f64>,
}

impl HansenSkewedT {
    pub fn new(nu: f64, lambda: f64) -> GarchResult<Self> {
        let dist = build_student_t(nu)?;
        if !lambda.is_finite() || lambda <= -1.0 || lambda >= 1.0 {
            return Err(GarchError::InvalidInnovationParam {
                param: lambda,
                reason: "Skewness lambda must lie in (-1, 1).",
            });
        }
        let c = (ln_gamma((nu + 1.0) / 2.0) - ln_gamma(nu / 2.0)).exp()
            / (std::f64::consts::PI * (nu - 2.0)).sqrt();
        let a = 4.0 * lambda * c * (nu - 2.0) / (nu - 1.0);
        let b = (1.0 + 3.0 * lambda * lambda - a * a).sqrt();
        Ok(HansenSkewedT { nu, lambda, a, b, dist })
    }

    pub fn nu(&self) -> f64 {
        self.nu
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl InnovationSampler for HansenSkewedT {
    #[inline]
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let t = self.dist.sample(rng).abs();
        let u: f64 = rng.gen();
        let y = if u < (1.0 - self.lambda) / 2.0 {
            -t * (1.0 - self.lambda)
        } else {
            t * (1.0 + self.lambda)
        };
        (y * (1.0 - 2.0 / self.nu).sqrt() - self.a) / self.b
    }
}

fn build_student_t(nu: f64) -> GarchResult<StudentT<f64>> {
    if !nu.is_finite() || nu <= 2.0 {
        return Err(GarchError::InvalidInnovationParam {
            param: nu,
            reason: "Degrees of freedom must be finite and > 2.",
        });
    }
    StudentT::new(nu).map_err(|_| GarchError::InvalidInnovationParam {
        param: nu,
        reason: "Degrees of freedom rejected by the Student-t sampler.",
    })
}
