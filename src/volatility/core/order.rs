//! Model order (p, q) for GARCH models.
//!
//! Convention used throughout the crate:
//! - `p`: number of lagged **squared returns** (coefficients α₁…α_p).
//! - `q`: number of lagged **conditional variances** (coefficients β₁…β_q).
//!
//! Either may be zero. `p = 0` drops the α group, `q = 0` gives an ARCH(p)
//! model and `(0, 0)` a constant-variance model; the recursion treats a
//! missing group as an empty sum.
use crate::volatility::errors::{GarchError, GarchResult};

/// Order of the GARCH(p, q) model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GARCHOrder {
    pub p: usize,
    pub q: usize,
}

impl GARCHOrder {
    pub const fn new(p: usize, q: usize) -> Self {
        GARCHOrder { p, q }
    }

    /// Number of free parameters `1 + p + q` (ω, α, β).
    pub const fn n_params(&self) -> usize {
        1 + self.p + self.q
    }

    /// Longest lag referenced by the recursion.
    pub fn max_lag(&self) -> usize {
        self.p.max(self.q)
    }

    /// Minimum number of observations needed to fit this order: `max(p, q) + 1`.
    pub fn min_observations(&self) -> usize {
        self.max_lag() + 1
    }

    /// Check that a sample of length `n` is long enough to fit this order.
    ///
    /// # Errors
    /// - [`GarchError::InsufficientData`] if `n < max(p, q) + 1`.
    pub fn check_sample(&self, n: usize) -> GarchResult<()> {
        let required = self.min_observations();
        if n < required {
            return Err(GarchError::InsufficientData { n, required });
        }
        Ok(())
    }

    /// Check that a flat parameter vector has `1 + p + q` entries.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`] on mismatch.
    pub fn check_dim(&self, actual: usize) -> GarchResult<()> {
        let expected = self.n_params();
        if actual != expected {
            return Err(GarchError::InvalidOrder {
                expected,
                actual,
                reason: "Parameter vector length must equal 1 + p + q.",
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for GARCHOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GARCH({}, {})", self.p, self.q)
    }
}
