//! inference::hessian — Hessian-based covariance and standard errors.
//!
//! Purpose
//! -------
//! Turn the curvature of a fitted log-likelihood into classical
//! (observed-information) covariance and standard error estimates. This
//! module bridges `ndarray` Hessians into `nalgebra` for eigen-based linear
//! algebra.
//!
//! Key behaviors
//! -------------
//! - Build the observed information `J(θ̂) = −∇²ℓ(θ̂)` by differencing the
//!   gradient of the **summed** log-likelihood with
//!   [`compute_hessian`].
//! - Invert `J(θ̂)` through a symmetric eigendecomposition, discarding
//!   eigenvalues at or below [`EIGEN_EPS`] (Moore–Penrose pseudoinverse).
//! - Report `SE(θ̂ᵢ) = sqrt([J⁺]ᵢᵢ)`.
//!
//! Conventions
//! -----------
//! - No explicit matrix inverse is formed.
//! - Weakly identified directions (near-zero eigenvalues) are dropped from
//!   the pseudoinverse rather than producing infinite variances.
//! - Errors are reported via [`OptResult<T>`]; a Hessian that cannot be
//!   evaluated (for example at a box edge) is an error, not a NaN.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{Grad, Theta, finite_diff::compute_hessian},
};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Eigenvalues of the information matrix at or below this value are treated
/// as zero.
pub const EIGEN_EPS: f64 = 1e-10;

/// Observed information `J(θ̂) = −∇²ℓ(θ̂)` from the score `∇ℓ`.
///
/// # Errors
/// - Propagates any error from [`compute_hessian`].
pub fn observed_information<G>(score: &G, theta_hat: &Theta) -> OptResult<Array2<f64>>
where
    G: Fn(&Theta) -> OptResult<Grad>,
{
    Ok(-compute_hessian(score, theta_hat)?)
}

/// Pseudoinverse of a symmetric information matrix.
///
/// `J⁺ = Σ_{k: λ_k > EIGEN_EPS} q_k q_kᵀ / λ_k` with `J = Q Λ Qᵀ`.
pub fn pseudo_inverse(info: &Array2<f64>) -> Array2<f64> {
    let n = info.nrows();
    let mut info_nalg = DMatrix::<f64>::zeros(n, n);
    fill_dmatrix(info, &mut info_nalg);
    let eigen_decomp = info_nalg.symmetric_eigen();
    let q = eigen_decomp.eigenvectors;
    let mut cov = Array2::<f64>::zeros((n, n));
    for (k, &lambda) in eigen_decomp.eigenvalues.iter().enumerate() {
        if lambda <= EIGEN_EPS {
            continue;
        }
        for i in 0..n {
            for j in 0..n {
                cov[[i, j]] += q[(i, k)] * q[(j, k)] / lambda;
            }
        }
    }
    cov
}

/// Classical covariance matrix `J(θ̂)⁺` of the estimates.
///
/// # Errors
/// - Propagates any error from [`observed_information`].
pub fn calc_covariance<G>(score: &G, theta_hat: &Theta) -> OptResult<Array2<f64>>
where
    G: Fn(&Theta) -> OptResult<Grad>,
{
    Ok(pseudo_inverse(&observed_information(score, theta_hat)?))
}

/// Classical standard errors `sqrt(diag(J(θ̂)⁺))`.
///
/// # Errors
/// - Propagates any error from [`observed_information`].
///
/// # Example
/// ```rust
/// # use ndarray::array;
/// # use rust_volatility::inference::hessian::calc_standard_errors;
/// # use rust_volatility::optimization::errors::OptResult;
/// // ℓ(θ) = -2θ₀² - θ₁²/2 has score (-4θ₀, -θ₁) and information diag(4, 1).
/// let score = |t: &ndarray::Array1<f64>| -> OptResult<ndarray::Array1<f64>> {
///     Ok(array![-4.0 * t[0], -t[1]])
/// };
/// let se = calc_standard_errors(&score, &array![1.0, -1.0]).unwrap();
/// assert!((se[0] - 0.5).abs() < 1e-4);
/// assert!((se[1] - 1.0).abs() < 1e-4);
/// ```
pub fn calc_standard_errors<G>(score: &G, theta_hat: &Theta) -> OptResult<Array1<f64>>
where
    G: Fn(&Theta) -> OptResult<Grad>,
{
    let cov = calc_covariance(score, theta_hat)?;
    Ok(cov.diag().mapv(|v| v.max(0.0).sqrt()))
}

// ---- Helper methods ----

/// Copy a square `ndarray` matrix into a preallocated `DMatrix`, column by
/// column.
fn fill_dmatrix(info: &Array2<f64>, info_nalg: &mut DMatrix<f64>) {
    let n = info.ncols();
    for j in 0..n {
        for i in 0..n {
            info_nalg[(i, j)] = info[[i, j]];
        }
    }
}
