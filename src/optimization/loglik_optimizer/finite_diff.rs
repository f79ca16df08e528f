//! loglik_optimizer::finite_diff — finite-difference gradient and Hessian helpers.
//!
//! Purpose
//! -------
//! Provide numerical derivatives of a scalar log-likelihood around a
//! parameter vector, together with validation and symmetry cleanup, so that
//! inference code can request curvature without depending on a particular
//! differencing scheme.
//!
//! Key behaviors
//! -------------
//! - Central-difference gradients via `finitediff`, with errors raised by the
//!   objective captured and re-raised after differencing ([`gradient`]).
//! - Hessians by differencing a gradient callback with `finitediff`
//!   ([`compute_hessian`]): central differences first, forward differences
//!   if the central result fails validation.
//! - In-place symmetrization ([`symmetrize_hess`]) after validation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned gradients and Hessians satisfy [`validate_grad`] and
//!   [`validate_hessian`]; a non-finite objective value anywhere in the
//!   stencil surfaces as an error rather than a silently poisoned matrix.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Grad, Theta,
        types::Hessian,
        validation::{validate_grad, validate_hessian},
    },
};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// Central-difference gradient of `func` at `theta`.
///
/// # Errors
/// - The first error raised by `func` while differencing.
/// - [`OptError::InvalidGradient`] if any component is non-finite.
pub fn gradient<G>(func: &G, theta: &Theta) -> OptResult<Grad>
where
    G: Fn(&Theta) -> OptResult<f64>,
{
    let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
    let scalar = |x: &Theta| -> f64 {
        match func(x) {
            Ok(value) => value,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                f64::NAN
            }
        }
    };
    let grad = theta.central_diff(&scalar);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&grad, theta.len())?;
    Ok(grad)
}

/// Hessian of `ℓ` at `theta` from its gradient callback `grad`.
///
/// Tries `finitediff`'s central Hessian and falls back to the forward
/// Hessian when the central one is not finite. Errors raised by `grad` are
/// captured while differencing and returned afterwards.
///
/// # Errors
/// - The first error raised by `grad`.
/// - [`OptError::InvalidHessian`] if neither scheme gives a finite matrix
///   (for example when the stencil crosses into a region where `ℓ = -∞`).
///
/// # Example
/// ```rust
/// # use ndarray::array;
/// # use rust_volatility::optimization::{errors::OptResult, loglik_optimizer::Theta};
/// # use rust_volatility::optimization::loglik_optimizer::finite_diff::compute_hessian;
/// // ℓ(θ) = -(θ₀² + θ₁²) has gradient -2θ.
/// let grad = |t: &Theta| -> OptResult<Theta> { Ok(t.mapv(|x| -2.0 * x)) };
///
/// let hess = compute_hessian(&grad, &array![1.0, 2.0]).unwrap();
/// assert_eq!(hess.shape(), &[2, 2]);
/// assert!((hess[[0, 0]] + 2.0).abs() < 1e-6);
/// ```
pub fn compute_hessian<G>(grad: &G, theta: &Theta) -> OptResult<Hessian>
where
    G: Fn(&Theta) -> OptResult<Grad>,
{
    let dim = theta.len();
    let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
    let grad_fn = |x: &Theta| -> Grad {
        match grad(x) {
            Ok(g) => g,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                Theta::from_elem(dim, f64::NAN)
            }
        }
    };

    let mut cent_hess = theta.central_hessian(&grad_fn);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    match validate_hessian(&cent_hess, dim) {
        Ok(_) => {
            symmetrize_hess(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = theta.forward_hessian(&grad_fn);
            if let Some(err) = closure_err.take() {
                return Err(err);
            }
            validate_hessian(&forward_hess, dim)?;
            symmetrize_hess(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

// ---- Helper methods ----

/// Replace each off-diagonal pair with its average.
pub fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}
