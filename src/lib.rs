//! rust_volatility — GARCH(p, q) volatility estimation and simulation with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the GARCH routines to Python via the `_rust_volatility` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes and submodules used by the `rust_volatility`
//! package.
//!
//! Key behaviors
//! -------------
//! - Expose the core Rust modules as the public crate surface:
//!   - [`volatility`]: return series, the GARCH variance filter and
//!     likelihood, estimation, simulation, forecasting and fit reports;
//!   - [`optimization`]: the argmin-backed box-constrained log-likelihood
//!     maximizer;
//!   - [`inference`]: Hessian-based standard errors;
//!   - [`statistical_tests`]: Ljung–Box residual diagnostics.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_volatility` Python extension, with `statistical_tests` and
//!   `volatility_models` submodules registered for dot-notation imports.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; the binding layer only
//!   converts inputs, dispatches and maps errors to `PyErr`.
//! - Nothing in the crate installs a logging subscriber; `tracing` events
//!   are emitted for whichever subscriber the host application configures.
//!
//! Downstream usage
//! ----------------
//! ```no_run
//! use rust_volatility::volatility::prelude::*;
//!
//! let prices = vec![100.0, 101.2, 100.7, 102.3, 101.9, 103.4];
//! let returns = ReturnSeries::from_prices(&prices, 100.0)?;
//! let fitted = fit(&returns, GARCHOrder::new(1, 1), None)?;
//! let report = FitReport::new(&fitted, &returns)?;
//! println!("{report}");
//! # Ok::<(), GarchError>(())
//! ```

pub mod inference;
pub mod optimization;
pub mod statistical_tests;
pub mod utils;
pub mod volatility;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    statistical_tests::ljung_box::LBOutcome,
    utils::{
        build_garch_model, extract_f64_array, extract_innovation, extract_params,
        extract_return_series,
    },
    volatility::{
        core::{data::ReturnSeries, options::SimOpts},
        errors::GarchError,
        models::{
            fitted::FittedModel,
            garch::GARCHModel,
            report::FitReport,
        },
    },
};

/// LjungBox — Python-facing wrapper for the Ljung–Box portmanteau test.
///
/// Constructed from Python via `LjungBox(data, lags=10, model_df=0)`; all
/// computation is forwarded to [`LBOutcome::ljung_box_with_dof`].
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_volatility.statistical_tests")]
pub struct LjungBox {
    inner: LBOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LjungBox {
    #[new]
    #[pyo3(
        text_signature = "(data, /, lags=10, model_df=0)",
        signature = (raw_data, lags = 10, model_df = 0)
    )]
    pub fn ljung_box<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, lags: usize, model_df: usize,
    ) -> PyResult<LjungBox> {
        let arr = extract_f64_array(py, raw_data)?;
        let data = arr
            .as_slice()
            .map_err(|_| pyo3::exceptions::PyValueError::new_err("data must be contiguous"))?;
        Ok(LjungBox { inner: LBOutcome::ljung_box_with_dof(data, lags, model_df)? })
    }

    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.stat()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    #[getter]
    pub fn lags(&self) -> usize {
        self.inner.lags()
    }

    #[getter]
    pub fn dof(&self) -> usize {
        self.inner.dof()
    }
}

/// GARCH — Python-facing wrapper for GARCH(p, q) models.
///
/// Holds a configured [`GARCHModel`] and, after `fit`, the resulting
/// [`FittedModel`] together with its training returns so forecasts,
/// simulations and reports can be produced without passing the data again.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_volatility.volatility_models")]
pub struct GARCH {
    inner: GARCHModel,
    fitted: Option<(FittedModel, ReturnSeries)>,
}

#[cfg(feature = "python-bindings")]
impl GARCH {
    fn fitted(&self) -> PyResult<&(FittedModel, ReturnSeries)> {
        Ok(self.fitted.as_ref().ok_or(GarchError::ModelNotFitted)?)
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GARCH {
    #[new]
    #[pyo3(
        signature = (
            p = None,
            q = None,
            tol_cost = None,
            max_iter = None,
            simplex_step = None,
            restarts = None,
            bounds = None,
            variance_floor = None,
            likelihood = None,
        ),
        text_signature = "(p=None, q=None, tol_cost=None, max_iter=None, simplex_step=None, \
                          restarts=None, bounds=None, variance_floor=None, likelihood=None)"
    )]
    pub fn new(
        p: Option<usize>, q: Option<usize>, tol_cost: Option<f64>, max_iter: Option<usize>,
        simplex_step: Option<f64>, restarts: Option<usize>, bounds: Option<(f64, f64)>,
        variance_floor: Option<f64>, likelihood: Option<&str>,
    ) -> PyResult<Self> {
        let inner = build_garch_model(
            p,
            q,
            tol_cost,
            max_iter,
            simplex_step,
            restarts,
            bounds,
            variance_floor,
            likelihood,
        )?;
        Ok(GARCH { inner, fitted: None })
    }

    /// Fit by maximum likelihood; returns whether the optimizer converged.
    #[pyo3(signature = (returns, initial_guess = None))]
    pub fn fit<'py>(
        &mut self, py: Python<'py>, returns: &Bound<'py, PyAny>,
        initial_guess: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<bool> {
        let series = extract_return_series(py, returns)?;
        let guess = match initial_guess {
            Some(raw) => Some(extract_params(py, raw, &self.inner.order)?),
            None => None,
        };
        let fitted = py.allow_threads(|| self.inner.fit(&series, guess))?;
        let converged = fitted.is_converged();
        self.fitted = Some((fitted, series));
        Ok(converged)
    }

    /// Conditional variances of `returns` under flat parameters `params`.
    pub fn filter<'py>(
        &self, py: Python<'py>, params: &Bound<'py, PyAny>, returns: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let params = extract_params(py, params, &self.inner.order)?;
        let series = extract_return_series(py, returns)?;
        Ok(self.inner.filter(&params, &series)?.to_vec())
    }

    /// Variance forecasts for `horizon` steps after the training sample.
    pub fn forecast(&self, horizon: usize) -> PyResult<Vec<f64>> {
        let (fitted, _) = self.fitted()?;
        Ok(fitted.forecast(horizon)?.to_vec())
    }

    /// Simulate `count` paths of `horizon` steps from the fitted parameters.
    ///
    /// Returns `(returns, variances)`, each a list of `count` lists.
    #[pyo3(signature = (
        horizon, count, dist = None, nu = None, skew = None, seed = None, burn_in = 0,
        parallel = true
    ))]
    pub fn simulate(
        &self, py: Python<'_>, horizon: usize, count: usize, dist: Option<&str>, nu: Option<f64>,
        skew: Option<f64>, seed: Option<u64>, burn_in: usize, parallel: bool,
    ) -> PyResult<(Vec<Vec<f64>>, Vec<Vec<f64>>)> {
        let (fitted, _) = self.fitted()?;
        let innovation = extract_innovation(dist, nu, skew)?;
        let opts = SimOpts::new(seed, burn_in, parallel);
        let paths = py.allow_threads(|| fitted.simulate(horizon, count, &innovation, &opts))?;
        Ok(paths.into_iter().map(|path| (path.returns.to_vec(), path.variances.to_vec())).unzip())
    }

    /// JSON fit report (estimates, SEs, criteria, diagnostics).
    #[pyo3(signature = (confidence = 0.95, lb_lags = 10))]
    pub fn report_json(&self, confidence: f64, lb_lags: usize) -> PyResult<String> {
        let (fitted, returns) = self.fitted()?;
        Ok(FitReport::with_settings(fitted, returns, confidence, lb_lags)?.to_json()?)
    }

    #[getter]
    pub fn params(&self) -> PyResult<Vec<f64>> {
        Ok(self.fitted()?.0.params().to_theta().to_vec())
    }

    #[getter]
    pub fn param_names(&self) -> PyResult<Vec<String>> {
        Ok(self.fitted()?.0.params().names())
    }

    #[getter]
    pub fn conditional_variance(&self) -> PyResult<Vec<f64>> {
        Ok(self.fitted()?.0.conditional_variance().to_vec())
    }

    #[getter]
    pub fn converged(&self) -> PyResult<bool> {
        Ok(self.fitted()?.0.is_converged())
    }

    #[getter]
    pub fn log_likelihood(&self) -> PyResult<f64> {
        Ok(self.fitted()?.0.log_likelihood())
    }

    #[getter]
    pub fn long_run_variance(&self) -> PyResult<f64> {
        Ok(self.fitted()?.0.long_run_variance())
    }

    #[getter]
    pub fn aic(&self) -> PyResult<f64> {
        Ok(self.fitted()?.0.aic())
    }

    #[getter]
    pub fn bic(&self) -> PyResult<f64> {
        Ok(self.fitted()?.0.bic())
    }
}

/// Initialize the `_rust_volatility` extension module.
///
/// Creates the `statistical_tests` and `volatility_models` submodules,
/// attaches them to the parent module and registers them in `sys.modules`
/// so they are importable via dotted paths from Python.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_volatility<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistical_tests_mod = PyModule::new(_py, "statistical_tests")?;
    let volatility_models_mod = PyModule::new(_py, "volatility_models")?;
    statistical_tests(_py, m, &statistical_tests_mod)?;
    volatility_models(_py, m, &volatility_models_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_volatility.statistical_tests", statistical_tests_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_volatility.volatility_models", volatility_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistical_tests<'py>(
    _py: Python, rust_volatility: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<LjungBox>()?;
    rust_volatility.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn volatility_models<'py>(
    _py: Python, rust_volatility: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<GARCH>()?;
    rust_volatility.add_submodule(m)?;
    Ok(())
}
