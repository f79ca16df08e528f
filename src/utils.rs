//! utils — conversion helpers for the Python bindings.
//!
//! Turns Python-side inputs (NumPy arrays, pandas Series, sequences, option
//! keywords) into validated Rust types. Only compiled with the
//! `python-bindings` feature.
#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::loglik_optimizer::{MLEOptions, Tolerances},
    volatility::{
        core::{
            bounds::ParamBounds, data::ReturnSeries, guards::VarianceGuards,
            innovations::Innovation, likelihood::LikelihoodForm, options::GARCHOptions,
            order::GARCHOrder, params::GARCHParams,
        },
        models::garch::GARCHModel,
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy an array-like of returns into a validated [`ReturnSeries`].
#[cfg(feature = "python-bindings")]
pub fn extract_return_series<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<ReturnSeries> {
    let arr = extract_f64_array(py, raw_data)?;
    let data = arr.as_slice().map_err(|_| PyValueError::new_err("returns must be contiguous"))?;
    Ok(ReturnSeries::new(Array1::from(data.to_vec()))?)
}

/// Flat `[ω, α…, β…]` parameters for `order`, validated.
#[cfg(feature = "python-bindings")]
pub fn extract_params<'py>(
    py: Python<'py>, raw_params: &Bound<'py, PyAny>, order: &GARCHOrder,
) -> PyResult<GARCHParams> {
    let arr = extract_f64_array(py, raw_params)?;
    let params = GARCHParams::from_theta(arr.as_array(), order)?;
    params.validate()?;
    Ok(params)
}

/// Innovation family from its Python name: `"normal"`, `"t"` or `"skewt"`.
#[cfg(feature = "python-bindings")]
pub fn extract_innovation(
    dist: Option<&str>, nu: Option<f64>, lambda: Option<f64>,
) -> PyResult<Innovation> {
    let innovation = match dist.unwrap_or("normal") {
        "normal" => Innovation::Normal,
        "t" | "studentt" => Innovation::student_t(nu.unwrap_or(8.0))?,
        "skewt" => Innovation::skewed_student_t(nu.unwrap_or(8.0), lambda.unwrap_or(0.0))?,
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown innovation distribution '{other}'; expected 'normal', 't' or 'skewt'"
            )));
        }
    };
    Ok(innovation)
}

/// Build a configured [`GARCHModel`] from keyword arguments.
#[cfg(feature = "python-bindings")]
pub fn build_garch_model(
    p: Option<usize>, q: Option<usize>, tol_cost: Option<f64>, max_iter: Option<usize>,
    simplex_step: Option<f64>, restarts: Option<usize>, bounds: Option<(f64, f64)>,
    variance_floor: Option<f64>, likelihood: Option<&str>,
) -> PyResult<GARCHModel> {
    let order = GARCHOrder::new(p.unwrap_or(1), q.unwrap_or(1));
    let defaults = MLEOptions::default();
    let tols = Tolerances::new(
        tol_cost.or(defaults.tols.tol_cost),
        max_iter.or(defaults.tols.max_iter),
    )?;
    let mle_opts = MLEOptions::new(
        tols,
        simplex_step.unwrap_or(defaults.simplex_step),
        restarts.unwrap_or(defaults.restarts),
        false,
    )?;
    let bounds = match bounds {
        Some((lower, upper)) => Some(ParamBounds::uniform(&order, lower, upper)?),
        None => None,
    };
    let variance_guards = match variance_floor {
        Some(floor) => VarianceGuards::new(floor)?,
        None => VarianceGuards::default(),
    };
    let likelihood = match likelihood.unwrap_or("exact") {
        "exact" => LikelihoodForm::Exact,
        "kernel" => LikelihoodForm::Kernel,
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown likelihood form '{other}'; expected 'exact' or 'kernel'"
            )));
        }
    };
    Ok(GARCHModel::new(order, GARCHOptions::new(mle_opts, bounds, variance_guards, likelihood)))
}
