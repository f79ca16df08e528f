//! Execution helper that runs the simplex solver on a log-likelihood problem
//! and returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        LogLikelihood, MLEOptions, OptimOutcome, adapter::ArgMinAdapter,
        types::NelderMeadSolver,
    },
};
use argmin::core::{Executor, State};

/// Run one Nelder–Mead optimization for a log-likelihood problem.
///
/// Wires the adapted problem and the prepared solver into an executor,
/// applies the iteration cap from `opts.tols.max_iter`, optionally attaches a
/// terminal observer, and converts the final state into an [`OptimOutcome`].
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always`.
///
/// # Errors
/// - Propagates any `argmin` runtime error, including model errors raised
///   from the cost function, via `From<argmin::core::Error>`.
/// - Propagates validation errors raised while building the outcome.
pub fn run_nelder_mead<F>(
    opts: &MLEOptions, problem: ArgMinAdapter<'_, F>, solver: NelderMeadSolver,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
{
    let mut optimizer = Executor::new(problem, solver);
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        &termination,
        iterations,
        function_counts,
    )
}
