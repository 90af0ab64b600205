//! Evaluation helpers
//! - `eval_counted` : evaluates `f(x)`, bumping the evaluation counter
//! - `infallible`   : lifts `FnMut(f64) -> f64` into the fallible form

/// Values returned by `f` are passed through untouched, non-finite included.
#[inline]
pub(crate) fn eval_counted<F, E>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, E> where F: FnMut(f64) -> Result<f64, E> {
    *evals += 1;
    f(x)
}

#[inline]
pub(crate) fn infallible<F, E>(mut f: F) -> impl FnMut(f64) -> Result<f64, E>
where
    F: FnMut(f64) -> f64
{
    move |x| Ok(f(x))
}
