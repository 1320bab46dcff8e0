use crate::{BusinessError, Cause, ResponseError, wrap};

/// Find the classification to report for `err`
///
/// Walks the chain from the outermost link towards the root cause and
/// returns the *innermost* [`ResponseError`] it passes. Lower layers assign
/// the most specific descriptors, so the deepest match wins over the generic
/// ones added on the way up. Context annotations are transparent; the walk
/// stops at an opaque error or at the end of the chain.
///
/// When no layer classified the failure, the result is `fallback` wrapped
/// around the original `err`.
pub fn resolve(err: Option<Cause>, fallback: &BusinessError) -> ResponseError {
    if let Some(classified) = err.as_ref().and_then(Cause::classification) {
        return classified.clone();
    }

    wrap(fallback.clone(), err)
}
