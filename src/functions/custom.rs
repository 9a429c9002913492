//! # custom.rs
//!
//! Function descriptors stored in the registry.
//!
//! A [`Function`] pairs a fixed arity with a shared closure. Built-ins and
//! caller-supplied functions use the same descriptor type, so an evaluator
//! can invoke anything it looked up without knowing where it came from.

use crate::error::{FunctionError, Result};

use std::sync::Arc;

/// Signature shared by every function implementation.
pub type FunctionImpl = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// A callable numeric operation with a fixed arity.
///
/// Cloning is cheap: the implementation is reference counted.
///
/// # Examples
///
/// ```
/// use mathfn::Function;
///
/// let hypot = Function::new(2, |args| args[0].hypot(args[1]));
/// assert_eq!(hypot.arity(), 2);
/// assert_eq!(hypot.apply(&[3.0, 4.0]).unwrap(), 5.0);
/// assert!(hypot.apply(&[3.0]).is_err());
/// ```
#[derive(Clone)] // Debug is written by hand because of the closure.
pub struct Function {
    func: Arc<FunctionImpl>,
    arity: usize,
}

impl Function {
    /// Creates a new function descriptor.
    ///
    /// # Arguments
    ///
    /// * `arity` - Exact number of arguments the function expects
    /// * `func` - A closure implementing the function logic
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            arity,
        }
    }

    /// Returns the number of arguments the function expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Evaluates the function after checking the argument count.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArityMismatch`] without invoking the
    /// implementation if `args.len()` differs from the arity. The error names
    /// the function as `<anonymous>`; use [`Registry::call`](crate::Registry::call)
    /// to get the registered name in the error.
    pub fn apply(&self, args: &[f64]) -> Result<f64> {
        self.apply_named("<anonymous>", args)
    }

    pub(crate) fn apply_named(&self, name: &str, args: &[f64]) -> Result<f64> {
        if args.len() != self.arity {
            return Err(FunctionError::arity_mismatch(name, self.arity, args.len()));
        }
        Ok((self.func)(args))
    }

    /// Evaluates the function without checking the argument count.
    ///
    /// The caller must pass exactly [`arity`](Self::arity) arguments; built-ins
    /// index into `args` and panic on a short slice.
    pub fn apply_unchecked(&self, args: &[f64]) -> f64 {
        debug_assert_eq!(args.len(), self.arity);
        (self.func)(args)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_create_function() {
        let func = Function::new(1, |args| args[0]);
        assert_eq!(func.arity(), 1);
    }

    #[test]
    fn test_apply_success() {
        let func = Function::new(2, |args| args[0] + args[1]);
        assert_eq!(func.apply(&[1.0, 2.0]), Ok(3.0));
    }

    #[test]
    fn test_apply_zero_arity() {
        let func = Function::new(0, |_| 42.0);
        assert_eq!(func.apply(&[]), Ok(42.0));
    }

    #[test]
    fn test_apply_arity_mismatch_does_not_invoke() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let func = Function::new(2, move |args| {
            counter.fetch_add(1, Ordering::SeqCst);
            args[0]
        });

        let result = func.apply(&[1.0]);
        assert_eq!(
            result,
            Err(FunctionError::ArityMismatch { name: "<anonymous>".into(), expected: 2, found: 1 })
        );
        assert!(func.apply(&[1.0, 2.0, 3.0]).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_apply_named_reports_name() {
        let func = Function::new(1, |args| args[0]);
        let err = func.apply_named("ident", &[]).unwrap_err();
        assert_eq!(err.to_string(), "function 'ident' expects 1 arguments, got 0");
    }

    #[test]
    fn test_apply_unchecked() {
        let func = Function::new(1, |args| args[0] * 2.0);
        assert_eq!(func.apply_unchecked(&[4.0]), 8.0);
    }

    #[test]
    fn test_nan_is_not_an_error() {
        let func = Function::new(1, |args| args[0].sqrt());
        assert!(func.apply(&[-1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_debug() {
        let func = Function::new(1, |args| args[0]);
        let debug_str = format!("{:?}", func);
        assert!(debug_str.contains("Function"));
        assert!(debug_str.contains("arity: 1"));
    }

    #[test]
    fn test_clone_preserves_function() {
        let func = Function::new(1, |args| args[0] * args[0]);
        let func_cloned = func.clone();
        assert_eq!(func.apply(&[3.0]), func_cloned.apply(&[3.0]));
    }
}
