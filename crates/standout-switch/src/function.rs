//! Shareable callable values.
//!
//! A [`Function`] is the unit of caller-supplied behavior: predicate patterns
//! and computed results both wrap one. It is cheap to clone, thread-safe, and
//! compares by identity, so it can also travel through the switch as a plain
//! [`Value::Function`].

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

type Callable = dyn Fn(&Value) -> Result<Value> + Send + Sync;

/// A unary function from an input [`Value`] to an output [`Value`].
///
/// # Example
///
/// ```
/// use standout_switch::{Function, Value};
///
/// let half = Function::new(|v: &Value| v.as_f64().map(|n| n / 2.0));
/// assert_eq!(half.call(&Value::from(120)).unwrap(), Value::from(60.0));
///
/// // Clones share identity.
/// assert_eq!(half, half.clone());
/// ```
#[derive(Clone)]
pub struct Function {
    inner: Arc<Callable>,
}

impl Function {
    /// Wraps an infallible function.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Function {
            inner: Arc::new(move |value: &Value| Ok(f(value).into())),
        }
    }

    /// Wraps a function that may fail.
    ///
    /// Errors are returned to the dispatcher untouched.
    pub fn fallible<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<R> + Send + Sync + 'static,
        R: Into<Value>,
    {
        Function {
            inner: Arc::new(move |value: &Value| f(value).map(Into::into)),
        }
    }

    /// Invokes the function.
    pub fn call(&self, value: &Value) -> Result<Value> {
        (self.inner)(value)
    }

    /// Returns `true` if both handles point at the same function.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:p})", Arc::as_ptr(&self.inner) as *const ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwitchError;

    #[test]
    fn call_infallible() {
        let f = Function::new(|v: &Value| v.as_str().map(str::len));
        assert_eq!(f.call(&Value::from("four")).unwrap(), Value::from(4usize));
        assert_eq!(f.call(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn call_fallible_propagates() {
        let f = Function::fallible(|v: &Value| match v.as_str() {
            Some(s) => Ok(s.to_uppercase()),
            None => Err(SwitchError::msg("not a string")),
        });
        assert_eq!(f.call(&Value::from("ab")).unwrap(), Value::from("AB"));
        let err = f.call(&Value::from(1)).unwrap_err();
        assert_eq!(err.to_string(), "not a string");
    }

    #[test]
    fn identity_equality() {
        let a = Function::new(|_: &Value| 1);
        let b = Function::new(|_: &Value| 1);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
