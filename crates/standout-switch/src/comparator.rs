//! Curried numeric comparators.
//!
//! `gt(5)` builds a predicate that holds for values greater than 5. A
//! [`Comparator`] converts into a predicate [`Pattern`](crate::Pattern), so it
//! can be used directly as a case pattern:
//!
//! ```
//! use standout_switch::{gt, lt, Switch, Value};
//!
//! let size = Switch::builder()
//!     .case(lt(10), "small")
//!     .case(gt(100), "large")
//!     .otherwise("medium")
//!     .build();
//!
//! assert_eq!(size.dispatch(3).unwrap().into_single(), Some(Value::from("small")));
//! assert_eq!(size.dispatch(50).unwrap().into_single(), Some(Value::from("medium")));
//! ```

use std::fmt;

use crate::function::Function;
use crate::op::Op;
use crate::value::{Number, Value};

/// A numeric predicate: `value <op> threshold`.
///
/// Non-numeric values are coerced with [`Value::to_number`]; anything that
/// coerces to NaN fails every comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparator {
    op: Op,
    threshold: Number,
}

impl Comparator {
    /// Creates a comparator.
    pub fn new(op: Op, threshold: impl Into<Number>) -> Self {
        Comparator {
            op,
            threshold: threshold.into(),
        }
    }

    /// Returns the operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> Number {
        self.threshold
    }

    /// Tests a value against the threshold.
    pub fn test(&self, value: &Value) -> bool {
        let ordering = match value {
            Value::Number(n) => n.compare(self.threshold),
            other => other.to_number().partial_cmp(&self.threshold.to_f64()),
        };
        ordering.is_some_and(|ordering| self.op.eval_ordering(ordering))
    }

    /// Wraps the comparator in a [`Function`] returning a boolean.
    pub fn into_function(self) -> Function {
        Function::new(move |value: &Value| self.test(value))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.op, self.threshold)
    }
}

/// `value > n`
pub fn gt(n: impl Into<Number>) -> Comparator {
    Comparator::new(Op::Gt, n)
}

/// `value >= n`
pub fn gte(n: impl Into<Number>) -> Comparator {
    Comparator::new(Op::Gte, n)
}

/// `value < n`
pub fn lt(n: impl Into<Number>) -> Comparator {
    Comparator::new(Op::Lt, n)
}

/// `value <= n`
pub fn lte(n: impl Into<Number>) -> Comparator {
    Comparator::new(Op::Lte, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(c: Comparator, n: i64) -> bool {
        c.test(&Value::from(n))
    }

    #[test]
    fn lt_cases() {
        assert!(!check(lt(10), 15));
        assert!(!check(lt(10), 10));
        assert!(check(lt(10), 5));
        assert!(check(lt(10), 0));
        assert!(check(lt(10), -5));

        assert!(!check(lt(-5), 0));
        assert!(!check(lt(-5), -5));
        assert!(check(lt(-5), -10));
    }

    #[test]
    fn lte_cases() {
        assert!(!check(lte(10), 15));
        assert!(check(lte(10), 10));
        assert!(check(lte(10), 5));
        assert!(check(lte(10), -5));

        assert!(!check(lte(-5), 0));
        assert!(check(lte(-5), -5));
        assert!(check(lte(-5), -10));
    }

    #[test]
    fn gt_cases() {
        assert!(check(gt(10), 15));
        assert!(!check(gt(10), 10));
        assert!(!check(gt(10), 5));
        assert!(!check(gt(10), -5));

        assert!(check(gt(-5), 0));
        assert!(!check(gt(-5), -5));
        assert!(!check(gt(-5), -10));
    }

    #[test]
    fn gte_cases() {
        assert!(check(gte(10), 15));
        assert!(check(gte(10), 10));
        assert!(!check(gte(10), 5));
        assert!(!check(gte(10), -5));

        assert!(check(gte(-5), 0));
        assert!(check(gte(-5), -5));
        assert!(!check(gte(-5), -10));
    }

    #[test]
    fn fractional_and_mixed() {
        assert!(gt(2).test(&Value::from(2.5)));
        assert!(lt(3u8).test(&Value::from(2.5)));
        assert!(gte(0.5).test(&Value::from(1)));
    }

    #[test]
    fn non_numeric_values() {
        assert!(gt(5).test(&Value::from("10")));
        assert!(!gt(5).test(&Value::from("abc")));
        assert!(!lt(5).test(&Value::List(vec![])));
        assert!(gt(-1).test(&Value::Null));

        assert!(!gt(5).test(&Value::from("inf")));
        assert!(gt(5).test(&Value::from("Infinity")));
        assert!(gte(16).test(&Value::from("0x10")));
    }

    #[test]
    fn display() {
        assert_eq!(gt(5).to_string(), "gt(5)");
        assert_eq!(lte(-2.5).to_string(), "lte(-2.5)");
        assert_eq!(gte(7u8).to_string(), "gte(7)");
    }

    #[test]
    fn as_function() {
        let f = lt(10).into_function();
        assert_eq!(f.call(&Value::from(3)).unwrap(), Value::from(true));
        assert_eq!(f.call(&Value::from(30)).unwrap(), Value::from(false));
    }
}
