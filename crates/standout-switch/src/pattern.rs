//! Case patterns.
//!
//! A [`Pattern`] is decided once, when the case is built: a compiled regex, a
//! predicate function, or a literal value compared by equality. The matcher
//! dispatches on the variant instead of probing the value at call time.

use regex::Regex;

use crate::comparator::Comparator;
use crate::error::Result;
use crate::function::Function;
use crate::value::Value;

/// The pattern half of a case entry.
///
/// Conversions pick the variant: a [`Regex`] becomes `Regex`, a [`Function`]
/// or [`Comparator`] becomes `Predicate`, and any plain value (including a
/// [`Value::Function`]) becomes `Literal`.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches string inputs the expression finds a match in.
    Regex(Regex),
    /// Matches when the function's return value is accepted.
    Predicate(Function),
    /// Matches inputs equal to the value.
    Literal(Value),
}

impl Pattern {
    /// Compiles a regex pattern.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(Pattern::Regex(Regex::new(pattern)?))
    }

    /// Creates a boolean predicate pattern.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Function::new(f))
    }

    /// Creates a predicate pattern whose return value is judged by truthiness
    /// (or by identity with `true`, depending on configuration).
    pub fn function<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Pattern::Predicate(Function::new(f))
    }

    /// Creates a predicate pattern that may fail.
    pub fn fallible<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<R> + Send + Sync + 'static,
        R: Into<Value>,
    {
        Pattern::Predicate(Function::fallible(f))
    }

    /// Creates a literal pattern.
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Returns `true` if this is a regex pattern.
    pub fn is_regex(&self) -> bool {
        matches!(self, Pattern::Regex(_))
    }

    /// Returns `true` if this is a predicate pattern.
    pub fn is_predicate(&self) -> bool {
        matches!(self, Pattern::Predicate(_))
    }

    /// Returns `true` if this is a literal pattern.
    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }

    /// Extracts the regex, if present.
    pub fn as_regex(&self) -> Option<&Regex> {
        match self {
            Pattern::Regex(re) => Some(re),
            _ => None,
        }
    }

    /// Extracts the literal value, if present.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Pattern::Literal(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(re)
    }
}

impl From<Function> for Pattern {
    fn from(f: Function) -> Self {
        Pattern::Predicate(f)
    }
}

impl From<Comparator> for Pattern {
    fn from(c: Comparator) -> Self {
        Pattern::Predicate(c.into_function())
    }
}

impl From<Value> for Pattern {
    fn from(v: Value) -> Self {
        Pattern::Literal(v)
    }
}

macro_rules! literal_pattern_from {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Pattern {
                fn from(v: $source) -> Self {
                    Pattern::Literal(Value::from(v))
                }
            }
        )*
    };
}

literal_pattern_from!(
    bool, &str, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);
