//! Case entries.
//!
//! A [`Case`] is one entry of a switch's case list: either a pattern with a
//! result and an optional fall-through flag, or a bare default result.

use crate::error::Result;
use crate::function::Function;
use crate::pattern::Pattern;
use crate::value::Value;

/// The result half of a case entry.
///
/// `Computed` results are invoked with the input value (when
/// `run_result_function` is on); `Literal` results are returned as they are,
/// even when the literal is itself a [`Value::Function`].
#[derive(Debug, Clone)]
pub enum CaseResult {
    /// A fixed output value.
    Literal(Value),
    /// A function of the input value.
    Computed(Function),
}

impl CaseResult {
    /// Creates a literal result.
    pub fn literal(value: impl Into<Value>) -> Self {
        CaseResult::Literal(value.into())
    }

    /// Creates a computed result.
    pub fn computed<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        CaseResult::Computed(Function::new(f))
    }

    /// Creates a computed result that may fail.
    pub fn fallible<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<R> + Send + Sync + 'static,
        R: Into<Value>,
    {
        CaseResult::Computed(Function::fallible(f))
    }

    /// Returns `true` if this result is computed.
    pub fn is_computed(&self) -> bool {
        matches!(self, CaseResult::Computed(_))
    }

    /// Extracts the literal value, if present.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            CaseResult::Literal(v) => Some(v),
            CaseResult::Computed(_) => None,
        }
    }
}

impl From<Value> for CaseResult {
    fn from(v: Value) -> Self {
        CaseResult::Literal(v)
    }
}

impl From<Function> for CaseResult {
    fn from(f: Function) -> Self {
        CaseResult::Computed(f)
    }
}

macro_rules! literal_result_from {
    ($($source:ty),*) => {
        $(
            impl From<$source> for CaseResult {
                fn from(v: $source) -> Self {
                    CaseResult::Literal(Value::from(v))
                }
            }
        )*
    };
}

literal_result_from!(
    bool, &str, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

/// One entry of a case list.
///
/// # Example
///
/// ```
/// use standout_switch::{gt, Case};
///
/// let cases = vec![
///     Case::new("foo", "This is foo"),
///     Case::fall_through(gt(5), "more than five"),
///     Case::otherwise("This is default"),
/// ];
/// assert!(cases[1].falls_through());
/// assert!(cases[2].is_default());
/// ```
#[derive(Debug, Clone)]
pub enum Case {
    /// Pattern entry.
    Match {
        /// What the input is tested against.
        pattern: Pattern,
        /// What the entry produces when it matches.
        result: CaseResult,
        /// Whether a match here lets the next entry contribute too.
        fall_through: bool,
    },
    /// Result-only entry.
    Default {
        /// What the entry produces when it fires.
        result: CaseResult,
    },
}

impl Case {
    /// Creates a pattern entry without fall-through.
    pub fn new(pattern: impl Into<Pattern>, result: impl Into<CaseResult>) -> Self {
        Case::Match {
            pattern: pattern.into(),
            result: result.into(),
            fall_through: false,
        }
    }

    /// Creates a pattern entry with fall-through.
    pub fn fall_through(pattern: impl Into<Pattern>, result: impl Into<CaseResult>) -> Self {
        Case::new(pattern, result).with_fall_through(true)
    }

    /// Creates a default entry.
    pub fn otherwise(result: impl Into<CaseResult>) -> Self {
        Case::Default {
            result: result.into(),
        }
    }

    /// Sets the fall-through flag. No effect on default entries.
    pub fn with_fall_through(mut self, enabled: bool) -> Self {
        if let Case::Match { fall_through, .. } = &mut self {
            *fall_through = enabled;
        }
        self
    }

    /// Returns `true` if this is a default entry.
    pub fn is_default(&self) -> bool {
        matches!(self, Case::Default { .. })
    }

    /// Returns the pattern, or `None` for default entries.
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Case::Match { pattern, .. } => Some(pattern),
            Case::Default { .. } => None,
        }
    }

    /// Returns the result.
    pub fn result(&self) -> &CaseResult {
        match self {
            Case::Match { result, .. } | Case::Default { result } => result,
        }
    }

    /// Returns the fall-through flag (always `false` for defaults).
    pub fn falls_through(&self) -> bool {
        matches!(
            self,
            Case::Match {
                fall_through: true,
                ..
            }
        )
    }
}

impl<P, R> From<(P, R)> for Case
where
    P: Into<Pattern>,
    R: Into<CaseResult>,
{
    fn from((pattern, result): (P, R)) -> Self {
        Case::new(pattern, result)
    }
}

impl<P, R> From<(P, R, bool)> for Case
where
    P: Into<Pattern>,
    R: Into<CaseResult>,
{
    fn from((pattern, result, fall_through): (P, R, bool)) -> Self {
        Case::new(pattern, result).with_fall_through(fall_through)
    }
}
