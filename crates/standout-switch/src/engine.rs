//! The dispatch engine.
//!
//! One dispatch is a single left-to-right fold over the case list. The fold
//! state is a [`Pass`]: whether a case entry has matched (`found`), whether
//! the previous entry left a fall-through chain open (`falling_through`), and
//! the accumulated [`Outcome`].
//!
//! Per entry:
//!
//! ```text
//! found ∧ ¬return_many ∧ ¬falling_through    → skip, the answer is fixed
//! default entry, ¬found ∨ falling_through    → resolve, record (found unchanged)
//! case entry, (falling_through ∧ ¬stop) ∨ matcher(value, pattern)
//!                                            → resolve, record, found = true,
//!                                              falling_through = entry flag
//! case entry, no match                       → falling_through = ¬stop ∧ entry flag
//! ```
//!
//! A chain that is open and not stopped forces the next case entry to match
//! without consulting its pattern. That entry's own flag then decides whether
//! the chain continues.

use crate::case::Case;
use crate::config::Flags;
use crate::error::Result;
use crate::strategy::{Matcher, Resolver};
use crate::value::Value;

/// The result of one dispatch.
///
/// `Single` is produced when `return_many` is off and holds the last value
/// recorded, or `None` when nothing matched and no default fired. `Many` holds
/// every recorded value in case-list order.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Single-result mode.
    Single(Option<Value>),
    /// Sequence-of-results mode.
    Many(Vec<Value>),
}

impl Outcome {
    fn empty(return_many: bool) -> Self {
        if return_many {
            Outcome::Many(Vec::new())
        } else {
            Outcome::Single(None)
        }
    }

    fn record(&mut self, value: Value) {
        match self {
            Outcome::Single(slot) => *slot = Some(value),
            Outcome::Many(values) => values.push(value),
        }
    }

    /// Returns `true` for sequence-mode outcomes.
    pub fn is_many(&self) -> bool {
        matches!(self, Outcome::Many(_))
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of recorded values (0 or 1 in single mode).
    pub fn len(&self) -> usize {
        match self {
            Outcome::Single(slot) => usize::from(slot.is_some()),
            Outcome::Many(values) => values.len(),
        }
    }

    /// Borrows the single result. For `Many`, the last recorded value.
    pub fn single(&self) -> Option<&Value> {
        match self {
            Outcome::Single(slot) => slot.as_ref(),
            Outcome::Many(values) => values.last(),
        }
    }

    /// Borrows the sequence, if this is a `Many` outcome.
    pub fn as_many(&self) -> Option<&[Value]> {
        match self {
            Outcome::Many(values) => Some(values),
            Outcome::Single(_) => None,
        }
    }

    /// Takes the single result. For `Many`, the last recorded value.
    pub fn into_single(self) -> Option<Value> {
        match self {
            Outcome::Single(slot) => slot,
            Outcome::Many(values) => values.into_iter().last(),
        }
    }

    /// Takes every recorded value. A single slot becomes zero or one values.
    pub fn into_many(self) -> Vec<Value> {
        match self {
            Outcome::Single(slot) => slot.into_iter().collect(),
            Outcome::Many(values) => values,
        }
    }
}

/// Resolved configuration for one dispatch.
pub(crate) struct Engine<'a> {
    pub(crate) flags: &'a Flags,
    pub(crate) matcher: &'a dyn Matcher,
    pub(crate) resolver: &'a dyn Resolver,
}

impl Engine<'_> {
    /// Folds the case list against `value`.
    pub(crate) fn run(&self, cases: &[Case], value: &Value) -> Result<Outcome> {
        let start = Pass {
            found: false,
            falling_through: false,
            outcome: Outcome::empty(self.flags.return_many),
        };

        cases
            .iter()
            .enumerate()
            .try_fold(start, |pass, (index, case)| pass.step(self, index, case, value))
            .map(|pass| pass.outcome)
    }
}

/// Fold state, fresh for every dispatch.
struct Pass {
    found: bool,
    falling_through: bool,
    outcome: Outcome,
}

impl Pass {
    fn step(mut self, engine: &Engine<'_>, index: usize, case: &Case, value: &Value) -> Result<Self> {
        let flags = engine.flags;

        if self.found && !flags.return_many && !self.falling_through {
            return Ok(self);
        }

        match case {
            Case::Default { result } => {
                if !self.found || self.falling_through {
                    let output = engine.resolver.resolve(flags, value, None, result)?;
                    tracing::trace!(index, "default entry fired");
                    self.outcome.record(output);
                }
            }
            Case::Match {
                pattern,
                result,
                fall_through,
            } => {
                let forced = self.falling_through && !flags.stop_fall_through;
                if forced || engine.matcher.matches(flags, value, pattern)? {
                    let output = engine.resolver.resolve(flags, value, Some(pattern), result)?;
                    tracing::trace!(index, forced, "case entry matched");
                    self.outcome.record(output);
                    self.found = true;
                    self.falling_through = *fall_through;
                } else {
                    self.falling_through = !flags.stop_fall_through && *fall_through;
                }
            }
        }

        Ok(self)
    }
}
