//! Switch configuration.
//!
//! Configuration comes in two shapes:
//!
//! - [`Flags`]: the seven resolved booleans. This is what matchers and
//!   resolvers receive.
//! - [`Options`]: a partial configuration where every field is optional,
//!   including the two strategy slots. Options layer on top of each other with
//!   [`Options::merge`] and resolve to `Flags` against the defaults.
//!
//! Both derive serde traits (strategies are skipped), so a switch flavor can be
//! kept in a JSON or YAML file:
//!
//! ```
//! use standout_switch::Options;
//!
//! let options: Options = serde_json::from_str(r#"{"return_many": true}"#).unwrap();
//! let flags = options.flags();
//! assert!(flags.return_many);
//! assert!(flags.strict);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::strategy::{Matcher, Resolver};

/// Resolved configuration flags.
///
/// | Flag | Default |
/// |------|---------|
/// | `return_many` | false |
/// | `strict` | true |
/// | `accept_truthy_function_return` | true |
/// | `catch_function_errors` | true |
/// | `perform_replace_on_regex` | false |
/// | `run_result_function` | true |
/// | `stop_fall_through` | false |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Collect every eligible result instead of stopping at the first match.
    pub return_many: bool,
    /// Compare literal patterns with strict rather than loose equality.
    pub strict: bool,
    /// Accept any truthy predicate return, not only `true`.
    pub accept_truthy_function_return: bool,
    /// Treat predicate errors as a non-match.
    pub catch_function_errors: bool,
    /// Use string results of regex cases as replacement templates.
    pub perform_replace_on_regex: bool,
    /// Invoke computed results instead of returning the function.
    pub run_result_function: bool,
    /// Require every entry of a fall-through chain to match its own pattern.
    pub stop_fall_through: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            return_many: false,
            strict: true,
            accept_truthy_function_return: true,
            catch_function_errors: true,
            perform_replace_on_regex: false,
            run_result_function: true,
            stop_fall_through: false,
        }
    }
}

/// Partial switch configuration.
///
/// Unset fields fall back to whatever is beneath them: per-call options over
/// factory options over the engine defaults.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Collect every eligible result instead of stopping at the first match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_many: Option<bool>,
    /// Compare literal patterns with strict rather than loose equality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    /// Accept any truthy predicate return, not only `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_truthy_function_return: Option<bool>,
    /// Treat predicate errors as a non-match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_function_errors: Option<bool>,
    /// Use string results of regex cases as replacement templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_replace_on_regex: Option<bool>,
    /// Invoke computed results instead of returning the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_result_function: Option<bool>,
    /// Require every entry of a fall-through chain to match its own pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_fall_through: Option<bool>,
    /// Replacement matcher.
    #[serde(skip)]
    pub matcher: Option<Arc<dyn Matcher>>,
    /// Replacement result resolver.
    #[serde(skip)]
    pub resolver: Option<Arc<dyn Resolver>>,
}

impl Options {
    /// Creates empty options (everything defaulted).
    pub fn new() -> Self {
        Options::default()
    }

    /// Sets `return_many`.
    pub fn return_many(mut self, enabled: bool) -> Self {
        self.return_many = Some(enabled);
        self
    }

    /// Sets `strict`.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = Some(enabled);
        self
    }

    /// Sets `accept_truthy_function_return`.
    pub fn accept_truthy_function_return(mut self, enabled: bool) -> Self {
        self.accept_truthy_function_return = Some(enabled);
        self
    }

    /// Sets `catch_function_errors`.
    pub fn catch_function_errors(mut self, enabled: bool) -> Self {
        self.catch_function_errors = Some(enabled);
        self
    }

    /// Sets `perform_replace_on_regex`.
    pub fn perform_replace_on_regex(mut self, enabled: bool) -> Self {
        self.perform_replace_on_regex = Some(enabled);
        self
    }

    /// Sets `run_result_function`.
    pub fn run_result_function(mut self, enabled: bool) -> Self {
        self.run_result_function = Some(enabled);
        self
    }

    /// Sets `stop_fall_through`.
    pub fn stop_fall_through(mut self, enabled: bool) -> Self {
        self.stop_fall_through = Some(enabled);
        self
    }

    /// Sets the matcher strategy.
    pub fn matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    /// Sets the result resolver strategy.
    pub fn resolver<R: Resolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Layers `overrides` on top of `self`, field by field.
    pub fn merge(&self, overrides: &Options) -> Options {
        Options {
            return_many: overrides.return_many.or(self.return_many),
            strict: overrides.strict.or(self.strict),
            accept_truthy_function_return: overrides
                .accept_truthy_function_return
                .or(self.accept_truthy_function_return),
            catch_function_errors: overrides
                .catch_function_errors
                .or(self.catch_function_errors),
            perform_replace_on_regex: overrides
                .perform_replace_on_regex
                .or(self.perform_replace_on_regex),
            run_result_function: overrides.run_result_function.or(self.run_result_function),
            stop_fall_through: overrides.stop_fall_through.or(self.stop_fall_through),
            matcher: overrides.matcher.clone().or_else(|| self.matcher.clone()),
            resolver: overrides.resolver.clone().or_else(|| self.resolver.clone()),
        }
    }

    /// Resolves the flags against the defaults.
    pub fn flags(&self) -> Flags {
        let defaults = Flags::default();
        Flags {
            return_many: self.return_many.unwrap_or(defaults.return_many),
            strict: self.strict.unwrap_or(defaults.strict),
            accept_truthy_function_return: self
                .accept_truthy_function_return
                .unwrap_or(defaults.accept_truthy_function_return),
            catch_function_errors: self
                .catch_function_errors
                .unwrap_or(defaults.catch_function_errors),
            perform_replace_on_regex: self
                .perform_replace_on_regex
                .unwrap_or(defaults.perform_replace_on_regex),
            run_result_function: self
                .run_result_function
                .unwrap_or(defaults.run_result_function),
            stop_fall_through: self.stop_fall_through.unwrap_or(defaults.stop_fall_through),
        }
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.flags_set() == 0 && self.matcher.is_none() && self.resolver.is_none()
    }

    fn flags_set(&self) -> usize {
        [
            self.return_many,
            self.strict,
            self.accept_truthy_function_return,
            self.catch_function_errors,
            self.perform_replace_on_regex,
            self.run_result_function,
            self.stop_fall_through,
        ]
        .iter()
        .filter(|flag| flag.is_some())
        .count()
    }
}

impl From<Flags> for Options {
    fn from(flags: Flags) -> Self {
        Options {
            return_many: Some(flags.return_many),
            strict: Some(flags.strict),
            accept_truthy_function_return: Some(flags.accept_truthy_function_return),
            catch_function_errors: Some(flags.catch_function_errors),
            perform_replace_on_regex: Some(flags.perform_replace_on_regex),
            run_result_function: Some(flags.run_result_function),
            stop_fall_through: Some(flags.stop_fall_through),
            matcher: None,
            resolver: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("flags", &self.flags())
            .field("flags_set", &self.flags_set())
            .field("custom_matcher", &self.matcher.is_some())
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}
