//! Switch construction and invocation.
//!
//! A [`Switch`] binds a case list to a resolved configuration and can be
//! dispatched any number of times. [`SwitchBuilder`] provides a fluent way to
//! assemble one, and [`SwitchFactory`] stamps out switches that share a set of
//! default options (a "flavor").

use std::fmt;
use std::sync::Arc;

use crate::case::{Case, CaseResult};
use crate::config::{Flags, Options};
use crate::engine::{Engine, Outcome};
use crate::error::Result;
use crate::pattern::Pattern;
use crate::strategy::{DefaultMatcher, DefaultResolver, Matcher, Resolver};
use crate::value::Value;

/// A reusable multi-way dispatcher.
///
/// The case list and configuration are fixed at construction. Every dispatch
/// starts from fresh state, so a `Switch` can be cloned cheaply and shared
/// across threads.
///
/// # Example
///
/// ```
/// use standout_switch::{Switch, Value};
///
/// let greeting = Switch::builder()
///     .case("foo", "This is foo")
///     .case("bar", "This is bar")
///     .otherwise("This is default")
///     .build();
///
/// assert_eq!(greeting.dispatch("foo").unwrap().into_single(), Some(Value::from("This is foo")));
/// assert_eq!(greeting.dispatch("xyz").unwrap().into_single(), Some(Value::from("This is default")));
/// ```
#[derive(Clone)]
pub struct Switch {
    cases: Arc<[Case]>,
    flags: Flags,
    matcher: Arc<dyn Matcher>,
    resolver: Arc<dyn Resolver>,
}

impl Switch {
    /// Creates a switch with the default configuration.
    pub fn new(cases: impl IntoIterator<Item = Case>) -> Self {
        Switch::with_options(cases, Options::new())
    }

    /// Creates a switch with the given options layered over the defaults.
    pub fn with_options(cases: impl IntoIterator<Item = Case>, options: Options) -> Self {
        Switch {
            cases: cases.into_iter().collect(),
            flags: options.flags(),
            matcher: options
                .matcher
                .unwrap_or_else(|| Arc::new(DefaultMatcher)),
            resolver: options
                .resolver
                .unwrap_or_else(|| Arc::new(DefaultResolver)),
        }
    }

    /// Starts a fluent builder.
    pub fn builder() -> SwitchBuilder {
        SwitchBuilder::new()
    }

    /// Dispatches a value through the case list.
    pub fn dispatch(&self, value: impl Into<Value>) -> Result<Outcome> {
        self.dispatch_ref(&value.into())
    }

    /// Dispatches a borrowed value through the case list.
    pub fn dispatch_ref(&self, value: &Value) -> Result<Outcome> {
        tracing::trace!(cases = self.cases.len(), value = ?value, "dispatching");
        let engine = Engine {
            flags: &self.flags,
            matcher: self.matcher.as_ref(),
            resolver: self.resolver.as_ref(),
        };
        engine.run(&self.cases, value)
    }

    /// Dispatches `true`, for case lists whose patterns are conditions.
    ///
    /// ```
    /// use standout_switch::{Switch, Value};
    ///
    /// let name = "foo";
    /// let check = Switch::builder()
    ///     .case(name == "foo", "This is foo")
    ///     .otherwise("This is default")
    ///     .build();
    ///
    /// assert_eq!(check.evaluate().unwrap().into_single(), Some(Value::from("This is foo")));
    /// ```
    pub fn evaluate(&self) -> Result<Outcome> {
        self.dispatch(true)
    }

    /// Returns the case list.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Returns the resolved flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("cases", &self.cases)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for [`Switch`].
///
/// Entries are kept in the order they are added.
#[derive(Debug, Clone, Default)]
pub struct SwitchBuilder {
    cases: Vec<Case>,
    options: Options,
}

impl SwitchBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        SwitchBuilder::default()
    }

    // ========================================================================
    // Entries
    // ========================================================================

    /// Adds an entry.
    pub fn push(mut self, case: impl Into<Case>) -> Self {
        self.cases.push(case.into());
        self
    }

    /// Adds several entries.
    pub fn extend<I>(mut self, cases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Case>,
    {
        self.cases.extend(cases.into_iter().map(Into::into));
        self
    }

    /// Adds a pattern entry.
    pub fn case(self, pattern: impl Into<Pattern>, result: impl Into<CaseResult>) -> Self {
        self.push(Case::new(pattern, result))
    }

    /// Adds a pattern entry that falls through to the next entry.
    pub fn fall_through(self, pattern: impl Into<Pattern>, result: impl Into<CaseResult>) -> Self {
        self.push(Case::fall_through(pattern, result))
    }

    /// Adds a regex entry.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn regex_case(self, pattern: &str, result: impl Into<CaseResult>) -> Result<Self> {
        Ok(self.case(Pattern::regex(pattern)?, result))
    }

    /// Adds a regex entry that falls through to the next entry.
    pub fn regex_fall_through(self, pattern: &str, result: impl Into<CaseResult>) -> Result<Self> {
        Ok(self.fall_through(Pattern::regex(pattern)?, result))
    }

    /// Adds a default entry.
    pub fn otherwise(self, result: impl Into<CaseResult>) -> Self {
        self.push(Case::otherwise(result))
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Layers options on top of what the builder already has.
    pub fn options(mut self, options: Options) -> Self {
        self.options = self.options.merge(&options);
        self
    }

    /// Sets `return_many`.
    pub fn return_many(mut self, enabled: bool) -> Self {
        self.options = self.options.return_many(enabled);
        self
    }

    /// Sets `strict`.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.options = self.options.strict(enabled);
        self
    }

    /// Sets `accept_truthy_function_return`.
    pub fn accept_truthy_function_return(mut self, enabled: bool) -> Self {
        self.options = self.options.accept_truthy_function_return(enabled);
        self
    }

    /// Sets `catch_function_errors`.
    pub fn catch_function_errors(mut self, enabled: bool) -> Self {
        self.options = self.options.catch_function_errors(enabled);
        self
    }

    /// Sets `perform_replace_on_regex`.
    pub fn perform_replace_on_regex(mut self, enabled: bool) -> Self {
        self.options = self.options.perform_replace_on_regex(enabled);
        self
    }

    /// Sets `run_result_function`.
    pub fn run_result_function(mut self, enabled: bool) -> Self {
        self.options = self.options.run_result_function(enabled);
        self
    }

    /// Sets `stop_fall_through`.
    pub fn stop_fall_through(mut self, enabled: bool) -> Self {
        self.options = self.options.stop_fall_through(enabled);
        self
    }

    /// Sets the matcher strategy.
    pub fn matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.options = self.options.matcher(matcher);
        self
    }

    /// Sets the result resolver strategy.
    pub fn resolver<R: Resolver + 'static>(mut self, resolver: R) -> Self {
        self.options = self.options.resolver(resolver);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalizes the switch.
    pub fn build(self) -> Switch {
        Switch::with_options(self.cases, self.options)
    }
}

/// Produces switches that share default options.
///
/// Per-switch options win over the factory's, which win over the engine
/// defaults, field by field.
///
/// # Example
///
/// ```
/// use standout_switch::{Case, Options, SwitchFactory, Value};
///
/// let collect_all = SwitchFactory::new(Options::new().return_many(true));
///
/// let tags = collect_all.switch(vec![
///     Case::new(standout_switch::gt(0), "positive"),
///     Case::new(standout_switch::lt(100), "small"),
/// ]);
/// assert_eq!(
///     tags.dispatch(5).unwrap().into_many(),
///     vec![Value::from("positive"), Value::from("small")]
/// );
///
/// // Overrides still apply per switch.
/// let first_only = collect_all.build(
///     vec![Case::new(standout_switch::gt(0), "positive")],
///     Options::new().return_many(false),
/// );
/// assert!(!first_only.flags().return_many);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SwitchFactory {
    defaults: Options,
}

impl SwitchFactory {
    /// Creates a factory with the given defaults.
    pub fn new(defaults: Options) -> Self {
        SwitchFactory { defaults }
    }

    /// Returns the factory defaults.
    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    /// Builds a switch, layering `overrides` over the factory defaults.
    pub fn build(&self, cases: impl IntoIterator<Item = Case>, overrides: Options) -> Switch {
        Switch::with_options(cases, self.defaults.merge(&overrides))
    }

    /// Builds a switch with the factory defaults only.
    pub fn switch(&self, cases: impl IntoIterator<Item = Case>) -> Switch {
        self.build(cases, Options::new())
    }

    /// Starts a builder pre-seeded with the factory defaults.
    pub fn builder(&self) -> SwitchBuilder {
        SwitchBuilder {
            cases: Vec::new(),
            options: self.defaults.clone(),
        }
    }
}
