//! Matching and result-resolution strategies.
//!
//! The engine never inspects patterns or results itself. It asks a
//! [`Matcher`] whether an entry matches and a [`Resolver`] what the entry
//! produces. Both come with default implementations, and both can be replaced
//! through [`Options`](crate::Options), either with a type implementing the
//! trait or with a closure of the same shape.
//!
//! Custom strategies usually handle a special case and delegate the rest:
//!
//! ```
//! use standout_switch::{DefaultMatcher, Flags, Matcher, Options, Pattern, Result, Switch, Value};
//!
//! // Compare maps by their "type" key only.
//! let by_type = |flags: &Flags, value: &Value, pattern: &Pattern| -> Result<bool> {
//!     match (value.get("type"), pattern.as_literal().and_then(|p| p.get("type"))) {
//!         (Some(a), Some(b)) => Ok(a == b),
//!         _ => DefaultMatcher.matches(flags, value, pattern),
//!     }
//! };
//!
//! let kind = Switch::with_options(
//!     vec![
//!         standout_switch::Case::new([("type", "foo")].into_iter().collect::<Value>(), "Type is foo"),
//!         standout_switch::Case::otherwise("Unknown type"),
//!     ],
//!     Options::new().matcher(by_type),
//! );
//!
//! let input: Value = [("type", "foo"), ("id", "7")].into_iter().collect();
//! assert_eq!(kind.dispatch(input).unwrap().into_single(), Some(Value::from("Type is foo")));
//! ```

use regex::{Captures, Regex};

use crate::case::CaseResult;
use crate::config::Flags;
use crate::error::Result;
use crate::pattern::Pattern;
use crate::value::Value;

/// Decides whether a pattern matches an input value.
pub trait Matcher: Send + Sync {
    /// Returns `Ok(true)` on a match. Errors abort the dispatch.
    fn matches(&self, flags: &Flags, value: &Value, pattern: &Pattern) -> Result<bool>;
}

/// Computes the output of a matched (or fired default) entry.
pub trait Resolver: Send + Sync {
    /// `pattern` is `None` for default entries.
    fn resolve(
        &self,
        flags: &Flags,
        value: &Value,
        pattern: Option<&Pattern>,
        result: &CaseResult,
    ) -> Result<Value>;
}

impl<F> Matcher for F
where
    F: Fn(&Flags, &Value, &Pattern) -> Result<bool> + Send + Sync,
{
    fn matches(&self, flags: &Flags, value: &Value, pattern: &Pattern) -> Result<bool> {
        self(flags, value, pattern)
    }
}

impl<F> Resolver for F
where
    F: Fn(&Flags, &Value, Option<&Pattern>, &CaseResult) -> Result<Value> + Send + Sync,
{
    fn resolve(
        &self,
        flags: &Flags,
        value: &Value,
        pattern: Option<&Pattern>,
        result: &CaseResult,
    ) -> Result<Value> {
        self(flags, value, pattern, result)
    }
}

/// The built-in matcher. See [`match_pattern`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMatcher;

impl Matcher for DefaultMatcher {
    fn matches(&self, flags: &Flags, value: &Value, pattern: &Pattern) -> Result<bool> {
        match_pattern(flags, value, pattern)
    }
}

/// The built-in result resolver. See [`resolve_result`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl Resolver for DefaultResolver {
    fn resolve(
        &self,
        flags: &Flags,
        value: &Value,
        pattern: Option<&Pattern>,
        result: &CaseResult,
    ) -> Result<Value> {
        resolve_result(flags, value, pattern, result)
    }
}

/// Default matching rules.
///
/// - Regex: the input must be a string the expression finds a match in.
/// - Predicate: the function's return must be truthy, or exactly `true` when
///   `accept_truthy_function_return` is off. With `catch_function_errors` on,
///   an error counts as no match; otherwise it is returned.
/// - Literal: strict equality, or loose equality when `strict` is off.
pub fn match_pattern(flags: &Flags, value: &Value, pattern: &Pattern) -> Result<bool> {
    match pattern {
        Pattern::Regex(re) => Ok(value.as_str().is_some_and(|s| re.is_match(s))),
        Pattern::Predicate(f) => {
            let returned = match f.call(value) {
                Ok(returned) => returned,
                Err(err) if flags.catch_function_errors => {
                    tracing::debug!(error = %err, "predicate failed, treating as no match");
                    return Ok(false);
                }
                Err(err) => return Err(err),
            };
            if flags.accept_truthy_function_return {
                Ok(returned.is_truthy())
            } else {
                Ok(matches!(returned, Value::Bool(true)))
            }
        }
        Pattern::Literal(expected) => {
            if flags.strict {
                Ok(expected.strict_eq(value))
            } else {
                Ok(expected.loose_eq(value))
            }
        }
    }
}

/// Default result rules.
///
/// A computed result is invoked with the input when `run_result_function` is
/// on and handed back as a [`Value::Function`] otherwise. Errors from the
/// function always propagate. For regex patterns with
/// `perform_replace_on_regex` on, a string output is used as a replacement
/// template for the first match within a string input.
///
/// Templates follow `String.prototype.replace`:
///
/// | Token | Inserts |
/// |-------|---------|
/// | `$$` | `$` |
/// | `$&` | the whole match |
/// | `` $` `` / `$'` | the input before / after the match |
/// | `$n`, `$nn` | group `n` (two digits when that group exists) |
/// | `$<name>` | the named group (only when the regex has named groups) |
///
/// References to groups that do not exist stay in the output literally, so
/// `"$1s"` is group 1 followed by `s`.
pub fn resolve_result(
    flags: &Flags,
    value: &Value,
    pattern: Option<&Pattern>,
    result: &CaseResult,
) -> Result<Value> {
    let output = match result {
        CaseResult::Computed(f) if flags.run_result_function => f.call(value)?,
        CaseResult::Computed(f) => Value::Function(f.clone()),
        CaseResult::Literal(v) => v.clone(),
    };

    if !flags.perform_replace_on_regex {
        return Ok(output);
    }

    match (pattern, value, &output) {
        (Some(Pattern::Regex(re)), Value::String(input), Value::String(template)) => {
            Ok(Value::String(replace_first(re, input, template)))
        }
        _ => Ok(output),
    }
}

fn replace_first(re: &Regex, input: &str, template: &str) -> String {
    let Some(caps) = re.captures(input) else {
        return input.to_string();
    };
    let Some(whole) = caps.get(0) else {
        return input.to_string();
    };

    let mut out = String::with_capacity(input.len() + template.len());
    out.push_str(&input[..whole.start()]);
    expand_template(re, &caps, input, template, &mut out);
    out.push_str(&input[whole.end()..]);
    out
}

fn expand_template(
    re: &Regex,
    caps: &Captures<'_>,
    input: &str,
    template: &str,
    out: &mut String,
) {
    let Some(whole) = caps.get(0) else {
        return;
    };
    let groups = caps.len() - 1;
    let has_names = re.capture_names().flatten().next().is_some();

    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let bytes = tail.as_bytes();

        rest = match bytes.first().copied() {
            Some(b'$') => {
                out.push('$');
                &tail[1..]
            }
            Some(b'&') => {
                out.push_str(whole.as_str());
                &tail[1..]
            }
            Some(b'`') => {
                out.push_str(&input[..whole.start()]);
                &tail[1..]
            }
            Some(b'\'') => {
                out.push_str(&input[whole.end()..]);
                &tail[1..]
            }
            Some(d) if d.is_ascii_digit() => {
                let one = usize::from(d - b'0');
                let two = bytes
                    .get(1)
                    .filter(|b| b.is_ascii_digit())
                    .map(|b| one * 10 + usize::from(b - b'0'));
                let group = match two {
                    Some(n) if (1..=groups).contains(&n) => Some((n, 2)),
                    _ if (1..=groups).contains(&one) => Some((one, 1)),
                    _ => None,
                };
                match group {
                    Some((index, width)) => {
                        // Groups that did not participate expand to nothing.
                        if let Some(m) = caps.get(index) {
                            out.push_str(m.as_str());
                        }
                        &tail[width..]
                    }
                    None => {
                        out.push('$');
                        tail
                    }
                }
            }
            Some(b'<') if has_names => match tail.find('>') {
                Some(close) => {
                    if let Some(m) = caps.name(&tail[1..close]) {
                        out.push_str(m.as_str());
                    }
                    &tail[close + 1..]
                }
                None => {
                    out.push('$');
                    tail
                }
            },
            _ => {
                out.push('$');
                tail
            }
        };
    }
    out.push_str(rest);
}

/// Curried form of the default matcher, bound to a set of flags.
pub fn default_matcher(flags: Flags) -> impl Fn(&Value, &Pattern) -> Result<bool> {
    move |value: &Value, pattern: &Pattern| match_pattern(&flags, value, pattern)
}

/// Curried form of the default resolver, bound to a set of flags.
pub fn default_resolver(
    flags: Flags,
) -> impl Fn(&Value, Option<&Pattern>, &CaseResult) -> Result<Value> {
    move |value: &Value, pattern: Option<&Pattern>, result: &CaseResult| {
        resolve_result(&flags, value, pattern, result)
    }
}
