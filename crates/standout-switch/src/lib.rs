//! Switch - Generalized multi-way dispatch over dynamic values.
//!
//! A switch holds an ordered list of case entries and a configuration. Each
//! dispatch tests an input value against the entries and produces the result
//! of the first match, or every eligible result in `return_many` mode. It
//! supports:
//!
//! - Three pattern kinds: regular expressions, predicates and literal values
//! - Literal or computed results
//! - Fall-through chains and default entries anywhere in the list
//! - Pluggable matching and result-resolution strategies
//! - Factories that share a configuration across many switches
//!
//! # Quick Start
//!
//! ```rust
//! use standout_switch::{gt, lt, Switch, Value};
//!
//! let size = Switch::builder()
//!     .case(lt(10), "small")
//!     .case(lt(100), "medium")
//!     .regex_case("^huge", "named huge")
//!     .unwrap()
//!     .otherwise("large")
//!     .build();
//!
//! assert_eq!(size.dispatch(4).unwrap().into_single(), Some(Value::from("small")));
//! assert_eq!(size.dispatch(42).unwrap().into_single(), Some(Value::from("medium")));
//! assert_eq!(size.dispatch("huge-ish").unwrap().into_single(), Some(Value::from("named huge")));
//! assert_eq!(size.dispatch(500).unwrap().into_single(), Some(Value::from("large")));
//!
//! // Collect every match instead.
//! let tags = Switch::builder()
//!     .case(gt(0), "positive")
//!     .case(lt(10), "single digit")
//!     .return_many(true)
//!     .build();
//! assert_eq!(
//!     tags.dispatch(7).unwrap().into_many(),
//!     vec![Value::from("positive"), Value::from("single digit")]
//! );
//! ```
//!
//! # Dispatch Semantics
//!
//! Entries are visited left to right. Once an entry has matched and neither
//! `return_many` nor an open fall-through chain applies, the remaining entries
//! are skipped:
//!
//! ```text
//! default entry  → fires when nothing matched yet, or a chain is open
//! case entry     → fires when the pattern matches, or a chain is open
//!                  (unless stop_fall_through)
//! ```
//!
//! A default entry never closes a chain and never counts as a match, so a
//! later case can still replace its result.
//!
//! # Configuration
//!
//! | Flag | Default | Effect |
//! |------|---------|--------|
//! | `return_many` | false | Collect every eligible result |
//! | `strict` | true | Strict vs loose equality for literals |
//! | `accept_truthy_function_return` | true | Any truthy predicate result matches |
//! | `catch_function_errors` | true | Predicate errors count as no match |
//! | `perform_replace_on_regex` | false | String results become replace templates |
//! | `run_result_function` | true | Invoke computed results |
//! | `stop_fall_through` | false | Chain entries must match their own pattern |

mod case;
mod comparator;
mod config;
mod engine;
mod error;
mod function;
mod op;
mod pattern;
mod strategy;
mod switch;
mod value;

// Re-export public API
pub use case::{Case, CaseResult};
pub use comparator::{gt, gte, lt, lte, Comparator};
pub use config::{Flags, Options};
pub use engine::Outcome;
pub use error::{BoxError, Result, SwitchError};
pub use function::Function;
pub use op::Op;
pub use pattern::Pattern;
pub use strategy::{
    default_matcher, default_resolver, match_pattern, resolve_result, DefaultMatcher,
    DefaultResolver, Matcher, Resolver,
};
pub use switch::{Switch, SwitchBuilder, SwitchFactory};
pub use value::{Number, Value};
