//! Runtime value types for dispatch.
//!
//! The [`Value`] enum is what a switch is dispatched on, what predicates
//! return, and what results resolve to. Besides the usual scalar and container
//! variants it can carry a [`Function`], so a function can be returned as a
//! result without being invoked.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::function::Function;

/// Dynamic value flowing through a switch.
///
/// # Example
///
/// ```
/// use standout_switch::Value;
///
/// assert!(Value::from("foo").is_truthy());
/// assert!(!Value::from(0).is_truthy());
///
/// // Strict equality is numeric across representations.
/// assert_eq!(Value::from(1u8), Value::from(1.0));
///
/// // Loose equality coerces strings and booleans.
/// assert!(Value::from(1).loose_eq(&Value::from("1")));
/// assert!(!Value::from(1).strict_eq(&Value::from("1")));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value.
    String(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// String-keyed map of values.
    Map(BTreeMap<String, Value>),
    /// A callable carried as data.
    Function(Function),
}

impl Value {
    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this is a `Function` value.
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the number as `f64`, if present.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::to_f64)
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the list, if present.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Extracts the map, if present.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Extracts the function, if present.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Looks up a key in a map value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns the name of this value's variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
        }
    }

    /// Truthiness: `Null`, `false`, zero, NaN and `""` are falsy.
    ///
    /// Containers and functions are truthy even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => {
                let n = n.to_f64();
                n != 0.0 && !n.is_nan()
            }
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) | Value::Function(_) => true,
        }
    }

    /// Numeric coercion used by loose equality and the comparators.
    ///
    /// `Null` is 0, booleans are 0/1, strings are parsed after trimming (empty
    /// is 0). Strings accept decimal literals with an optional sign and
    /// exponent, `0x`/`0o`/`0b` integers, and `Infinity` with an optional
    /// sign. Anything that does not convert is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => n.to_f64(),
            Value::String(s) => parse_number(s),
            Value::List(_) | Value::Map(_) | Value::Function(_) => f64::NAN,
        }
    }

    /// Exact equality: same variant and same content.
    ///
    /// Numbers compare by numeric value (NaN equals nothing), containers
    /// compare structurally, functions compare by identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.compare(*b) == Some(Ordering::Equal),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.strict_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.strict_eq(vb))
            }
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Coercive equality.
    ///
    /// Same-variant values use [`strict_eq`](Self::strict_eq). Otherwise
    /// `Null` only equals `Null`, booleans become 0/1, and a string compared
    /// with a number is converted with [`to_number`](Self::to_number).
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Bool(b), other) if !other.is_bool() => {
                Value::from(u8::from(*b)).loose_eq(other)
            }
            (this, Value::Bool(b)) if !this.is_bool() => {
                this.loose_eq(&Value::from(u8::from(*b)))
            }
            (Value::Number(n), Value::String(_)) | (Value::String(_), Value::Number(n)) => {
                let s = if self.is_string() { self } else { other };
                n.to_f64() == s.to_number()
            }
            _ => self.strict_eq(other),
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    match trimmed {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0, |acc, c| {
                c.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // Keeps `f64::from_str` from accepting "inf" and "nan".
    let decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if decimal {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Equality and ordering are numeric, so `I64(1) == F64(1.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),

            // Integer pairs stay exact
            (Number::I64(a), Number::U64(b)) => Some(match u64::try_from(a) {
                Ok(a) => a.cmp(&b),
                Err(_) => Ordering::Less,
            }),
            (Number::U64(_), Number::I64(_)) => other.compare(self).map(Ordering::reverse),

            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$source> for Value {
                fn from(n: $source) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_checks() {
        assert!(Value::from("test").is_string());
        assert!(Value::from(42).is_number());
        assert!(Value::from(true).is_bool());
        assert!(Value::Null.is_null());
        assert!(Value::from(Function::new(|_: &Value| 0)).is_function());
    }

    #[test]
    fn value_extractors() {
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from(42).as_number(), Some(Number::I64(42)));
        assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));

        // Wrong type returns None
        assert_eq!(Value::from("test").as_number(), None);
        assert_eq!(Value::from(1).as_str(), None);
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());

        assert!(Value::from(true).is_truthy());
        assert!(Value::from(-1).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::List(vec![]).is_truthy());
        assert!(Value::Map(BTreeMap::new()).is_truthy());
    }

    #[test]
    fn strict_equality() {
        assert!(Value::from("foo").strict_eq(&Value::from("foo")));
        assert!(!Value::from("foo").strict_eq(&Value::from("Foo")));
        assert!(Value::from(1i64).strict_eq(&Value::from(1u64)));
        assert!(Value::from(2).strict_eq(&Value::from(2.0)));
        assert!(!Value::from(1).strict_eq(&Value::from("1")));
        assert!(!Value::from(1).strict_eq(&Value::from(true)));
        assert!(!Value::from(f64::NAN).strict_eq(&Value::from(f64::NAN)));
        assert!(Value::from(vec![1, 2]).strict_eq(&Value::from(vec![1, 2])));
    }

    #[test]
    fn loose_equality() {
        assert!(Value::from(1).loose_eq(&Value::from("1")));
        assert!(Value::from("2").loose_eq(&Value::from(2)));
        assert!(Value::from(" 3 ").loose_eq(&Value::from(3)));
        assert!(Value::from(0).loose_eq(&Value::from("")));
        assert!(Value::from(true).loose_eq(&Value::from(1)));
        assert!(Value::from("1").loose_eq(&Value::from(true)));
        assert!(Value::from(false).loose_eq(&Value::from("0")));
        assert!(Value::Null.loose_eq(&Value::Null));

        assert!(!Value::Null.loose_eq(&Value::from(0)));
        assert!(!Value::from("abc").loose_eq(&Value::from(0)));
        assert!(!Value::from("1").loose_eq(&Value::from("1.0")));
        assert!(!Value::from(true).loose_eq(&Value::from(2)));
    }

    #[test]
    fn number_comparisons_same_type() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::U64(10).compare(Number::U64(5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::F64(5.0).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(-1).compare(Number::U64(0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::U64(u64::MAX).compare(Number::I64(i64::MAX)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(Number::F64(f64::NAN).compare(Number::I64(1)), None);
    }

    #[test]
    fn to_number_coercion() {
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::from(true).to_number(), 1.0);
        assert_eq!(Value::from("  42 ").to_number(), 42.0);
        assert_eq!(Value::from("").to_number(), 0.0);
        assert!(Value::from("4x").to_number().is_nan());
        assert!(Value::List(vec![]).to_number().is_nan());

        assert_eq!(Value::from("-1.5e2").to_number(), -150.0);
        assert_eq!(Value::from(".5").to_number(), 0.5);
        assert_eq!(Value::from("0x10").to_number(), 16.0);
        assert_eq!(Value::from("0B101").to_number(), 5.0);
        assert_eq!(Value::from("0o17").to_number(), 15.0);
        assert!(Value::from("0x").to_number().is_nan());
        assert!(Value::from("0xfg").to_number().is_nan());
        assert!(Value::from("-0x10").to_number().is_nan());

        assert_eq!(Value::from("Infinity").to_number(), f64::INFINITY);
        assert_eq!(Value::from(" -Infinity ").to_number(), f64::NEG_INFINITY);
        for word in ["inf", "infinity", "INFINITY", "nan", "NaN", "-inf"] {
            assert!(Value::from(word).to_number().is_nan(), "{word}");
        }

        assert!(Value::from(16).loose_eq(&Value::from("0x10")));
        assert!(!Value::from(f64::INFINITY).loose_eq(&Value::from("inf")));
    }

    #[test]
    fn collection_conversions() {
        let map: Value = [("type", "foo")].into_iter().collect();
        assert_eq!(map.get("type"), Some(&Value::from("foo")));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
