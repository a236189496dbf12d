//! Bindable literals and row values.
//!
//! A [`Literal`] is always sent to the database as a bound parameter. A
//! [`Value`] is what a row column holds: either a bound literal or a
//! caller-trusted raw SQL expression created through [`raw`]. The two are
//! separate variants so trusted SQL text can never be bound as data, and data
//! can never end up spliced into the statement text.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A scalar value bound as a statement parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Explicit SQL NULL.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
    /// JSON document (arrays and objects coming from plain data land here).
    Json(serde_json::Value),
}

impl Literal {
    /// `true` for [`Literal::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// `true` only for the empty string; `0` and `false` are not empty.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Literal::Text(s) if s.is_empty())
    }

    /// Short name of the variant, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Bool(_) => "bool",
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::Decimal(_) => "decimal",
            Literal::Text(_) => "text",
            Literal::Date(_) => "date",
            Literal::DateTime(_) => "datetime",
            Literal::Uuid(_) => "uuid",
            Literal::Json(_) => "json",
        }
    }
}

/// A column value inside a [`Row`](crate::Row).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Bound as a parameter.
    Bound(Literal),
    /// Inserted verbatim into the statement text. Only upsert `set_data`
    /// accepts this variant.
    Raw(String),
}

impl Value {
    pub fn is_raw(&self) -> bool {
        matches!(self, Value::Raw(_))
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Bound(lit) => Some(lit),
            Value::Raw(_) => None,
        }
    }
}

/// Mark `expr` as a trusted SQL expression, e.g. `raw("count + 1")`.
///
/// **Warning**: the text is not escaped. Never build it from user input.
pub fn raw(expr: impl Into<String>) -> Value {
    Value::Raw(expr.into())
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        Value::Bound(lit)
    }
}

macro_rules! impl_literal_from {
    ($($ty:ty => |$v:ident| $body:expr),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from($v: $ty) -> Self {
                    $body
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Bound(Literal::from(v))
                }
            }
        )*
    };
}

impl_literal_from! {
    bool => |v| Literal::Bool(v),
    i8 => |v| Literal::Int(i64::from(v)),
    i16 => |v| Literal::Int(i64::from(v)),
    i32 => |v| Literal::Int(i64::from(v)),
    i64 => |v| Literal::Int(v),
    u8 => |v| Literal::Int(i64::from(v)),
    u16 => |v| Literal::Int(i64::from(v)),
    u32 => |v| Literal::Int(i64::from(v)),
    f32 => |v| Literal::Float(f64::from(v)),
    f64 => |v| Literal::Float(v),
    Decimal => |v| Literal::Decimal(v),
    String => |v| Literal::Text(v),
    &str => |v| Literal::Text(v.to_string()),
    NaiveDate => |v| Literal::Date(v),
    NaiveDateTime => |v| Literal::DateTime(v),
    Uuid => |v| Literal::Uuid(v),
    serde_json::Value => |v| Literal::from_json(v),
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(v: Option<T>) -> Self {
        v.map_or(Literal::Null, Into::into)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Bound(Literal::from(v))
    }
}

impl Literal {
    /// Map a plain JSON value onto a literal.
    ///
    /// Integral numbers that fit `i64` become [`Literal::Int`], other numbers
    /// [`Literal::Float`]; arrays and objects are kept as [`Literal::Json`].
    pub fn from_json(v: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match v {
            J::Null => Literal::Null,
            J::Bool(b) => Literal::Bool(b),
            J::Number(n) => match n.as_i64() {
                Some(i) => Literal::Int(i),
                None => Literal::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            J::String(s) => Literal::Text(s),
            other @ (J::Array(_) | J::Object(_)) => Literal::Json(other),
        }
    }
}
