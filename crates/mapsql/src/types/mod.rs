//! Binding [`Literal`]s with `tokio-postgres`.
//!
//! A literal does not know the column type it is compared with or stored in,
//! so the encoding is picked from the parameter type the server inferred:
//! an [`Literal::Int`] bound to an `int4` column is sent as a 4-byte integer,
//! to a `numeric` column as a decimal, and so on. Conversions that would lose
//! information (an `i64` that does not fit `int2`) fail instead of truncating.


use crate::value::Literal;
use bytes::BytesMut;
use rust_decimal::Decimal;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};

type BoxError = Box<dyn Error + Sync + Send>;

impl ToSql for Literal {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
        match self {
            Literal::Null => Ok(IsNull::Yes),
            Literal::Bool(v) => v.to_sql_checked(ty, out),
            Literal::Int(v) => int_to_sql(*v, ty, out),
            Literal::Float(v) => float_to_sql(*v, ty, out),
            Literal::Decimal(v) if is_text(ty) => v.to_string().to_sql_checked(ty, out),
            Literal::Decimal(v) => v.to_sql_checked(ty, out),
            Literal::Text(v) => v.as_str().to_sql_checked(ty, out),
            Literal::Date(v) => v.to_sql_checked(ty, out),
            Literal::DateTime(v) if *ty == Type::TIMESTAMPTZ => {
                v.and_utc().to_sql_checked(ty, out)
            }
            Literal::DateTime(v) => v.to_sql_checked(ty, out),
            Literal::Uuid(v) if is_text(ty) => v.to_string().to_sql_checked(ty, out),
            Literal::Uuid(v) => v.to_sql_checked(ty, out),
            Literal::Json(v) => v.to_sql_checked(ty, out),
        }
    }

    // Each variant checks the concrete type itself in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

fn int_to_sql(v: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(v)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(v)?.to_sql(ty, out),
        Type::FLOAT4 => (v as f32).to_sql(ty, out),
        Type::FLOAT8 => (v as f64).to_sql(ty, out),
        Type::NUMERIC => Decimal::from(v).to_sql(ty, out),
        _ if is_text(ty) => v.to_string().to_sql_checked(ty, out),
        _ => v.to_sql_checked(ty, out),
    }
}

fn float_to_sql(v: f64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::FLOAT4 => (v as f32).to_sql(ty, out),
        Type::NUMERIC => Decimal::try_from(v)?.to_sql(ty, out),
        _ if is_text(ty) => v.to_string().to_sql_checked(ty, out),
        _ => v.to_sql_checked(ty, out),
    }
}

fn is_text(ty: &Type) -> bool {
    matches!(
        *ty,
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN
    )
}
