//! Typed bind values shared by both backends.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A value bound to a statement placeholder. Each variant carries an `Option`
/// so a missing body field is sent as a typed NULL.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Text(Option<String>),
    Real(Option<f64>),
    Bool(Option<bool>),
    Int(i64),
}

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;
pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;
pub type SqliteQueryAs<'q, O> = QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;

pub fn bind_pg<'q>(query: PgQuery<'q>, params: &[BindValue]) -> PgQuery<'q> {
    params.iter().fold(query, |q, p| match p.clone() {
        BindValue::Text(v) => q.bind(v),
        BindValue::Real(v) => q.bind(v),
        BindValue::Bool(v) => q.bind(v),
        BindValue::Int(v) => q.bind(v),
    })
}

pub fn bind_pg_as<'q, O>(query: PgQueryAs<'q, O>, params: &[BindValue]) -> PgQueryAs<'q, O> {
    params.iter().fold(query, |q, p| match p.clone() {
        BindValue::Text(v) => q.bind(v),
        BindValue::Real(v) => q.bind(v),
        BindValue::Bool(v) => q.bind(v),
        BindValue::Int(v) => q.bind(v),
    })
}

pub fn bind_sqlite<'q>(query: SqliteQuery<'q>, params: &[BindValue]) -> SqliteQuery<'q> {
    params.iter().fold(query, |q, p| match p.clone() {
        BindValue::Text(v) => q.bind(v),
        BindValue::Real(v) => q.bind(v),
        BindValue::Bool(v) => q.bind(v),
        BindValue::Int(v) => q.bind(v),
    })
}

pub fn bind_sqlite_as<'q, O>(query: SqliteQueryAs<'q, O>, params: &[BindValue]) -> SqliteQueryAs<'q, O> {
    params.iter().fold(query, |q, p| match p.clone() {
        BindValue::Text(v) => q.bind(v),
        BindValue::Real(v) => q.bind(v),
        BindValue::Bool(v) => q.bind(v),
        BindValue::Int(v) => q.bind(v),
    })
}
