//! Builds the parameterized SELECT, INSERT, UPDATE, DELETE statements for the
//! `movies` table. Identifiers are fixed; values are always placeholders.

use super::params::BindValue;
use crate::models::{MovieChanges, NewMovie};

pub const TABLE: &str = "movies";

/// Writable columns with their PostgreSQL type, in insert order.
const COLUMNS: &[(&str, &str)] = &[
    ("name", "text"),
    ("genre", "text"),
    ("rating", "double precision"),
    ("explicit", "boolean"),
];

/// Placeholder flavour of the target database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// `$1::type` placeholders with explicit casts.
    Postgres,
    /// `?` placeholders; SQLite applies column affinity itself.
    Sqlite,
}

impl Dialect {
    fn placeholder(self, n: usize, pg_type: &str) -> String {
        match self {
            Dialect::Postgres => format!("${}::{}", n, pg_type),
            Dialect::Sqlite => "?".to_string(),
        }
    }
}

/// Quote identifier (safe: only from the fixed column list).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn select_column_list() -> String {
    std::iter::once("id")
        .chain(COLUMNS.iter().map(|(name, _)| *name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, ordered by id.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        quoted(TABLE),
        quoted("id")
    );
    q
}

/// SELECT rows whose id equals the raw path value. On PostgreSQL the value is
/// cast server-side, so a non-numeric id becomes a database error.
pub fn select_by_id(dialect: Dialect, id: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Text(Some(id.to_string())));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(),
        quoted(TABLE),
        quoted("id"),
        dialect.placeholder(n, "bigint")
    );
    q
}

/// INSERT every writable column; absent body fields are bound as NULL.
pub fn insert(dialect: Dialect, movie: &NewMovie) -> QueryBuf {
    let mut q = QueryBuf::new();
    let values = [
        BindValue::Text(movie.name.clone()),
        BindValue::Text(movie.genre.clone()),
        BindValue::Real(movie.rating),
        BindValue::Bool(movie.explicit),
    ];
    let mut cols = Vec::with_capacity(COLUMNS.len());
    let mut placeholders = Vec::with_capacity(COLUMNS.len());
    for ((name, pg_type), value) in COLUMNS.iter().zip(values) {
        let n = q.push_param(value);
        cols.push(quoted(name));
        placeholders.push(dialect.placeholder(n, pg_type));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(TABLE),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list()
    );
    q
}

/// UPDATE by id: SET only the fields present in `changes`. Returns `None`
/// when there is nothing to set.
pub fn update(dialect: Dialect, id: &str, changes: &MovieChanges) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let present = [
        changes.name.clone().map(|v| BindValue::Text(Some(v))),
        changes.genre.clone().map(|v| BindValue::Text(Some(v))),
        changes.rating.map(|v| BindValue::Real(Some(v))),
        changes.explicit.map(|v| BindValue::Bool(Some(v))),
    ];
    let mut sets = Vec::new();
    for ((name, pg_type), value) in COLUMNS.iter().zip(present) {
        let Some(value) = value else { continue };
        let n = q.push_param(value);
        sets.push(format!("{} = {}", quoted(name), dialect.placeholder(n, pg_type)));
    }
    if sets.is_empty() {
        return None;
    }
    let n = q.push_param(BindValue::Text(Some(id.to_string())));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(TABLE),
        sets.join(", "),
        quoted("id"),
        dialect.placeholder(n, "bigint")
    );
    Some(q)
}

/// DELETE by an already coerced integer id.
pub fn delete(dialect: Dialect, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {}",
        quoted(TABLE),
        quoted("id"),
        dialect.placeholder(n, "bigint")
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_orders_by_id() {
        assert_eq!(
            select_all().sql,
            r#"SELECT "id", "name", "genre", "rating", "explicit" FROM "movies" ORDER BY "id""#
        );
    }

    #[test]
    fn select_by_id_casts_on_postgres_only() {
        let pg = select_by_id(Dialect::Postgres, "7");
        assert!(pg.sql.ends_with(r#"WHERE "id" = $1::bigint"#));
        assert_eq!(pg.params, vec![BindValue::Text(Some("7".into()))]);

        let lite = select_by_id(Dialect::Sqlite, "7");
        assert!(lite.sql.ends_with(r#"WHERE "id" = ?"#));
    }

    #[test]
    fn insert_binds_missing_fields_as_null() {
        let movie = NewMovie {
            name: Some("Titanic".into()),
            ..Default::default()
        };
        let q = insert(Dialect::Postgres, &movie);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "movies" ("name", "genre", "rating", "explicit") VALUES ($1::text, $2::text, $3::double precision, $4::boolean) RETURNING "id", "name", "genre", "rating", "explicit""#
        );
        assert_eq!(
            q.params,
            vec![
                BindValue::Text(Some("Titanic".into())),
                BindValue::Text(None),
                BindValue::Real(None),
                BindValue::Bool(None),
            ]
        );
    }

    #[test]
    fn update_sets_only_present_fields() {
        let changes = MovieChanges {
            rating: Some(9.0),
            explicit: Some(false),
            ..Default::default()
        };
        let q = update(Dialect::Postgres, "3", &changes).unwrap();
        assert_eq!(
            q.sql,
            r#"UPDATE "movies" SET "rating" = $1::double precision, "explicit" = $2::boolean WHERE "id" = $3::bigint"#
        );
        assert_eq!(q.params.last(), Some(&BindValue::Text(Some("3".into()))));

        let q = update(Dialect::Sqlite, "3", &changes).unwrap();
        assert_eq!(q.sql, r#"UPDATE "movies" SET "rating" = ?, "explicit" = ? WHERE "id" = ?"#);
    }

    #[test]
    fn update_without_changes_builds_nothing() {
        assert!(update(Dialect::Sqlite, "1", &MovieChanges::default()).is_none());
    }

    #[test]
    fn delete_binds_integer_id() {
        let q = delete(Dialect::Sqlite, 42);
        assert_eq!(q.sql, r#"DELETE FROM "movies" WHERE "id" = ?"#);
        assert_eq!(q.params, vec![BindValue::Int(42)]);
    }
}
