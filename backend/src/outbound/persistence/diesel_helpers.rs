//! Shared helpers for Diesel repository implementations.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => connection(message),
    }
}

/// Map Diesel errors into query/connection constructors.
///
/// The Diesel detail is logged at `debug`; the port error carries a short
/// description of the failure class.
pub fn map_basic_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    operation: &str,
    query: Q,
    connection: C,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DeserializationError(_) => query("row deserialisation failed"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

/// Collect row conversion results, mapping the first error through `map_err`.
pub fn collect_rows<T, E>(
    results: impl Iterator<Item = Result<T, String>>,
    map_err: impl FnOnce(String) -> E,
) -> Result<Vec<T>, E> {
    results.collect::<Result<Vec<_>, _>>().map_err(map_err)
}

/// Build an `ILIKE` pattern matching `term` as a literal substring.
///
/// `\`, `%` and `_` are escaped with the default backslash escape so they
/// match themselves.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Convert a domain result cap into a SQL `LIMIT`, saturating at `i64::MAX`.
pub fn limit_to_i64(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum TestError {
        Query(String),
        Connection(String),
    }

    fn query(message: &'static str) -> TestError {
        TestError::Query(message.to_owned())
    }

    fn connection(message: &'static str) -> TestError {
        TestError::Connection(message.to_owned())
    }

    #[rstest]
    #[case("an", "%an%")]
    #[case("50%", "%50\\%%")]
    #[case("o_neil", "%o\\_neil%")]
    #[case("back\\slash", "%back\\\\slash%")]
    #[case("Zoë", "%Zoë%")]
    fn contains_pattern_escapes_like_metacharacters(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(contains_pattern(term), expected);
    }

    #[rstest]
    fn pool_errors_map_to_connection() {
        let mapped = map_basic_pool_error(PoolError::checkout("timed out"), TestError::Connection);
        assert_eq!(mapped, TestError::Connection("timed out".to_owned()));
    }

    #[rstest]
    fn not_found_maps_to_query() {
        let mapped = map_basic_diesel_error(
            diesel::result::Error::NotFound,
            "test read",
            query,
            connection,
        );
        assert_eq!(mapped, TestError::Query("record not found".to_owned()));
    }

    #[rstest]
    fn collect_rows_reports_first_failure() {
        let rows = vec![Ok(1), Err("bad row".to_owned()), Err("worse row".to_owned())];
        let result = collect_rows(rows.into_iter(), TestError::Query);
        assert_eq!(result, Err(TestError::Query("bad row".to_owned())));
    }

    #[rstest]
    #[case(50, 50)]
    #[case(usize::MAX, i64::MAX)]
    fn limit_saturates(#[case] limit: usize, #[case] expected: i64) {
        assert_eq!(limit_to_i64(limit), expected);
    }
}
