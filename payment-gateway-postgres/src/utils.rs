use heapless::String as HeaplessString;
use payment_gateway_db::RepositoryError;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Converts a row, reporting failures as [`RepositoryError::Decode`].
pub fn decode_row<T: TryFromRow<PgRow>>(row: &PgRow) -> Result<T, RepositoryError> {
    T::try_from_row(row).map_err(|e| RepositoryError::Decode(e.to_string()))
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Parses a text column through the target type's `FromStr`.
pub fn get_parsed<T>(row: &PgRow, col_name: &str) -> Result<T, Box<dyn Error + Send + Sync>>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    let s: String = row.try_get(col_name)?;
    Ok(s.parse::<T>()?)
}

/// Maps a unique-constraint violation to [`RepositoryError::Conflict`].
pub fn map_unique_violation(err: sqlx::Error, field: &'static str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Conflict(field),
        _ => RepositoryError::Database(err),
    }
}
