//! Link Repository

use shared::models::LinkKind;
use sqlx::{SqliteConnection, SqlitePool};

use super::RepoResult;

/// Record the link if absent. Returns whether a new row was written.
pub async fn ensure(
    conn: &mut SqliteConnection,
    kind: LinkKind,
    left_id: &str,
    right_id: &str,
) -> RepoResult<bool> {
    let (left, right) = kind.columns();
    let sql = format!(
        "INSERT INTO {table} ({left}, {right}) VALUES (?1, ?2) ON CONFLICT DO NOTHING",
        table = kind.table()
    );
    let result = sqlx::query(&sql)
        .bind(left_id)
        .bind(right_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// All pairs of one link kind as `(left, right)`, sorted
pub async fn find_all(pool: &SqlitePool, kind: LinkKind) -> RepoResult<Vec<(String, String)>> {
    let (left, right) = kind.columns();
    let sql = format!(
        "SELECT {left}, {right} FROM {table} ORDER BY {left}, {right}",
        table = kind.table()
    );
    Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
}
