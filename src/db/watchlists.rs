//! Watchlist and movie-link persistence.
//!
//! Every statement runs in autocommit mode, so each successful mutation is
//! durable as soon as the call returns. Errors are returned as raw
//! `sqlx::Error`s; callers decide whether a failure is a duplicate or a
//! generic save failure.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{AddedMovie, Watchlist};

const WATCHLIST_COLUMNS: &str = "id, name, description, created_at";
const MOVIE_COLUMNS: &str = "id, imdb_id, created_at, watchlist_id";

/// Inserts a new watchlist, stamping it with `created_at` or the current time
pub async fn insert_watchlist(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    created_at: Option<DateTime<Utc>>,
) -> Result<Watchlist, sqlx::Error> {
    let sql = format!(
        "INSERT INTO watchlist (name, description, created_at) VALUES (?, ?, ?) RETURNING {WATCHLIST_COLUMNS}"
    );

    sqlx::query_as::<_, Watchlist>(&sql)
        .bind(name)
        .bind(description)
        .bind(created_at.unwrap_or_else(Utc::now))
        .fetch_one(pool)
        .await
}

pub async fn find_watchlist(pool: &SqlitePool, id: i64) -> Result<Option<Watchlist>, sqlx::Error> {
    let sql = format!("SELECT {WATCHLIST_COLUMNS} FROM watchlist WHERE id = ?");

    sqlx::query_as::<_, Watchlist>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_watchlists(pool: &SqlitePool) -> Result<Vec<Watchlist>, sqlx::Error> {
    let sql = format!("SELECT {WATCHLIST_COLUMNS} FROM watchlist ORDER BY id");

    sqlx::query_as::<_, Watchlist>(&sql).fetch_all(pool).await
}

/// Returns the watchlists among `ids` that exist, ordered by id
pub async fn find_watchlists_by_ids(
    pool: &SqlitePool,
    ids: &[i64],
) -> Result<Vec<Watchlist>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {WATCHLIST_COLUMNS} FROM watchlist WHERE id IN ("
    ));
    push_id_list(&mut builder, ids);
    builder.push(" ORDER BY id");

    let watchlists = builder.build_query_as::<Watchlist>().fetch_all(pool).await?;
    Ok(watchlists)
}

/// Renames/redescribes a watchlist; `None` when no row has that id
pub async fn update_watchlist(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    description: &str,
) -> Result<Option<Watchlist>, sqlx::Error> {
    let sql = format!(
        "UPDATE watchlist SET name = ?, description = ? WHERE id = ? RETURNING {WATCHLIST_COLUMNS}"
    );

    sqlx::query_as::<_, Watchlist>(&sql)
        .bind(name)
        .bind(description)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Deletes a watchlist and, through the foreign key, all of its movie links
pub async fn delete_watchlist(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM watchlist WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Links a movie to a watchlist unless the pair already exists
///
/// Returns `true` when a new link was created. The check and the insert are
/// one statement, so concurrent adds of the same pair cannot both succeed.
pub async fn insert_movie_if_absent(
    pool: &SqlitePool,
    watchlist_id: i64,
    imdb_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO added_movie (imdb_id, watchlist_id, created_at) VALUES (?, ?, ?) \
         ON CONFLICT (imdb_id, watchlist_id) DO NOTHING",
    )
    .bind(imdb_id)
    .bind(watchlist_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Removes one movie link; `false` when the watchlist did not contain it
pub async fn delete_movie(
    pool: &SqlitePool,
    watchlist_id: i64,
    imdb_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM added_movie WHERE watchlist_id = ? AND imdb_id = ?")
        .bind(watchlist_id)
        .bind(imdb_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Movie links of one watchlist, in the order they were added
pub async fn list_movies(
    pool: &SqlitePool,
    watchlist_id: i64,
) -> Result<Vec<AddedMovie>, sqlx::Error> {
    let sql = format!("SELECT {MOVIE_COLUMNS} FROM added_movie WHERE watchlist_id = ? ORDER BY id");

    sqlx::query_as::<_, AddedMovie>(&sql)
        .bind(watchlist_id)
        .fetch_all(pool)
        .await
}

/// Movie links belonging to any of `watchlist_ids`
pub async fn list_movies_for(
    pool: &SqlitePool,
    watchlist_ids: &[i64],
) -> Result<Vec<AddedMovie>, sqlx::Error> {
    if watchlist_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {MOVIE_COLUMNS} FROM added_movie WHERE watchlist_id IN ("
    ));
    push_id_list(&mut builder, watchlist_ids);
    builder.push(" ORDER BY id");

    let movies = builder.build_query_as::<AddedMovie>().fetch_all(pool).await?;
    Ok(movies)
}

pub async fn list_all_movies(pool: &SqlitePool) -> Result<Vec<AddedMovie>, sqlx::Error> {
    let sql = format!("SELECT {MOVIE_COLUMNS} FROM added_movie ORDER BY id");

    sqlx::query_as::<_, AddedMovie>(&sql).fetch_all(pool).await
}

/// Watchlists that contain `imdb_id`, in the order the movie was added to them
pub async fn find_watchlists_with_movie(
    pool: &SqlitePool,
    imdb_id: &str,
) -> Result<Vec<Watchlist>, sqlx::Error> {
    sqlx::query_as::<_, Watchlist>(
        "SELECT w.id, w.name, w.description, w.created_at \
         FROM watchlist w \
         JOIN added_movie m ON m.watchlist_id = w.id \
         WHERE m.imdb_id = ? \
         ORDER BY m.id",
    )
    .bind(imdb_id)
    .fetch_all(pool)
    .await
}

/// Appends `?, ?, ...)` with one bound parameter per id
fn push_id_list(builder: &mut QueryBuilder<'_, Sqlite>, ids: &[i64]) {
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
}
