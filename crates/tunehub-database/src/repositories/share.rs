//! Share repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use tunehub_core::error::{AppError, ErrorKind};
use tunehub_core::result::AppResult;
use tunehub_entity::share::{Share, ShareTrack};

/// Loads shares for the public share endpoint.
///
/// Implementations must report both unknown and expired shares as
/// [`ErrorKind::NotFound`]; every other failure must use a different kind.
#[async_trait]
pub trait ShareStore: Send + Sync + 'static {
    /// Load a live share, with its tracks in display order.
    async fn load_share(&self, id: &str) -> AppResult<Share>;
}

/// Repository for share lookups backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: PgPool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareStore for ShareRepository {
    async fn load_share(&self, id: &str) -> AppResult<Share> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start transaction", e)
        })?;

        // Expired rows are filtered here and the visit is recorded in the same statement.
        let share = sqlx::query_as::<_, Share>(
            "UPDATE shares SET visit_count = visit_count + 1, last_visited_at = NOW() \
             WHERE id = $1 AND expires_at > NOW() \
             RETURNING id, description, expires_at, format, max_bit_rate, visit_count, \
             last_visited_at, created_at",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load share", e))?;

        let Some(mut share) = share else {
            return Err(AppError::not_found("Share not found"));
        };

        share.tracks = sqlx::query_as::<_, ShareTrack>(
            "SELECT m.id, m.title, m.artist, m.album, m.duration_seconds \
             FROM share_tracks st JOIN media_files m ON m.id = st.media_file_id \
             WHERE st.share_id = $1 ORDER BY st.position",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load share tracks", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit share visit", e)
        })?;

        Ok(share)
    }
}
