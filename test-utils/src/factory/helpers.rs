//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an issue together with the artist and series it references.
///
/// All entities are created with default values. Use the individual factories if you need
/// to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((artist, series, issue))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_issue_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::artist::Model,
        entity::series::Model,
        entity::issue::Model,
    ),
    DbErr,
> {
    let artist = crate::factory::artist::create_artist(db).await?;
    let series = crate::factory::series::create_series(db).await?;
    let issue = crate::factory::issue::create_issue(db, artist.id, series.id).await?;

    Ok((artist, series, issue))
}
