//! Database operations for groups

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::{GroupId, UserId};

/// Group row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Create a group with its creator and `members` as members
///
/// Runs in one transaction. Members are inserted as given: repeats and the
/// creator listed again produce extra membership rows, and member IDs are
/// not checked against the user table.
pub async fn create_group(
    pool: &SqlitePool,
    creator_id: UserId,
    name: &str,
    members: &[UserId],
) -> Result<Group, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let group = sqlx::query_as::<_, Group>(
        r#"
        INSERT INTO groups (name, creator_id, created_at)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, creator_id, created_at
        "#,
    )
    .bind(name)
    .bind(creator_id)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    for user_id in std::iter::once(&creator_id).chain(members) {
        sqlx::query("INSERT INTO group_members (group_id, user_id) VALUES (?1, ?2)")
            .bind(group.id)
            .bind(*user_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(group)
}

/// Member user IDs of a group in insertion order, repeats included
pub async fn group_members(pool: &SqlitePool, group_id: GroupId) -> Result<Vec<UserId>, sqlx::Error> {
    sqlx::query_scalar("SELECT user_id FROM group_members WHERE group_id = ?1 ORDER BY id")
        .bind(group_id)
        .fetch_all(pool)
        .await
}
