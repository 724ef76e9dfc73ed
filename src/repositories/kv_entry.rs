//! Key-value repository for database operations.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::entities::kv_entry;

/// Repository for key-value entry operations.
pub struct KvEntryRepository;

impl KvEntryRepository {
    /// Get a single entry by key.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<kv_entry::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        kv_entry::Entity::find()
            .filter(kv_entry::Column::Key.eq(key))
            .one(conn)
            .await
    }

    /// Insert the entry, replacing the value if the key already exists.
    pub async fn upsert<C>(conn: &C, key: &str, value: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let entry = kv_entry::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        };

        kv_entry::Entity::insert(entry)
            .on_conflict(
                OnConflict::column(kv_entry::Column::Key)
                    .update_column(kv_entry::Column::Value)
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Delete an entry by key. Deleting a missing key is not an error.
    pub async fn delete<C>(conn: &C, key: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        kv_entry::Entity::delete_many()
            .filter(kv_entry::Column::Key.eq(key))
            .exec(conn)
            .await?;
        Ok(())
    }
}
