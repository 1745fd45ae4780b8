use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct StorageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StorageRepository<'a, C> {
    /// Creates a new instance of [`StorageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::storage::Model, DbErr> {
        let storage = entity::storage::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        storage.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        storage_id: i32,
    ) -> Result<Option<entity::storage::Model>, DbErr> {
        entity::prelude::Storage::find_by_id(storage_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::storage::Model>, DbErr> {
        entity::prelude::Storage::find()
            .order_by_asc(entity::storage::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a storage, returning `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        storage_id: i32,
        name: &str,
    ) -> Result<Option<entity::storage::Model>, DbErr> {
        let storage = match self.get_by_id(storage_id).await? {
            Some(storage) => storage,
            None => return Ok(None),
        };

        let mut storage_am = storage.into_active_model();
        storage_am.name = ActiveValue::Set(name.to_string());

        let storage = storage_am.update(self.db).await?;

        Ok(Some(storage))
    }

    /// Deletes a storage
    ///
    /// Fails while products still reference the storage. Returns OK regardless of the
    /// storage existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, storage_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Storage::delete_by_id(storage_id)
            .exec(self.db)
            .await
    }
}
