use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        category_id: i32,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a category, returning `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        category_id: i32,
        name: &str,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let category = match self.get_by_id(category_id).await? {
            Some(category) => category,
            None => return Ok(None),
        };

        let mut category_am = category.into_active_model();
        category_am.name = ActiveValue::Set(name.to_string());

        let category = category_am.update(self.db).await?;

        Ok(Some(category))
    }

    /// Deletes a category
    ///
    /// Fails while products still reference the category. Returns OK regardless of the
    /// category existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
