use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    /// Creates a new instance of [`UnitRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::unit::Model, DbErr> {
        let unit = entity::unit::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        unit.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        unit_id: i32,
    ) -> Result<Option<entity::unit::Model>, DbErr> {
        entity::prelude::Unit::find_by_id(unit_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::unit::Model>, DbErr> {
        entity::prelude::Unit::find()
            .order_by_asc(entity::unit::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a unit, returning `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        unit_id: i32,
        name: &str,
    ) -> Result<Option<entity::unit::Model>, DbErr> {
        let unit = match self.get_by_id(unit_id).await? {
            Some(unit) => unit,
            None => return Ok(None),
        };

        let mut unit_am = unit.into_active_model();
        unit_am.name = ActiveValue::Set(name.to_string());

        let unit = unit_am.update(self.db).await?;

        Ok(Some(unit))
    }

    /// Deletes a unit
    ///
    /// Fails while products still reference the unit. Returns OK regardless of the
    /// unit existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, unit_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Unit::delete_by_id(unit_id)
            .exec(self.db)
            .await
    }
}
