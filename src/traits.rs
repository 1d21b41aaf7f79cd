use crate::validation::Validatable;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel, entity::prelude::*};

/// Value type of an entity's primary key (`String` for `Customers`).
pub type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub trait MergeIntoActiveModel<ActiveModelType> {
    /// Overwrite the fields present in this update model on `existing`,
    /// leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns `DbErr::Custom` when the payload holds values the table cannot store.
    fn merge_into_activemodel(self, existing: ActiveModelType) -> Result<ActiveModelType, DbErr>;
}

/// Generic repository over one entity.
///
/// Implemented by the API model of a resource. Each implementation supplies the
/// explicit conversions (`From<Model>`, `Into<ActiveModel>`, [`MergeIntoActiveModel`])
/// and the provided methods do the data access.
#[async_trait]
pub trait CRUDResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    Self::ActiveModelType: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync + IntoActiveModel<Self::ActiveModelType>,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait + Sync;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>;
    type CreateModel: Into<Self::ActiveModelType> + Validatable + Send;
    type UpdateModel: Send + Sync + MergeIntoActiveModel<Self::ActiveModelType>;
    type KeyType: Into<PrimaryKeyValue<Self::EntityType>>
        + Clone
        + std::fmt::Display
        + Send
        + Sync
        + 'static;

    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;
    const TABLE_NAME: &'static str;

    /// Every row of the table, unfiltered and unpaginated.
    async fn get_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let models = Self::EntityType::find().all(db).await?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    async fn get_one(db: &DatabaseConnection, id: Self::KeyType) -> Result<Self, DbErr> {
        let model = Self::EntityType::find_by_id(id)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "{} not found",
                Self::RESOURCE_NAME_SINGULAR
            )))?;
        Ok(Self::from(model))
    }

    async fn create(
        db: &DatabaseConnection,
        create_model: Self::CreateModel,
    ) -> Result<Self, DbErr> {
        create_model
            .validate()
            .map_err(|errors| DbErr::Custom(errors.to_string()))?;

        let active_model: Self::ActiveModelType = create_model.into();
        // insert reads the row back, so column defaults are included
        let model = active_model.insert(db).await?;
        Ok(Self::from(model))
    }

    async fn update(
        db: &DatabaseConnection,
        id: Self::KeyType,
        update_model: Self::UpdateModel,
    ) -> Result<Self, DbErr> {
        let model = Self::EntityType::find_by_id(id)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "{} not found",
                Self::RESOURCE_NAME_SINGULAR
            )))?;
        let existing: Self::ActiveModelType = model.clone().into_active_model();
        let updated_model = update_model.merge_into_activemodel(existing)?;

        // An empty body leaves nothing to write
        if !updated_model.is_changed() {
            return Ok(Self::from(model));
        }

        // The row can be deleted between the lookup and the write
        let updated = updated_model.update(db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => DbErr::RecordNotFound(format!(
                "{} not found",
                Self::RESOURCE_NAME_SINGULAR
            )),
            other => other,
        })?;
        Ok(Self::from(updated))
    }

    /// Deletes the row and returns its key. Zero affected rows is reported as
    /// `DbErr::RecordNotFound`, which is how concurrent deletes of the same key
    /// are told apart.
    async fn delete(db: &DatabaseConnection, id: Self::KeyType) -> Result<Self::KeyType, DbErr> {
        let res = Self::EntityType::delete_by_id(id.clone()).exec(db).await?;
        match res.rows_affected {
            0 => Err(DbErr::RecordNotFound(format!(
                "{} not found",
                Self::RESOURCE_NAME_SINGULAR
            ))),
            _ => Ok(id),
        }
    }
}
