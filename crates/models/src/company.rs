use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::employee;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Employee => Entity::has_many(employee::Entity).into() }
    }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// All companies in ascending id order.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(ModelError::db)
}

/// `limit` companies starting at row `offset`, ascending id order.
pub async fn find_slice(db: &DatabaseConnection, offset: u64, limit: u64) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(ModelError::db)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(ModelError::db)
}

/// Insert when `id` is `None`, otherwise overwrite the row with that id
/// (inserting it if the row is gone).
pub async fn save(db: &DatabaseConnection, id: Option<i32>, name: &str) -> Result<Model, ModelError> {
    let Some(id) = id else {
        let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
        return am.insert(db).await.map_err(ModelError::db);
    };
    let am = ActiveModel { id: Set(id), name: Set(name.to_string()) };
    match am.clone().update(db).await {
        Ok(updated) => Ok(updated),
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => am.insert(db).await.map_err(ModelError::db),
        Err(e) => Err(ModelError::db(e)),
    }
}

pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(())
}
