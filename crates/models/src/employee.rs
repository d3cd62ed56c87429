use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::company;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values written by [`save`]; the id travels separately.
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    pub name: &'a str,
    pub age: i32,
    pub gender: &'a str,
    pub salary: i32,
    pub company_id: Option<i32>,
}

impl Fields<'_> {
    fn into_active(self, id: Option<i32>) -> ActiveModel {
        let mut am = ActiveModel {
            name: Set(self.name.to_string()),
            age: Set(self.age),
            gender: Set(self.gender.to_string()),
            salary: Set(self.salary),
            company_id: Set(self.company_id),
            ..Default::default()
        };
        if let Some(id) = id { am.id = Set(id); }
        am
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(ModelError::db)
}

/// `limit` employees starting at row `offset`, ascending id order.
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

pub async fn find_by_gender(db: &DatabaseConnection, gender: &str) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::Gender.eq(gender))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(ModelError::db)
}

/// Employees whose `company_id` is any of `company_ids`.
pub async fn find_by_company_ids(db: &DatabaseConnection, company_ids: &[i32]) -> Result<Vec<Model>, ModelError> {
    if company_ids.is_empty() {
        return Ok(Vec::new());
    }
    Entity::find()
        .filter(Column::CompanyId.is_in(company_ids.iter().copied()))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(ModelError::db)
}

/// Insert when `id` is `None`, otherwise overwrite the row with that id
/// (inserting it if the row is gone).
pub async fn save(db: &DatabaseConnection, id: Option<i32>, fields: Fields<'_>) -> Result<Model, ModelError> {
    let am = fields.into_active(id);
    if id.is_none() {
        return am.insert(db).await.map_err(ModelError::db);
    }
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
