//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{DomainError, EmailAddress, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity, revalidating invariants.
impl TryFrom<Model> for User {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(model.email)?;
        User::new(
            Some(model.id),
            model.name,
            email,
            model.active,
            model.created_at,
            model.updated_at,
        )
    }
}
