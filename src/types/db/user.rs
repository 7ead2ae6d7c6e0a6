use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,

    // Session pair: both set or both null
    #[sea_orm(unique)]
    pub session_token_hash: Option<String>,
    pub session_expires_at: Option<i64>,

    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite::Relation::Club.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
