use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clubs")]
pub struct Model {
    /// Lowercase club code, immutable once created
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::club_tag::Entity")]
    ClubTag,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::club_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::club_tag::Relation::Club.def().rev())
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite::Relation::Club.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
