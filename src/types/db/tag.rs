use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::club_tag::Entity")]
    ClubTag,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        super::club_tag::Relation::Club.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::club_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
