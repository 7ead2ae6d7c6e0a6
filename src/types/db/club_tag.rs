use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "club_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub club_code: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubCode",
        to = "super::club::Column::Code",
        on_delete = "Cascade"
    )]
    Club,
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagName",
        to = "super::tag::Column::Name",
        on_delete = "Cascade"
    )]
    Tag,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
