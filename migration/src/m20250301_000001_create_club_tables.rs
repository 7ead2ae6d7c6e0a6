use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clubs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clubs::Code).string_len(100).not_null().primary_key())
                    .col(ColumnDef::new(Clubs::Name).string_len(100).not_null().unique_key())
                    .col(ColumnDef::new(Clubs::Description).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Name).string().not_null().primary_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClubTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ClubTags::ClubCode).string_len(100).not_null())
                    .col(ColumnDef::new(ClubTags::TagName).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(ClubTags::ClubCode)
                            .col(ClubTags::TagName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_tags_club_code")
                            .from(ClubTags::Table, ClubTags::ClubCode)
                            .to(Clubs::Table, Clubs::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_tags_tag_name")
                            .from(ClubTags::Table, ClubTags::TagName)
                            .to(Tags::Table, Tags::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookup for tag counts and tag search
        manager
            .create_index(
                Index::create()
                    .name("idx_club_tags_tag_name")
                    .table(ClubTags::Table)
                    .col(ClubTags::TagName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Clubs {
    Table,
    Code,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Name,
}

#[derive(DeriveIden)]
enum ClubTags {
    Table,
    ClubCode,
    TagName,
}
