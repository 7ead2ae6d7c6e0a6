use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_club_tables::Clubs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Email).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string_len(20).not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::SessionTokenHash).string().null().unique_key())
                    .col(ColumnDef::new(Users::SessionExpiresAt).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Favorites::ClubCode).string_len(100).not_null())
                    .col(ColumnDef::new(Favorites::UserEmail).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Favorites::ClubCode)
                            .col(Favorites::UserEmail),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_club_code")
                            .from(Favorites::Table, Favorites::ClubCode)
                            .to(Clubs::Table, Clubs::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_email")
                            .from(Favorites::Table, Favorites::UserEmail)
                            .to(Users::Table, Users::Email)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_email")
                    .table(Favorites::Table)
                    .col(Favorites::UserEmail)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Email,
    Username,
    PasswordHash,
    SessionTokenHash,
    SessionExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    ClubCode,
    UserEmail,
}
