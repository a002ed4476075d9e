use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genders::Id)
                            .small_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genders::Title).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        // The service maps violations of this index to a duplicate title,
        // so its name is part of the contract.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_genders_title_unique
                ON genders (title);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_genders_title_unique")
            .await?;

        manager
            .drop_table(Table::drop().table(Genders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Genders {
    Table,
    Id,
    Title,
}
