use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::Username).string_len(50).null())
                    .col(ColumnDef::new(Accounts::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Accounts::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::FirstName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Accounts::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Accounts::GenderId).small_integer().null())
                    .col(ColumnDef::new(Accounts::BirthDay).date().null())
                    .col(ColumnDef::new(Accounts::PhoneNumber).string_len(32).null())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Accounts::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_gender_id")
                            .from(Accounts::Table, Accounts::GenderId)
                            .to(Genders::Table, Genders::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================
        // UNIQUENESS (active accounts only)
        // ============================================

        // A soft-deleted account releases its email and username.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_accounts_email_active
                ON accounts (email)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_accounts_username_active
                ON accounts (username)
                WHERE deleted_at IS NULL AND username IS NOT NULL;
                "#,
            )
            .await?;

        // ============================================
        // LOOKUP INDEXES
        // ============================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_accounts_deleted_at
                ON accounts (deleted_at)
                WHERE deleted_at IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_accounts_gender_id
                ON accounts (gender_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_accounts_email_active;
                DROP INDEX IF EXISTS idx_accounts_username_active;
                DROP INDEX IF EXISTS idx_accounts_deleted_at;
                DROP INDEX IF EXISTS idx_accounts_gender_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    GenderId,
    BirthDay,
    PhoneNumber,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Genders {
    Table,
    Id,
}
