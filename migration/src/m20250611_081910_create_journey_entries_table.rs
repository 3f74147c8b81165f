use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JourneyEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JourneyEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::EntryType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Organization)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Location)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(JourneyEntries::StartDate).date().not_null())
                    .col(ColumnDef::new(JourneyEntries::EndDate).date())
                    .col(
                        ColumnDef::new(JourneyEntries::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Achievements)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Technologies)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Timeline reads filter by entry_type and sort newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_journey_entries_type_start
                ON journey_entries (entry_type, start_date DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_journey_entries_updated_at
                BEFORE UPDATE ON journey_entries
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_journey_entries_updated_at ON journey_entries",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_journey_entries_type_start")
            .await?;

        manager
            .drop_table(Table::drop().table(JourneyEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JourneyEntries {
    Table,
    Id,
    EntryType,
    Title,
    Organization,
    Location,
    StartDate,
    EndDate,
    IsCurrent,
    Description,
    Achievements,
    Technologies,
    IsActive,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
