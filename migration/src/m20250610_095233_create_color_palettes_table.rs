use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ColorPalettes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ColorPalettes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::Slug)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::LightPrimary)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::LightSecondary)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::LightAccent)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::LightBackground)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::LightText)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::DarkPrimary)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::DarkSecondary)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::DarkAccent)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::DarkBackground)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::DarkText)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ColorPalettes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one palette can be the default
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_color_palettes_single_default
                ON color_palettes (is_default)
                WHERE is_default = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_color_palettes_updated_at
                BEFORE UPDATE ON color_palettes
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
                "DROP TRIGGER IF EXISTS update_color_palettes_updated_at ON color_palettes",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_color_palettes_single_default")
            .await?;

        manager
            .drop_table(Table::drop().table(ColorPalettes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ColorPalettes {
    Table,
    Id,
    Name,
    Slug,
    LightPrimary,
    LightSecondary,
    LightAccent,
    LightBackground,
    LightText,
    DarkPrimary,
    DarkSecondary,
    DarkAccent,
    DarkBackground,
    DarkText,
    IsActive,
    IsDefault,
    CreatedAt,
    UpdatedAt,
}
