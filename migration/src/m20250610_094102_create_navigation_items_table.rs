use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NavigationItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NavigationItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::Title)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::Url)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::Icon)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::MenuOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::IsExternal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(NavigationItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public menu reads filter on is_active and sort by menu_order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_navigation_items_active_order
                ON navigation_items (menu_order, title)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_navigation_items_updated_at
                BEFORE UPDATE ON navigation_items
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
                "DROP TRIGGER IF EXISTS update_navigation_items_updated_at ON navigation_items",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_navigation_items_active_order")
            .await?;

        manager
            .drop_table(Table::drop().table(NavigationItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NavigationItems {
    Table,
    Id,
    Title,
    Url,
    Icon,
    MenuOrder,
    IsActive,
    IsExternal,
    CreatedAt,
    UpdatedAt,
}
