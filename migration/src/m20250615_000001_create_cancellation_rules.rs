use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建退款取消规则表
        manager
            .create_table(
                Table::create()
                    .table(CancellationRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CancellationRules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CancellationRules::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CancellationRules::HoursBeforeClass)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CancellationRules::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CancellationRules::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CancellationRules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CancellationRules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 部分唯一索引：任意时刻最多一条 is_active = true 的规则。
        // MySQL 不支持部分索引，该后端仅依赖事务化的 停用-再激活 写入路径。
        match manager.get_database_backend() {
            DatabaseBackend::Sqlite | DatabaseBackend::Postgres => {
                manager
                    .get_connection()
                    .execute_unprepared(
                        "CREATE UNIQUE INDEX IF NOT EXISTS uq_cancellation_rules_single_active \
                         ON cancellation_rules (is_active) WHERE is_active",
                    )
                    .await?;
            }
            _ => {}
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CancellationRules::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CancellationRules {
    #[sea_orm(iden = "cancellation_rules")]
    Table,
    Id,
    Name,
    HoursBeforeClass,
    IsActive,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
