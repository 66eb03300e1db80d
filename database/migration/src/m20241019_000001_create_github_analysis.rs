use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GithubAnalysis::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GithubAnalysis::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GithubAnalysis::Repo).string_len(100).not_null())
                    .col(ColumnDef::new(GithubAnalysis::Score).integer().not_null())
                    .col(ColumnDef::new(GithubAnalysis::Analysis).text().not_null())
                    // created_at 统一为 timestamp, 不再使用 date
                    .col(
                        ColumnDef::new(GithubAnalysis::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_github_analysis_created_at")
                    .table(GithubAnalysis::Table)
                    .col(GithubAnalysis::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GithubAnalysis::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GithubAnalysis {
    Table,
    Id,
    Repo,
    Score,
    Analysis,
    CreatedAt,
}
