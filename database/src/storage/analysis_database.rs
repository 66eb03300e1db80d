use async_trait::async_trait;
use entity::github_analysis;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use std::sync::Arc;
use tracing::debug;

/// Append-only store of assessment results.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// 追加一条记录, 返回数据库分配了 id 和 created_at 的完整行
    async fn record(
        &self,
        analysis: github_analysis::ActiveModel,
    ) -> Result<github_analysis::Model, DbErr>;

    /// 最新的 `limit` 条记录, 按创建时间倒序
    async fn latest(&self, limit: u64) -> Result<Vec<github_analysis::Model>, DbErr>;
}

#[derive(Clone)]
pub struct AnalysisDatabase {
    pub connection: Arc<DatabaseConnection>,
}

impl AnalysisDatabase {
    /// 获取底层连接
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        AnalysisDatabase { connection }
    }
}

#[async_trait]
impl AnalysisStore for AnalysisDatabase {
    async fn record(
        &self,
        analysis: github_analysis::ActiveModel,
    ) -> Result<github_analysis::Model, DbErr> {
        let model = analysis.insert(self.get_connection()).await?;
        debug!(id = model.id, repo = %model.repo, "analysis recorded");
        Ok(model)
    }

    async fn latest(&self, limit: u64) -> Result<Vec<github_analysis::Model>, DbErr> {
        github_analysis::Entity::find()
            .order_by_desc(github_analysis::Column::CreatedAt)
            .order_by_desc(github_analysis::Column::Id)
            .limit(limit)
            .all(self.get_connection())
            .await
    }
}
