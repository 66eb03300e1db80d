use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 一次仓库可信度评估的持久化记录, 只追加不修改
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "github_analysis")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub repo: String,
    pub score: i32,
    #[sea_orm(column_type = "Text")]
    pub analysis: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
