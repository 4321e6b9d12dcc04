//! 退款取消规则实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cancellation_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub hours_before_class: i32,
    pub is_active: bool,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

// 规则表独立于排课实体，仅按引用查找，不做关联查询
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_rule(self) -> crate::models::cancellation_rules::entities::CancellationRule {
        use crate::models::cancellation_rules::entities::CancellationRule;
        use chrono::{DateTime, Utc};

        CancellationRule {
            id: self.id,
            name: self.name,
            hours_before_class: self.hours_before_class,
            is_active: self.is_active,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
