//! 退款取消规则存储操作
//!
//! "最多一条激活规则"由两层保证：停用-再激活在单事务内执行，
//! 部分唯一索引（sqlite / postgres）在数据库层兜底。切换瞬间
//! 读方可能看到零条激活规则，这是已定义的合法状态。

use super::SeaOrmStorage;
use crate::entity::cancellation_rules::{ActiveModel, Column, Entity as CancellationRules};
use crate::errors::{ClassBookingError, Result};
use crate::models::cancellation_rules::{
    entities::CancellationRule,
    requests::{CreateCancellationRuleRequest, UpdateCancellationRuleRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 停用当前所有激活规则
async fn deactivate_all_rules<C: ConnectionTrait>(conn: &C) -> Result<()> {
    CancellationRules::update_many()
        .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
        .filter(Column::IsActive.eq(true))
        .exec(conn)
        .await
        .map_err(|e| ClassBookingError::database_operation(format!("停用取消规则失败: {e}")))?;
    Ok(())
}

impl SeaOrmStorage {
    /// 创建取消规则并激活
    pub async fn create_cancellation_rule_impl(
        &self,
        req: CreateCancellationRuleRequest,
        created_by: i64,
    ) -> Result<CancellationRule> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        deactivate_all_rules(&txn).await?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            hours_before_class: Set(req.hours_before_class),
            is_active: Set(true),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(|e| {
            SeaOrmStorage::translate_insert_err(e, "Rule name already exists", "创建取消规则")
        })?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_rule())
    }

    /// 更新取消规则
    pub async fn update_cancellation_rule_impl(
        &self,
        rule_id: i64,
        update: UpdateCancellationRuleRequest,
    ) -> Result<CancellationRule> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        CancellationRules::find_by_id(rule_id)
            .one(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询取消规则失败: {e}")))?
            .ok_or_else(|| ClassBookingError::not_found("Cancellation rule not found"))?;

        // 激活目标规则前先清空其他激活位，保持单激活不变量
        if update.is_active == Some(true) {
            deactivate_all_rules(&txn).await?;
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(rule_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(hours) = update.hours_before_class {
            model.hours_before_class = Set(hours);
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let updated = model.update(&txn).await.map_err(|e| {
            SeaOrmStorage::translate_insert_err(e, "Rule name already exists", "更新取消规则")
        })?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.into_rule())
    }

    /// 删除取消规则
    pub async fn delete_cancellation_rule_impl(&self, rule_id: i64) -> Result<CancellationRule> {
        let row = CancellationRules::find_by_id(rule_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询取消规则失败: {e}")))?
            .ok_or_else(|| ClassBookingError::not_found("Cancellation rule not found"))?;

        CancellationRules::delete_by_id(rule_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("删除取消规则失败: {e}")))?;

        Ok(row.into_rule())
    }

    /// 列出全部取消规则
    pub async fn list_cancellation_rules_impl(&self) -> Result<Vec<CancellationRule>> {
        let rows = CancellationRules::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassBookingError::database_operation(format!("查询取消规则列表失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_rule()).collect())
    }

    /// 当前激活规则
    ///
    /// None 表示当前没有生效的取消政策，调用方按"无政策"处理。
    pub async fn get_active_cancellation_rule_impl(&self) -> Result<Option<CancellationRule>> {
        let row = CancellationRules::find()
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询激活规则失败: {e}")))?;

        Ok(row.map(|m| m.into_rule()))
    }
}
