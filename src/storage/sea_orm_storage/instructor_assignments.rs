//! 教练分配存储操作

use super::SeaOrmStorage;
use super::class_sessions::load_schedulable_class;
use crate::entity::instructor_assignments::{ActiveModel, Column, Entity as InstructorAssignments};
use crate::errors::{ClassBookingError, Result};
use crate::models::instructors::entities::InstructorAssignment;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 分配教练到课程
    ///
    /// 课程守卫与插入同事务；(class_id, instructor_id) 唯一约束
    /// 兜底并发下的重复分配。
    pub async fn assign_instructor_impl(
        &self,
        class_id: i64,
        instructor_id: i64,
        assigned_by: i64,
    ) -> Result<InstructorAssignment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        load_schedulable_class(&txn, class_id).await?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            instructor_id: Set(instructor_id),
            assigned_by: Set(assigned_by),
            assigned_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(|e| {
            SeaOrmStorage::translate_insert_err(
                e,
                "Instructor is already assigned to this class",
                "分配教练",
            )
        })?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 从课程移除教练
    pub async fn remove_instructor_impl(
        &self,
        class_id: i64,
        instructor_id: i64,
    ) -> Result<InstructorAssignment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        load_schedulable_class(&txn, class_id).await?;

        let row = InstructorAssignments::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::InstructorId.eq(instructor_id)),
            )
            .one(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询教练分配失败: {e}")))?
            .ok_or_else(|| ClassBookingError::not_found("Instructor is not assigned to this class"))?;

        InstructorAssignments::delete_by_id(row.id)
            .exec(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("删除教练分配失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(row.into_assignment())
    }

    /// 课程的教练名单
    pub async fn list_assignments_by_class_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<InstructorAssignment>> {
        let rows = InstructorAssignments::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询教练名单失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 教练名下的分配记录
    pub async fn list_assignments_by_instructor_impl(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<InstructorAssignment>> {
        let rows = InstructorAssignments::find()
            .filter(Column::InstructorId.eq(instructor_id))
            .order_by_desc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询教练分配失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_assignment()).collect())
    }
}
