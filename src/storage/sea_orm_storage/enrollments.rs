//! 报名存储操作
//!
//! 容量约束在数据库内执行：计数守卫和插入是同一条语句，基于已提交
//! 状态求值，并发超卖因此不可能发生。(class_id, student_id) 唯一索引
//! 是重复报名防护的事实来源，冲突在这里翻译为领域错误后才离开存储层。

use std::collections::HashMap;

use super::SeaOrmStorage;
use super::class_sessions::load_schedulable_class;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{ClassBookingError, Result};
use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseBackend, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Statement, TransactionTrait,
};

/// 审核决定
enum ReviewDecision {
    Approve,
    Deny(Option<String>),
}

impl SeaOrmStorage {
    /// 学员报名
    ///
    /// 事务内依次执行：课程可报名守卫（同事务重读，拒绝终态课程）、
    /// 计数守卫插入（容量满时零行生效）、结果行回读。
    pub async fn enroll_student_impl(
        &self,
        class_id: i64,
        student_id: i64,
        experimental: bool,
    ) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        let class = load_schedulable_class(&txn, class_id).await?;

        let inserted = self
            .guarded_enrollment_insert(&txn, class_id, student_id, experimental, class.max_capacity)
            .await?;

        if inserted == 0 {
            // 守卫子查询判定容量已满，语句未产生任何行
            return Err(ClassBookingError::capacity("Class is already at full capacity"));
        }

        let row = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询报名失败: {e}")))?
            .ok_or_else(|| {
                ClassBookingError::database_operation("报名行插入后未能回读".to_string())
            })?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(row.into_enrollment())
    }

    /// 计数守卫插入：INSERT … SELECT … WHERE count < max_capacity
    ///
    /// 守卫和插入是一条语句，无法在两次往返之间被并发写入穿插。
    async fn guarded_enrollment_insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        class_id: i64,
        student_id: i64,
        experimental: bool,
        max_capacity: i32,
    ) -> Result<u64> {
        let backend = conn.get_database_backend();
        let sql = match backend {
            DatabaseBackend::Postgres => {
                "INSERT INTO enrollments (class_id, student_id, status, experimental, enrolled_at) \
                 SELECT $1, $2, $3, $4, $5 \
                 WHERE (SELECT COUNT(*) FROM enrollments WHERE class_id = $6) < $7"
            }
            DatabaseBackend::MySql => {
                "INSERT INTO enrollments (class_id, student_id, status, experimental, enrolled_at) \
                 SELECT ?, ?, ?, ?, ? FROM DUAL \
                 WHERE (SELECT COUNT(*) FROM enrollments WHERE class_id = ?) < ?"
            }
            _ => {
                "INSERT INTO enrollments (class_id, student_id, status, experimental, enrolled_at) \
                 SELECT ?, ?, ?, ?, ? \
                 WHERE (SELECT COUNT(*) FROM enrollments WHERE class_id = ?) < ?"
            }
        };

        let now = chrono::Utc::now().timestamp();
        let result = conn
            .execute_raw(Statement::from_sql_and_values(
                backend,
                sql,
                [
                    class_id.into(),
                    student_id.into(),
                    EnrollmentStatus::Pending.to_string().into(),
                    experimental.into(),
                    now.into(),
                    class_id.into(),
                    (max_capacity as i64).into(),
                ],
            ))
            .await
            .map_err(|e| {
                SeaOrmStorage::translate_insert_err(
                    e,
                    "Student is already enrolled in this class",
                    "报名插入",
                )
            })?;

        Ok(result.rows_affected())
    }

    /// 学员退课
    ///
    /// 按行删除建模：行删除后对调用方呈现为 cancelled。
    /// 课程终态守卫先于"是否已报名"判断，两种失败可以区分。
    pub async fn withdraw_enrollment_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        load_schedulable_class(&txn, class_id).await?;

        let row = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询报名失败: {e}")))?
            .ok_or_else(|| ClassBookingError::not_found("Student is not enrolled in this class"))?;

        Enrollments::delete_by_id(row.id)
            .exec(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("删除报名失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(row.into_enrollment().into_cancelled(None))
    }

    /// 管理端报名列表（状态集合过滤，按报名时间倒序）
    pub async fn list_enrollments_impl(
        &self,
        statuses: &[EnrollmentStatus],
    ) -> Result<Vec<Enrollment>> {
        let status_strings: Vec<String> = statuses.iter().map(|s| s.to_string()).collect();

        let rows = Enrollments::find()
            .filter(Column::Status.is_in(status_strings))
            .order_by_desc(Column::EnrolledAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询报名列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 学员自己的报名列表
    pub async fn list_student_enrollments_impl(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        let rows = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::EnrolledAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询报名列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 审核通过
    pub async fn approve_enrollment_impl(
        &self,
        enrollment_id: i64,
        admin_id: i64,
    ) -> Result<Enrollment> {
        self.review_enrollment(enrollment_id, admin_id, ReviewDecision::Approve)
            .await
    }

    /// 审核拒绝
    pub async fn deny_enrollment_impl(
        &self,
        enrollment_id: i64,
        admin_id: i64,
        reason: Option<String>,
    ) -> Result<Enrollment> {
        self.review_enrollment(enrollment_id, admin_id, ReviewDecision::Deny(reason))
            .await
    }

    /// 审核报名：pending 是唯一可审核状态，approved / denied 均为审核终态
    async fn review_enrollment(
        &self,
        enrollment_id: i64,
        admin_id: i64,
        decision: ReviewDecision,
    ) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        let row = Enrollments::find_by_id(enrollment_id)
            .one(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询报名失败: {e}")))?
            .ok_or_else(|| ClassBookingError::not_found("Enrollment not found"))?;

        let current = row.into_enrollment();
        if current.status != EnrollmentStatus::Pending {
            let message = match decision {
                ReviewDecision::Approve => "Only pending enrollments can be approved",
                ReviewDecision::Deny(_) => "Only pending enrollments can be denied",
            };
            return Err(ClassBookingError::invalid_state(message));
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(enrollment_id),
            reviewed_by: Set(Some(admin_id)),
            reviewed_at: Set(Some(now)),
            ..Default::default()
        };

        match decision {
            ReviewDecision::Approve => {
                model.status = Set(EnrollmentStatus::Approved.to_string());
            }
            ReviewDecision::Deny(reason) => {
                model.status = Set(EnrollmentStatus::Denied.to_string());
                model.deny_reason = Set(reason);
            }
        }

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("更新报名状态失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.into_enrollment())
    }

    /// 批量统计各课程的报名数量
    pub async fn enrollment_counts_for_classes_impl(
        &self,
        class_ids: &[i64],
    ) -> Result<HashMap<i64, i64>> {
        if class_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = Enrollments::find()
            .select_only()
            .column(Column::ClassId)
            .column_as(Column::Id.count(), "count")
            .filter(Column::ClassId.is_in(class_ids.to_vec()))
            .group_by(Column::ClassId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("统计报名数量失败: {e}")))?;

        Ok(rows.into_iter().collect())
    }
}
