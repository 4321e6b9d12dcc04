//! 课程场次存储操作
//!
//! 课程是整个预约引擎的状态根：scheduled 之外的状态一律拒绝写入。
//! 所有守卫都在发起写操作的同一事务里重读课程行，避免基于过期
//! 状态做出的修改。

use super::SeaOrmStorage;
use crate::entity::class_sessions::{ActiveModel, Column, Entity as ClassSessions};
use crate::entity::instructor_assignments::{
    Column as AssignmentColumn, Entity as InstructorAssignments,
};
use crate::errors::{ClassBookingError, Result};
use crate::models::{
    PaginationInfo,
    classes::{
        entities::{ClassSession, ClassStatus, DEFAULT_DURATION_MINUTES},
        requests::{
            CancelClassSessionRequest, ClassSessionListQuery, CreateClassSessionRequest,
            UpdateClassSessionRequest,
        },
        responses::ClassSessionListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// 在同一连接（通常是事务）内加载课程并执行可变性守卫
///
/// 报名、退课、教练分配与课程自身的修改都复用这一个入口，
/// 三条路径的守卫语义因此不可能漂移。
/// PostgreSQL / MySQL 上对课程行加排他锁，把同一课程的依赖写入
/// 串行化；SQLite 依赖其单写者模型，FOR UPDATE 不可用。
pub(crate) async fn load_schedulable_class<C: ConnectionTrait>(
    conn: &C,
    class_id: i64,
) -> Result<ClassSession> {
    let mut query = ClassSessions::find_by_id(class_id);
    if conn.get_database_backend() != DatabaseBackend::Sqlite {
        query = query.lock_exclusive();
    }

    let model = query
        .one(conn)
        .await
        .map_err(|e| ClassBookingError::database_operation(format!("查询课程失败: {e}")))?
        .ok_or_else(|| ClassBookingError::not_found("Class not found"))?;

    let class = model.into_class_session();
    class.ensure_schedulable()?;
    Ok(class)
}

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_class_session_impl(
        &self,
        req: CreateClassSessionRequest,
        created_by: i64,
    ) -> Result<ClassSession> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            created_by: Set(created_by),
            discipline: Set(req.discipline.to_string()),
            skill_level: Set(req.skill_level.to_string()),
            scheduled_at: Set(req.scheduled_at.timestamp()),
            duration_minutes: Set(req.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES)),
            location: Set(req.location),
            max_capacity: Set(req.max_capacity),
            status: Set(ClassStatus::Scheduled.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SeaOrmStorage::translate_insert_err(e, "Class already exists", "创建课程"))?;

        Ok(result.into_class_session())
    }

    /// 通过 ID 获取课程
    pub async fn get_class_session_by_id_impl(&self, class_id: i64) -> Result<Option<ClassSession>> {
        let result = ClassSessions::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_class_session()))
    }

    /// 分页列出课程
    pub async fn list_class_sessions_with_pagination_impl(
        &self,
        query: ClassSessionListQuery,
    ) -> Result<ClassSessionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ClassSessions::find();

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 项目筛选
        if let Some(discipline) = query.discipline {
            select = select.filter(Column::Discipline.eq(discipline.to_string()));
        }

        // 级别筛选
        if let Some(skill_level) = query.skill_level {
            select = select.filter(Column::SkillLevel.eq(skill_level.to_string()));
        }

        // 开课时间范围筛选
        if let Some(date_from) = query.date_from {
            select = select.filter(Column::ScheduledAt.gte(date_from.timestamp()));
        }
        if let Some(date_to) = query.date_to {
            select = select.filter(Column::ScheduledAt.lte(date_to.timestamp()));
        }

        // 按开课时间倒序
        select = select.order_by_desc(Column::ScheduledAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询课程页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(ClassSessionListResponse {
            items: classes.into_iter().map(|m| m.into_class_session()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程信息（仅 scheduled 状态）
    pub async fn update_class_session_impl(
        &self,
        class_id: i64,
        update: UpdateClassSessionRequest,
    ) -> Result<ClassSession> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        // 守卫与写入同事务
        load_schedulable_class(&txn, class_id).await?;

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(discipline) = update.discipline {
            model.discipline = Set(discipline.to_string());
        }

        if let Some(skill_level) = update.skill_level {
            model.skill_level = Set(skill_level.to_string());
        }

        if let Some(scheduled_at) = update.scheduled_at {
            model.scheduled_at = Set(scheduled_at.timestamp());
        }

        if let Some(duration_minutes) = update.duration_minutes {
            model.duration_minutes = Set(duration_minutes);
        }

        if let Some(location) = update.location {
            model.location = Set(location);
        }

        if let Some(max_capacity) = update.max_capacity {
            model.max_capacity = Set(max_capacity);
        }

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("更新课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.into_class_session())
    }

    /// 取消课程
    ///
    /// 进入终态后不再级联修改报名；退款资格由消费方结合取消规则计算。
    pub async fn cancel_class_session_impl(
        &self,
        class_id: i64,
        request: CancelClassSessionRequest,
    ) -> Result<ClassSession> {
        self.finalize_class_session(class_id, ClassStatus::Cancelled, request.reason)
            .await
    }

    /// 完课
    pub async fn complete_class_session_impl(&self, class_id: i64) -> Result<ClassSession> {
        self.finalize_class_session(class_id, ClassStatus::Completed, None)
            .await
    }

    /// 把课程迁移到终态（cancelled / completed）
    async fn finalize_class_session(
        &self,
        class_id: i64,
        target: ClassStatus,
        reason: Option<String>,
    ) -> Result<ClassSession> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("开启事务失败: {e}")))?;

        // 已处于终态的课程在这里被拒绝，终态之间不存在迁移
        load_schedulable_class(&txn, class_id).await?;

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            status: Set(target.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if reason.is_some() {
            model.cancel_reason = Set(reason);
        }

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("更新课程状态失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.into_class_session())
    }

    /// 列出某教练被分配的课程
    pub async fn list_class_sessions_for_instructor_impl(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<ClassSession>> {
        let assignments = InstructorAssignments::find()
            .filter(AssignmentColumn::InstructorId.eq(instructor_id))
            .all(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询教练分配失败: {e}")))?;

        let class_ids: Vec<i64> = assignments.iter().map(|a| a.class_id).collect();

        if class_ids.is_empty() {
            return Ok(vec![]);
        }

        let classes = ClassSessions::find()
            .filter(Column::Id.is_in(class_ids))
            .order_by_desc(Column::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("查询教练课程失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class_session()).collect())
    }
}
