//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod cancellation_rules;
mod class_sessions;
mod enrollments;
mod instructor_assignments;
mod users;

use crate::config::AppConfig;
use crate::errors::{ClassBookingError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（从全局配置读取连接参数）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 使用显式连接参数创建存储实例
    pub async fn connect(url: &str, pool_size: u32, timeout_secs: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout_secs).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout_secs).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassBookingError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassBookingError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassBookingError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout_secs))
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassBookingError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassBookingError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 把唯一约束冲突翻译为领域层 Conflict，其余归为存储错误
    ///
    /// 存储层的约束冲突是预期结果，不允许以原始数据库错误穿出组件边界。
    pub(crate) fn translate_insert_err(
        e: sea_orm::DbErr,
        conflict_message: &str,
        context: &str,
    ) -> ClassBookingError {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                ClassBookingError::conflict(conflict_message)
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)) => {
                ClassBookingError::not_found(format!("{context}: referenced entity missing"))
            }
            _ => ClassBookingError::database_operation(format!("{context}: {e}")),
        }
    }
}

// Storage trait 实现
use crate::models::{
    cancellation_rules::{
        entities::CancellationRule,
        requests::{CreateCancellationRuleRequest, UpdateCancellationRuleRequest},
    },
    classes::{
        entities::ClassSession,
        requests::{
            CancelClassSessionRequest, ClassSessionListQuery, CreateClassSessionRequest,
            UpdateClassSessionRequest,
        },
        responses::ClassSessionListResponse,
    },
    enrollments::entities::{Enrollment, EnrollmentStatus},
    instructors::entities::InstructorAssignment,
    users::{
        entities::{User, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest, status: UserStatus) -> Result<User> {
        self.create_user_impl(user, status).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 课程模块
    async fn create_class_session(
        &self,
        class: CreateClassSessionRequest,
        created_by: i64,
    ) -> Result<ClassSession> {
        self.create_class_session_impl(class, created_by).await
    }

    async fn get_class_session_by_id(&self, class_id: i64) -> Result<Option<ClassSession>> {
        self.get_class_session_by_id_impl(class_id).await
    }

    async fn list_class_sessions_with_pagination(
        &self,
        query: ClassSessionListQuery,
    ) -> Result<ClassSessionListResponse> {
        self.list_class_sessions_with_pagination_impl(query).await
    }

    async fn update_class_session(
        &self,
        class_id: i64,
        update: UpdateClassSessionRequest,
    ) -> Result<ClassSession> {
        self.update_class_session_impl(class_id, update).await
    }

    async fn cancel_class_session(
        &self,
        class_id: i64,
        request: CancelClassSessionRequest,
    ) -> Result<ClassSession> {
        self.cancel_class_session_impl(class_id, request).await
    }

    async fn complete_class_session(&self, class_id: i64) -> Result<ClassSession> {
        self.complete_class_session_impl(class_id).await
    }

    async fn list_class_sessions_for_instructor(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<ClassSession>> {
        self.list_class_sessions_for_instructor_impl(instructor_id)
            .await
    }

    // 报名模块
    async fn enroll_student(
        &self,
        class_id: i64,
        student_id: i64,
        experimental: bool,
    ) -> Result<Enrollment> {
        self.enroll_student_impl(class_id, student_id, experimental)
            .await
    }

    async fn withdraw_enrollment(&self, class_id: i64, student_id: i64) -> Result<Enrollment> {
        self.withdraw_enrollment_impl(class_id, student_id).await
    }

    async fn list_enrollments(&self, statuses: &[EnrollmentStatus]) -> Result<Vec<Enrollment>> {
        self.list_enrollments_impl(statuses).await
    }

    async fn list_student_enrollments(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        self.list_student_enrollments_impl(student_id).await
    }

    async fn approve_enrollment(&self, enrollment_id: i64, admin_id: i64) -> Result<Enrollment> {
        self.approve_enrollment_impl(enrollment_id, admin_id).await
    }

    async fn deny_enrollment(
        &self,
        enrollment_id: i64,
        admin_id: i64,
        reason: Option<String>,
    ) -> Result<Enrollment> {
        self.deny_enrollment_impl(enrollment_id, admin_id, reason)
            .await
    }

    async fn enrollment_counts_for_classes(
        &self,
        class_ids: &[i64],
    ) -> Result<HashMap<i64, i64>> {
        self.enrollment_counts_for_classes_impl(class_ids).await
    }

    // 教练分配模块
    async fn assign_instructor(
        &self,
        class_id: i64,
        instructor_id: i64,
        assigned_by: i64,
    ) -> Result<InstructorAssignment> {
        self.assign_instructor_impl(class_id, instructor_id, assigned_by)
            .await
    }

    async fn remove_instructor(
        &self,
        class_id: i64,
        instructor_id: i64,
    ) -> Result<InstructorAssignment> {
        self.remove_instructor_impl(class_id, instructor_id).await
    }

    async fn list_assignments_by_class(&self, class_id: i64) -> Result<Vec<InstructorAssignment>> {
        self.list_assignments_by_class_impl(class_id).await
    }

    async fn list_assignments_by_instructor(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<InstructorAssignment>> {
        self.list_assignments_by_instructor_impl(instructor_id)
            .await
    }

    // 取消规则模块
    async fn create_cancellation_rule(
        &self,
        rule: CreateCancellationRuleRequest,
        created_by: i64,
    ) -> Result<CancellationRule> {
        self.create_cancellation_rule_impl(rule, created_by).await
    }

    async fn update_cancellation_rule(
        &self,
        rule_id: i64,
        update: UpdateCancellationRuleRequest,
    ) -> Result<CancellationRule> {
        self.update_cancellation_rule_impl(rule_id, update).await
    }

    async fn delete_cancellation_rule(&self, rule_id: i64) -> Result<CancellationRule> {
        self.delete_cancellation_rule_impl(rule_id).await
    }

    async fn list_cancellation_rules(&self) -> Result<Vec<CancellationRule>> {
        self.list_cancellation_rules_impl().await
    }

    async fn get_active_cancellation_rule(&self) -> Result<Option<CancellationRule>> {
        self.get_active_cancellation_rule_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::entities::{ClassStatus, Discipline, SkillLevel};
    use crate::models::users::entities::{UserRole, UserStatus};
    use futures_util::future::join_all;

    async fn setup() -> SeaOrmStorage {
        // 单连接池让所有查询命中同一个内存库
        SeaOrmStorage::connect("sqlite::memory:", 1, 5)
            .await
            .expect("in-memory sqlite storage")
    }

    async fn seed_user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> User {
        storage
            .create_user_impl(
                CreateUserRequest {
                    username: username.to_string(),
                    email: format!("{username}@school.example"),
                    password: "hash".to_string(),
                    role,
                    profile: None,
                },
                UserStatus::Active,
            )
            .await
            .expect("seed user")
    }

    async fn seed_class(storage: &SeaOrmStorage, admin_id: i64, max_capacity: i32) -> ClassSession {
        storage
            .create_class_session_impl(
                CreateClassSessionRequest {
                    discipline: Discipline::Tennis,
                    skill_level: SkillLevel::Beginner,
                    scheduled_at: chrono::Utc::now() + chrono::Duration::days(7),
                    duration_minutes: None,
                    location: "Court 1".to_string(),
                    max_capacity,
                },
                admin_id,
            )
            .await
            .expect("seed class")
    }

    #[tokio::test]
    async fn test_create_class_defaults_duration_to_60() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;

        let class = seed_class(&storage, admin.id, 15).await;
        assert_eq!(class.duration_minutes, 60);
        assert_eq!(class.status, ClassStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_terminal_class_rejects_all_mutations() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let student = seed_user(&storage, "student01", UserRole::Student).await;
        let instructor = seed_user(&storage, "coach01", UserRole::Instructor).await;
        let class = seed_class(&storage, admin.id, 15).await;

        let cancelled = storage
            .cancel_class_session_impl(
                class.id,
                CancelClassSessionRequest {
                    reason: Some("pool maintenance".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(cancelled.status, ClassStatus::Cancelled);
        assert_eq!(cancelled.cancel_reason.as_deref(), Some("pool maintenance"));

        // 终态后：更新、再取消、完课、报名、退课、分配教练全部失败
        let err = storage
            .update_class_session_impl(
                class.id,
                UpdateClassSessionRequest {
                    discipline: None,
                    skill_level: None,
                    scheduled_at: None,
                    duration_minutes: None,
                    location: Some("Court 2".to_string()),
                    max_capacity: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::InvalidState(_)));

        let err = storage
            .cancel_class_session_impl(class.id, CancelClassSessionRequest { reason: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::InvalidState(_)));

        let err = storage.complete_class_session_impl(class.id).await.unwrap_err();
        assert!(matches!(err, ClassBookingError::InvalidState(_)));

        let err = storage
            .enroll_student_impl(class.id, student.id, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::InvalidState(_)));

        let err = storage
            .withdraw_enrollment_impl(class.id, student.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::InvalidState(_)));

        let err = storage
            .assign_instructor_impl(class.id, instructor.id, admin.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_missing_class_is_not_found() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;

        let err = storage
            .enroll_student_impl(9999, admin.id, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::NotFound(_)));

        let err = storage
            .update_class_session_impl(
                9999,
                UpdateClassSessionRequest {
                    discipline: None,
                    skill_level: None,
                    scheduled_at: None,
                    duration_minutes: None,
                    location: None,
                    max_capacity: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_enrollment_is_conflict() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let student = seed_user(&storage, "student01", UserRole::Student).await;
        let class = seed_class(&storage, admin.id, 15).await;

        let enrollment = storage
            .enroll_student_impl(class.id, student.id, false)
            .await
            .unwrap();
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);

        let err = storage
            .enroll_student_impl(class.id, student.id, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::Conflict(_)));
        assert_eq!(err.message(), "Student is already enrolled in this class");
    }

    #[tokio::test]
    async fn test_capacity_is_enforced_sequentially() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let class = seed_class(&storage, admin.id, 15).await;

        for i in 0..15 {
            let student = seed_user(&storage, &format!("student{i:02}"), UserRole::Student).await;
            storage
                .enroll_student_impl(class.id, student.id, false)
                .await
                .unwrap();
        }

        let overflow = seed_user(&storage, "student99", UserRole::Student).await;
        let err = storage
            .enroll_student_impl(class.id, overflow.id, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::Capacity(_)));

        let counts = storage
            .enrollment_counts_for_classes_impl(&[class.id])
            .await
            .unwrap();
        assert_eq!(counts.get(&class.id), Some(&15));
    }

    #[tokio::test]
    async fn test_capacity_holds_under_concurrent_enrolls() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let class = seed_class(&storage, admin.id, 1).await;

        let mut students = Vec::new();
        for i in 0..10 {
            students.push(seed_user(&storage, &format!("student{i:02}"), UserRole::Student).await);
        }

        let results = join_all(students.iter().map(|s| {
            let storage = storage.clone();
            let class_id = class.id;
            let student_id = s.id;
            async move { storage.enroll_student_impl(class_id, student_id, false).await }
        }))
        .await;

        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        for failure in results.iter().filter_map(|r| r.as_ref().err()) {
            assert!(matches!(
                failure,
                ClassBookingError::Capacity(_) | ClassBookingError::Conflict(_)
            ));
        }

        let counts = storage
            .enrollment_counts_for_classes_impl(&[class.id])
            .await
            .unwrap();
        assert_eq!(counts.get(&class.id), Some(&1));
    }

    #[tokio::test]
    async fn test_withdraw_deletes_row_and_allows_reenroll() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let student = seed_user(&storage, "student01", UserRole::Student).await;
        let class = seed_class(&storage, admin.id, 15).await;

        storage
            .enroll_student_impl(class.id, student.id, false)
            .await
            .unwrap();

        let cancelled = storage
            .withdraw_enrollment_impl(class.id, student.id)
            .await
            .unwrap();
        assert_eq!(cancelled.status, EnrollmentStatus::Cancelled);
        assert!(cancelled.cancelled_at.is_some());

        // 行已删除：个人列表为空，未报名状态下再退课是 NotFound
        let mine = storage.list_student_enrollments_impl(student.id).await.unwrap();
        assert!(mine.is_empty());

        let err = storage
            .withdraw_enrollment_impl(class.id, student.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::NotFound(_)));

        // 退课不复活旧行，重新报名创建新行
        let again = storage
            .enroll_student_impl(class.id, student.id, false)
            .await
            .unwrap();
        assert_eq!(again.status, EnrollmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_review_requires_pending() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let student = seed_user(&storage, "student01", UserRole::Student).await;
        let other = seed_user(&storage, "student02", UserRole::Student).await;
        let class = seed_class(&storage, admin.id, 15).await;

        let enrollment = storage
            .enroll_student_impl(class.id, student.id, false)
            .await
            .unwrap();

        let approved = storage
            .approve_enrollment_impl(enrollment.id, admin.id)
            .await
            .unwrap();
        assert_eq!(approved.status, EnrollmentStatus::Approved);
        assert_eq!(approved.reviewed_by, Some(admin.id));
        assert!(approved.reviewed_at.is_some());

        let err = storage
            .approve_enrollment_impl(enrollment.id, admin.id)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Only pending enrollments can be approved");

        let err = storage
            .deny_enrollment_impl(enrollment.id, admin.id, None)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Only pending enrollments can be denied");

        let pending = storage
            .enroll_student_impl(class.id, other.id, false)
            .await
            .unwrap();
        let denied = storage
            .deny_enrollment_impl(pending.id, admin.id, Some("class level mismatch".to_string()))
            .await
            .unwrap();
        assert_eq!(denied.status, EnrollmentStatus::Denied);
        assert_eq!(denied.deny_reason.as_deref(), Some("class level mismatch"));
    }

    #[tokio::test]
    async fn test_review_missing_enrollment_is_not_found() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;

        let err = storage
            .approve_enrollment_impl(424242, admin.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_enrollments_filters_by_status() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let a = seed_user(&storage, "student01", UserRole::Student).await;
        let b = seed_user(&storage, "student02", UserRole::Student).await;
        let class = seed_class(&storage, admin.id, 15).await;

        let first = storage.enroll_student_impl(class.id, a.id, false).await.unwrap();
        storage.enroll_student_impl(class.id, b.id, false).await.unwrap();
        storage.approve_enrollment_impl(first.id, admin.id).await.unwrap();

        let pending = storage
            .list_enrollments_impl(&[EnrollmentStatus::Pending])
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].student_id, b.id);

        let all = storage
            .list_enrollments_impl(EnrollmentStatus::all())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_instructor_assignment_uniqueness() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;
        let instructor = seed_user(&storage, "coach01", UserRole::Instructor).await;
        let class = seed_class(&storage, admin.id, 15).await;

        let assignment = storage
            .assign_instructor_impl(class.id, instructor.id, admin.id)
            .await
            .unwrap();
        assert_eq!(assignment.instructor_id, instructor.id);
        assert_eq!(assignment.assigned_by, admin.id);

        let err = storage
            .assign_instructor_impl(class.id, instructor.id, admin.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::Conflict(_)));

        let removed = storage
            .remove_instructor_impl(class.id, instructor.id)
            .await
            .unwrap();
        assert_eq!(removed.instructor_id, instructor.id);

        let err = storage
            .remove_instructor_impl(class.id, instructor.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::NotFound(_)));

        // 教练个人课表跟随分配关系
        let classes = storage
            .list_class_sessions_for_instructor_impl(instructor.id)
            .await
            .unwrap();
        assert!(classes.is_empty());
    }

    #[tokio::test]
    async fn test_single_active_cancellation_rule() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;

        let rule_a = storage
            .create_cancellation_rule_impl(
                CreateCancellationRuleRequest {
                    name: "standard".to_string(),
                    hours_before_class: 24,
                },
                admin.id,
            )
            .await
            .unwrap();
        assert!(rule_a.is_active);

        let rule_b = storage
            .create_cancellation_rule_impl(
                CreateCancellationRuleRequest {
                    name: "strict".to_string(),
                    hours_before_class: 48,
                },
                admin.id,
            )
            .await
            .unwrap();
        assert!(rule_b.is_active);

        let rules = storage.list_cancellation_rules_impl().await.unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.iter().filter(|r| r.is_active).count(), 1);

        let active = storage.get_active_cancellation_rule_impl().await.unwrap();
        assert_eq!(active.map(|r| r.id), Some(rule_b.id));

        // 重新激活 A：B 被停用，仍然只有一条激活
        let rule_a = storage
            .update_cancellation_rule_impl(
                rule_a.id,
                UpdateCancellationRuleRequest {
                    name: None,
                    hours_before_class: None,
                    is_active: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(rule_a.is_active);

        let rules = storage.list_cancellation_rules_impl().await.unwrap();
        assert_eq!(rules.iter().filter(|r| r.is_active).count(), 1);

        // 删除激活规则后允许出现"无政策"状态
        storage.delete_cancellation_rule_impl(rule_a.id).await.unwrap();
        let active = storage.get_active_cancellation_rule_impl().await.unwrap();
        assert!(active.is_none());

        let err = storage
            .delete_cancellation_rule_impl(rule_a.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassBookingError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_class_list_filters() {
        let storage = setup().await;
        let admin = seed_user(&storage, "admin01", UserRole::Admin).await;

        let kept = seed_class(&storage, admin.id, 10).await;
        let cancelled = seed_class_with(&storage, admin.id, Discipline::Swimming).await;
        storage
            .cancel_class_session_impl(cancelled.id, CancelClassSessionRequest { reason: None })
            .await
            .unwrap();

        let scheduled_only = storage
            .list_class_sessions_with_pagination_impl(ClassSessionListQuery {
                status: Some(ClassStatus::Scheduled),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(scheduled_only.items.len(), 1);
        assert_eq!(scheduled_only.items[0].id, kept.id);

        let swimming = storage
            .list_class_sessions_with_pagination_impl(ClassSessionListQuery {
                discipline: Some(Discipline::Swimming),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(swimming.items.len(), 1);
        assert_eq!(swimming.items[0].id, cancelled.id);

        let far_future = storage
            .list_class_sessions_with_pagination_impl(ClassSessionListQuery {
                date_from: Some(chrono::Utc::now() + chrono::Duration::days(30)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(far_future.items.is_empty());
    }

    async fn seed_class_with(
        storage: &SeaOrmStorage,
        admin_id: i64,
        discipline: Discipline,
    ) -> ClassSession {
        storage
            .create_class_session_impl(
                CreateClassSessionRequest {
                    discipline,
                    skill_level: SkillLevel::Intermediate,
                    scheduled_at: chrono::Utc::now() + chrono::Duration::days(3),
                    duration_minutes: Some(90),
                    location: "Pool A".to_string(),
                    max_capacity: 8,
                },
                admin_id,
            )
            .await
            .expect("seed class")
    }
}
