use std::collections::HashMap;
use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（status 由调用方决定：管理员创建 active，自助注册 pending）
    async fn create_user(&self, user: CreateUserRequest, status: UserStatus) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 课程场次管理方法
    // 创建课程，初始状态 scheduled
    async fn create_class_session(
        &self,
        class: CreateClassSessionRequest,
        created_by: i64,
    ) -> Result<ClassSession>;
    // 通过ID获取课程
    async fn get_class_session_by_id(&self, class_id: i64) -> Result<Option<ClassSession>>;
    // 分页列出课程（状态/项目/级别/时间范围筛选，按开课时间倒序）
    async fn list_class_sessions_with_pagination(
        &self,
        query: ClassSessionListQuery,
    ) -> Result<ClassSessionListResponse>;
    // 更新课程（仅 scheduled 状态）
    async fn update_class_session(
        &self,
        class_id: i64,
        update: UpdateClassSessionRequest,
    ) -> Result<ClassSession>;
    // 取消课程（终态，不级联修改报名）
    async fn cancel_class_session(
        &self,
        class_id: i64,
        request: CancelClassSessionRequest,
    ) -> Result<ClassSession>;
    // 完课（终态）
    async fn complete_class_session(&self, class_id: i64) -> Result<ClassSession>;
    // 列出某教练被分配的课程
    async fn list_class_sessions_for_instructor(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<ClassSession>>;

    /// 报名管理方法
    // 学员报名：课程可报名守卫 + 容量守卫 + (class, student) 唯一约束
    async fn enroll_student(
        &self,
        class_id: i64,
        student_id: i64,
        experimental: bool,
    ) -> Result<Enrollment>;
    // 学员退课：删除报名行，返回 cancelled 表示
    async fn withdraw_enrollment(&self, class_id: i64, student_id: i64) -> Result<Enrollment>;
    // 管理端列出报名（按状态集合过滤）
    async fn list_enrollments(&self, statuses: &[EnrollmentStatus]) -> Result<Vec<Enrollment>>;
    // 学员自己的报名列表
    async fn list_student_enrollments(&self, student_id: i64) -> Result<Vec<Enrollment>>;
    // 审核通过（仅 pending）
    async fn approve_enrollment(&self, enrollment_id: i64, admin_id: i64) -> Result<Enrollment>;
    // 审核拒绝（仅 pending）
    async fn deny_enrollment(
        &self,
        enrollment_id: i64,
        admin_id: i64,
        reason: Option<String>,
    ) -> Result<Enrollment>;
    // 批量统计各课程的报名数量（课表视图用）
    async fn enrollment_counts_for_classes(&self, class_ids: &[i64])
    -> Result<HashMap<i64, i64>>;

    /// 教练分配管理方法
    // 分配教练（仅 scheduled 课程，(class, instructor) 唯一）
    async fn assign_instructor(
        &self,
        class_id: i64,
        instructor_id: i64,
        assigned_by: i64,
    ) -> Result<InstructorAssignment>;
    // 移除教练（仅 scheduled 课程）
    async fn remove_instructor(
        &self,
        class_id: i64,
        instructor_id: i64,
    ) -> Result<InstructorAssignment>;
    // 课程的教练名单
    async fn list_assignments_by_class(&self, class_id: i64) -> Result<Vec<InstructorAssignment>>;
    // 教练名下的分配记录
    async fn list_assignments_by_instructor(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<InstructorAssignment>>;

    /// 取消规则管理方法
    // 创建规则并激活（先停用全部，再插入，单事务）
    async fn create_cancellation_rule(
        &self,
        rule: CreateCancellationRuleRequest,
        created_by: i64,
    ) -> Result<CancellationRule>;
    // 更新规则；is_active = true 时先停用其他规则（单事务）
    async fn update_cancellation_rule(
        &self,
        rule_id: i64,
        update: UpdateCancellationRuleRequest,
    ) -> Result<CancellationRule>;
    // 删除规则
    async fn delete_cancellation_rule(&self, rule_id: i64) -> Result<CancellationRule>;
    // 列出全部规则
    async fn list_cancellation_rules(&self) -> Result<Vec<CancellationRule>>;
    // 当前激活规则；None 表示当前没有生效的取消政策
    async fn get_active_cancellation_rule(&self) -> Result<Option<CancellationRule>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
