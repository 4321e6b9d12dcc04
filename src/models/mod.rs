//! 业务数据模型
//!
//! 按领域划分：每个领域下分 entities / requests / responses。

pub mod auth;
pub mod cancellation_rules;
pub mod classes;
pub mod common;
pub mod enrollments;
pub mod instructors;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，用于计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 统一响应错误码
///
/// 0 表示成功；1xxx 通用；2xxx 账号；3xxx 课程；4xxx 报名；
/// 5xxx 教练分配；6xxx 取消规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    RateLimitExceeded = 1005,
    ValidationFailed = 1006,
    InternalServerError = 1500,

    // 认证与账号
    AuthFailed = 2001,
    RegisterFailed = 2002,
    AccountNotActive = 2003,
    UserNotFound = 2101,
    UserNameInvalid = 2102,
    UserEmailInvalid = 2103,
    UserNameAlreadyExists = 2104,
    UserEmailAlreadyExists = 2105,
    PasswordTooWeak = 2106,
    CanNotDeleteCurrentUser = 2107,

    // 课程场次
    ClassNotFound = 3001,
    ClassNotSchedulable = 3002,
    ClassValidationFailed = 3003,
    ClassOperationFailed = 3004,

    // 报名
    EnrollmentNotFound = 4001,
    AlreadyEnrolled = 4002,
    ClassFull = 4003,
    NotEnrolled = 4004,
    EnrollmentNotPending = 4005,

    // 教练分配
    InstructorNotFound = 5001,
    InstructorAlreadyAssigned = 5002,
    InstructorNotAssigned = 5003,

    // 取消规则
    RuleNotFound = 6001,
    RuleValidationFailed = 6002,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::ClassFull as i32, 4003);
        assert_eq!(ErrorCode::EnrollmentNotPending as i32, 4005);
        assert_eq!(ErrorCode::InstructorAlreadyAssigned as i32, 5002);
    }
}
