use super::entities::{ClassStatus, Discipline, SkillLevel};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSessionQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<ClassStatus>,
    pub discipline: Option<Discipline>,
    pub skill_level: Option<SkillLevel>,
    /// 起始时间（含），RFC 3339
    pub date_from: Option<chrono::DateTime<chrono::Utc>>,
    /// 结束时间（含），RFC 3339
    pub date_to: Option<chrono::DateTime<chrono::Utc>>,
}

// 创建课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassSessionRequest {
    pub discipline: Discipline,
    pub skill_level: SkillLevel,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    /// 缺省为 60 分钟
    pub duration_minutes: Option<i32>,
    pub location: String,
    pub max_capacity: i32,
}

// 更新课程请求（仅 scheduled 状态可用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassSessionRequest {
    pub discipline: Option<Discipline>,
    pub skill_level: Option<SkillLevel>,
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub max_capacity: Option<i32>,
}

// 取消课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CancelClassSessionRequest {
    pub reason: Option<String>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSessionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<ClassStatus>,
    pub discipline: Option<Discipline>,
    pub skill_level: Option<SkillLevel>,
    pub date_from: Option<chrono::DateTime<chrono::Utc>>,
    pub date_to: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ClassSessionQueryParams> for ClassSessionListQuery {
    fn from(params: ClassSessionQueryParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            status: params.status,
            discipline: params.discipline,
            skill_level: params.skill_level,
            date_from: params.date_from,
            date_to: params.date_to,
        }
    }
}
