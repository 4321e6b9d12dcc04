use super::entities::ClassSession;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 课程列表响应（管理端）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSessionListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ClassSession>,
}

// 带报名统计的课程视图（学员端课表）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSessionSummary {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: ClassSession,
    pub enrollment_count: i64,
    pub spots_remaining: i64,
}

// 学员端课表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassCatalogResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ClassSessionSummary>,
}
