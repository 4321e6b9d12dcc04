use super::entities::Enrollment;
use serde::Serialize;
use ts_rs::TS;

// 报名列表响应（管理端审核列表与学员个人列表共用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListResponse {
    pub enrollments: Vec<Enrollment>,
}
