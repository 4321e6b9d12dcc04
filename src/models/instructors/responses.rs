use super::entities::InstructorAssignment;
use crate::models::classes::entities::ClassSession;
use serde::Serialize;
use ts_rs::TS;

// 课程教练名单响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/instructor.ts")]
pub struct AssignmentListResponse {
    pub class_instructors: Vec<InstructorAssignment>,
}

// 教练个人课表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/instructor.ts")]
pub struct InstructorClassListResponse {
    pub classes: Vec<ClassSession>,
}
