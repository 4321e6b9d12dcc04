use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教练分配实体
//
// 同一 (class_id, instructor_id) 最多一条记录；
// 只有 scheduled 状态的课程可以增删教练。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/instructor.ts")]
pub struct InstructorAssignment {
    pub id: i64,
    pub class_id: i64,
    pub instructor_id: i64,
    pub assigned_by: i64,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}
