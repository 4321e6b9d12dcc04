use serde::Deserialize;
use ts_rs::TS;

// 分配教练请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/instructor.ts")]
pub struct AssignInstructorRequest {
    pub instructor_id: i64,
}
