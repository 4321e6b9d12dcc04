use super::entities::CancellationRule;
use serde::Serialize;
use ts_rs::TS;

// 取消规则列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cancellation-rule.ts")]
pub struct CancellationRuleListResponse {
    pub rules: Vec<CancellationRule>,
}
