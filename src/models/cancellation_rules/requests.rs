use serde::Deserialize;
use ts_rs::TS;

// 创建取消规则请求
//
// 新建的规则总是成为当前激活规则，已有规则全部停用。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cancellation-rule.ts")]
pub struct CreateCancellationRuleRequest {
    pub name: String,
    pub hours_before_class: i32,
}

// 更新取消规则请求
//
// is_active = true 会先停用其他所有规则再激活目标规则。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cancellation-rule.ts")]
pub struct UpdateCancellationRuleRequest {
    pub name: Option<String>,
    pub hours_before_class: Option<i32>,
    pub is_active: Option<bool>,
}
