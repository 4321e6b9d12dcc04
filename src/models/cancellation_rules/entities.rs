use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 退款取消规则实体
//
// 任意时刻最多一条规则处于激活状态。切换激活规则的瞬间读方
// 可能观察到零条激活规则，消费方把这种缺失当作"当前无取消政策"。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/cancellation-rule.ts")]
pub struct CancellationRule {
    pub id: i64,
    pub name: String,
    pub hours_before_class: i32,
    pub is_active: bool,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl CancellationRule {
    /// 判断在 now 时刻针对 scheduled_at 开课的退课是否仍在退款窗口内
    ///
    /// 这是下游退款资格计算约定调用的判断；本仓库自身不做退款处理。
    pub fn refund_window_open(
        &self,
        scheduled_at: chrono::DateTime<chrono::Utc>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> bool {
        scheduled_at - now >= chrono::Duration::hours(self.hours_before_class as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn rule(hours: i32) -> CancellationRule {
        CancellationRule {
            id: 1,
            name: "standard".to_string(),
            hours_before_class: hours,
            is_active: true,
            created_by: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_refund_window() {
        let now = Utc::now();
        let rule = rule(24);

        // 开课前 48 小时退课：仍在窗口内
        assert!(rule.refund_window_open(now + Duration::hours(48), now));
        // 开课前 12 小时退课：已超出窗口
        assert!(!rule.refund_window_open(now + Duration::hours(12), now));
        // 恰好 24 小时：按含边界处理
        assert!(rule.refund_window_open(now + Duration::hours(24), now));
    }
}
