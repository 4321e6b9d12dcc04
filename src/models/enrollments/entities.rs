use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 报名状态
//
// pending 是唯一可被审核的状态；approved / denied 审核后不再变化。
// cancelled 只出现在退课返回值里：退课按行删除建模，
// 该状态值从不落库，退课后学员要重新报名才能再次加入。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentStatus {
    Pending,
    Approved,
    Denied,
    Cancelled,
}

impl EnrollmentStatus {
    pub fn all() -> &'static [EnrollmentStatus] {
        &[
            EnrollmentStatus::Pending,
            EnrollmentStatus::Approved,
            EnrollmentStatus::Denied,
            EnrollmentStatus::Cancelled,
        ]
    }
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EnrollmentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的报名状态: '{s}'. 支持: pending, approved, denied, cancelled"
            ))
        })
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Approved => "approved",
            EnrollmentStatus::Denied => "denied",
            EnrollmentStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EnrollmentStatus::Pending),
            "approved" => Ok(EnrollmentStatus::Approved),
            "denied" => Ok(EnrollmentStatus::Denied),
            "cancelled" => Ok(EnrollmentStatus::Cancelled),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

// 报名实体
//
// 同一 (class_id, student_id) 最多一条记录，唯一约束是事实来源。
// 只有 approved 的报名才算"真正在班上"，下游（评分、相册、提醒任务）
// 都依赖这一约定。experimental 仅作分析用的分组标记，不参与任何判断。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub status: EnrollmentStatus,
    pub experimental: bool,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub deny_reason: Option<String>,
    pub cancelled_at: Option<chrono::DateTime<chrono::Utc>>,
    pub cancel_reason: Option<String>,
}

impl Enrollment {
    /// 退课后的返回表示：行已删除，对调用方呈现为 cancelled
    pub fn into_cancelled(mut self, reason: Option<String>) -> Self {
        self.status = EnrollmentStatus::Cancelled;
        self.cancelled_at = Some(chrono::Utc::now());
        self.cancel_reason = reason;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for s in EnrollmentStatus::all() {
            assert_eq!(EnrollmentStatus::from_str(&s.to_string()).unwrap(), *s);
        }
        assert!(EnrollmentStatus::from_str("withdrawn").is_err());
    }

    #[test]
    fn test_into_cancelled() {
        let enrollment = Enrollment {
            id: 1,
            class_id: 2,
            student_id: 3,
            status: EnrollmentStatus::Pending,
            experimental: false,
            enrolled_at: chrono::Utc::now(),
            reviewed_by: None,
            reviewed_at: None,
            deny_reason: None,
            cancelled_at: None,
            cancel_reason: None,
        };

        let cancelled = enrollment.into_cancelled(Some("schedule conflict".to_string()));
        assert_eq!(cancelled.status, EnrollmentStatus::Cancelled);
        assert!(cancelled.cancelled_at.is_some());
        assert_eq!(cancelled.cancel_reason.as_deref(), Some("schedule conflict"));
    }
}
