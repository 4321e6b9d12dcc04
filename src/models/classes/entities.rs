use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{ClassBookingError, Result};

/// 未指定时长时的默认课程时长（分钟）
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

// 运动项目
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum Discipline {
    Swimming,
    Tennis,
    Basketball,
    Gymnastics,
    Climbing,
    MartialArts,
}

impl<'de> Deserialize<'de> for Discipline {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Discipline>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的运动项目: '{s}'. 支持: swimming, tennis, basketball, gymnastics, climbing, martial_arts"
            ))
        })
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Discipline::Swimming => "swimming",
            Discipline::Tennis => "tennis",
            Discipline::Basketball => "basketball",
            Discipline::Gymnastics => "gymnastics",
            Discipline::Climbing => "climbing",
            Discipline::MartialArts => "martial_arts",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Discipline {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "swimming" => Ok(Discipline::Swimming),
            "tennis" => Ok(Discipline::Tennis),
            "basketball" => Ok(Discipline::Basketball),
            "gymnastics" => Ok(Discipline::Gymnastics),
            "climbing" => Ok(Discipline::Climbing),
            "martial_arts" => Ok(Discipline::MartialArts),
            _ => Err(format!("Invalid discipline: {s}")),
        }
    }
}

// 难度级别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<SkillLevel>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的难度级别: '{s}'. 支持: beginner, intermediate, advanced"
            ))
        })
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(format!("Invalid skill level: {s}")),
        }
    }
}

// 课程状态
//
// scheduled 是唯一的非终态；cancelled 和 completed 互斥且均为终态，
// 终态之后不允许任何状态迁移或字段修改。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum ClassStatus {
    Scheduled,
    Cancelled,
    Completed,
}

impl ClassStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClassStatus::Cancelled | ClassStatus::Completed)
    }
}

impl<'de> Deserialize<'de> for ClassStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ClassStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课程状态: '{s}'. 支持: scheduled, cancelled, completed"
            ))
        })
    }
}

impl std::fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClassStatus::Scheduled => "scheduled",
            ClassStatus::Cancelled => "cancelled",
            ClassStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(ClassStatus::Scheduled),
            "cancelled" => Ok(ClassStatus::Cancelled),
            "completed" => Ok(ClassStatus::Completed),
            _ => Err(format!("Invalid class status: {s}")),
        }
    }
}

// 课程场次实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSession {
    pub id: i64,
    pub discipline: Discipline,
    pub skill_level: SkillLevel,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,
    pub location: String,
    pub max_capacity: i32,
    pub status: ClassStatus,
    pub cancel_reason: Option<String>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ClassSession {
    /// 统一的课程可变性守卫
    ///
    /// 所有依赖课程状态的写操作（更新、取消、完课、报名、退课、
    /// 分配/移除教练）都必须经过这里，保证守卫语义不会在各路径间漂移。
    pub fn ensure_schedulable(&self) -> Result<()> {
        match self.status {
            ClassStatus::Scheduled => Ok(()),
            ClassStatus::Cancelled => Err(ClassBookingError::invalid_state(
                "Class has been cancelled and can no longer be modified",
            )),
            ClassStatus::Completed => Err(ClassBookingError::invalid_state(
                "Class has been completed and can no longer be modified",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_class(status: ClassStatus) -> ClassSession {
        ClassSession {
            id: 1,
            discipline: Discipline::Tennis,
            skill_level: SkillLevel::Beginner,
            scheduled_at: chrono::Utc::now(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            location: "Court 2".to_string(),
            max_capacity: 15,
            status,
            cancel_reason: None,
            created_by: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ClassStatus::Scheduled.is_terminal());
        assert!(ClassStatus::Cancelled.is_terminal());
        assert!(ClassStatus::Completed.is_terminal());
    }

    #[test]
    fn test_ensure_schedulable() {
        assert!(sample_class(ClassStatus::Scheduled).ensure_schedulable().is_ok());

        let err = sample_class(ClassStatus::Cancelled)
            .ensure_schedulable()
            .unwrap_err();
        assert_eq!(err.code(), "E008");

        let err = sample_class(ClassStatus::Completed)
            .ensure_schedulable()
            .unwrap_err();
        assert_eq!(err.code(), "E008");
    }

    #[test]
    fn test_discipline_round_trip() {
        for d in [
            Discipline::Swimming,
            Discipline::Tennis,
            Discipline::Basketball,
            Discipline::Gymnastics,
            Discipline::Climbing,
            Discipline::MartialArts,
        ] {
            assert_eq!(Discipline::from_str(&d.to_string()).unwrap(), d);
        }
        assert!(Discipline::from_str("football").is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for s in [
            ClassStatus::Scheduled,
            ClassStatus::Cancelled,
            ClassStatus::Completed,
        ] {
            assert_eq!(ClassStatus::from_str(&s.to_string()).unwrap(), s);
        }
    }
}
