//! 课程场次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_by: i64,
    pub discipline: String,
    pub skill_level: String,
    pub scheduled_at: i64,
    pub duration_minutes: i32,
    pub location: String,
    pub max_capacity: i32,
    pub status: String,
    pub cancel_reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::instructor_assignments::Entity")]
    InstructorAssignments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::instructor_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InstructorAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class_session(self) -> crate::models::classes::entities::ClassSession {
        use crate::models::classes::entities::{ClassSession, ClassStatus, Discipline, SkillLevel};
        use chrono::{DateTime, Utc};

        ClassSession {
            id: self.id,
            discipline: self
                .discipline
                .parse::<Discipline>()
                .unwrap_or(Discipline::Swimming),
            skill_level: self
                .skill_level
                .parse::<SkillLevel>()
                .unwrap_or(SkillLevel::Beginner),
            scheduled_at: DateTime::<Utc>::from_timestamp(self.scheduled_at, 0).unwrap_or_default(),
            duration_minutes: self.duration_minutes,
            location: self.location,
            max_capacity: self.max_capacity,
            status: self
                .status
                .parse::<ClassStatus>()
                .unwrap_or(ClassStatus::Scheduled),
            cancel_reason: self.cancel_reason,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
