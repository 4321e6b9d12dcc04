//! 预导入模块，方便使用

pub use super::cancellation_rules::{
    ActiveModel as CancellationRuleActiveModel, Entity as CancellationRules,
    Model as CancellationRuleModel,
};
pub use super::class_sessions::{
    ActiveModel as ClassSessionActiveModel, Entity as ClassSessions, Model as ClassSessionModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::instructor_assignments::{
    ActiveModel as InstructorAssignmentActiveModel, Entity as InstructorAssignments,
    Model as InstructorAssignmentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
