pub mod auth;
pub mod cancellation_rules;
pub mod classes;
pub mod enrollments;
pub mod instructors;
pub mod users;

pub use auth::AuthService;
pub use cancellation_rules::CancellationRuleService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use instructors::InstructorService;
pub use users::UserService;
