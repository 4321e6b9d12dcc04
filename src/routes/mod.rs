pub mod auth;

pub mod users;

pub mod classes;

pub mod enrollments;

pub mod instructors;

pub mod cancellation_rules;

pub use auth::configure_auth_routes;
pub use cancellation_rules::configure_cancellation_rule_routes;
pub use classes::configure_class_routes;
pub use enrollments::configure_enrollment_routes;
pub use instructors::configure_instructor_routes;
pub use users::configure_user_routes;
