use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::errors::ClassBookingError;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll(
    service: &EnrollmentService,
    request: &HttpRequest,
    class_id: i64,
    enroll_data: EnrollRequest,
) -> ActixResult<HttpResponse> {
    let student_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage
        .enroll_student(class_id, student_id, enroll_data.experimental)
        .await
    {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in class {} (enrollment {})",
                student_id, class_id, enrollment.id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(enrollment, "Enrollment request submitted")))
        }
        Err(e) => Ok(handle_enroll_error(e)),
    }
}

/// 报名失败的统一响应：课程缺失 / 终态 / 满员 / 重复报名都是 400
fn handle_enroll_error(e: ClassBookingError) -> HttpResponse {
    let code = match &e {
        ClassBookingError::NotFound(_) => ErrorCode::ClassNotFound,
        ClassBookingError::InvalidState(_) => ErrorCode::ClassNotSchedulable,
        ClassBookingError::Capacity(_) => ErrorCode::ClassFull,
        ClassBookingError::Conflict(_) => ErrorCode::AlreadyEnrolled,
        _ => {
            error!("Enrollment failed: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Enrollment failed",
            ));
        }
    };

    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, e.message()))
}
