use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::errors::ClassBookingError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn withdraw(
    service: &EnrollmentService,
    request: &HttpRequest,
    class_id: i64,
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

    match storage.withdraw_enrollment(class_id, student_id).await {
        Ok(enrollment) => {
            info!("Student {} withdrew from class {}", student_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment, "Enrollment cancelled")))
        }
        Err(e) => Ok(handle_withdraw_error(e)),
    }
}

/// 退课失败的统一响应
///
/// 课程缺失与未报名都是 NotFound，但守卫顺序保证二者消息可区分：
/// 课程先查，报名后查。
fn handle_withdraw_error(e: ClassBookingError) -> HttpResponse {
    let code = match &e {
        ClassBookingError::NotFound(msg) if msg.contains("Class") => ErrorCode::ClassNotFound,
        ClassBookingError::NotFound(_) => ErrorCode::NotEnrolled,
        ClassBookingError::InvalidState(_) => ErrorCode::ClassNotSchedulable,
        _ => {
            error!("Withdrawal failed: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Withdrawal failed",
            ));
        }
    };

    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, e.message()))
}
