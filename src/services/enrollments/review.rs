use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::errors::ClassBookingError;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::DenyEnrollmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn approve(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
) -> ActixResult<HttpResponse> {
    let admin_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.approve_enrollment(enrollment_id, admin_id).await {
        Ok(enrollment) => {
            info!("Enrollment {} approved by {}", enrollment_id, admin_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "Enrollment approved")))
        }
        Err(e) => Ok(handle_review_error(e)),
    }
}

pub async fn deny(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
    deny_data: DenyEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let admin_id = match RequireJWT::extract_user_id(request) {
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
        .deny_enrollment(enrollment_id, admin_id, deny_data.reason)
        .await
    {
        Ok(enrollment) => {
            info!("Enrollment {} denied by {}", enrollment_id, admin_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "Enrollment denied")))
        }
        Err(e) => Ok(handle_review_error(e)),
    }
}

/// 审核失败的统一响应：缺失与非 pending 状态都是 400
fn handle_review_error(e: ClassBookingError) -> HttpResponse {
    let code = match &e {
        ClassBookingError::NotFound(_) => ErrorCode::EnrollmentNotFound,
        ClassBookingError::InvalidState(_) => ErrorCode::EnrollmentNotPending,
        _ => {
            error!("Enrollment review failed: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Enrollment review failed",
            ));
        }
    };

    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, e.message()))
}
