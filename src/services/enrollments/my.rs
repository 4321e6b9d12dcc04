use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::responses::EnrollmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn my_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
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

    match storage.list_student_enrollments(student_id).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollmentListResponse { enrollments },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to list enrollments for student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list enrollments",
                )),
            )
        }
    }
}
