use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::enrollments::requests::AdminEnrollmentQueryParams;
use crate::models::enrollments::responses::EnrollmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_for_admin(
    service: &EnrollmentService,
    request: &HttpRequest,
    query: AdminEnrollmentQueryParams,
) -> ActixResult<HttpResponse> {
    let statuses = match query.parse_statuses() {
        Ok(statuses) => statuses,
        Err(message) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, message)));
        }
    };

    let storage = service.get_storage(request);

    match storage.list_enrollments(&statuses).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollmentListResponse { enrollments },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to list enrollments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list enrollments",
                )),
            )
        }
    }
}
