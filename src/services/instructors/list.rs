use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::InstructorService;
use crate::middlewares::RequireJWT;
use crate::models::instructors::responses::{AssignmentListResponse, InstructorClassListResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_by_class(
    service: &InstructorService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_assignments_by_class(class_id).await {
        Ok(class_instructors) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentListResponse { class_instructors },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to list class instructors: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list class instructors",
                )),
            )
        }
    }
}

/// 当前教练的个人课表：由本人的分配记录投影得到
pub async fn my_classes(
    service: &InstructorService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let instructor_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.list_class_sessions_for_instructor(instructor_id).await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            InstructorClassListResponse { classes },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to list instructor classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list instructor classes",
                )),
            )
        }
    }
}
