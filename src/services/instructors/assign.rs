use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::InstructorService;
use crate::errors::ClassBookingError;
use crate::middlewares::RequireJWT;
use crate::models::instructors::requests::AssignInstructorRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn assign(
    service: &InstructorService,
    request: &HttpRequest,
    class_id: i64,
    assign_data: AssignInstructorRequest,
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

    // 身份协作方校验：被分配者必须是教练角色的真实用户
    match storage.get_user_by_id(assign_data.instructor_id).await {
        Ok(Some(user)) if user.role == UserRole::Instructor => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InstructorNotFound,
                "Instructor not found",
            )));
        }
        Err(e) => {
            error!("Failed to resolve instructor: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to resolve instructor",
                )),
            );
        }
    }

    match storage
        .assign_instructor(class_id, assign_data.instructor_id, admin_id)
        .await
    {
        Ok(assignment) => {
            info!(
                "Instructor {} assigned to class {} by {}",
                assignment.instructor_id, class_id, admin_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(assignment, "Instructor assigned successfully")))
        }
        Err(e) => Ok(handle_assignment_error(e)),
    }
}

/// 教练分配路径的统一错误响应
pub(super) fn handle_assignment_error(e: ClassBookingError) -> HttpResponse {
    let code = match &e {
        ClassBookingError::NotFound(msg) if msg.contains("Class") => ErrorCode::ClassNotFound,
        ClassBookingError::NotFound(_) => ErrorCode::InstructorNotAssigned,
        ClassBookingError::InvalidState(_) => ErrorCode::ClassNotSchedulable,
        ClassBookingError::Conflict(_) => ErrorCode::InstructorAlreadyAssigned,
        _ => {
            error!("Instructor assignment failed: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Instructor assignment failed",
            ));
        }
    };

    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, e.message()))
}
