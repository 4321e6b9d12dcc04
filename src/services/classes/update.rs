use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::errors::ClassBookingError;
use crate::models::classes::requests::UpdateClassSessionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassSessionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 入参校验
    if let Err(message) = validate_update_request(&update_data) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClassValidationFailed, message)));
    }

    match storage.update_class_session(class_id, update_data).await {
        Ok(class) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Class information updated successfully",
        ))),
        Err(e) => Ok(handle_class_mutation_error(e)),
    }
}

/// 更新请求校验
fn validate_update_request(req: &UpdateClassSessionRequest) -> Result<(), &'static str> {
    if let Some(max_capacity) = req.max_capacity
        && max_capacity < 1
    {
        return Err("maxCapacity must be at least 1");
    }
    if let Some(duration) = req.duration_minutes
        && duration < 1
    {
        return Err("duration must be at least 1 minute");
    }
    if let Some(ref location) = req.location
        && location.trim().is_empty()
    {
        return Err("location must not be empty");
    }
    Ok(())
}

/// 课程写路径的统一错误响应
///
/// 领域层失败（缺失、终态）一律按 400 返回给调用方，
/// 只有存储故障才是 500。
pub(super) fn handle_class_mutation_error(e: ClassBookingError) -> HttpResponse {
    match &e {
        ClassBookingError::NotFound(_) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::ClassNotFound, e.message()),
        ),
        ClassBookingError::InvalidState(_) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::ClassNotSchedulable, e.message()),
        ),
        _ => {
            error!("Class mutation failed: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Class operation failed",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_update_request() {
        let empty = UpdateClassSessionRequest {
            discipline: None,
            skill_level: None,
            scheduled_at: None,
            duration_minutes: None,
            location: None,
            max_capacity: None,
        };
        assert!(validate_update_request(&empty).is_ok());

        let bad_capacity = UpdateClassSessionRequest {
            max_capacity: Some(0),
            ..empty_request()
        };
        assert!(validate_update_request(&bad_capacity).is_err());

        let bad_location = UpdateClassSessionRequest {
            location: Some("   ".to_string()),
            ..empty_request()
        };
        assert!(validate_update_request(&bad_location).is_err());
    }

    fn empty_request() -> UpdateClassSessionRequest {
        UpdateClassSessionRequest {
            discipline: None,
            skill_level: None,
            scheduled_at: None,
            duration_minutes: None,
            location: None,
            max_capacity: None,
        }
    }
}
