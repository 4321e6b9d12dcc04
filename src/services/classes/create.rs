use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::CreateClassSessionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassSessionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 入参校验
    if let Err(message) = validate_create_request(&class_data) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClassValidationFailed, message)));
    }

    match storage.create_class_session(class_data, uid).await {
        Ok(class) => {
            info!("Class {} created successfully by {}", class.id, uid);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClassOperationFailed,
                e.message(),
            )))
        }
    }
}

/// 创建请求校验
fn validate_create_request(req: &CreateClassSessionRequest) -> Result<(), &'static str> {
    if req.max_capacity < 1 {
        return Err("maxCapacity must be at least 1");
    }
    if let Some(duration) = req.duration_minutes
        && duration < 1
    {
        return Err("duration must be at least 1 minute");
    }
    if req.location.trim().is_empty() {
        return Err("location must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::entities::{Discipline, SkillLevel};

    fn request(max_capacity: i32, duration: Option<i32>, location: &str) -> CreateClassSessionRequest {
        CreateClassSessionRequest {
            discipline: Discipline::Climbing,
            skill_level: SkillLevel::Advanced,
            scheduled_at: chrono::Utc::now(),
            duration_minutes: duration,
            location: location.to_string(),
            max_capacity,
        }
    }

    #[test]
    fn test_validate_create_request() {
        assert!(validate_create_request(&request(15, None, "Wall 3")).is_ok());
        assert!(validate_create_request(&request(0, None, "Wall 3")).is_err());
        assert!(validate_create_request(&request(15, Some(0), "Wall 3")).is_err());
        assert!(validate_create_request(&request(15, None, "  ")).is_err());
    }
}
