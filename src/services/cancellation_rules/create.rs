use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CancellationRuleService;
use crate::errors::ClassBookingError;
use crate::middlewares::RequireJWT;
use crate::models::cancellation_rules::requests::CreateCancellationRuleRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_rule(
    service: &CancellationRuleService,
    request: &HttpRequest,
    rule_data: CreateCancellationRuleRequest,
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

    if let Err(message) = validate_rule(&rule_data.name, Some(rule_data.hours_before_class)) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RuleValidationFailed, message)));
    }

    let storage = service.get_storage(request);

    match storage.create_cancellation_rule(rule_data, admin_id).await {
        Ok(rule) => {
            info!("Cancellation rule {} created and activated", rule.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(rule, "Cancellation rule created successfully")))
        }
        Err(e) => Ok(handle_rule_error(e)),
    }
}

/// 规则字段校验：name 非空，提前小时数至少为 1
pub(super) fn validate_rule(name: &str, hours: Option<i32>) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("name must not be empty");
    }
    if let Some(hours) = hours
        && hours < 1
    {
        return Err("hoursBeforeClass must be at least 1");
    }
    Ok(())
}

/// 规则写路径的统一错误响应
pub(super) fn handle_rule_error(e: ClassBookingError) -> HttpResponse {
    let code = match &e {
        ClassBookingError::NotFound(_) => ErrorCode::RuleNotFound,
        ClassBookingError::Conflict(_) => ErrorCode::RuleValidationFailed,
        _ => {
            error!("Cancellation rule operation failed: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Cancellation rule operation failed",
            ));
        }
    };

    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, e.message()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rule() {
        assert!(validate_rule("standard", Some(24)).is_ok());
        assert!(validate_rule("", Some(24)).is_err());
        assert!(validate_rule("   ", Some(24)).is_err());
        assert!(validate_rule("standard", Some(0)).is_err());
        assert!(validate_rule("standard", None).is_ok());
    }
}
