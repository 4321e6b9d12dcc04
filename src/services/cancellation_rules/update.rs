use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CancellationRuleService;
use super::create::{handle_rule_error, validate_rule};
use crate::models::ApiResponse;
use crate::models::ErrorCode;
use crate::models::cancellation_rules::requests::UpdateCancellationRuleRequest;

pub async fn update_rule(
    service: &CancellationRuleService,
    request: &HttpRequest,
    rule_id: i64,
    update_data: UpdateCancellationRuleRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_rule(
        update_data.name.as_deref().unwrap_or("unchanged"),
        update_data.hours_before_class,
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RuleValidationFailed, message)));
    }

    let storage = service.get_storage(request);

    match storage.update_cancellation_rule(rule_id, update_data).await {
        Ok(rule) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(rule, "Cancellation rule updated successfully"))),
        Err(e) => Ok(handle_rule_error(e)),
    }
}
