use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CancellationRuleService;
use super::create::handle_rule_error;
use crate::models::ApiResponse;

pub async fn delete_rule(
    service: &CancellationRuleService,
    request: &HttpRequest,
    rule_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_cancellation_rule(rule_id).await {
        Ok(rule) => {
            info!("Cancellation rule {} deleted", rule_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(rule, "Cancellation rule deleted successfully")))
        }
        Err(e) => Ok(handle_rule_error(e)),
    }
}
