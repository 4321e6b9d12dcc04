use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CancellationRuleService;
use crate::models::cancellation_rules::responses::CancellationRuleListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_rules(
    service: &CancellationRuleService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_cancellation_rules().await {
        Ok(rules) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CancellationRuleListResponse { rules },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to list cancellation rules: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list cancellation rules",
                )),
            )
        }
    }
}

/// 当前激活规则
///
/// 没有激活规则不是错误：data 为空，消费方按"当前无取消政策"处理。
pub async fn get_active_rule(
    service: &CancellationRuleService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_active_cancellation_rule().await {
        Ok(Some(rule)) => Ok(HttpResponse::Ok().json(ApiResponse::success(rule, "OK"))),
        Ok(None) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("No cancellation policy is currently active"))),
        Err(e) => {
            error!("Failed to get active cancellation rule: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get active cancellation rule",
                )),
            )
        }
    }
}
