use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::cancellation_rules::requests::{
    CreateCancellationRuleRequest, UpdateCancellationRuleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CancellationRuleService;
use crate::utils::SafeIdI64;

// 懒加载的全局 CANCELLATION_RULE_SERVICE 实例
static CANCELLATION_RULE_SERVICE: Lazy<CancellationRuleService> =
    Lazy::new(CancellationRuleService::new_lazy);

// HTTP处理程序
pub async fn list_rules(req: HttpRequest) -> ActixResult<HttpResponse> {
    CANCELLATION_RULE_SERVICE.list_rules(&req).await
}

pub async fn create_rule(
    req: HttpRequest,
    rule_data: web::Json<CreateCancellationRuleRequest>,
) -> ActixResult<HttpResponse> {
    CANCELLATION_RULE_SERVICE
        .create_rule(&req, rule_data.into_inner())
        .await
}

pub async fn get_active_rule(req: HttpRequest) -> ActixResult<HttpResponse> {
    CANCELLATION_RULE_SERVICE.get_active_rule(&req).await
}

pub async fn update_rule(
    req: HttpRequest,
    rule_id: SafeIdI64,
    update_data: web::Json<UpdateCancellationRuleRequest>,
) -> ActixResult<HttpResponse> {
    CANCELLATION_RULE_SERVICE
        .update_rule(&req, rule_id.0, update_data.into_inner())
        .await
}

pub async fn delete_rule(req: HttpRequest, rule_id: SafeIdI64) -> ActixResult<HttpResponse> {
    CANCELLATION_RULE_SERVICE.delete_rule(&req, rule_id.0).await
}

// 配置路由
pub fn configure_cancellation_rule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // 退款取消政策管理，仅管理员可用
        web::scope("/api/v1/admin/cancellation-rules")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_rules))
            .route("", web::post().to(create_rule))
            // 字面量路径注册在参数路径之前
            .route("/active", web::get().to(get_active_rule))
            .route("/{id}", web::patch().to(update_rule))
            .route("/{id}", web::delete().to(delete_rule)),
    );
}
