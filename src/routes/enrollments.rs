use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::ClassSessionQueryParams;
use crate::models::enrollments::requests::{
    AdminEnrollmentQueryParams, DenyEnrollmentRequest, EnrollRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{ClassService, EnrollmentService};
use crate::utils::{SafeClassIdI64, SafeEnrollmentIdI64};

// 懒加载的全局服务实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_catalog(
    req: HttpRequest,
    query: web::Query<ClassSessionQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_catalog(&req, query.into_inner()).await
}

pub async fn enroll(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    enroll_data: Option<web::Json<EnrollRequest>>,
) -> ActixResult<HttpResponse> {
    let enroll_data = enroll_data
        .map(|data| data.into_inner())
        .unwrap_or_default();
    ENROLLMENT_SERVICE.enroll(&req, class_id.0, enroll_data).await
}

pub async fn withdraw(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.withdraw(&req, class_id.0).await
}

pub async fn my_enrollments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.my_enrollments(&req).await
}

pub async fn list_for_admin(
    req: HttpRequest,
    query: web::Query<AdminEnrollmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.list_for_admin(&req, query.into_inner()).await
}

pub async fn approve(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.approve(&req, enrollment_id.0).await
}

pub async fn deny(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
    deny_data: Option<web::Json<DenyEnrollmentRequest>>,
) -> ActixResult<HttpResponse> {
    let deny_data = deny_data
        .map(|data| data.into_inner())
        .unwrap_or(DenyEnrollmentRequest { reason: None });
    ENROLLMENT_SERVICE.deny(&req, enrollment_id.0, deny_data).await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // 学员端课表与报名接口
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_catalog))
            // 字面量路径注册在参数路径之前
            .route("/me/enrollments", web::get().to(my_enrollments))
            .route("/{class_id}/enroll", web::post().to(enroll))
            .route("/{class_id}/enroll", web::delete().to(withdraw)),
    );

    cfg.service(
        // 管理端报名审核接口
        web::scope("/api/v1/admin/enrollments")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_for_admin))
            .route("/{enrollment_id}/approve", web::post().to(approve))
            .route("/{enrollment_id}/deny", web::post().to(deny)),
    );
}
