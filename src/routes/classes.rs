use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::{
    CancelClassSessionRequest, ClassSessionQueryParams, CreateClassSessionRequest,
    UpdateClassSessionRequest,
};
use crate::models::instructors::requests::AssignInstructorRequest;
use crate::models::users::entities::UserRole;
use crate::services::{ClassService, InstructorService};
use crate::utils::{SafeClassIdI64, SafeInstructorIdI64};

// 懒加载的全局服务实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static INSTRUCTOR_SERVICE: Lazy<InstructorService> = Lazy::new(InstructorService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassSessionQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassSessionRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassSessionRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn cancel_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    cancel_data: Option<web::Json<CancelClassSessionRequest>>,
) -> ActixResult<HttpResponse> {
    let cancel_data = cancel_data
        .map(|data| data.into_inner())
        .unwrap_or(CancelClassSessionRequest { reason: None });
    CLASS_SERVICE.cancel_class(&req, class_id.0, cancel_data).await
}

pub async fn complete_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.complete_class(&req, class_id.0).await
}

pub async fn list_class_instructors(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE.list_by_class(&req, class_id.0).await
}

pub async fn assign_instructor(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    assign_data: web::Json<AssignInstructorRequest>,
) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE
        .assign(&req, class_id.0, assign_data.into_inner())
        .await
}

pub async fn remove_instructor(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    instructor_id: SafeInstructorIdI64,
) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE
        .remove(&req, class_id.0, instructor_id.0)
        .await
}

// 配置路由
pub fn configure_class_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // 管理端排课接口，仅管理员可用
        web::scope("/api/v1/admin/classes")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_classes))
            .route("", web::post().to(create_class))
            .route("/{class_id}", web::get().to(get_class))
            .route("/{class_id}", web::patch().to(update_class))
            .route("/{class_id}/cancel", web::post().to(cancel_class))
            .route("/{class_id}/complete", web::post().to(complete_class))
            .route(
                "/{class_id}/instructors",
                web::get().to(list_class_instructors),
            )
            .route(
                "/{class_id}/instructors",
                web::post().to(assign_instructor),
            )
            .route(
                "/{class_id}/instructors/{instructor_id}",
                web::delete().to(remove_instructor),
            ),
    );
}
