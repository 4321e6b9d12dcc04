use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::InstructorService;

// 懒加载的全局 INSTRUCTOR_SERVICE 实例
static INSTRUCTOR_SERVICE: Lazy<InstructorService> = Lazy::new(InstructorService::new_lazy);

pub async fn my_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE.my_classes(&req).await
}

// 配置路由
pub fn configure_instructor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // 教练个人课表
        web::scope("/api/v1/instructors")
            .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/me/classes", web::get().to(my_classes)),
    );
}
