use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use super::update::handle_class_mutation_error;
use crate::models::ApiResponse;

pub async fn complete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.complete_class_session(class_id).await {
        Ok(class) => {
            info!("Class {} completed", class.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class completed successfully")))
        }
        Err(e) => Ok(handle_class_mutation_error(e)),
    }
}
