use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use super::update::handle_class_mutation_error;
use crate::models::ApiResponse;
use crate::models::classes::requests::CancelClassSessionRequest;

pub async fn cancel_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    cancel_data: CancelClassSessionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.cancel_class_session(class_id, cancel_data).await {
        Ok(class) => {
            info!("Class {} cancelled", class.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class cancelled successfully")))
        }
        Err(e) => Ok(handle_class_mutation_error(e)),
    }
}
