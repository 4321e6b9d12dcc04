use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::InstructorService;
use super::assign::handle_assignment_error;
use crate::models::ApiResponse;

pub async fn remove(
    service: &InstructorService,
    request: &HttpRequest,
    class_id: i64,
    instructor_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.remove_instructor(class_id, instructor_id).await {
        Ok(assignment) => {
            info!("Instructor {} removed from class {}", instructor_id, class_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(assignment, "Instructor removed successfully")))
        }
        Err(e) => Ok(handle_assignment_error(e)),
    }
}
