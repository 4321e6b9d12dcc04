use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::classes::requests::ClassSessionQueryParams;
use crate::models::classes::responses::{ClassCatalogResponse, ClassSessionSummary};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassSessionQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_class_sessions_with_pagination(query.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}

/// 学员端课表：每行附带已报名人数与剩余名额
pub async fn list_catalog(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassSessionQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let page = match storage
        .list_class_sessions_with_pagination(query.into())
        .await
    {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to list classes: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            );
        }
    };

    let class_ids: Vec<i64> = page.items.iter().map(|c| c.id).collect();
    let counts = match storage.enrollment_counts_for_classes(&class_ids).await {
        Ok(counts) => counts,
        Err(e) => {
            error!("Failed to count enrollments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to count enrollments",
                )),
            );
        }
    };

    let items = page
        .items
        .into_iter()
        .map(|class| {
            let enrollment_count = counts.get(&class.id).copied().unwrap_or(0);
            let spots_remaining = (class.max_capacity as i64 - enrollment_count).max(0);
            ClassSessionSummary {
                class,
                enrollment_count,
                spots_remaining,
            }
        })
        .collect();

    let response = ClassCatalogResponse {
        pagination: page.pagination,
        items,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
}
