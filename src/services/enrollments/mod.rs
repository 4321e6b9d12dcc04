pub mod enroll;
pub mod list;
pub mod my;
pub mod review;
pub mod withdraw;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{AdminEnrollmentQueryParams, DenyEnrollmentRequest, EnrollRequest};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 学员报名
    pub async fn enroll(
        &self,
        request: &HttpRequest,
        class_id: i64,
        enroll_data: EnrollRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll(self, request, class_id, enroll_data).await
    }

    // 学员退课
    pub async fn withdraw(&self, request: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        withdraw::withdraw(self, request, class_id).await
    }

    // 学员自己的报名列表
    pub async fn my_enrollments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my::my_enrollments(self, request).await
    }

    // 管理端报名列表
    pub async fn list_for_admin(
        &self,
        request: &HttpRequest,
        query: AdminEnrollmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_for_admin(self, request, query).await
    }

    // 审核通过
    pub async fn approve(
        &self,
        request: &HttpRequest,
        enrollment_id: i64,
    ) -> ActixResult<HttpResponse> {
        review::approve(self, request, enrollment_id).await
    }

    // 审核拒绝
    pub async fn deny(
        &self,
        request: &HttpRequest,
        enrollment_id: i64,
        deny_data: DenyEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        review::deny(self, request, enrollment_id, deny_data).await
    }
}
