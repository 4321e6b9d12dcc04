pub mod assign;
pub mod list;
pub mod remove;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::instructors::requests::AssignInstructorRequest;
use crate::storage::Storage;

pub struct InstructorService {
    storage: Option<Arc<dyn Storage>>,
}

impl InstructorService {
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

    // 分配教练到课程
    pub async fn assign(
        &self,
        request: &HttpRequest,
        class_id: i64,
        assign_data: AssignInstructorRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign(self, request, class_id, assign_data).await
    }

    // 从课程移除教练
    pub async fn remove(
        &self,
        request: &HttpRequest,
        class_id: i64,
        instructor_id: i64,
    ) -> ActixResult<HttpResponse> {
        remove::remove(self, request, class_id, instructor_id).await
    }

    // 课程的教练名单
    pub async fn list_by_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_by_class(self, request, class_id).await
    }

    // 当前教练的个人课表
    pub async fn my_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::my_classes(self, request).await
    }
}
