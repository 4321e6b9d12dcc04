pub mod cancel;
pub mod complete;
pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{
    CancelClassSessionRequest, ClassSessionQueryParams, CreateClassSessionRequest,
    UpdateClassSessionRequest,
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 创建课程
    pub async fn create_class(
        &self,
        req: &HttpRequest,
        class_data: CreateClassSessionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, req, class_data).await
    }

    // 根据课程 ID 获取课程信息
    pub async fn get_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        get::get_class(self, req, class_id).await
    }

    // 管理端课程列表
    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        query: ClassSessionQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, query).await
    }

    // 学员端课表（带剩余名额）
    pub async fn list_catalog(
        &self,
        request: &HttpRequest,
        query: ClassSessionQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_catalog(self, request, query).await
    }

    // 更新课程信息
    pub async fn update_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassSessionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, req, class_id, update_data).await
    }

    // 取消课程
    pub async fn cancel_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        cancel_data: CancelClassSessionRequest,
    ) -> ActixResult<HttpResponse> {
        cancel::cancel_class(self, req, class_id, cancel_data).await
    }

    // 完课
    pub async fn complete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        complete::complete_class(self, req, class_id).await
    }
}
