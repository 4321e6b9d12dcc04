pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::cancellation_rules::requests::{
    CreateCancellationRuleRequest, UpdateCancellationRuleRequest,
};
use crate::storage::Storage;

pub struct CancellationRuleService {
    storage: Option<Arc<dyn Storage>>,
}

impl CancellationRuleService {
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

    // 创建规则（总是成为激活规则）
    pub async fn create_rule(
        &self,
        request: &HttpRequest,
        rule_data: CreateCancellationRuleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_rule(self, request, rule_data).await
    }

    // 更新规则
    pub async fn update_rule(
        &self,
        request: &HttpRequest,
        rule_id: i64,
        update_data: UpdateCancellationRuleRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_rule(self, request, rule_id, update_data).await
    }

    // 删除规则
    pub async fn delete_rule(&self, request: &HttpRequest, rule_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_rule(self, request, rule_id).await
    }

    // 规则列表
    pub async fn list_rules(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_rules(self, request).await
    }

    // 当前激活规则
    pub async fn get_active_rule(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_active_rule(self, request).await
    }
}
