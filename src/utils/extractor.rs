//! 路径参数安全提取器
//!
//! 把路径中的 ID 解析为 i64，解析失败直接返回 400，
//! 避免每个处理函数重复做字符串转换。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|raw| raw.parse::<i64>().ok())
                        .filter(|id| *id > 0);

                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => Err(ErrorBadRequest(format!(
                            "Invalid path parameter: {}",
                            $param
                        ))),
                    })
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeIdI64("id"),
    SafeClassIdI64("class_id"),
    SafeInstructorIdI64("instructor_id"),
    SafeEnrollmentIdI64("enrollment_id"),
}
