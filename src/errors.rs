//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classbooking_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClassBookingError {
            $($variant(String),)*
        }

        impl ClassBookingError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassBookingError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassBookingError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassBookingError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassBookingError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassBookingError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classbooking_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    InvalidState("E008", "Invalid Lifecycle State"),
    Capacity("E009", "Class Capacity Exceeded"),
    Conflict("E010", "Uniqueness Conflict"),
    Serialization("E011", "Serialization Error"),
    DateParse("E012", "Date Parse Error"),
    Authentication("E013", "Authentication Error"),
    Authorization("E014", "Authorization Error"),
}

impl ClassBookingError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassBookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassBookingError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassBookingError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassBookingError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ClassBookingError {
    fn from(err: std::io::Error) -> Self {
        ClassBookingError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassBookingError {
    fn from(err: serde_json::Error) -> Self {
        ClassBookingError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassBookingError {
    fn from(err: chrono::ParseError) -> Self {
        ClassBookingError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassBookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassBookingError::cache_connection("test").code(), "E001");
        assert_eq!(ClassBookingError::database_config("test").code(), "E003");
        assert_eq!(ClassBookingError::not_found("test").code(), "E007");
        assert_eq!(ClassBookingError::invalid_state("test").code(), "E008");
        assert_eq!(ClassBookingError::capacity("test").code(), "E009");
        assert_eq!(ClassBookingError::conflict("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassBookingError::capacity("test").error_type(),
            "Class Capacity Exceeded"
        );
        assert_eq!(
            ClassBookingError::invalid_state("test").error_type(),
            "Invalid Lifecycle State"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassBookingError::conflict("Student is already enrolled in this class");
        assert_eq!(err.message(), "Student is already enrolled in this class");
    }

    #[test]
    fn test_format_simple() {
        let err = ClassBookingError::not_found("Class not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Class not found"));
    }
}
