//! 时间工具函数
//!
//! 所有实体的创建时间统一使用 `i64` Unix millis，
//! repository 层按该字段降序排列。

/// Current time as Unix epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
