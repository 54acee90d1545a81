// ==========================================
// AI 衣橱穿搭推荐系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供外层界面调用
// ==========================================

pub mod error;
pub mod styling_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use styling_api::StylingApi;
