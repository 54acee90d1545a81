// ==========================================
// AI 衣橱穿搭推荐系统 - API 层错误类型
// ==========================================
// 职责: 把存储/引擎错误折算为用户可理解的拒绝与失败
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::orchestrator::RecommendError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 顶层拒绝 (计算未开始) =====
    #[error(transparent)]
    Refused(#[from] RecommendError),

    // ===== 业务规则错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ===== 存储错误 =====
    #[error("存储访问失败: {0}")]
    Storage(#[from] RepositoryError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
