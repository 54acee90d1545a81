// ==========================================
// AI 衣橱穿搭推荐系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 单机决策辅助 (推荐结果由用户最终取舍)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 评分与选取
pub mod engine;

// 配置层 - 权重表
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ActivityType, Category, GarmentStatus, LocationKind, Season, TimeOfDay, Weather,
};

// 领域实体
pub use domain::{DailyRecommendation, DayContext, DayEntry, Garment, GarmentColor, Outfit, Rgb};

// 引擎
pub use engine::{
    ClothingScorer, OutfitSelector, RecommendError, StylingOrchestrator, WeeklyUsage,
};

// 配置
pub use config::weights::RecommendationWeights;

// API
pub use api::{ApiError, ApiResult, StylingApi};

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
