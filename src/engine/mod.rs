// ==========================================
// AI 衣橱穿搭推荐系统 - 推荐引擎
// ==========================================
// 分层: 关键词特征 → 单件评分 (色彩/天气/活动等因子)
// → 类别顺序选取 → 组合检查 → 整周编排
// ==========================================

pub mod color;
pub mod compatibility;
pub mod keywords;
pub mod orchestrator;
pub mod scoring;
pub mod selector;
pub mod weekly_usage;

pub use color::{harmony, harmony_score};
pub use keywords::GarmentTraits;
pub use orchestrator::{RecommendError, RecommendRun, StylingOrchestrator};
pub use scoring::{ChosenItem, ClothingScorer};
pub use selector::OutfitSelector;
pub use weekly_usage::{week_start_of, WeeklyUsage};
