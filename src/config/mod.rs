// ==========================================
// AI 衣橱穿搭推荐系统 - 配置层
// ==========================================
// 职责: 推荐权重表定义与加载
// ==========================================

pub mod config_manager;
pub mod weights;

pub use config_manager::{ConfigManager, WEIGHTS_KEY};
pub use weights::{
    ActivityWeights, ColorHarmonyWeights, IncompatibleWeights, LocationWeights,
    RecommendationWeights, ScoreFloors, SeasonPriority, StatusWeights, TempBandWeights,
    TimeOfDayWeights, WeatherWeights,
};
