// ==========================================
// AI 衣橱穿搭推荐系统 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含业务规则
// ==========================================

pub mod garment;
pub mod outfit;
pub mod schedule;
pub mod types;

// 重导出核心实体
pub use garment::{Garment, GarmentColor, Rgb};
pub use outfit::{DailyRecommendation, Outfit};
pub use schedule::{DayContext, DayEntry, DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C};
pub use types::{
    ActivityType, Category, GarmentStatus, LocationKind, Season, TimeOfDay, Weather,
};
