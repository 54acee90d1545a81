// ==========================================
// AI 衣橱穿搭推荐系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含评分业务逻辑
// 职责: 抽象 KV 协作方之上的记录加载 / 保存 / 修复
// ==========================================

pub mod error;
pub mod kv_store;
pub mod schedule_repo;
pub mod usage_repo;
pub mod wardrobe_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use kv_store::{KvStore, MemoryKvStore, SqliteKvStore};
pub use schedule_repo::ScheduleRepository;
pub use usage_repo::UsageRepository;
pub use wardrobe_repo::{example_wardrobe, WardrobeRepository};
