// ==========================================
// AI 衣橱穿搭推荐系统 - 每周使用记录仓储
// ==========================================
// 职责: 每周使用集合 + 周起始标记的加载 / 保存
// 换周判定与清空在 WeeklyUsage::advance_to (纯转换),
// 仓储只负责落盘
// ==========================================

use crate::engine::weekly_usage::WeeklyUsage;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::kv_store::KvStore;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;

/// 每周使用集合在 KV 存储中的键 (JSON 字符串数组)
pub const WEEKLY_USED_KEY: &str = "weeklyUsedItems";

/// 周起始标记在 KV 存储中的键 (ISO 日期)
pub const WEEK_START_KEY: &str = "weekStartMarker";

// ==========================================
// UsageRepository - 每周使用记录仓储
// ==========================================
pub struct UsageRepository;

impl UsageRepository {
    /// 加载记录并推进到 today 所在周
    ///
    /// 标记缺失或损坏 (不可解析) 时按新一周处理;
    /// 换周清空由 advance_to 完成
    pub fn load(store: &dyn KvStore, today: NaiveDate) -> RepositoryResult<WeeklyUsage> {
        let marker = match store.get(WEEK_START_KEY)? {
            Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(e) => {
                    warn!(raw, error = %e, "周起始标记损坏, 按新一周处理");
                    None
                }
            },
            None => None,
        };

        let marker = match marker {
            Some(d) => d,
            None => return Ok(WeeklyUsage::new(today)),
        };

        let used: HashSet<String> = match store.get(WEEKLY_USED_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                RepositoryError::SerializationError {
                    key: WEEKLY_USED_KEY.to_string(),
                    message: e.to_string(),
                }
            })?,
            None => HashSet::new(),
        };

        Ok(WeeklyUsage::from_parts(marker, used).advance_to(today))
    }

    /// 保存记录 (集合存为 JSON 数组, 标记存为 ISO 日期)
    pub fn save(store: &dyn KvStore, usage: &WeeklyUsage) -> RepositoryResult<()> {
        let keys: Vec<&String> = usage.used_keys().iter().collect();
        let json = serde_json::to_string(&keys).map_err(|e| {
            RepositoryError::SerializationError {
                key: WEEKLY_USED_KEY.to_string(),
                message: e.to_string(),
            }
        })?;
        store.set(WEEKLY_USED_KEY, &json)?;
        store.set(
            WEEK_START_KEY,
            &usage.week_start().format("%Y-%m-%d").to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::kv_store::MemoryKvStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_trip_same_week() {
        let store = MemoryKvStore::new();
        // 2026-08-24 为周一
        let mut usage = WeeklyUsage::new(date(2026, 8, 24));
        usage.record("example1");
        usage.record("example5");
        UsageRepository::save(&store, &usage).unwrap();

        // 同一周内 (周五) 加载, 记录原样保留
        let loaded = UsageRepository::load(&store, date(2026, 8, 28)).unwrap();
        assert_eq!(loaded.week_start(), date(2026, 8, 24));
        assert!(loaded.contains("example1"));
        assert!(loaded.contains("example5"));
    }

    #[test]
    fn test_week_change_resets_set() {
        let store = MemoryKvStore::new();
        let mut usage = WeeklyUsage::new(date(2026, 8, 24));
        usage.record("example1");
        UsageRepository::save(&store, &usage).unwrap();

        // 下周一加载: 标记重写, 集合清空
        let loaded = UsageRepository::load(&store, date(2026, 8, 31)).unwrap();
        assert_eq!(loaded.week_start(), date(2026, 8, 31));
        assert!(!loaded.contains("example1"));
    }

    #[test]
    fn test_corrupt_marker_starts_fresh_week() {
        let store = MemoryKvStore::new();
        store.set(WEEK_START_KEY, "not a date").unwrap();
        store.set(WEEKLY_USED_KEY, r#"["example1"]"#).unwrap();

        let loaded = UsageRepository::load(&store, date(2026, 8, 28)).unwrap();
        assert_eq!(loaded.week_start(), date(2026, 8, 24));
        assert!(!loaded.contains("example1"));
    }

    #[test]
    fn test_missing_keys_start_fresh() {
        let store = MemoryKvStore::new();
        let loaded = UsageRepository::load(&store, date(2026, 8, 28)).unwrap();
        assert_eq!(loaded.week_start(), date(2026, 8, 24));
        assert!(loaded.used_keys().is_empty());
    }
}
