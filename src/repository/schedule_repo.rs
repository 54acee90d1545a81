// ==========================================
// AI 衣橱穿搭推荐系统 - 周计划仓储
// ==========================================
// 职责: 周计划条目的加载 / 保存
// 约束: 无事件且无温湿度的条目不落盘
// ==========================================

use crate::domain::schedule::DayEntry;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::kv_store::KvStore;

/// 周计划在 KV 存储中的键
pub const SCHEDULE_KEY: &str = "schedule";

// ==========================================
// ScheduleRepository - 周计划仓储
// ==========================================
pub struct ScheduleRepository;

impl ScheduleRepository {
    /// 加载周计划 (无记录时为空列表)
    pub fn load(store: &dyn KvStore) -> RepositoryResult<Vec<DayEntry>> {
        let raw = match store.get(SCHEDULE_KEY)? {
            Some(v) => v,
            None => return Ok(Vec::new()),
        };
        serde_json::from_str(&raw).map_err(|e| RepositoryError::SerializationError {
            key: SCHEDULE_KEY.to_string(),
            message: e.to_string(),
        })
    }

    /// 保存周计划, 过滤掉无意义条目
    pub fn save(store: &dyn KvStore, schedule: &[DayEntry]) -> RepositoryResult<()> {
        let meaningful: Vec<&DayEntry> = schedule.iter().filter(|e| e.is_meaningful()).collect();
        let json = serde_json::to_string(&meaningful).map_err(|e| {
            RepositoryError::SerializationError {
                key: SCHEDULE_KEY.to_string(),
                message: e.to_string(),
            }
        })?;
        store.set(SCHEDULE_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::kv_store::MemoryKvStore;

    #[test]
    fn test_save_filters_empty_entries() {
        let store = MemoryKvStore::new();
        let schedule: Vec<DayEntry> = serde_json::from_str(
            r#"[
                {"day":"월","event":"회의","temperature":18},
                {"day":"화"},
                {"day":"수","humidity":75}
            ]"#,
        )
        .unwrap();

        ScheduleRepository::save(&store, &schedule).unwrap();
        let loaded = ScheduleRepository::load(&store).unwrap();
        // 화요일条目无事件无温湿度, 不落盘
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].day, "월");
        assert_eq!(loaded[1].day, "수");
    }

    #[test]
    fn test_missing_key_yields_empty_schedule() {
        let store = MemoryKvStore::new();
        assert!(ScheduleRepository::load(&store).unwrap().is_empty());
    }
}
