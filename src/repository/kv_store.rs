// ==========================================
// AI 衣橱穿搭推荐系统 - 键值存储
// ==========================================
// 职责: 屏蔽持久化细节的抽象 KV 协作方
// 键位: wardrobe / schedule / weeklyUsedItems / weekStartMarker
//       / recommendation_weights
// ==========================================

use crate::db;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

// ==========================================
// KvStore - 抽象键值存储
// ==========================================
/// 各仓储与配置管理器共用的存储接口
pub trait KvStore {
    fn get(&self, key: &str) -> RepositoryResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RepositoryResult<()>;
    fn remove(&self, key: &str) -> RepositoryResult<()>;
}

// ==========================================
// SqliteKvStore - SQLite 落盘实现
// ==========================================
pub struct SqliteKvStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKvStore {
    /// 打开数据库 (统一 PRAGMA 配置) 并确保 store_kv 表存在
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// 从已有连接创建 (测试与共享连接场景), 补齐统一 PRAGMA 配置
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            db::configure_sqlite_connection(&guard)
                .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        }
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS store_kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
            [],
        )?;
        Ok(())
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM store_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        conn.execute(
            r#"
            INSERT INTO store_kv (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3
            "#,
            params![key, value, now],
        )?;
        debug!(key, bytes = value.len(), "KV 记录写入");
        Ok(())
    }

    fn remove(&self, key: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM store_kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

// ==========================================
// MemoryKvStore - 内存实现 (测试用)
// ==========================================
#[derive(Default)]
pub struct MemoryKvStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let map = self
            .map
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RepositoryResult<()> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_store_applies_unified_pragmas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.db");
        let store = SqliteKvStore::new(path.to_str().unwrap()).unwrap();

        let conn = store.get_conn().unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_from_connection_applies_unified_pragmas() {
        let raw = Connection::open_in_memory().unwrap();
        let store = SqliteKvStore::from_connection(Arc::new(Mutex::new(raw))).unwrap();

        let conn = store.get_conn().unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
        drop(conn);

        store.set("wardrobe", "[]").unwrap();
        assert_eq!(store.get("wardrobe").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryKvStore::new();
        assert!(store.get("wardrobe").unwrap().is_none());

        store.set("wardrobe", "[]").unwrap();
        assert_eq!(store.get("wardrobe").unwrap().as_deref(), Some("[]"));

        store.set("wardrobe", "[1]").unwrap();
        assert_eq!(store.get("wardrobe").unwrap().as_deref(), Some("[1]"));

        store.remove("wardrobe").unwrap();
        assert!(store.get("wardrobe").unwrap().is_none());
    }
}
