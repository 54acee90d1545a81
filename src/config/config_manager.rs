// ==========================================
// AI 衣橱穿搭推荐系统 - 配置管理器
// ==========================================
// 职责: 权重表的加载 / 覆写管理
// 存储: KV 存储键 recommendation_weights (JSON)
// ==========================================

use crate::config::weights::RecommendationWeights;
use crate::repository::kv_store::KvStore;
use crate::repository::RepositoryResult;
use tracing::warn;

/// 权重表在 KV 存储中的键
pub const WEIGHTS_KEY: &str = "recommendation_weights";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 加载权重表
    ///
    /// 存储中无覆写时返回默认表; 覆写 JSON 可部分给出,
    /// 未给出的键沿用默认值。损坏的覆写记录降级为默认表并告警,
    /// 不阻断推荐流程。
    pub fn load_weights(store: &dyn KvStore) -> RepositoryResult<RecommendationWeights> {
        let raw = match store.get(WEIGHTS_KEY)? {
            Some(v) => v,
            None => return Ok(RecommendationWeights::default()),
        };

        match serde_json::from_str(&raw) {
            Ok(weights) => Ok(weights),
            Err(e) => {
                warn!(error = %e, "权重覆写记录损坏, 回退默认表");
                Ok(RecommendationWeights::default())
            }
        }
    }

    /// 持久化权重覆写
    pub fn save_weights(
        store: &dyn KvStore,
        weights: &RecommendationWeights,
    ) -> RepositoryResult<()> {
        let json = serde_json::to_string(weights)
            .map_err(|e| crate::repository::RepositoryError::ValidationError(e.to_string()))?;
        store.set(WEIGHTS_KEY, &json)
    }
}
