// ==========================================
// AI 衣橱穿搭推荐系统 - 衣橱仓储
// ==========================================
// 职责: 衣橱列表的加载 / 保存 / 旧记录修复 / 首次示例数据
// 红线: Repository 不含评分业务逻辑
// ==========================================

use crate::domain::garment::Garment;
use crate::domain::types::{Category, Season};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::kv_store::KvStore;
use tracing::{info, warn};

/// 衣橱在 KV 存储中的键
pub const WARDROBE_KEY: &str = "wardrobe";

// ==========================================
// WardrobeRepository - 衣橱仓储
// ==========================================
pub struct WardrobeRepository;

impl WardrobeRepository {
    /// 加载衣橱
    ///
    /// 旧版记录缺 id 时就地修复并回写; 存储中无记录时
    /// 返回空列表 (是否填充示例数据由调用方决定)
    pub fn load(store: &dyn KvStore) -> RepositoryResult<Vec<Garment>> {
        let raw = match store.get(WARDROBE_KEY)? {
            Some(v) => v,
            None => return Ok(Vec::new()),
        };

        let mut wardrobe: Vec<Garment> = serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::SerializationError {
                key: WARDROBE_KEY.to_string(),
                message: e.to_string(),
            }
        })?;

        let mut repaired = 0;
        for garment in &mut wardrobe {
            if garment.repair() {
                repaired += 1;
            }
        }
        if repaired > 0 {
            warn!(repaired, "旧版衣物记录缺 id, 已补发并回写");
            Self::save(store, &wardrobe)?;
        }

        Ok(wardrobe)
    }

    /// 保存衣橱
    pub fn save(store: &dyn KvStore, wardrobe: &[Garment]) -> RepositoryResult<()> {
        let json =
            serde_json::to_string(wardrobe).map_err(|e| RepositoryError::SerializationError {
                key: WARDROBE_KEY.to_string(),
                message: e.to_string(),
            })?;
        store.set(WARDROBE_KEY, &json)
    }

    /// 首次使用时写入示例衣橱 (10 件起步衣物)
    pub fn seed_examples(store: &dyn KvStore) -> RepositoryResult<Vec<Garment>> {
        let wardrobe = example_wardrobe();
        Self::save(store, &wardrobe)?;
        info!(count = wardrobe.len(), "示例衣橱已写入");
        Ok(wardrobe)
    }
}

fn example_garment(
    id: &str,
    name: &str,
    category: Category,
    season: Season,
    tags: &[&str],
) -> Garment {
    let mut g = Garment::new(
        name,
        category,
        season,
        tags.iter().map(|t| t.to_string()).collect(),
    );
    g.id = id.to_string();
    g
}

/// 首次使用的示例衣橱 (id 固定, 便于升级迁移时识别)
pub fn example_wardrobe() -> Vec<Garment> {
    vec![
        example_garment("example1", "흰 셔츠", Category::Top, Season::Spring, &["회의", "포멀"]),
        example_garment("example2", "슬랙스", Category::Bottom, Season::Spring, &["회의", "포멀"]),
        example_garment("example3", "운동복 상의", Category::Top, Season::AllSeason, &["운동"]),
        example_garment("example4", "운동복 하의", Category::Bottom, Season::AllSeason, &["운동"]),
        example_garment("example5", "청바지", Category::Bottom, Season::Autumn, &["캐주얼"]),
        example_garment("example6", "로퍼", Category::Shoes, Season::AllSeason, &["회의", "포멀"]),
        example_garment("example7", "운동화", Category::Shoes, Season::AllSeason, &["운동", "캐주얼"]),
        example_garment("example8", "티셔츠", Category::Top, Season::Summer, &["캐주얼"]),
        example_garment("example9", "원피스", Category::Top, Season::Summer, &["데이트", "캐주얼"]),
        example_garment("example10", "구두", Category::Shoes, Season::AllSeason, &["데이트", "포멀"]),
    ]
}
