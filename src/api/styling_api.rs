// ==========================================
// AI 衣橱穿搭推荐系统 - 穿搭业务 API
// ==========================================
// 职责: 衣橱维护 / 洗衣状态流转 / 整周推荐, 供外层界面调用
// 约束: 推荐随机源由调用方注入 (生产用熵种子, 测试用固定种子)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::config_manager::ConfigManager;
use crate::domain::garment::{Garment, GarmentColor};
use crate::domain::outfit::DailyRecommendation;
use crate::domain::schedule::DayEntry;
use crate::domain::types::{Category, Season};
use crate::engine::color::dominant_colors;
use crate::engine::orchestrator::StylingOrchestrator;
use crate::repository::kv_store::KvStore;
use crate::repository::schedule_repo::ScheduleRepository;
use crate::repository::usage_repo::UsageRepository;
use crate::repository::wardrobe_repo::WardrobeRepository;
use chrono::NaiveDate;
use rand::Rng;
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// StylingApi - 穿搭业务 API
// ==========================================
pub struct StylingApi {
    store: Arc<dyn KvStore>,
}

impl StylingApi {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    // ==========================================
    // 衣橱维护
    // ==========================================

    /// 加载衣橱; 首次使用 (无记录) 时写入示例衣橱
    pub fn load_wardrobe(&self) -> ApiResult<Vec<Garment>> {
        let wardrobe = WardrobeRepository::load(self.store.as_ref())?;
        if !wardrobe.is_empty() {
            return Ok(wardrobe);
        }
        if self.store.get(crate::repository::wardrobe_repo::WARDROBE_KEY)?.is_some() {
            // 已有空记录, 用户清空过衣橱, 不再填充示例
            return Ok(wardrobe);
        }
        Ok(WardrobeRepository::seed_examples(self.store.as_ref())?)
    }

    /// 登记新衣物
    ///
    /// 标签为逗号分隔文本, 空白项剔除; 至少一个有效标签
    #[instrument(skip(self, colors))]
    pub fn add_garment(
        &self,
        name: &str,
        category: Category,
        season: Season,
        tags_text: &str,
        colors: Option<Vec<GarmentColor>>,
    ) -> ApiResult<Garment> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("衣物名称不能为空".to_string()));
        }

        let tags: Vec<String> = tags_text
            .split(',')
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        if tags.is_empty() {
            return Err(ApiError::InvalidInput("至少需要一个标签".to_string()));
        }

        let mut garment = Garment::new(name, category, season, tags);
        garment.colors = colors;

        let mut wardrobe = WardrobeRepository::load(self.store.as_ref())?;
        wardrobe.push(garment.clone());
        WardrobeRepository::save(self.store.as_ref(), &wardrobe)?;
        info!(id = %garment.id, name = %garment.name, "衣物已登记");
        Ok(garment)
    }

    /// 从图片像素 (RGBA 字节流) 提取候选主色, 供登记时选用
    pub fn extract_colors(&self, pixels: &[u8], pixel_count: usize) -> Vec<GarmentColor> {
        dominant_colors(pixels, pixel_count)
    }

    /// 删除衣物
    pub fn remove_garment(&self, id: &str) -> ApiResult<()> {
        let mut wardrobe = WardrobeRepository::load(self.store.as_ref())?;
        let before = wardrobe.len();
        wardrobe.retain(|g| g.id != id);
        if wardrobe.len() == before {
            return Err(ApiError::NotFound(format!("衣物 id={id}")));
        }
        WardrobeRepository::save(self.store.as_ref(), &wardrobe)?;
        Ok(())
    }

    /// 洗衣状态流转: ready → washing → clean → ready
    pub fn toggle_laundry_status(&self, id: &str) -> ApiResult<Garment> {
        let mut wardrobe = WardrobeRepository::load(self.store.as_ref())?;
        let garment = wardrobe
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("衣物 id={id}")))?;
        garment.status = garment.status.next();
        let updated = garment.clone();
        WardrobeRepository::save(self.store.as_ref(), &wardrobe)?;
        Ok(updated)
    }

    // ==========================================
    // 周计划维护
    // ==========================================

    pub fn load_schedule(&self) -> ApiResult<Vec<DayEntry>> {
        Ok(ScheduleRepository::load(self.store.as_ref())?)
    }

    pub fn save_schedule(&self, schedule: &[DayEntry]) -> ApiResult<()> {
        Ok(ScheduleRepository::save(self.store.as_ref(), schedule)?)
    }

    // ==========================================
    // 权重表维护
    // ==========================================

    /// 当前生效的权重表 (默认表 + 存储覆写)
    pub fn load_weights(&self) -> ApiResult<crate::config::weights::RecommendationWeights> {
        Ok(ConfigManager::load_weights(self.store.as_ref())?)
    }

    /// 持久化权重覆写
    pub fn save_weights(
        &self,
        weights: &crate::config::weights::RecommendationWeights,
    ) -> ApiResult<()> {
        Ok(ConfigManager::save_weights(self.store.as_ref(), weights)?)
    }

    // ==========================================
    // 整周推荐
    // ==========================================

    /// 按存储中的周计划与衣橱生成整周推荐
    ///
    /// 每周使用记录先推进到 today 所在周再参与推荐,
    /// 推荐结束后把更新的记录落盘
    #[instrument(skip(self, rng))]
    pub fn recommend_week<R: Rng>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> ApiResult<Vec<DailyRecommendation>> {
        let weights = ConfigManager::load_weights(self.store.as_ref())?;
        let wardrobe = self.load_wardrobe()?;
        let schedule = ScheduleRepository::load(self.store.as_ref())?;
        let weekly = UsageRepository::load(self.store.as_ref(), today)?;

        let orchestrator = StylingOrchestrator::new(&weights);
        let run = orchestrator.recommend(&schedule, &wardrobe, weekly, rng)?;

        UsageRepository::save(self.store.as_ref(), &run.weekly)?;
        info!(days = run.recommendations.len(), "整周推荐完成");
        Ok(run.recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::orchestrator::RecommendError;
    use crate::repository::kv_store::MemoryKvStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn api() -> StylingApi {
        StylingApi::new(Arc::new(MemoryKvStore::new()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    #[test]
    fn test_first_load_seeds_example_wardrobe() {
        let api = api();
        let wardrobe = api.load_wardrobe().unwrap();
        assert_eq!(wardrobe.len(), 10);

        // 清空后不再重新填充
        WardrobeRepository::save(api.store.as_ref(), &[]).unwrap();
        assert!(api.load_wardrobe().unwrap().is_empty());
    }

    #[test]
    fn test_add_garment_parses_comma_tags() {
        let api = api();
        api.load_wardrobe().unwrap();

        let garment = api
            .add_garment(
                "린넨 셔츠",
                Category::Top,
                Season::Summer,
                " 회의 , 데이트 ,, ",
                None,
            )
            .unwrap();
        assert_eq!(garment.tags, vec!["회의", "데이트"]);

        let wardrobe = api.load_wardrobe().unwrap();
        assert_eq!(wardrobe.len(), 11);

        // 全空白标签拒绝
        let err = api.add_garment("셔츠", Category::Top, Season::Spring, " , ", None);
        assert!(matches!(err, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_toggle_laundry_cycles_status() {
        use crate::domain::types::GarmentStatus;
        let api = api();
        api.load_wardrobe().unwrap();

        let g = api.toggle_laundry_status("example1").unwrap();
        assert_eq!(g.status, GarmentStatus::Washing);
        let g = api.toggle_laundry_status("example1").unwrap();
        assert_eq!(g.status, GarmentStatus::Clean);
        let g = api.toggle_laundry_status("example1").unwrap();
        assert_eq!(g.status, GarmentStatus::Ready);

        assert!(matches!(
            api.toggle_laundry_status("nope"),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_garment() {
        let api = api();
        api.load_wardrobe().unwrap();

        api.remove_garment("example5").unwrap();
        let wardrobe = api.load_wardrobe().unwrap();
        assert_eq!(wardrobe.len(), 9);
        assert!(wardrobe.iter().all(|g| g.id != "example5"));
    }

    #[test]
    fn test_recommend_week_requires_schedule() {
        let api = api();
        let mut rng = StdRng::seed_from_u64(0);
        let err = api.recommend_week(today(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Refused(RecommendError::EmptySchedule)
        ));
    }

    #[test]
    fn test_recommend_week_persists_usage() {
        let api = api();
        let schedule: Vec<DayEntry> =
            serde_json::from_str(r#"[{"day":"월","event":"회의","temperature":18}]"#).unwrap();
        api.save_schedule(&schedule).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let recs = api.recommend_week(today(), &mut rng).unwrap();
        assert_eq!(recs.len(), 1);
        assert!(recs[0].outfit.is_complete());

        // 本次选中的衣物已计入每周记录
        let usage = UsageRepository::load(api.store.as_ref(), today()).unwrap();
        assert!(!usage.used_keys().is_empty());
    }
}
