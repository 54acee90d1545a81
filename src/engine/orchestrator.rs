// ==========================================
// AI 衣橱穿搭推荐系统 - 推荐编排器
// ==========================================
// 职责: 整周日程逐日推荐 + 每周使用记录推进
// 红线: 条目严格按日程顺序处理, 前一日的选取结果
// 通过每周记录影响后续各日的轮换加分
// ==========================================

use crate::config::weights::RecommendationWeights;
use crate::domain::garment::Garment;
use crate::domain::outfit::DailyRecommendation;
use crate::domain::schedule::DayEntry;
use crate::engine::selector::OutfitSelector;
use crate::engine::weekly_usage::WeeklyUsage;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, instrument};

// ==========================================
// 顶层拒绝 (计算未开始)
// ==========================================
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("일정을 입력해주세요.")]
    EmptySchedule,

    #[error("옷장에 옷이 없습니다. 옷을 등록해주세요.")]
    EmptyWardrobe,
}

/// 一次推荐运行的完整输出: 逐日推荐 + 推进后的每周记录
#[derive(Debug)]
pub struct RecommendRun {
    pub recommendations: Vec<DailyRecommendation>,
    pub weekly: WeeklyUsage,
}

// ==========================================
// StylingOrchestrator - 整周推荐编排
// ==========================================
pub struct StylingOrchestrator<'a> {
    selector: OutfitSelector<'a>,
}

impl<'a> StylingOrchestrator<'a> {
    pub fn new(weights: &'a RecommendationWeights) -> Self {
        Self {
            selector: OutfitSelector::new(weights),
        }
    }

    /// 整周推荐
    ///
    /// 每周记录作为显式状态传入传出; 每日选定的全部衣物
    /// (含鞋) 立即计入记录, 后续各日据此计算轮换加分
    #[instrument(skip_all, fields(days = schedule.len(), garments = wardrobe.len()))]
    pub fn recommend<R: Rng>(
        &self,
        schedule: &[DayEntry],
        wardrobe: &[Garment],
        mut weekly: WeeklyUsage,
        rng: &mut R,
    ) -> Result<RecommendRun, RecommendError> {
        if schedule.is_empty() {
            return Err(RecommendError::EmptySchedule);
        }
        if wardrobe.is_empty() {
            return Err(RecommendError::EmptyWardrobe);
        }

        let mut recommendations = Vec::with_capacity(schedule.len());
        for entry in schedule {
            let ctx = entry.context();
            let outfit = self.selector.select(wardrobe, &ctx, &weekly, rng);

            for garment in outfit.chosen() {
                weekly.record(garment.usage_key());
            }
            debug!(day = %entry.day, complete = outfit.is_complete(), "단일 날짜 추천 완료");

            recommendations.push(DailyRecommendation {
                day: entry.day.clone(),
                event: ctx.event.clone(),
                temperature: ctx.temperature,
                humidity: ctx.humidity,
                outfit,
            });
        }

        Ok(RecommendRun {
            recommendations,
            weekly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Category, Season};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn garment(name: &str, id: &str, category: Category, season: Season) -> Garment {
        let mut g = Garment::new(name, category, season, vec![]);
        g.id = id.to_string();
        g
    }

    fn entry(day: &str) -> DayEntry {
        serde_json::from_str(&format!(r#"{{"day":"{day}","event":"외출"}}"#)).unwrap()
    }

    fn weekly() -> WeeklyUsage {
        WeeklyUsage::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
    }

    #[test]
    fn test_empty_inputs_are_refused() {
        let w = RecommendationWeights::default();
        let orchestrator = StylingOrchestrator::new(&w);
        let mut rng = StdRng::seed_from_u64(0);

        let wardrobe = vec![garment("티셔츠", "t1", Category::Top, Season::Summer)];
        let err = orchestrator
            .recommend(&[], &wardrobe, weekly(), &mut rng)
            .unwrap_err();
        assert_eq!(err, RecommendError::EmptySchedule);

        let err = orchestrator
            .recommend(&[entry("월")], &[], weekly(), &mut rng)
            .unwrap_err();
        assert_eq!(err, RecommendError::EmptyWardrobe);
        assert_eq!(err.to_string(), "옷장에 옷이 없습니다. 옷을 등록해주세요.");
    }

    #[test]
    fn test_earlier_days_decay_novelty_for_later_days() {
        let w = RecommendationWeights::default();
        let orchestrator = StylingOrchestrator::new(&w);

        // 两件同规格上衣: 第二天必须轮换到前一天未穿的那件
        let wardrobe = vec![
            garment("반팔 티셔츠", "top-a", Category::Top, Season::Summer),
            garment("반팔 티셔츠", "top-b", Category::Top, Season::Summer),
            garment("청바지", "b1", Category::Bottom, Season::Autumn),
            garment("운동화", "s1", Category::Shoes, Season::AllSeason),
        ];
        let schedule = vec![entry("월"), entry("화")];

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let run = orchestrator
                .recommend(&schedule, &wardrobe, weekly(), &mut rng)
                .unwrap();
            let day1 = run.recommendations[0].outfit.top.as_ref().unwrap();
            let day2 = run.recommendations[1].outfit.top.as_ref().unwrap();
            // 轮换加分 (40) 压过扰动 (0..10), 第二天不会重复
            assert_ne!(day1.id, day2.id);
        }
    }

    #[test]
    fn test_all_chosen_garments_are_recorded() {
        let w = RecommendationWeights::default();
        let orchestrator = StylingOrchestrator::new(&w);
        let mut rng = StdRng::seed_from_u64(1);

        let wardrobe = vec![
            garment("티셔츠", "t1", Category::Top, Season::Summer),
            garment("청바지", "b1", Category::Bottom, Season::Autumn),
            garment("운동화", "s1", Category::Shoes, Season::AllSeason),
        ];
        let run = orchestrator
            .recommend(&[entry("월")], &wardrobe, weekly(), &mut rng)
            .unwrap();

        // 鞋同样计入记录 (允许重复只是不做硬排除)
        assert!(run.weekly.contains("t1"));
        assert!(run.weekly.contains("b1"));
        assert!(run.weekly.contains("s1"));
    }
}
