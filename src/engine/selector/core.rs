use crate::config::weights::RecommendationWeights;
use crate::domain::garment::Garment;
use crate::domain::outfit::Outfit;
use crate::domain::schedule::DayContext;
use crate::domain::types::{Category, GarmentStatus};
use crate::engine::compatibility;
use crate::engine::keywords::GarmentTraits;
use crate::engine::scoring::{ChosenItem, ClothingScorer};
use crate::engine::weekly_usage::WeeklyUsage;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use tracing::debug;

// 软失败原因 (用户可见, 沿用旧版文案)
const REASON_NO_CLOTHES: &str = "사용 가능한 옷이 없습니다. 빨래 중인 옷이 있는지 확인해주세요.";
const REASON_NO_TOP: &str = "사용 가능한 상의가 없습니다.";
const REASON_NO_BOTTOM: &str = "사용 가능한 하의가 없습니다.";
const REASON_NO_SHOES: &str = "사용 가능한 신발이 없습니다.";
const REASON_INCOMPATIBLE: &str = "부적합한 조합입니다. (예: 원피스 + 하의)";

// 带分数的候选
struct Scored<'a> {
    item: ChosenItem<'a>,
    score: f64,
}

// ==========================================
// OutfitSelector - 类别顺序贪心选取器
// ==========================================
pub struct OutfitSelector<'a> {
    weights: &'a RecommendationWeights,
    scorer: ClothingScorer<'a>,
}

impl<'a> OutfitSelector<'a> {
    pub fn new(weights: &'a RecommendationWeights) -> Self {
        Self {
            weights,
            scorer: ClothingScorer::new(weights),
        }
    }

    /// 装配单日穿搭
    ///
    /// 任何失败都落在 Outfit.reason, 不抛错;
    /// 不完整穿搭 + 非空 reason = 软失败
    pub fn select<'w, R: Rng>(
        &self,
        wardrobe: &'w [Garment],
        ctx: &DayContext,
        weekly: &WeeklyUsage,
        rng: &mut R,
    ) -> Outfit {
        let mut outfit = Outfit::default();

        // 洗涤中衣物整轮不可用
        let available: Vec<&'w Garment> = wardrobe
            .iter()
            .filter(|g| g.status != GarmentStatus::Washing)
            .collect();
        if available.is_empty() {
            outfit.reason = REASON_NO_CLOTHES.to_string();
            return outfit;
        }

        let mut chosen: Vec<ChosenItem<'w>> = Vec::with_capacity(4);

        // 1. 外套: 温度门控, 不是分数门控
        let outers = self.score_category(&available, Category::Outer, ctx, &chosen, weekly, rng);
        if let Some(best) = outers.first() {
            let t = ctx.temperature;
            if t <= self.weights.weather.cold_threshold {
                // 寒冷: 确定性取最高分
                outfit.outer = Some(best.item.garment.clone());
                chosen.push(best.item);
            } else if (10.0..=20.0).contains(&t) {
                // 微凉: 正分且与最高分并列者中均匀随机
                let ties: Vec<&Scored<'_>> = outers
                    .iter()
                    .filter(|s| s.score > 0.0 && s.score == best.score)
                    .collect();
                if let Some(pick) = ties.choose(rng) {
                    outfit.outer = Some(pick.item.garment.clone());
                    chosen.push(pick.item);
                }
            }
            // > 20°C: 无论分数一律不推荐外套
        }

        // 2. 上衣: 必选, 并列最高分中均匀随机
        let tops = self.score_category(&available, Category::Top, ctx, &chosen, weekly, rng);
        match pick_among_ties(&tops, rng) {
            Some(item) => {
                outfit.top = Some(item.garment.clone());
                chosen.push(item);
            }
            None => {
                outfit.reason = REASON_NO_TOP.to_string();
                return outfit;
            }
        }

        // 3. 下装: 必选
        let bottoms = self.score_category(&available, Category::Bottom, ctx, &chosen, weekly, rng);
        match pick_among_ties(&bottoms, rng) {
            Some(item) => {
                outfit.bottom = Some(item.garment.clone());
                chosen.push(item);
            }
            None => {
                outfit.reason = REASON_NO_BOTTOM.to_string();
                return outfit;
            }
        }

        // 4. 鞋: 必选, 允许每日重复
        let shoes = self.score_category(&available, Category::Shoes, ctx, &chosen, weekly, rng);
        match pick_among_ties(&shoes, rng) {
            Some(item) => {
                outfit.shoes = Some(item.garment.clone());
                chosen.push(item);
            }
            None => {
                outfit.reason = REASON_NO_SHOES.to_string();
                return outfit;
            }
        }

        // 5. 整套事后组合检查
        let top_item = chosen
            .iter()
            .find(|c| c.garment.category == Category::Top)
            .copied();
        let bottom_item = chosen
            .iter()
            .find(|c| c.garment.category == Category::Bottom)
            .copied();
        let penalty = compatibility::outfit_penalty(
            top_item.as_ref(),
            bottom_item.as_ref(),
            &self.weights.incompatible,
        );
        if compatibility::is_excluded(penalty, &self.weights.incompatible) {
            debug!(penalty, "整套否决: 不当组合");
            outfit.reason = REASON_INCOMPATIBLE.to_string();
            return outfit;
        }

        // 6. 推荐理由生成
        outfit.reason = synthesize_reason(&outfit, ctx);
        outfit
    }

    // 某类别全部候选评分, 按分数降序
    fn score_category<'w, R: Rng>(
        &self,
        available: &[&'w Garment],
        category: Category,
        ctx: &DayContext,
        chosen: &[ChosenItem<'w>],
        weekly: &WeeklyUsage,
        rng: &mut R,
    ) -> Vec<Scored<'w>> {
        let mut scored: Vec<Scored<'w>> = available
            .iter()
            .filter(|g| g.category == category)
            .map(|g| {
                let traits = GarmentTraits::derive(g);
                let score = self.scorer.score(g, &traits, ctx, chosen, weekly, rng);
                Scored {
                    item: ChosenItem { garment: g, traits },
                    score,
                }
            })
            .collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }
}

// 与最高分并列者中均匀随机取一
fn pick_among_ties<'a, R: Rng>(scored: &[Scored<'a>], rng: &mut R) -> Option<ChosenItem<'a>> {
    let best = scored.first()?.score;
    let ties: Vec<&Scored<'a>> = scored.iter().filter(|s| s.score == best).collect();
    ties.choose(rng).map(|s| s.item)
}

// 数值文案: 整数温湿度不带小数点
fn fmt_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

// 推荐理由: 标签匹配 + 温度档文案 + 湿度文案 + 事件模板, 空格连接
fn synthesize_reason(outfit: &Outfit, ctx: &DayContext) -> String {
    let mut parts: Vec<String> = Vec::new();

    let tags = outfit.all_tags();
    let event = ctx.event.as_str();
    let event_match = tags.iter().any(|tag| tag == event)
        || tags
            .iter()
            .any(|tag| tag.contains(event) || event.contains(tag.as_str()));
    if event_match {
        parts.push("태그 매칭".to_string());
    }

    let t = fmt_number(ctx.temperature);
    if ctx.temperature <= 5.0 {
        parts.push(format!("기온 {t}°C로 추워서"));
    } else if ctx.temperature <= 15.0 {
        parts.push(format!("기온 {t}°C로 쌀쌀해서"));
    } else if ctx.temperature <= 25.0 {
        parts.push(format!("기온 {t}°C에 적합한"));
    } else {
        parts.push(format!("기온 {t}°C로 더워서"));
    }

    if ctx.humidity >= 70.0 {
        parts.push(format!("습도 {}%로 높아 시원한 소재로", fmt_number(ctx.humidity)));
    }

    match event {
        "회의" => parts.push("회의 일정에 맞는 포멀한 비즈니스 룩으로 추천".to_string()),
        "운동" => parts.push("운동 일정에 맞는 편안하고 활동하기 좋은 스타일로 추천".to_string()),
        "데이트" => parts.push("데이트 일정에 맞는 깔끔하고 세련된 스타일로 추천".to_string()),
        "캐주얼" => parts.push("캐주얼한 일정에 맞는 편안하고 일상적인 룩으로 추천".to_string()),
        _ => parts.push(format!("{event} 일정에 최적화된 스타일로 추천")),
    }

    parts.join(" ")
}
