use crate::config::weights::RecommendationWeights;
use crate::domain::garment::Garment;
use crate::domain::schedule::DayContext;
use crate::domain::types::{ActivityType, Category, LocationKind, Season, TimeOfDay, Weather};
use crate::engine::color::harmony_score;
use crate::engine::keywords::GarmentTraits;
use crate::engine::weekly_usage::WeeklyUsage;
use rand::Rng;

// ==========================================
// 已入选衣物 (后续类别评分的上下文)
// ==========================================
// 顺序前移类别的选择结果, 携带派生特征供搭层判断复用
#[derive(Debug, Clone, Copy)]
pub struct ChosenItem<'a> {
    pub garment: &'a Garment,
    pub traits: GarmentTraits,
}

// ==========================================
// ClothingScorer - 衣物评分引擎
// ==========================================
// 权重表只读注入, 引擎本身无状态
pub struct ClothingScorer<'a> {
    weights: &'a RecommendationWeights,
}

impl<'a> ClothingScorer<'a> {
    pub fn new(weights: &'a RecommendationWeights) -> Self {
        Self { weights }
    }

    // ==========================================
    // 综合评分
    // ==========================================

    /// 单件衣物综合评分
    ///
    /// 因子求和 → 随机扰动 → 类别下限收口。
    /// washing 状态直接短路为哨兵值, 覆盖其余一切因子。
    pub fn score<R: Rng>(
        &self,
        garment: &Garment,
        traits: &GarmentTraits,
        ctx: &DayContext,
        others: &[ChosenItem<'_>],
        weekly: &WeeklyUsage,
        rng: &mut R,
    ) -> f64 {
        use crate::domain::types::GarmentStatus;

        // 洗涤中: 哨兵短路
        if garment.status == GarmentStatus::Washing {
            return self.weights.status.washing;
        }

        let mut score = 0.0;

        score += self.novelty_score(garment, weekly);
        score += self.tag_score(garment, &ctx.event);
        score += self.weather_score(garment, traits, ctx, others);
        score += self.activity_score(traits, ctx.activity_type);
        score += self.location_score(ctx.location);
        score += self.time_of_day_score(ctx.time_of_day);

        if !others.is_empty() {
            let other_garments: Vec<&Garment> =
                others.iter().map(|chosen| chosen.garment).collect();
            score += harmony_score(garment, &other_garments, &self.weights.color_harmony);
        }

        score += self.status_bonus(garment);

        // 随机扰动 (多样性来源, 每次评分重抽)
        score += rng.gen::<f64>() * self.weights.randomness;

        // 类别下限收口: 扰动之后执行, 被压到下限的候选恰好并列
        if garment.category == Category::Outer
            && ctx.temperature <= self.weights.weather.cold_threshold
        {
            score = score.max(self.weights.floors.outer_cold);
        }
        if garment.category == Category::Top {
            score = score.max(self.weights.floors.top);
        }
        if garment.category == Category::Bottom {
            score = score.max(self.weights.floors.bottom);
        }

        score
    }

    // ==========================================
    // 因子评分器 (各自独立可测)
    // ==========================================

    /// 标签因子: 精确一致 + 部分一致 (可叠加) + 数量分
    pub fn tag_score(&self, garment: &Garment, event: &str) -> f64 {
        let mut score = 0.0;

        if garment.tags.iter().any(|tag| tag == event) {
            score += self.weights.tag_exact_match;
        }

        let partial = garment
            .tags
            .iter()
            .any(|tag| tag.contains(event) || event.contains(tag.as_str()));
        if partial {
            score += self.weights.tag_partial_match;
        }

        score += garment.tags.len() as f64 * self.weights.tag_count_multiplier;
        score
    }

    /// 天气/温度/湿度因子
    ///
    /// 外套走温度档位门控; 上衣/下装任何温度都有正的保底分,
    /// 且厚外套已入选时叠加搭层季节加分
    pub fn weather_score(
        &self,
        garment: &Garment,
        traits: &GarmentTraits,
        ctx: &DayContext,
        others: &[ChosenItem<'_>],
    ) -> f64 {
        let w = &self.weights.weather;
        let t = ctx.temperature;
        let mut score = 0.0;

        match garment.category {
            Category::Outer => {
                if t <= w.cold_threshold {
                    // 寒冷档: 高基础分 + 季节优先 (겨울 > 가을 > 봄 > 여름)
                    score += w.outer_cold_base;
                    score += w.outer_cold_season.of(garment.season);
                } else if t <= 15.0 {
                    if traits.light_outer
                        || garment.season == Season::Autumn
                        || garment.season == Season::Spring
                    {
                        score += w.outer_cool_bonus;
                    }
                } else if t <= 22.0 {
                    if traits.mid_outer
                        || garment.season == Season::Spring
                        || garment.season == Season::Autumn
                    {
                        score += w.outer_mild_bonus;
                    } else if garment.season == Season::AllSeason {
                        score += w.outer_mild_all_season;
                    }
                } else if t <= 30.0 {
                    if traits.thin_outer
                        || garment.season == Season::Spring
                        || garment.season == Season::Summer
                    {
                        score += w.outer_warm_bonus;
                    } else {
                        score += w.outer_warm_penalty;
                    }
                } else {
                    score += w.outer_hot_penalty;
                }
            }
            Category::Top | Category::Bottom => {
                // 厚外套已入选 → 搭层季节一致性加分
                let has_thick_outer = others.iter().any(|chosen| {
                    chosen.garment.category == Category::Outer && chosen.traits.thick_outer
                });
                if has_thick_outer {
                    score += w.layering_season.of(garment.season);
                }

                // 7 档温度区间, 关键词命中取档位优先分, 否则按季节查表
                let (band, keyword_hit) = if t <= -5.0 {
                    (&w.band_frigid, traits.frigid_wear)
                } else if t <= 10.0 {
                    (&w.band_cold, traits.cold_wear)
                } else if t <= 20.0 {
                    (&w.band_cool, traits.cool_wear)
                } else if t <= 25.0 {
                    (&w.band_warm, traits.warm_wear)
                } else {
                    (&w.band_hot, traits.hot_wear)
                };
                score += if keyword_hit {
                    band.preferred
                } else {
                    band.season_base(garment.season)
                };
            }
            Category::Shoes => {}
        }

        // 高湿: 透气材质加分, 厚重材质减分
        if ctx.humidity >= w.humidity_threshold {
            if traits.breathable {
                score += w.humidity_bonus;
            }
            if traits.heavy_material {
                score += w.humidity_penalty;
            }
        }

        // 雨天: 防水加分, 棉麻减分 (同时防水则豁免)
        if ctx.weather == Weather::Rain {
            if traits.rainproof {
                score += w.rain_bonus;
            }
            if traits.cotton_like && !traits.rainproof {
                score += w.rain_cotton_penalty;
            }
        }

        // 雪天: 防寒关键词或冬季衣物加分
        if ctx.weather == Weather::Snow
            && (traits.winterwear || garment.season == Season::Winter)
        {
            score += w.snow_bonus;
        }

        score
    }

    /// 活动性质因子: 正式场合加减分可同时落在一件衣物 (净效应)
    pub fn activity_score(&self, traits: &GarmentTraits, activity: Option<ActivityType>) -> f64 {
        let w = &self.weights.activity;
        match activity {
            None => 0.0,
            Some(ActivityType::Formal) => {
                let mut score = 0.0;
                if traits.formal_style {
                    score += w.formal_bonus;
                }
                if traits.casual_style {
                    score += w.formal_casual_penalty;
                }
                score
            }
            Some(ActivityType::Informal) => w.informal_bonus,
        }
    }

    /// 场所因子
    pub fn location_score(&self, location: LocationKind) -> f64 {
        match location {
            LocationKind::Outdoor => self.weights.location.outdoor_bonus,
            LocationKind::Indoor => self.weights.location.indoor_bonus,
        }
    }

    /// 时段因子
    pub fn time_of_day_score(&self, time_of_day: TimeOfDay) -> f64 {
        match time_of_day {
            TimeOfDay::Day => self.weights.time_of_day.day_bonus,
            TimeOfDay::Night => self.weights.time_of_day.night_bonus,
        }
    }

    /// 每周轮换因子: 本周未穿加分 (每件每周恰好一次)
    pub fn novelty_score(&self, garment: &Garment, weekly: &WeeklyUsage) -> f64 {
        if weekly.contains(garment.usage_key()) {
            0.0
        } else {
            self.weights.unused_this_week_bonus
        }
    }

    /// 状态因子 (washing 已在综合评分入口短路)
    fn status_bonus(&self, garment: &Garment) -> f64 {
        use crate::domain::types::GarmentStatus;
        match garment.status {
            GarmentStatus::Ready => self.weights.status.ready,
            GarmentStatus::Clean => self.weights.status.clean,
            GarmentStatus::Washing => 0.0,
        }
    }
}
