// ==========================================
// AI 衣橱穿搭推荐系统 - 推荐权重表
// ==========================================
// 红线: 全部可调常量集中于此, 只读注入各评分器,
// 任何评分器不得内联数值 (整套行为可通过改表重调)
// 存储: KV 键 recommendation_weights (JSON 覆写, 可部分给出)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 推荐权重表 (Recommendation Weights)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationWeights {
    /// 标签精确一致加分
    pub tag_exact_match: f64,
    /// 标签部分一致加分 (双向子串, 与精确一致可叠加)
    pub tag_partial_match: f64,
    /// 每个标签的数量加分
    pub tag_count_multiplier: f64,

    pub weather: WeatherWeights,
    pub activity: ActivityWeights,
    pub location: LocationWeights,
    pub time_of_day: TimeOfDayWeights,
    pub color_harmony: ColorHarmonyWeights,

    /// 本周未穿衣物加分 (轮换激励, 非硬排除)
    pub unused_this_week_bonus: f64,

    pub incompatible: IncompatibleWeights,
    pub status: StatusWeights,
    pub floors: ScoreFloors,

    /// 随机扰动幅度 (0..randomness 均匀分布, 每次评分重抽)
    pub randomness: f64,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            tag_exact_match: 100.0,
            tag_partial_match: 50.0,
            tag_count_multiplier: 5.0,
            weather: WeatherWeights::default(),
            activity: ActivityWeights::default(),
            location: LocationWeights::default(),
            time_of_day: TimeOfDayWeights::default(),
            color_harmony: ColorHarmonyWeights::default(),
            unused_this_week_bonus: 40.0,
            incompatible: IncompatibleWeights::default(),
            status: StatusWeights::default(),
            floors: ScoreFloors::default(),
            randomness: 10.0,
        }
    }
}

// ==========================================
// 天气/温度权重
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherWeights {
    /// 寒冷阈值 (°C, 含): 外套强制推荐档
    pub cold_threshold: f64,
    /// 寒冷档外套基础分
    pub outer_cold_base: f64,
    /// 寒冷档外套季节优先加分 (겨울 > 가을 > 봄 > 여름, 四季居中)
    pub outer_cold_season: SeasonPriority,
    /// 微凉档 (9 < t ≤ 15) 轻薄外套加分
    pub outer_cool_bonus: f64,
    /// 凉爽档 (15 < t ≤ 22) 外套加分 / 四季款加分
    pub outer_mild_bonus: f64,
    pub outer_mild_all_season: f64,
    /// 温暖档 (22 < t ≤ 30) 薄外套加分 / 不合时宜外套减分
    pub outer_warm_bonus: f64,
    pub outer_warm_penalty: f64,
    /// 炎热档 (> 30) 外套减分
    pub outer_hot_penalty: f64,

    /// 厚外套已入选时, 上衣/下装的搭层季节加分
    pub layering_season: SeasonPriority,

    /// 上衣/下装温度档位 (保底分恒为正, 任何温度都可推荐)
    pub band_frigid: TempBandWeights, // t ≤ -5
    pub band_cold: TempBandWeights,   // -5 < t ≤ 10
    pub band_cool: TempBandWeights,   // 10 < t ≤ 20
    pub band_warm: TempBandWeights,   // 20 < t ≤ 25
    pub band_hot: TempBandWeights,    // t > 25

    /// 高湿阈值 (%) 及透气材质加分 / 厚重材质减分
    pub humidity_threshold: f64,
    pub humidity_bonus: f64,
    pub humidity_penalty: f64,

    /// 雨天防水加分 / 棉麻减分 (除非同时防水)
    pub rain_bonus: f64,
    pub rain_cotton_penalty: f64,
    /// 雪天防寒加分
    pub snow_bonus: f64,
}

impl Default for WeatherWeights {
    fn default() -> Self {
        Self {
            cold_threshold: 9.0,
            outer_cold_base: 300.0,
            outer_cold_season: SeasonPriority {
                winter: 100.0,
                autumn: 70.0,
                spring: 50.0,
                summer: 30.0,
                all_season: 60.0,
            },
            outer_cool_bonus: 60.0,
            outer_mild_bonus: 50.0,
            outer_mild_all_season: 40.0,
            outer_warm_bonus: 10.0,
            outer_warm_penalty: -50.0,
            outer_hot_penalty: -100.0,
            layering_season: SeasonPriority {
                winter: 40.0,
                autumn: 30.0,
                spring: 20.0,
                summer: 10.0,
                all_season: 25.0,
            },
            band_frigid: TempBandWeights {
                preferred: 60.0,
                spring: 30.0,
                summer: 20.0,
                autumn: 40.0,
                winter: 60.0,
                all_season: 25.0,
            },
            band_cold: TempBandWeights {
                preferred: 50.0,
                spring: 35.0,
                summer: 25.0,
                autumn: 40.0,
                winter: 50.0,
                all_season: 30.0,
            },
            band_cool: TempBandWeights {
                preferred: 50.0,
                spring: 50.0,
                summer: 30.0,
                autumn: 50.0,
                winter: 30.0,
                all_season: 40.0,
            },
            band_warm: TempBandWeights {
                preferred: 50.0,
                spring: 50.0,
                summer: 50.0,
                autumn: 35.0,
                winter: 35.0,
                all_season: 40.0,
            },
            band_hot: TempBandWeights {
                preferred: 60.0,
                spring: 40.0,
                summer: 60.0,
                autumn: 30.0,
                winter: 35.0,
                all_season: 35.0,
            },
            humidity_threshold: 70.0,
            humidity_bonus: 20.0,
            humidity_penalty: -15.0,
            rain_bonus: 40.0,
            rain_cotton_penalty: -10.0,
            snow_bonus: 50.0,
        }
    }
}

// ==========================================
// 季节优先加分 (外套寒冷档 / 搭层一致性共用形状)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonPriority {
    pub winter: f64,
    pub autumn: f64,
    pub spring: f64,
    pub summer: f64,
    pub all_season: f64,
}

impl SeasonPriority {
    pub fn of(&self, season: crate::domain::types::Season) -> f64 {
        use crate::domain::types::Season;
        match season {
            Season::Winter => self.winter,
            Season::Autumn => self.autumn,
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::AllSeason => self.all_season,
        }
    }
}

// ==========================================
// 上衣/下装温度档位权重
// ==========================================
// preferred: 关键词或档位优先季节命中时的加分;
// 其余按季节查表 (保底为正, 不存在 0 分档)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempBandWeights {
    pub preferred: f64,
    pub spring: f64,
    pub summer: f64,
    pub autumn: f64,
    pub winter: f64,
    pub all_season: f64,
}

impl TempBandWeights {
    pub fn season_base(&self, season: crate::domain::types::Season) -> f64 {
        use crate::domain::types::Season;
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Autumn => self.autumn,
            Season::Winter => self.winter,
            Season::AllSeason => self.all_season,
        }
    }
}

// ==========================================
// 活动性质权重
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityWeights {
    /// 正式场合: 正装/衬衫类加分
    pub formal_bonus: f64,
    /// 正式场合: 休闲/运动类减分 (与加分可同时落在一件衣物上)
    pub formal_casual_penalty: f64,
    /// 非正式场合: 一律加分
    pub informal_bonus: f64,
}

impl Default for ActivityWeights {
    fn default() -> Self {
        Self {
            formal_bonus: 60.0,
            formal_casual_penalty: -30.0,
            informal_bonus: 20.0,
        }
    }
}

// ==========================================
// 场所权重
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationWeights {
    pub outdoor_bonus: f64,
    pub indoor_bonus: f64,
}

impl Default for LocationWeights {
    fn default() -> Self {
        Self {
            outdoor_bonus: 15.0,
            indoor_bonus: 10.0,
        }
    }
}

// ==========================================
// 时段权重
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOfDayWeights {
    pub day_bonus: f64,
    pub night_bonus: f64,
}

impl Default for TimeOfDayWeights {
    fn default() -> Self {
        Self {
            day_bonus: 5.0,
            night_bonus: 10.0,
        }
    }
}

// ==========================================
// 色彩协调权重
// ==========================================
// 规则互斥, 按固定顺序取首个命中 (见 engine/color)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorHarmonyWeights {
    /// 邻近色 (色相差 ≤ 30°)
    pub analogous: f64,
    /// 互补色 (150° ~ 210°)
    pub complementary: f64,
    /// 三等分色 (距 120°/240° 各 15° 内)
    pub triadic: f64,
    /// 同色系 (色相 ≤ 15° 且明度或饱和度差 > 0.2)
    pub monochromatic: f64,
    /// 中性色 (任一方为黑白灰米)
    pub neutral: f64,
    /// 低饱和组合
    pub desaturated: f64,
    /// 过于相近 (减分)
    pub too_similar: f64,
}

impl Default for ColorHarmonyWeights {
    fn default() -> Self {
        Self {
            analogous: 30.0,
            complementary: 25.0,
            triadic: 20.0,
            monochromatic: 25.0,
            neutral: 15.0,
            desaturated: 10.0,
            too_similar: -5.0,
        }
    }
}

// ==========================================
// 不当组合权重
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IncompatibleWeights {
    /// 不当组合减分 (连衣裙 + 下装等, 排除级)
    pub penalty: f64,
    /// 累计减分低于 (含) 此阈值则整套否决
    pub exclude_threshold: f64,
}

impl Default for IncompatibleWeights {
    fn default() -> Self {
        Self {
            penalty: -200.0,
            exclude_threshold: -100.0,
        }
    }
}

// ==========================================
// 状态权重
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusWeights {
    pub ready: f64,
    pub clean: f64,
    /// 洗涤中哨兵值: 短路覆盖其余一切因子
    pub washing: f64,
}

impl Default for StatusWeights {
    fn default() -> Self {
        Self {
            ready: 10.0,
            clean: 5.0,
            washing: -1000.0,
        }
    }
}

// ==========================================
// 类别分数下限 (Clamp)
// ==========================================
// 红线: 下限在全部加减因子与扰动之后收口,
// 保证上衣/下装在任何错配减分下仍可推荐
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreFloors {
    /// 寒冷档 (≤ cold_threshold) 外套最低分
    pub outer_cold: f64,
    /// 上衣最低分
    pub top: f64,
    /// 下装最低分
    pub bottom: f64,
}

impl Default for ScoreFloors {
    fn default() -> Self {
        Self {
            outer_cold: 200.0,
            top: 80.0,
            bottom: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_hand_tuned_constants() {
        let w = RecommendationWeights::default();
        assert_eq!(w.tag_exact_match, 100.0);
        assert_eq!(w.tag_partial_match, 50.0);
        assert_eq!(w.unused_this_week_bonus, 40.0);
        assert_eq!(w.status.washing, -1000.0);
        assert_eq!(w.incompatible.penalty, -200.0);
        assert_eq!(w.incompatible.exclude_threshold, -100.0);
        assert_eq!(w.weather.cold_threshold, 9.0);
        assert_eq!(w.weather.outer_cold_base, 300.0);
        assert_eq!(w.floors.outer_cold, 200.0);
        assert_eq!(w.floors.top, 80.0);
        assert_eq!(w.floors.bottom, 50.0);
        assert_eq!(w.randomness, 10.0);
    }

    #[test]
    fn test_partial_override_merges_with_defaults() {
        // 覆写 JSON 只给出部分键, 其余沿用默认表
        let w: RecommendationWeights =
            serde_json::from_str(r#"{"tag_exact_match": 120.0}"#).unwrap();
        assert_eq!(w.tag_exact_match, 120.0);
        assert_eq!(w.tag_partial_match, 50.0);
        assert_eq!(w.status.washing, -1000.0);
    }
}
