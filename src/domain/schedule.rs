// ==========================================
// AI 衣橱穿搭推荐系统 - 周计划条目
// ==========================================
// 数据来源: 周计划 KV 存储 (schedule), 兼容旧版 JSON
// 字段名沿用旧版 camelCase
// ==========================================

use crate::domain::types::{ActivityType, LocationKind, TimeOfDay, Weather};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 温度缺省值 (°C), 评分时采用
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;

/// 湿度缺省值 (%), 评分时采用
pub const DEFAULT_HUMIDITY_PCT: f64 = 60.0;

// ==========================================
// 周计划条目 (Day Entry)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    /// 星期键 (如 "월", "화")
    pub day: String,

    /// 事件文本, 可为空串
    #[serde(default)]
    pub event: String,

    /// 温度 (°C); 缺失时评分按 20°C
    #[serde(default)]
    pub temperature: Option<f64>,

    /// 湿度 (%); 缺失时评分按 60%
    #[serde(default)]
    pub humidity: Option<f64>,

    /// 天气, 默认晴
    #[serde(default)]
    pub weather: Weather,

    /// 活动性质; 旧数据以空串表示未指定
    #[serde(
        default,
        rename = "activityType",
        deserialize_with = "activity_from_legacy",
        serialize_with = "activity_to_legacy"
    )]
    pub activity_type: Option<ActivityType>,

    /// 场所, 默认室外
    #[serde(default)]
    pub location: LocationKind,

    /// 时段, 默认白天
    #[serde(default, rename = "timeOfDay")]
    pub time_of_day: TimeOfDay,
}

impl DayEntry {
    /// 是否值得持久化: 无事件且无温湿度的条目不落盘
    pub fn is_meaningful(&self) -> bool {
        !self.event.trim().is_empty()
            || self.temperature.map_or(false, |t| t.is_finite())
            || self.humidity.map_or(false, |h| h.is_finite())
    }

    /// 折算出评分用上下文 (补齐缺省值)
    pub fn context(&self) -> DayContext {
        DayContext {
            event: self.event.clone(),
            temperature: self
                .temperature
                .filter(|t| t.is_finite())
                .unwrap_or(DEFAULT_TEMPERATURE_C),
            humidity: self
                .humidity
                .filter(|h| h.is_finite())
                .unwrap_or(DEFAULT_HUMIDITY_PCT),
            weather: self.weather,
            activity_type: self.activity_type,
            location: self.location,
            time_of_day: self.time_of_day,
        }
    }
}

// ==========================================
// 评分上下文 (Day Context)
// ==========================================
// 缺省值已补齐, 各因子评分器直接消费
#[derive(Debug, Clone)]
pub struct DayContext {
    pub event: String,
    pub temperature: f64,
    pub humidity: f64,
    pub weather: Weather,
    pub activity_type: Option<ActivityType>,
    pub location: LocationKind,
    pub time_of_day: TimeOfDay,
}

impl Default for DayContext {
    fn default() -> Self {
        Self {
            event: String::new(),
            temperature: DEFAULT_TEMPERATURE_C,
            humidity: DEFAULT_HUMIDITY_PCT,
            weather: Weather::Clear,
            activity_type: None,
            location: LocationKind::Outdoor,
            time_of_day: TimeOfDay::Day,
        }
    }
}

// 旧版数据中 activityType 的空串 ↔ None 折算
fn activity_from_legacy<'de, D>(deserializer: D) -> Result<Option<ActivityType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(match raw.as_str() {
        "공식" => Some(ActivityType::Formal),
        "비공식" => Some(ActivityType::Informal),
        _ => None,
    })
}

fn activity_to_legacy<S>(value: &Option<ActivityType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(a) => serializer.serialize_str(&a.to_string()),
        None => serializer.serialize_str(""),
    }
}
