// ==========================================
// AI 衣橱穿搭推荐系统 - 领域类型定义
// ==========================================
// 序列化格式: 沿用旧版 localStorage 数据的韩文字面值
// (类别/季节/天气等), status 沿用英文小写
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 衣物类别 (Category)
// ==========================================
// 红线: 每件衣物恰好属于一个类别, 类别不可变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "아우터")]
    Outer, // 外套
    #[serde(rename = "상의")]
    Top, // 上衣
    #[serde(rename = "하의")]
    Bottom, // 下装
    #[serde(rename = "신발")]
    Shoes, // 鞋
}

impl Category {
    /// 转换为存储字面值
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Outer => "아우터",
            Category::Top => "상의",
            Category::Bottom => "하의",
            Category::Shoes => "신발",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 季节 (Season)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "봄")]
    Spring, // 春
    #[serde(rename = "여름")]
    Summer, // 夏
    #[serde(rename = "가을")]
    Autumn, // 秋
    #[serde(rename = "겨울")]
    Winter, // 冬
    #[serde(rename = "사계절")]
    AllSeason, // 四季
}

impl Season {
    /// 转换为存储字面值
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "봄",
            Season::Summer => "여름",
            Season::Autumn => "가을",
            Season::Winter => "겨울",
            Season::AllSeason => "사계절",
        }
    }

    /// 按月份判断当前季节 (3-5 春, 6-8 夏, 9-11 秋, 其余冬)
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 衣物状态 (Garment Status)
// ==========================================
// 红线: 状态仅沿 ready → washing → clean → ready 循环,
// 每次手动推进一步; washing 的衣物完全排除在候选之外
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentStatus {
    Ready,   // 可穿
    Washing, // 洗涤中
    Clean,   // 洗净
}

impl GarmentStatus {
    /// 沿洗衣循环推进一步
    pub fn next(&self) -> Self {
        match self {
            GarmentStatus::Ready => GarmentStatus::Washing,
            GarmentStatus::Washing => GarmentStatus::Clean,
            GarmentStatus::Clean => GarmentStatus::Ready,
        }
    }

    /// 转换为存储字面值
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentStatus::Ready => "ready",
            GarmentStatus::Washing => "washing",
            GarmentStatus::Clean => "clean",
        }
    }
}

impl fmt::Display for GarmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 天气 (Weather)
// ==========================================
// 仅 비(雨)/눈(雪) 参与评分, 其余一律按 맑음(晴) 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Weather {
    #[serde(rename = "맑음")]
    Clear, // 晴
    #[serde(rename = "흐림")]
    Cloudy, // 阴
    #[serde(rename = "비")]
    Rain, // 雨
    #[serde(rename = "눈")]
    Snow, // 雪
}

impl From<String> for Weather {
    fn from(s: String) -> Self {
        match s.as_str() {
            "흐림" => Weather::Cloudy,
            "비" => Weather::Rain,
            "눈" => Weather::Snow,
            // 맑음 及未知值一律兜底为晴
            _ => Weather::Clear,
        }
    }
}

impl Default for Weather {
    fn default() -> Self {
        Weather::Clear
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::Clear => write!(f, "맑음"),
            Weather::Cloudy => write!(f, "흐림"),
            Weather::Rain => write!(f, "비"),
            Weather::Snow => write!(f, "눈"),
        }
    }
}

// ==========================================
// 活动性质 (Activity Type)
// ==========================================
// 旧数据中空串表示未指定, 反序列化时折算为 None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "공식")]
    Formal, // 正式场合
    #[serde(rename = "비공식")]
    Informal, // 非正式场合
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Formal => write!(f, "공식"),
            ActivityType::Informal => write!(f, "비공식"),
        }
    }
}

// ==========================================
// 场所 (Location Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    #[serde(rename = "실외")]
    Outdoor, // 室外 (默认)
    #[serde(rename = "실내")]
    Indoor, // 室内
}

impl Default for LocationKind {
    fn default() -> Self {
        LocationKind::Outdoor
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Outdoor => write!(f, "실외"),
            LocationKind::Indoor => write!(f, "실내"),
        }
    }
}

// ==========================================
// 时段 (Time Of Day)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "낮")]
    Day, // 白天 (默认)
    #[serde(rename = "밤")]
    Night, // 夜间
}

impl Default for TimeOfDay {
    fn default() -> Self {
        TimeOfDay::Day
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Day => write!(f, "낮"),
            TimeOfDay::Night => write!(f, "밤"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle() {
        // ready → washing → clean → ready 三态循环
        assert_eq!(GarmentStatus::Ready.next(), GarmentStatus::Washing);
        assert_eq!(GarmentStatus::Washing.next(), GarmentStatus::Clean);
        assert_eq!(GarmentStatus::Clean.next(), GarmentStatus::Ready);
    }

    #[test]
    fn test_category_roundtrip() {
        let json = serde_json::to_string(&Category::Outer).unwrap();
        assert_eq!(json, "\"아우터\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Outer);
    }

    #[test]
    fn test_unknown_weather_falls_back_to_clear() {
        let w: Weather = serde_json::from_str("\"안개\"").unwrap();
        assert_eq!(w, Weather::Clear);
    }

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(12), Season::Winter);
    }
}
