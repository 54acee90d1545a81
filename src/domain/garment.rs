// ==========================================
// AI 衣橱穿搭推荐系统 - 衣物实体
// ==========================================
// 数据来源: 衣橱 KV 存储 (wardrobe), 兼容旧版 JSON
// 红线: 除生命周期字段 (status) 外衣物不可变
// ==========================================

use crate::domain::types::{Category, GarmentStatus, Season};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// RGB 颜色
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ==========================================
// 衣物颜色 (带提取元数据)
// ==========================================
// 由主色提取算法产出: RGB + HEX + 估计色名 + 占比
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentColor {
    pub rgb: Rgb,
    pub hex: String,
    pub name: String,
    /// 该颜色在采样像素中的占比 (%)
    #[serde(default)]
    pub percentage: f64,
}

// ==========================================
// 衣物 (Garment)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garment {
    /// 稳定唯一标识; 旧数据可能缺失, 载入时修复
    #[serde(default)]
    pub id: String,

    /// 显示名称, 同时参与材质/版型关键词匹配
    pub name: String,

    /// 类别 (恰好一个, 不可变更)
    pub category: Category,

    /// 季节
    pub season: Season,

    /// 事件匹配用自由标签 (如 "회의", "운동")
    #[serde(default)]
    pub tags: Vec<String>,

    /// 提取/选择的颜色列表, 首个为主色; 可缺失
    #[serde(default)]
    pub colors: Option<Vec<GarmentColor>>,

    /// 洗衣状态; 旧数据缺失时按 ready 处理
    #[serde(default = "default_status")]
    pub status: GarmentStatus,

    /// 图片引用 (不参与评分, 透传存储)
    #[serde(default)]
    pub image: Option<String>,
}

fn default_status() -> GarmentStatus {
    GarmentStatus::Ready
}

impl Garment {
    /// 新建衣物 (注册入口), 分配新 id, 状态为 ready
    pub fn new(name: &str, category: Category, season: Season, tags: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category,
            season,
            tags,
            colors: None,
            status: GarmentStatus::Ready,
            image: None,
        }
    }

    /// 修复旧版记录: 缺 id 时补发
    ///
    /// 返回是否发生了修复 (调用方据此决定是否回写存储)
    pub fn repair(&mut self) -> bool {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
            return true;
        }
        false
    }

    /// 每周使用记录的键 (id 优先, 兼容无 id 的旧记录用名称)
    pub fn usage_key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }

    /// 主色 (颜色列表首项); 无颜色数据时为 None
    pub fn main_color(&self) -> Option<Rgb> {
        self.colors.as_ref().and_then(|cs| cs.first()).map(|c| c.rgb)
    }
}
