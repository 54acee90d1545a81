// ==========================================
// AI 衣橱穿搭推荐系统 - 穿搭结果
// ==========================================
// 红线: 所有失败都以 reason 字段表达, 不抛错
// 不完整穿搭 + 非空 reason = 软失败, 调用方不得当异常处理
// ==========================================

use crate::domain::garment::Garment;
use serde::{Deserialize, Serialize};

// ==========================================
// 单日穿搭 (Outfit)
// ==========================================
// 每类别至多一件; 外套可选, 上衣/下装/鞋齐备才算完整
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outfit {
    pub outer: Option<Garment>,
    pub top: Option<Garment>,
    pub bottom: Option<Garment>,
    pub shoes: Option<Garment>,

    /// 推荐说明 (或软失败原因)
    #[serde(default)]
    pub reason: String,
}

impl Outfit {
    /// 上衣/下装/鞋齐备即为完整 (外套按温度可缺省)
    pub fn is_complete(&self) -> bool {
        self.top.is_some() && self.bottom.is_some() && self.shoes.is_some()
    }

    /// 已选衣物 (按选取顺序), 供色彩协调上下文使用
    pub fn chosen(&self) -> Vec<&Garment> {
        [&self.outer, &self.top, &self.bottom, &self.shoes]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
            .collect()
    }

    /// 全部已选衣物的标签并集 (推荐理由生成用)
    pub fn all_tags(&self) -> Vec<String> {
        self.chosen()
            .into_iter()
            .flat_map(|g| g.tags.iter().cloned())
            .collect()
    }
}

// ==========================================
// 单日推荐记录 (Daily Recommendation)
// ==========================================
// recommend() 的逐日输出, 交给渲染协作方
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecommendation {
    pub day: String,
    pub event: String,
    pub temperature: f64,
    pub humidity: f64,
    pub outfit: Outfit,
}
