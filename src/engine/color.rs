// ==========================================
// AI 衣橱穿搭推荐系统 - 色彩模型
// ==========================================
// 职责: RGB↔HSV 转换, 中性色判定, 两两协调评分;
//       以及注册侧的主色提取与色名估计
// 红线: 协调规则互斥, 按固定顺序取首个命中
// ==========================================

mod core;
mod extract;

#[cfg(test)]
mod tests;

pub use self::core::{harmony, harmony_score, is_neutral, rgb_to_hsv, Hsv};
pub use self::extract::{color_name, dominant_colors, rgb_to_hex};
