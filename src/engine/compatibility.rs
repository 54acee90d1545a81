// ==========================================
// AI 衣橱穿搭推荐系统 - 组合合理性检查
// ==========================================
// 职责: 整套穿搭装配完成后的不当组合事后检查
// 规则: 连衣裙 + 下装 (排除级), 正装上衣 + 非正装裤 (半减分)
// 累计减分低于阈值 (含) 即整套否决
// ==========================================

use crate::config::weights::IncompatibleWeights;
use crate::engine::scoring::ChosenItem;

/// 整套穿搭的不当组合减分 (0 表示无冲突)
///
/// 只看上衣/下装的搭配关系, 在四个类别全部选定之后调用
pub fn outfit_penalty(
    top: Option<&ChosenItem<'_>>,
    bottom: Option<&ChosenItem<'_>>,
    weights: &IncompatibleWeights,
) -> f64 {
    let mut penalty = 0.0;

    if let Some(top) = top {
        // 连衣裙不与下装同穿
        if top.traits.one_piece && bottom.is_some() {
            penalty += weights.penalty;
        }

        // 正装上衣配非正装裤: 减分但不必然排除
        if let Some(bottom) = bottom {
            if top.traits.suit_top && !bottom.traits.trouser_like {
                penalty += weights.penalty / 2.0;
            }
        }
    }

    penalty
}

/// 是否达到整套否决阈值
pub fn is_excluded(penalty: f64, weights: &IncompatibleWeights) -> bool {
    penalty < 0.0 && penalty <= weights.exclude_threshold
}
