// ==========================================
// AI 衣橱穿搭推荐系统 - 衣物评分引擎
// ==========================================
// 职责: 各维度因子评分 + 单件衣物综合评分
// 输入: 衣物 + 派生特征 + 当日上下文 + 已选衣物 + 每周记录
// 输出: 单一数值分 (含扰动, 经类别下限收口)
// 红线: washing 哨兵短路一切因子; 扰动每次评分重抽
// ==========================================

mod core;


pub use self::core::{ChosenItem, ClothingScorer};
