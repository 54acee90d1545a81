// ==========================================
// AI 衣橱穿搭推荐系统 - 穿搭选取器
// ==========================================
// 职责: 按类别顺序贪心装配单日穿搭
// 顺序: 아우터 → 상의 → 하의 → 신발 (前序结果作为后序色彩上下文)
// 红线: 顺序不可更改, 改变顺序即改变推荐结果
// ==========================================

mod core;


pub use self::core::OutfitSelector;
