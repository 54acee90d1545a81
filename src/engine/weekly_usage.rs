// ==========================================
// AI 衣橱穿搭推荐系统 - 每周使用记录
// ==========================================
// 职责: 记录本周 (周一起算) 已推荐过的衣物, 供轮换加分
// 红线: 只是加分信号, 不是硬排除; 周滚动时整体清空
// 显式状态对象: 由调用方传入/取回, 不做全局可变状态
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;

/// 给定日期所在周的周一
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

// ==========================================
// WeeklyUsage - 每周使用记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyUsage {
    /// 当前追踪周的周一 (周标记)
    week_start: NaiveDate,
    /// 本周内至少被推荐过一次的衣物键
    used: HashSet<String>,
}

impl WeeklyUsage {
    /// 空记录, 周标记为 today 所在周的周一
    pub fn new(today: NaiveDate) -> Self {
        Self {
            week_start: week_start_of(today),
            used: HashSet::new(),
        }
    }

    /// 从持久化数据恢复
    pub fn from_parts(week_start: NaiveDate, used: HashSet<String>) -> Self {
        Self { week_start, used }
    }

    /// 周滚动转移 (纯转移, 非原地突变):
    /// 存储的周标记与 today 所在周不一致时清空记录并改写标记
    pub fn advance_to(self, today: NaiveDate) -> Self {
        let current = week_start_of(today);
        if current != self.week_start {
            Self {
                week_start: current,
                used: HashSet::new(),
            }
        } else {
            self
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn contains(&self, key: &str) -> bool {
        self.used.contains(key)
    }

    pub fn record(&mut self, key: &str) {
        self.used.insert(key.to_string());
    }

    pub fn used_keys(&self) -> &HashSet<String> {
        &self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2026-08-28 是周五 → 周一为 08-24
        assert_eq!(week_start_of(date(2026, 8, 28)), date(2026, 8, 24));
        // 周一自身
        assert_eq!(week_start_of(date(2026, 8, 24)), date(2026, 8, 24));
        // 周日归属前一个周一
        assert_eq!(week_start_of(date(2026, 8, 30)), date(2026, 8, 24));
    }

    #[test]
    fn test_advance_within_same_week_keeps_records() {
        let mut usage = WeeklyUsage::new(date(2026, 8, 24));
        usage.record("item-1");

        let usage = usage.advance_to(date(2026, 8, 28));
        assert!(usage.contains("item-1"));
        assert_eq!(usage.week_start(), date(2026, 8, 24));
    }

    #[test]
    fn test_advance_to_next_week_clears() {
        let mut usage = WeeklyUsage::new(date(2026, 8, 24));
        usage.record("item-1");

        let usage = usage.advance_to(date(2026, 8, 31));
        assert!(!usage.contains("item-1"));
        assert_eq!(usage.week_start(), date(2026, 8, 31));
        assert!(usage.used_keys().is_empty());
    }
}
