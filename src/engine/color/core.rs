use crate::config::weights::ColorHarmonyWeights;
use crate::domain::garment::{Garment, Rgb};

// ==========================================
// HSV 颜色 (h: 度 [0,360), s/v: [0,1])
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// RGB → HSV 标准转换
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let mut h = 0.0;
    if diff != 0.0 {
        h = if max == r {
            ((g - b) / diff) % 6.0
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };
    }
    h = (h * 60.0).round();
    if h < 0.0 {
        h += 360.0;
    }

    let s = if max == 0.0 { 0.0 } else { diff / max };

    Hsv { h, s, v: max }
}

/// 中性色判定: 灰度系 (通道两两差 < 30) 或黑/白/米/象牙硬编码色带
pub fn is_neutral(color: Rgb) -> bool {
    let (r, g, b) = (color.r as i32, color.g as i32, color.b as i32);

    let gray_diff = (r - g).abs().max((g - b).abs()).max((r - b).abs());
    if gray_diff < 30 {
        return true;
    }

    // 黑
    if r < 50 && g < 50 && b < 50 {
        return true;
    }
    // 白
    if r > 240 && g > 240 && b > 240 {
        return true;
    }
    // 米色
    if r > 200 && g > 200 && b > 180 && b < 230 {
        return true;
    }
    // 象牙
    if r > 240 && g > 235 && b > 220 {
        return true;
    }

    false
}

/// 两色协调评分
///
/// 规则互斥, 按固定顺序取首个命中:
/// 邻近 → 互补 → 三等分 → 同色系 → 中性 → 低饱和 → 过近 → 0
pub fn harmony(a: Rgb, b: Rgb, weights: &ColorHarmonyWeights) -> f64 {
    let hsv_a = rgb_to_hsv(a);
    let hsv_b = rgb_to_hsv(b);

    let hue_diff = (hsv_a.h - hsv_b.h).abs();
    // 色相环最短弧距
    let hue_dist = hue_diff.min(360.0 - hue_diff);
    let brightness_diff = (hsv_a.v - hsv_b.v).abs();
    let saturation_diff = (hsv_a.s - hsv_b.s).abs();

    // 1. 邻近色: 色相差 30° 以内
    if hue_dist <= 30.0 {
        return weights.analogous;
    }

    // 2. 互补色: 150° ~ 210°
    if (150.0..=210.0).contains(&hue_dist) {
        return weights.complementary;
    }

    // 3. 三等分色: 距 120° 或 240° 各 15° 内
    if (hue_dist - 120.0).abs() <= 15.0 || (hue_dist - 240.0).abs() <= 15.0 {
        return weights.triadic;
    }

    // 4. 同色系: 同色相但明度/饱和度拉开
    if hue_dist <= 15.0 && (brightness_diff > 0.2 || saturation_diff > 0.2) {
        return weights.monochromatic;
    }

    // 5. 任一方为中性色, 与几乎所有颜色相容
    if is_neutral(a) || is_neutral(b) {
        return weights.neutral;
    }

    // 6. 低饱和组合
    if (hsv_a.s < 0.2 && hsv_b.s < 0.5) || (hsv_b.s < 0.2 && hsv_a.s < 0.5) {
        return weights.desaturated;
    }

    // 7. 过于相近 (减分)
    if hue_dist <= 10.0 && brightness_diff < 0.1 && saturation_diff < 0.1 {
        return weights.too_similar;
    }

    0.0
}

/// 衣物与已选衣物集的协调总分
///
/// 双方主色齐备才计入; 无颜色数据的衣物贡献 0 并跳过
pub fn harmony_score(garment: &Garment, others: &[&Garment], weights: &ColorHarmonyWeights) -> f64 {
    let main = match garment.main_color() {
        Some(c) => c,
        None => return 0.0,
    };

    others
        .iter()
        .filter_map(|other| other.main_color())
        .map(|other_main| harmony(main, other_main, weights))
        .sum()
}
