use super::*;
use crate::config::weights::ColorHarmonyWeights;
use crate::domain::garment::{Garment, GarmentColor, Rgb};
use crate::domain::types::{Category, Season};

fn weights() -> ColorHarmonyWeights {
    ColorHarmonyWeights::default()
}

// ==========================================
// RGB → HSV
// ==========================================

#[test]
fn test_rgb_to_hsv_primaries() {
    let red = rgb_to_hsv(Rgb::new(255, 0, 0));
    assert_eq!(red.h, 0.0);
    assert_eq!(red.s, 1.0);
    assert_eq!(red.v, 1.0);

    let green = rgb_to_hsv(Rgb::new(0, 255, 0));
    assert_eq!(green.h, 120.0);

    let blue = rgb_to_hsv(Rgb::new(0, 0, 255));
    assert_eq!(blue.h, 240.0);

    // 无色差时色相为 0, 饱和度为 0
    let gray = rgb_to_hsv(Rgb::new(128, 128, 128));
    assert_eq!(gray.h, 0.0);
    assert_eq!(gray.s, 0.0);
}

// ==========================================
// 中性色判定
// ==========================================

#[test]
fn test_is_neutral_bands() {
    assert!(is_neutral(Rgb::new(128, 128, 128))); // 灰
    assert!(is_neutral(Rgb::new(20, 30, 40))); // 黑带
    assert!(is_neutral(Rgb::new(250, 245, 245))); // 白带 (灰度系)
    assert!(is_neutral(Rgb::new(220, 210, 185))); // 米色带
    assert!(!is_neutral(Rgb::new(255, 0, 0)));
    assert!(!is_neutral(Rgb::new(200, 120, 40)));
}

// ==========================================
// 两两协调
// ==========================================

#[test]
fn test_harmony_is_symmetric() {
    let w = weights();
    let pairs = [
        (Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)),
        (Rgb::new(255, 43, 0), Rgb::new(255, 0, 43)),
        (Rgb::new(255, 255, 255), Rgb::new(255, 255, 0)),
        (Rgb::new(200, 170, 170), Rgb::new(173, 200, 120)),
        (Rgb::new(12, 200, 99), Rgb::new(99, 12, 200)),
    ];
    for (a, b) in pairs {
        assert_eq!(harmony(a, b, &w), harmony(b, a, &w), "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_hue_wraps_across_zero() {
    // 色相 350° 与 10°: 环上距离 20° → 邻近色, 而非 340° 的离群
    let h350 = Rgb::new(255, 0, 43);
    let h10 = Rgb::new(255, 43, 0);
    assert_eq!(rgb_to_hsv(h350).h, 350.0);
    assert_eq!(rgb_to_hsv(h10).h, 10.0);
    assert_eq!(harmony(h350, h10, &weights()), weights().analogous);
}

#[test]
fn test_complementary_and_triadic() {
    let w = weights();
    // 红 ↔ 青: 180° 互补
    assert_eq!(
        harmony(Rgb::new(255, 0, 0), Rgb::new(0, 255, 255), &w),
        w.complementary
    );
    // 红 ↔ 绿: 120° 三等分
    assert_eq!(
        harmony(Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), &w),
        w.triadic
    );
}

#[test]
fn test_neutral_partner() {
    let w = weights();
    // 白 (中性) ↔ 黄 (60°): 不落前三档, 走中性档
    assert_eq!(
        harmony(Rgb::new(255, 255, 255), Rgb::new(255, 255, 0), &w),
        w.neutral
    );
}

#[test]
fn test_desaturated_pair() {
    let w = weights();
    // 两侧均低饱和且都不落入中性色带
    assert_eq!(
        harmony(Rgb::new(200, 170, 170), Rgb::new(173, 200, 120), &w),
        w.desaturated
    );
}

#[test]
fn test_identical_colors_classify_analogous() {
    // 规则顺序固定: 色相差 0 先命中邻近档, 过近减分档不可达
    let w = weights();
    assert_eq!(
        harmony(Rgb::new(180, 40, 40), Rgb::new(180, 40, 40), &w),
        w.analogous
    );
}

// ==========================================
// harmony_score (集合求和)
// ==========================================

fn colored_garment(name: &str, rgb: Rgb) -> Garment {
    let mut g = Garment::new(name, Category::Top, Season::AllSeason, vec![]);
    g.colors = Some(vec![GarmentColor {
        rgb,
        hex: rgb_to_hex(rgb.r, rgb.g, rgb.b),
        name: color_name(rgb.r, rgb.g, rgb.b).to_string(),
        percentage: 100.0,
    }]);
    g
}

#[test]
fn test_harmony_score_skips_colorless() {
    let w = weights();
    let target = colored_garment("빨간 니트", Rgb::new(255, 0, 0));
    let cyan = colored_garment("청록 셔츠", Rgb::new(0, 255, 255));
    let colorless = Garment::new("무색 바지", Category::Bottom, Season::AllSeason, vec![]);

    // 无色衣物贡献 0 并被跳过
    let score = harmony_score(&target, &[&cyan, &colorless], &w.clone());
    assert_eq!(score, w.complementary);

    // 自身无色 → 0
    assert_eq!(harmony_score(&colorless, &[&cyan], &w), 0.0);
}

// ==========================================
// 主色提取 / 色名
// ==========================================

#[test]
fn test_dominant_colors_from_rgba_buffer() {
    // 64 像素: 前一半红, 后一半蓝
    let mut pixels = Vec::with_capacity(64 * 4);
    for _ in 0..32 {
        pixels.extend_from_slice(&[250, 20, 20, 255]);
    }
    for _ in 0..32 {
        pixels.extend_from_slice(&[20, 20, 250, 255]);
    }

    let colors = dominant_colors(&pixels, 64);
    assert_eq!(colors.len(), 2);
    let rgbs: Vec<Rgb> = colors.iter().map(|c| c.rgb).collect();
    // 量化到 32 级桶
    assert!(rgbs.contains(&Rgb::new(224, 0, 0)));
    assert!(rgbs.contains(&Rgb::new(0, 0, 224)));
}

#[test]
fn test_dominant_colors_skips_transparent() {
    // 全透明像素不产生任何主色
    let mut pixels = Vec::new();
    for _ in 0..16 {
        pixels.extend_from_slice(&[250, 20, 20, 0]);
    }
    assert!(dominant_colors(&pixels, 16).is_empty());
}

#[test]
fn test_color_name_estimation() {
    assert_eq!(color_name(255, 0, 0), "빨강");
    assert_eq!(color_name(10, 10, 10), "검정");
    assert_eq!(color_name(230, 230, 230), "흰색");
    assert_eq!(color_name(128, 128, 128), "회색");
    assert_eq!(color_name(0, 10, 140), "네이비");
}

#[test]
fn test_rgb_to_hex() {
    assert_eq!(rgb_to_hex(255, 0, 10), "#ff000a");
    assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
}
