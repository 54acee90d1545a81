use crate::domain::garment::{GarmentColor, Rgb};
use std::collections::HashMap;

// 色名估计用基准色 (韩文色名)
const NAMED_COLORS: &[(&str, u8, u8, u8)] = &[
    ("빨강", 255, 0, 0),
    ("주황", 255, 165, 0),
    ("노랑", 255, 255, 0),
    ("초록", 0, 255, 0),
    ("파랑", 0, 0, 255),
    ("남색", 75, 0, 130),
    ("보라", 128, 0, 128),
    ("핑크", 255, 192, 203),
    ("갈색", 165, 42, 42),
    ("검정", 0, 0, 0),
    ("회색", 128, 128, 128),
    ("흰색", 255, 255, 255),
    ("베이지", 245, 245, 220),
    ("네이비", 0, 0, 128),
    ("카키", 189, 183, 107),
];

// 像素采样步长 (字节): 每 4 个像素取 1 个
const SAMPLE_STRIDE: usize = 16;
// 色彩量化步长: 32 级一桶
const QUANT_STEP: u32 = 32;
// 低透明度像素剔除阈值
const ALPHA_MIN: u8 = 128;
// 提取主色数量上限
const MAX_COLORS: usize = 5;

/// 从 RGBA 像素缓冲提取主色 (量化计数近似 K-means)
///
/// # 参数
/// - `pixels`: RGBA 字节序列 (长度 = 像素数 × 4)
/// - `pixel_count`: 像素总数 (占比分母沿用旧实现的口径)
///
/// # 返回
/// 按出现频次降序的前 5 个主色, 附 HEX/色名/占比
pub fn dominant_colors(pixels: &[u8], pixel_count: usize) -> Vec<GarmentColor> {
    let mut counts: HashMap<(u8, u8, u8), usize> = HashMap::new();

    let mut i = 0;
    while i + 3 < pixels.len() {
        let a = pixels[i + 3];
        if a >= ALPHA_MIN {
            let q = |v: u8| ((v as u32 / QUANT_STEP) * QUANT_STEP) as u8;
            let key = (q(pixels[i]), q(pixels[i + 1]), q(pixels[i + 2]));
            *counts.entry(key).or_insert(0) += 1;
        }
        i += SAMPLE_STRIDE;
    }

    let mut sorted: Vec<((u8, u8, u8), usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let denominator = (pixel_count as f64 / 16.0).max(1.0);
    sorted
        .into_iter()
        .take(MAX_COLORS)
        .map(|((r, g, b), count)| GarmentColor {
            rgb: Rgb::new(r, g, b),
            hex: rgb_to_hex(r, g, b),
            name: color_name(r, g, b).to_string(),
            percentage: count as f64 / denominator * 100.0,
        })
        .collect()
}

/// RGB → `#rrggbb`
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// 色名估计: 最近基准色 (欧氏距离), 灰度系按明度覆写
pub fn color_name(r: u8, g: u8, b: u8) -> &'static str {
    let mut min_distance = f64::INFINITY;
    let mut closest = "기타";

    for &(name, cr, cg, cb) in NAMED_COLORS {
        let distance = ((r as f64 - cr as f64).powi(2)
            + (g as f64 - cg as f64).powi(2)
            + (b as f64 - cb as f64).powi(2))
        .sqrt();
        if distance < min_distance {
            min_distance = distance;
            closest = name;
        }
    }

    // 灰度系覆写: 通道两两差都在阈值内时按明度归类
    let gray_threshold = 30;
    let (ri, gi, bi) = (r as i32, g as i32, b as i32);
    if (ri - gi).abs() < gray_threshold
        && (gi - bi).abs() < gray_threshold
        && (ri - bi).abs() < gray_threshold
    {
        if r < 50 {
            return "검정";
        }
        if r > 200 {
            return "흰색";
        }
        return "회색";
    }

    closest
}
