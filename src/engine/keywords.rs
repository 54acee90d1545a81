// ==========================================
// AI 衣橱穿搭推荐系统 - 材质/版型关键词表
// ==========================================
// 职责: 把散落的名称子串判断收拢为一张声明式关键词表,
// 每件衣物入场时一次性推导布尔特征, 评分器只消费特征
// 关键词为韩文衣物名称惯用词 (沿用旧版数据)
// ==========================================

use crate::domain::garment::Garment;

// ===== 外套档位关键词 =====
const OUTER_THICK: &[&str] = &["패딩", "두꺼운", "코트"];
const OUTER_LIGHT: &[&str] = &["자켓", "가디건", "후드"];
const OUTER_MID: &[&str] = &["가디건", "블레이저"];
const OUTER_THIN: &[&str] = &["가디건", "린넨"];

// ===== 上衣/下装温度档位关键词 =====
const TOP_FRIGID: &[&str] = &["두꺼운", "니트"];
const TOP_COLD: &[&str] = &["니트", "긴팔"];
const TOP_COOL: &[&str] = &["긴팔", "셔츠"];
const TOP_WARM: &[&str] = &["반팔", "티셔츠"];
const TOP_HOT: &[&str] = &["반팔", "민소매", "린넨"];

// ===== 材质关键词 =====
const BREATHABLE: &[&str] = &["린넨", "면", "시원한"];
const HEAVY_MATERIAL: &[&str] = &["니트", "두꺼운"];
const RAINPROOF: &[&str] = &["방수", "우비", "레인코트", "나일론", "GORE-TEX", "고어텍스"];
const COTTON_LIKE: &[&str] = &["면", "린넨", "코튼"];
const WINTERWEAR: &[&str] = &["패딩", "두꺼운", "방한"];

// ===== 风格关键词 =====
const FORMAL_NAME: &[&str] = &["정장", "슈트", "셔츠", "블레이저", "넥타이", "드레스셔츠"];
const CASUAL_NAME: &[&str] = &["티셔츠", "후드", "운동복", "청바지"];
const FORMAL_TAG: &[&str] = &["포멀", "회의", "비즈니스"];
const CASUAL_TAG: &[&str] = &["캐주얼", "운동"];

// ===== 组合规则关键词 =====
const ONE_PIECE: &[&str] = &["원피스", "드레스"];
const SUIT_TOP: &[&str] = &["정장"];
const TROUSER_LIKE: &[&str] = &["바지", "슬랙스"];

fn name_has_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| name.contains(kw))
}

fn tags_have_any(tags: &[String], keywords: &[&str]) -> bool {
    tags.iter()
        .any(|tag| keywords.iter().any(|kw| tag.contains(kw)))
}

// ==========================================
// 衣物派生特征 (Garment Traits)
// ==========================================
// 每件衣物每轮推荐推导一次, 评分/组合检查只读消费
#[derive(Debug, Clone, Copy, Default)]
pub struct GarmentTraits {
    // 外套档位
    pub thick_outer: bool,
    pub light_outer: bool,
    pub mid_outer: bool,
    pub thin_outer: bool,

    // 上衣/下装温度档位
    pub frigid_wear: bool,
    pub cold_wear: bool,
    pub cool_wear: bool,
    pub warm_wear: bool,
    pub hot_wear: bool,

    // 材质
    pub breathable: bool,
    pub heavy_material: bool,
    pub rainproof: bool,
    pub cotton_like: bool,
    pub winterwear: bool,

    // 风格 (名称或标签任一命中)
    pub formal_style: bool,
    pub casual_style: bool,

    // 组合规则
    pub one_piece: bool,
    pub suit_top: bool,
    pub trouser_like: bool,
}

impl GarmentTraits {
    /// 从衣物名称/标签一次性推导全部特征
    pub fn derive(garment: &Garment) -> Self {
        let name = garment.name.as_str();
        Self {
            thick_outer: name_has_any(name, OUTER_THICK),
            light_outer: name_has_any(name, OUTER_LIGHT),
            mid_outer: name_has_any(name, OUTER_MID),
            thin_outer: name_has_any(name, OUTER_THIN),

            frigid_wear: name_has_any(name, TOP_FRIGID),
            cold_wear: name_has_any(name, TOP_COLD),
            cool_wear: name_has_any(name, TOP_COOL),
            warm_wear: name_has_any(name, TOP_WARM),
            hot_wear: name_has_any(name, TOP_HOT),

            breathable: name_has_any(name, BREATHABLE),
            heavy_material: name_has_any(name, HEAVY_MATERIAL),
            rainproof: name_has_any(name, RAINPROOF),
            cotton_like: name_has_any(name, COTTON_LIKE),
            winterwear: name_has_any(name, WINTERWEAR),

            formal_style: name_has_any(name, FORMAL_NAME)
                || tags_have_any(&garment.tags, FORMAL_TAG),
            casual_style: name_has_any(name, CASUAL_NAME)
                || tags_have_any(&garment.tags, CASUAL_TAG),

            one_piece: name_has_any(name, ONE_PIECE),
            suit_top: name_has_any(name, SUIT_TOP),
            trouser_like: name_has_any(name, TROUSER_LIKE),
        }
    }
}
