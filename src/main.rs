// ==========================================
// AI 衣橱穿搭推荐系统 - 命令行入口
// ==========================================
// 用途: 本地数据库上的整周推荐演示
// 数据: 无日程时写入一周示例日程, 首次运行自动填充示例衣橱
// ==========================================

use chrono::Local;
use outfit_styler::api::StylingApi;
use outfit_styler::db::get_default_db_path;
use outfit_styler::domain::DayEntry;
use outfit_styler::repository::SqliteKvStore;
use outfit_styler::logging;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("AI 衣橱穿搭推荐系统");
    tracing::info!("系统版本: {}", outfit_styler::VERSION);
    tracing::info!("==================================================");

    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    let store = Arc::new(SqliteKvStore::new(&db_path)?);
    let api = StylingApi::new(store);

    // 无日程时写入一周示例日程, 便于首次体验
    let mut schedule = api.load_schedule()?;
    if schedule.is_empty() {
        schedule = example_schedule()?;
        api.save_schedule(&schedule)?;
        tracing::info!("写入示例日程 ({} 天)", schedule.len());
    }

    let today = Local::now().date_naive();
    let mut rng = StdRng::from_entropy();
    let recommendations = api.recommend_week(today, &mut rng)?;

    for rec in &recommendations {
        println!(
            "[{}] {} ({}°C / {}%)",
            rec.day, rec.event, rec.temperature, rec.humidity
        );
        let outfit = &rec.outfit;
        if let Some(g) = &outfit.outer {
            println!("  아우터: {}", g.name);
        }
        if let Some(g) = &outfit.top {
            println!("  상의:   {}", g.name);
        }
        if let Some(g) = &outfit.bottom {
            println!("  하의:   {}", g.name);
        }
        if let Some(g) = &outfit.shoes {
            println!("  신발:   {}", g.name);
        }
        println!("  💡 {}", outfit.reason);
        println!();
    }

    Ok(())
}

fn example_schedule() -> anyhow::Result<Vec<DayEntry>> {
    let json = r#"[
        {"day":"월","event":"회의","temperature":18,"humidity":55,"weather":"맑음","activityType":"공식","location":"실내","timeOfDay":"낮"},
        {"day":"화","event":"운동","temperature":22,"humidity":60,"weather":"맑음","activityType":"비공식","location":"실외","timeOfDay":"낮"},
        {"day":"수","event":"데이트","temperature":20,"humidity":65,"weather":"비","activityType":"","location":"실외","timeOfDay":"밤"},
        {"day":"목","event":"캐주얼","temperature":25,"humidity":70,"weather":"맑음","activityType":"비공식","location":"실외","timeOfDay":"낮"},
        {"day":"금","event":"회의","temperature":8,"humidity":50,"weather":"눈","activityType":"공식","location":"실내","timeOfDay":"낮"}
    ]"#;
    Ok(serde_json::from_str(json)?)
}
