use crate::infra::{default_recommendation_config, parse_mood, parse_weather};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use wardrobe_ai::error::AppError;
use wardrobe_ai::workflows::closet::ClosetCsvImporter;
use wardrobe_ai::workflows::outfits::{
    Category, Garment, GarmentId, Mood, OwnerId, RecommendationContext, RecommendationEngine,
    RecommendationResult, Season, Weather,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Closet CSV export to recommend from (defaults to the sample wardrobe)
    #[arg(long)]
    pub(crate) closet_csv: Option<PathBuf>,
    /// Mood signal (casual, formal, adventurous, cozy, energetic, minimalist, bold)
    #[arg(long, value_parser = parse_mood)]
    pub(crate) mood: Option<Mood>,
    /// Weather signal (sunny, cloudy, rainy, snowy, windy, hot, cold)
    #[arg(long, value_parser = parse_weather)]
    pub(crate) weather: Option<Weather>,
    /// Temperature in degrees Celsius
    #[arg(long)]
    pub(crate) temperature: Option<f32>,
    /// Maximum number of outfits to return
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional closet CSV export to hydrate the demo wardrobe
    #[arg(long)]
    pub(crate) closet_csv: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        closet_csv,
        mood,
        weather,
        temperature,
        limit,
    } = args;

    let owner = demo_owner();
    let (garments, imported) = load_wardrobe(closet_csv, &owner)?;
    if imported {
        println!("Imported {} garment(s) from closet export", garments.len());
    }

    let context = RecommendationContext {
        owner_id: owner,
        mood,
        weather,
        temperature,
        occasion: None,
        result_limit: limit,
    };

    let engine = RecommendationEngine::new(default_recommendation_config());
    let result = engine.recommend(&garments, &context, Utc::now());
    render_recommendations(&result, &garments);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { closet_csv } = args;

    let owner = demo_owner();
    let (garments, imported) = load_wardrobe(closet_csv, &owner)?;

    println!("Wardrobe outfit recommendation demo");
    if imported {
        println!(
            "Wardrobe: {} garment(s) imported from closet export",
            garments.len()
        );
    } else {
        println!("Wardrobe: {} sample garment(s)", garments.len());
    }

    let engine = RecommendationEngine::new(default_recommendation_config());
    let scenarios: [(&str, RecommendationContext); 3] = [
        (
            "Cozy snow day",
            scenario_context(&owner, Some(Mood::Cozy), Some(Weather::Snowy), Some(-2.0)),
        ),
        (
            "Casual sunny afternoon",
            scenario_context(&owner, Some(Mood::Casual), Some(Weather::Sunny), Some(22.0)),
        ),
        (
            "Formal evening, no weather signal",
            scenario_context(&owner, Some(Mood::Formal), None, None),
        ),
    ];

    for (title, context) in scenarios {
        println!("\n=== {title} ===");
        let result = engine.recommend(&garments, &context, Utc::now());
        render_recommendations(&result, &garments);
    }

    Ok(())
}

fn demo_owner() -> OwnerId {
    OwnerId("demo-owner".to_string())
}

fn scenario_context(
    owner: &OwnerId,
    mood: Option<Mood>,
    weather: Option<Weather>,
    temperature: Option<f32>,
) -> RecommendationContext {
    RecommendationContext {
        owner_id: owner.clone(),
        mood,
        weather,
        temperature,
        occasion: None,
        result_limit: Some(3),
    }
}

fn load_wardrobe(
    closet_csv: Option<PathBuf>,
    owner: &OwnerId,
) -> Result<(Vec<Garment>, bool), AppError> {
    match closet_csv {
        Some(path) => Ok((ClosetCsvImporter::from_path(path, owner)?, true)),
        None => Ok((sample_wardrobe(owner), false)),
    }
}

fn render_recommendations(result: &RecommendationResult, garments: &[Garment]) {
    println!("{}", result.explanation);
    if result.outfits.is_empty() {
        return;
    }

    println!(
        "{} combination(s) considered, {} recommended:",
        result.total_generated,
        result.outfits.len()
    );
    for (index, outfit) in result.outfits.iter().enumerate() {
        let pieces: Vec<String> = outfit
            .garment_ids
            .iter()
            .map(|id| piece_label(id, garments))
            .collect();
        println!(
            "{:>2}. [{:>3}] {}",
            index + 1,
            outfit.score,
            pieces.join(" + ")
        );
        println!("      {}", outfit.explanation);
    }
}

fn piece_label(id: &GarmentId, garments: &[Garment]) -> String {
    garments
        .iter()
        .find(|garment| &garment.id == id)
        .map(|garment| {
            format!(
                "{} {}",
                garment.primary_color,
                garment.category.label()
            )
        })
        .unwrap_or_else(|| id.0.clone())
}

fn sample_wardrobe(owner: &OwnerId) -> Vec<Garment> {
    let garment = |id: &str,
                   category: Category,
                   color: &str,
                   material: Option<&str>,
                   season: Season,
                   tags: &[&str]| Garment {
        id: GarmentId(id.to_string()),
        owner_id: owner.clone(),
        category,
        primary_color: color.to_string(),
        material: material.map(str::to_string),
        season,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    };

    vec![
        garment(
            "top-white-tee",
            Category::Top,
            "white",
            Some("cotton"),
            Season::AllSeason,
            &["casual", "versatile-high", "weekend"],
        ),
        garment(
            "top-navy-oxford",
            Category::Top,
            "navy",
            Some("cotton"),
            Season::AllSeason,
            &["classic", "work", "smart-casual", "versatile-high"],
        ),
        garment(
            "top-silk-blouse",
            Category::Top,
            "white",
            Some("silk"),
            Season::Spring,
            &["formal", "classic"],
        ),
        garment(
            "top-fleece-pullover",
            Category::Top,
            "gray",
            Some("fleece"),
            Season::Winter,
            &["casual", "versatile-medium"],
        ),
        garment(
            "bottom-blue-jeans",
            Category::Bottom,
            "blue",
            Some("denim"),
            Season::AllSeason,
            &["casual", "weekend", "versatile-high"],
        ),
        garment(
            "bottom-wool-slacks",
            Category::Bottom,
            "black",
            Some("wool"),
            Season::Winter,
            &["formal", "work", "classic"],
        ),
        garment(
            "shoes-white-sneakers",
            Category::Shoes,
            "white",
            Some("leather"),
            Season::AllSeason,
            &["casual", "versatile-high"],
        ),
        garment(
            "shoes-leather-boots",
            Category::Shoes,
            "black",
            Some("leather"),
            Season::Winter,
            &["classic", "night"],
        ),
        garment(
            "outer-down-parka",
            Category::Outerwear,
            "navy",
            Some("down"),
            Season::Winter,
            &["cozy"],
        ),
        garment(
            "acc-wool-scarf",
            Category::Accessory,
            "beige",
            Some("wool knit"),
            Season::Winter,
            &["cozy", "classic"],
        ),
        garment(
            "acc-leather-belt",
            Category::Accessory,
            "black",
            Some("leather"),
            Season::AllSeason,
            &["classic", "versatile-high"],
        ),
    ]
}
