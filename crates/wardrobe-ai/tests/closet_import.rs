//! Integration specifications for the closet CSV import feeding the engine.

use std::io::Cursor;

use chrono::{TimeZone, Utc};
use wardrobe_ai::workflows::closet::ClosetCsvImporter;
use wardrobe_ai::workflows::outfits::{
    Category, OwnerId, RecommendationConfig, RecommendationContext, RecommendationEngine,
    RecommendationOutcome, Season,
};

const EXPORT: &str = "\
Item ID,Category,Color,Material,Season,Tags
tee-01,T-Shirt,White,Cotton,summer,casual; versatile-high
sweater-01,Sweater,Gray,Wool,winter,cozy; classic
jeans-01,Jeans,Blue,Denim,all-season,casual; versatile-high
sneaker-01,Sneakers,White,Leather,all-season,casual
watch-01,Watch,Black,,,classic
mystery-01,Hoverboard,Silver,,,\n";

fn owner() -> OwnerId {
    OwnerId("owner-77".to_string())
}

#[test]
fn import_maps_rows_to_garments() {
    let garments =
        ClosetCsvImporter::from_reader(Cursor::new(EXPORT), &owner()).expect("import succeeds");

    assert_eq!(garments.len(), 5);
    assert!(garments
        .iter()
        .all(|garment| garment.owner_id == owner()));

    let tee = garments
        .iter()
        .find(|garment| garment.id.0 == "tee-01")
        .expect("tee imported");
    assert_eq!(tee.category, Category::Top);
    assert_eq!(tee.season, Season::Summer);

    let watch = garments
        .iter()
        .find(|garment| garment.id.0 == "watch-01")
        .expect("watch imported");
    assert_eq!(watch.category, Category::Accessory);
    assert_eq!(watch.season, Season::AllSeason);
}

#[test]
fn imported_wardrobe_flows_through_the_engine() {
    let garments =
        ClosetCsvImporter::from_reader(Cursor::new(EXPORT), &owner()).expect("import succeeds");

    let engine = RecommendationEngine::new(RecommendationConfig::default());
    let context = RecommendationContext {
        owner_id: owner(),
        mood: None,
        weather: None,
        temperature: None,
        occasion: None,
        result_limit: None,
    };
    let generated_at = Utc
        .with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp");

    let result = engine.recommend(&garments, &context, generated_at);

    assert_eq!(result.outcome, RecommendationOutcome::Recommended);
    assert!(result.total_generated > 0);
    for outfit in &result.outfits {
        assert!(outfit.score >= 60);
        for id in &outfit.garment_ids {
            assert!(garments.iter().any(|garment| &garment.id == id));
        }
    }
}
