use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for garments owned by a wardrobe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GarmentId(pub String);

/// Identifier wrapper for the wardrobe owner requesting recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

/// Identifier assigned to a materialized outfit recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutfitId(pub String);

/// Closed set of garment slots an outfit can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessory,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
            Category::Outerwear => "outerwear",
            Category::Accessory => "accessory",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Category::Top),
            "bottom" => Some(Category::Bottom),
            "shoes" => Some(Category::Shoes),
            "outerwear" => Some(Category::Outerwear),
            "accessory" => Some(Category::Accessory),
            _ => None,
        }
    }
}

/// Season a garment is cut for; `AllSeason` garments pass every weather check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    AllSeason,
}

impl Season {
    pub const fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::AllSeason => "all-season",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            "all-season" | "all season" | "allseason" => Some(Season::AllSeason),
            _ => None,
        }
    }
}

/// Mood signal biasing material, style, and occasion scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Casual,
    Formal,
    Adventurous,
    Cozy,
    Energetic,
    Minimalist,
    Bold,
}

impl Mood {
    pub const fn label(self) -> &'static str {
        match self {
            Mood::Casual => "casual",
            Mood::Formal => "formal",
            Mood::Adventurous => "adventurous",
            Mood::Cozy => "cozy",
            Mood::Energetic => "energetic",
            Mood::Minimalist => "minimalist",
            Mood::Bold => "bold",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "casual" => Some(Mood::Casual),
            "formal" => Some(Mood::Formal),
            "adventurous" => Some(Mood::Adventurous),
            "cozy" => Some(Mood::Cozy),
            "energetic" => Some(Mood::Energetic),
            "minimalist" => Some(Mood::Minimalist),
            "bold" => Some(Mood::Bold),
            _ => None,
        }
    }
}

/// Weather signal gating which seasons remain eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Windy,
    Hot,
    Cold,
}

impl Weather {
    pub const fn label(self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Cloudy => "cloudy",
            Weather::Rainy => "rainy",
            Weather::Snowy => "snowy",
            Weather::Windy => "windy",
            Weather::Hot => "hot",
            Weather::Cold => "cold",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sunny" => Some(Weather::Sunny),
            "cloudy" => Some(Weather::Cloudy),
            "rainy" => Some(Weather::Rainy),
            "snowy" => Some(Weather::Snowy),
            "windy" => Some(Weather::Windy),
            "hot" => Some(Weather::Hot),
            "cold" => Some(Weather::Cold),
            _ => None,
        }
    }
}

/// A single wardrobe item as supplied by the garment source.
///
/// `tags` is an open vocabulary carrying style, occasion, versatility, and fit
/// signals; scoring looks tags up by membership or substring, never
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garment {
    pub id: GarmentId,
    pub owner_id: OwnerId,
    pub category: Category,
    pub primary_color: String,
    #[serde(default)]
    pub material: Option<String>,
    pub season: Season,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Garment {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// Request-time signals biasing filtering and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationContext {
    pub owner_id: OwnerId,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub weather: Option<Weather>,
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Free-text occasion hint; carried through but not yet scored.
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub result_limit: Option<usize>,
}

/// Scoring dimensions contributing to a candidate's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    ColorHarmony,
    MoodAlignment,
    StyleCoherence,
    OccasionMatch,
    Versatility,
    Diversity,
}

/// Discrete contribution to a candidate score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub dimension: ScoreDimension,
    pub points: u8,
    pub notes: String,
}

/// Transient combination produced by the generator; never persisted.
///
/// `garment_ids` keeps the fixed slot order: top, bottom, optional shoe,
/// optional accessory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitCandidate {
    pub garment_ids: Vec<GarmentId>,
    pub score: u8,
    pub components: Vec<ScoreComponent>,
    pub reasons: Vec<String>,
}

/// A candidate promoted into a result, stamped and attributed to its context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub owner_id: OwnerId,
    pub garment_ids: Vec<GarmentId>,
    pub score: u8,
    pub explanation: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub weather: Option<Weather>,
    pub created_at: DateTime<Utc>,
}

/// Terminal state of one recommendation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Recommended,
    EmptyWardrobe,
    NoEligibleGarments,
    NoQualifyingOutfits,
}

impl RecommendationOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationOutcome::Recommended => "recommended",
            RecommendationOutcome::EmptyWardrobe => "empty_wardrobe",
            RecommendationOutcome::NoEligibleGarments => "no_eligible_garments",
            RecommendationOutcome::NoQualifyingOutfits => "no_qualifying_outfits",
        }
    }
}

/// Engine output: ranked outfits plus a context-level explanation.
///
/// The outcome code distinguishes the three empty results without forcing
/// callers to match on explanation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub outcome: RecommendationOutcome,
    pub outfits: Vec<Outfit>,
    pub explanation: String,
    pub total_generated: usize,
}

impl RecommendationResult {
    pub(crate) fn empty(outcome: RecommendationOutcome, explanation: impl Into<String>) -> Self {
        Self {
            outcome,
            outfits: Vec::new(),
            explanation: explanation.into(),
            total_generated: 0,
        }
    }
}
