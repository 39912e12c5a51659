use super::super::domain::{Garment, Mood, ScoreComponent, ScoreDimension};

pub(crate) const BASE_SCORE: u8 = 50;
pub(crate) const MAX_SCORE: u8 = 100;

const COMPLEMENTARY_COLOR_PAIRS: &[(&str, &str)] = &[
    ("blue", "orange"),
    ("red", "green"),
    ("yellow", "purple"),
];

pub(crate) const NEUTRAL_COLORS: &[&str] = &["black", "white", "gray", "beige", "navy"];

pub(crate) const STYLE_KEYWORDS: &[&str] = &[
    "minimalist",
    "bold",
    "classic",
    "trendy",
    "avant-garde",
    "casual",
];

const OCCASION_VOCABULARY: &[&str] = &[
    "casual",
    "formal",
    "work",
    "smart-casual",
    "night",
    "weekend",
];

const COLOR_HARMONY_CAP: u32 = 20;
const MOOD_ALIGNMENT_CAP: u32 = 20;
const OCCASION_MATCH_CAP: u32 = 12;
const VERSATILITY_CAP: u32 = 8;

/// Material and tag keywords each mood rewards.
fn mood_material_keywords(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Casual => &["cotton", "denim", "relaxed"],
        Mood::Formal => &["silk", "wool", "structured"],
        Mood::Adventurous => &["leather", "denim", "rugged"],
        Mood::Cozy => &["fleece", "knit", "soft"],
        Mood::Energetic => &["stretch", "sporty", "lightweight"],
        Mood::Minimalist => &["clean", "simple", "monochrome"],
        Mood::Bold => &["statement", "bright", "pattern"],
    }
}

/// Occasion tags each mood targets, drawn from the occasion vocabulary.
fn mood_occasions(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Casual => &["casual", "weekend"],
        Mood::Formal => &["formal", "work", "smart-casual"],
        Mood::Adventurous => &["weekend", "casual"],
        Mood::Cozy => &["casual", "weekend"],
        Mood::Energetic => &["night", "weekend"],
        Mood::Minimalist => &["work", "smart-casual"],
        Mood::Bold => &["night", "weekend", "casual"],
    }
}

pub(crate) struct CandidateScore {
    pub(crate) total: u8,
    pub(crate) components: Vec<ScoreComponent>,
}

/// Scores one candidate's resolved garments against the active mood.
///
/// Base 50, six additive sub-scores, total capped at 100.
pub(crate) fn score_candidate(pieces: &[&Garment], mood: Option<Mood>) -> CandidateScore {
    let scored = [
        (ScoreDimension::ColorHarmony, color_harmony(pieces)),
        (ScoreDimension::MoodAlignment, mood_alignment(pieces, mood)),
        (ScoreDimension::StyleCoherence, style_coherence(pieces)),
        (ScoreDimension::OccasionMatch, occasion_match(pieces, mood)),
        (ScoreDimension::Versatility, versatility(pieces)),
        (ScoreDimension::Diversity, diversity(pieces)),
    ];

    let mut components = Vec::with_capacity(scored.len());
    let mut total = u32::from(BASE_SCORE);
    for (dimension, (points, notes)) in scored {
        total += u32::from(points);
        components.push(ScoreComponent {
            dimension,
            points,
            notes,
        });
    }

    CandidateScore {
        total: total.min(u32::from(MAX_SCORE)) as u8,
        components,
    }
}

fn color_harmony(pieces: &[&Garment]) -> (u8, String) {
    if pieces.len() < 2 {
        return (0, "single piece, palette not scored".to_string());
    }

    let colors: Vec<String> = pieces
        .iter()
        .map(|piece| piece.primary_color.to_lowercase())
        .collect();

    let mut points: u32 = 0;
    let mut pair_hits = 0;
    for (first, second) in COMPLEMENTARY_COLOR_PAIRS {
        if colors.iter().any(|color| color == first) && colors.iter().any(|color| color == second)
        {
            points += 15;
            pair_hits += 1;
        }
    }

    if colors.windows(2).all(|pair| pair[0] == pair[1]) {
        points += 10;
    }

    let neutral_count = colors
        .iter()
        .filter(|color| NEUTRAL_COLORS.contains(&color.as_str()))
        .count();
    if neutral_count >= pieces.len() - 1 {
        points += 8;
    }

    (
        points.min(COLOR_HARMONY_CAP) as u8,
        format!("{pair_hits} complementary pair(s), {neutral_count} neutral piece(s)"),
    )
}

fn mood_alignment(pieces: &[&Garment], mood: Option<Mood>) -> (u8, String) {
    let Some(mood) = mood else {
        return (0, "no mood signal".to_string());
    };

    let keywords = mood_material_keywords(mood);
    let mut matches: u32 = 0;
    for piece in pieces {
        let haystack = fabric_haystack(piece);
        for keyword in keywords {
            if haystack.contains(keyword) {
                matches += 1;
            }
        }
    }

    (
        (matches * 3).min(MOOD_ALIGNMENT_CAP) as u8,
        format!("{matches} match(es) for a {} mood", mood.label()),
    )
}

fn style_coherence(pieces: &[&Garment]) -> (u8, String) {
    if pieces.len() < 2 {
        return (0, "single piece, style not scored".to_string());
    }

    let mut shared_style = None;
    let mut present: Vec<&str> = Vec::new();
    for &keyword in STYLE_KEYWORDS {
        let wearers = pieces.iter().filter(|piece| piece.has_tag(keyword)).count();
        if wearers > 0 {
            present.push(keyword);
        }
        if wearers > 1 && shared_style.is_none() {
            shared_style = Some(keyword);
        }
    }

    if present.is_empty() {
        return (5, "no style keywords tagged".to_string());
    }
    if let Some(style) = shared_style {
        return (15, format!("shared {style} style"));
    }

    let classic = present.contains(&"classic");
    if classic && (present.contains(&"minimalist") || present.contains(&"bold")) {
        (10, "complementary style pairing".to_string())
    } else {
        (5, "mixed styles".to_string())
    }
}

fn occasion_match(pieces: &[&Garment], mood: Option<Mood>) -> (u8, String) {
    let Some(mood) = mood else {
        return (0, "no mood signal".to_string());
    };

    let targets = mood_occasions(mood);
    let mut matches: u32 = 0;
    for piece in pieces {
        matches += piece
            .tags
            .iter()
            .filter(|tag| {
                OCCASION_VOCABULARY.contains(&tag.as_str()) && targets.contains(&tag.as_str())
            })
            .count() as u32;
    }

    (
        (matches * 2).min(OCCASION_MATCH_CAP) as u8,
        format!("{matches} occasion tag match(es)"),
    )
}

fn versatility(pieces: &[&Garment]) -> (u8, String) {
    let high = pieces
        .iter()
        .filter(|piece| piece.has_tag("versatile-high"))
        .count() as u32;
    let medium = pieces
        .iter()
        .filter(|piece| piece.has_tag("versatile-medium"))
        .count() as u32;

    (
        (high * 2 + medium).min(VERSATILITY_CAP) as u8,
        format!("{high} high / {medium} medium versatility piece(s)"),
    )
}

fn diversity(pieces: &[&Garment]) -> (u8, String) {
    if pieces.len() >= 3 {
        (10, format!("{}-piece outfit", pieces.len()))
    } else {
        (5, "two-piece baseline".to_string())
    }
}

fn fabric_haystack(piece: &Garment) -> String {
    let mut haystack = piece
        .material
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    for tag in &piece.tags {
        haystack.push(' ');
        haystack.push_str(&tag.to_lowercase());
    }
    haystack
}
