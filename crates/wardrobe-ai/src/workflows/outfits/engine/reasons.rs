use super::super::domain::{Garment, Mood};
use super::rules::{NEUTRAL_COLORS, STYLE_KEYWORDS};

/// Separator joining reasons into an outfit's explanation string.
pub(crate) const REASON_SEPARATOR: &str = "; ";

/// Builds the ordered reason list for one candidate.
///
/// Reads the same garments and mood as the scorer but contributes nothing to
/// the score; each entry appears only when its condition holds, in a fixed
/// order ending with the mood closing.
pub(crate) fn candidate_reasons(pieces: &[&Garment], mood: Option<Mood>) -> Vec<String> {
    let mut reasons = Vec::new();

    if pieces.len() >= 3 {
        reasons.push(format!("Balanced {}-piece combination", pieces.len()));
    }

    let any_neutral = pieces
        .iter()
        .any(|piece| NEUTRAL_COLORS.contains(&piece.primary_color.to_lowercase().as_str()));
    if any_neutral {
        reasons.push("Neutral tones keep the palette easy to wear".to_string());
    }

    let styles: Vec<&str> = STYLE_KEYWORDS
        .iter()
        .copied()
        .filter(|&keyword| pieces.iter().any(|piece| piece.has_tag(keyword)))
        .collect();
    if let [style] = styles.as_slice() {
        reasons.push(format!("Cohesive {style} styling throughout"));
    } else if styles.contains(&"classic")
        && (styles.contains(&"bold") || styles.contains(&"minimalist"))
    {
        reasons.push("Classic pieces offset by a modern accent".to_string());
    }

    if pieces.iter().any(|piece| piece.has_tag("formal")) {
        reasons.push("Polished enough for dressier settings".to_string());
    } else if pieces.iter().any(|piece| piece.has_tag("casual")) {
        reasons.push("Comfortable and approachable".to_string());
    }

    let versatile_pieces = pieces
        .iter()
        .filter(|piece| piece.has_tag("versatile-high"))
        .count();
    if versatile_pieces >= 2 {
        reasons.push("Built around versatile staples".to_string());
    }

    reasons.push(mood_closing(mood).to_string());
    reasons
}

/// Fixed closing description per mood, with a generic fallback.
pub(crate) fn mood_closing(mood: Option<Mood>) -> &'static str {
    match mood {
        Some(Mood::Casual) => "Easygoing and effortless",
        Some(Mood::Formal) => "Sharp and put together",
        Some(Mood::Adventurous) => "Ready for the unexpected",
        Some(Mood::Cozy) => "Comfortable and warm",
        Some(Mood::Energetic) => "Keeps pace with a full day",
        Some(Mood::Minimalist) => "Clean lines with nothing wasted",
        Some(Mood::Bold) => "Makes a statement without trying",
        None => "A dependable pick for the day",
    }
}
