use super::super::domain::{Category, Garment, RecommendationContext, Season, Weather};

const HOT_CUTOFF_CELSIUS: f32 = 25.0;
const COLD_CUTOFF_CELSIUS: f32 = 10.0;

/// Materials too warm to wear above the hot cutoff.
const HEAT_EXCLUDED_MATERIALS: &[&str] = &["wool", "fleece"];

/// Materials rated for wear below the cold cutoff.
const COLD_RATED_MATERIALS: &[&str] = &["wool", "fleece", "down", "synthetic"];

/// Seasons each weather value admits; all-season garments pass everywhere.
fn allowed_seasons(weather: Weather) -> &'static [Season] {
    match weather {
        Weather::Sunny => &[Season::Spring, Season::Summer, Season::AllSeason],
        Weather::Cloudy => &[
            Season::Spring,
            Season::Summer,
            Season::Fall,
            Season::AllSeason,
        ],
        Weather::Rainy => &[Season::Spring, Season::Fall, Season::AllSeason],
        Weather::Snowy => &[Season::Winter, Season::AllSeason],
        Weather::Windy => &[Season::Fall, Season::Winter, Season::AllSeason],
        Weather::Hot => &[Season::Summer, Season::AllSeason],
        Weather::Cold => &[Season::Fall, Season::Winter, Season::AllSeason],
    }
}

/// Returns the garments eligible for combination under the given context.
///
/// Season and temperature checks are conjunctive; a check whose signal is
/// absent from the context is skipped.
pub(crate) fn eligible_garments<'a>(
    garments: &'a [Garment],
    context: &RecommendationContext,
) -> Vec<&'a Garment> {
    garments
        .iter()
        .filter(|garment| {
            passes_weather(garment, context.weather)
                && passes_temperature(garment, context.temperature)
        })
        .collect()
}

fn passes_weather(garment: &Garment, weather: Option<Weather>) -> bool {
    let Some(weather) = weather else {
        return true;
    };

    garment.season == Season::AllSeason || allowed_seasons(weather).contains(&garment.season)
}

fn passes_temperature(garment: &Garment, temperature: Option<f32>) -> bool {
    let Some(temperature) = temperature else {
        return true;
    };

    if temperature > HOT_CUTOFF_CELSIUS {
        garment.category != Category::Outerwear
            && !material_contains_any(garment, HEAT_EXCLUDED_MATERIALS)
    } else if temperature < COLD_CUTOFF_CELSIUS {
        garment.category == Category::Outerwear
            || material_contains_any(garment, COLD_RATED_MATERIALS)
    } else {
        true
    }
}

fn material_contains_any(garment: &Garment, needles: &[&str]) -> bool {
    let Some(material) = garment.material.as_deref() else {
        return false;
    };

    let material = material.to_lowercase();
    needles.iter().any(|needle| material.contains(needle))
}
