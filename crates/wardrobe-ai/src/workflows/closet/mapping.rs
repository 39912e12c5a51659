use std::collections::HashMap;
use std::sync::OnceLock;

use super::normalizer::normalize_label;
use crate::workflows::outfits::domain::{Category, Season};

static CATEGORY_NAME_MAP: OnceLock<HashMap<String, Category>> = OnceLock::new();

/// Resolves a closet export's category label, accepting both canonical
/// category names and the garment-type synonyms exports commonly use.
pub(crate) fn category_for_label(label: &str) -> Option<Category> {
    let normalized = normalize_label(label);
    if let Some(category) = Category::parse(&normalized) {
        return Some(category);
    }
    category_name_map().get(&normalized).copied()
}

fn category_name_map() -> &'static HashMap<String, Category> {
    CATEGORY_NAME_MAP.get_or_init(|| {
        const NAME_TO_CATEGORY: &[(&str, Category)] = &[
            // Tops
            ("t-shirt", Category::Top),
            ("tee", Category::Top),
            ("shirt", Category::Top),
            ("blouse", Category::Top),
            ("sweater", Category::Top),
            ("hoodie", Category::Top),
            ("tank top", Category::Top),
            ("polo", Category::Top),
            // Bottoms
            ("jeans", Category::Bottom),
            ("pants", Category::Bottom),
            ("trousers", Category::Bottom),
            ("chinos", Category::Bottom),
            ("shorts", Category::Bottom),
            ("skirt", Category::Bottom),
            ("leggings", Category::Bottom),
            // Shoes
            ("sneakers", Category::Shoes),
            ("trainers", Category::Shoes),
            ("boots", Category::Shoes),
            ("sandals", Category::Shoes),
            ("loafers", Category::Shoes),
            ("heels", Category::Shoes),
            // Outerwear
            ("jacket", Category::Outerwear),
            ("coat", Category::Outerwear),
            ("parka", Category::Outerwear),
            ("blazer", Category::Outerwear),
            ("cardigan", Category::Outerwear),
            // Accessories
            ("scarf", Category::Accessory),
            ("belt", Category::Accessory),
            ("hat", Category::Accessory),
            ("cap", Category::Accessory),
            ("bag", Category::Accessory),
            ("watch", Category::Accessory),
            ("necklace", Category::Accessory),
        ];

        let mut map = HashMap::with_capacity(NAME_TO_CATEGORY.len());
        for (name, category) in NAME_TO_CATEGORY {
            map.insert(normalize_label(name), *category);
        }
        map
    })
}

/// Missing or unrecognized seasons import as all-season rather than dropping
/// the garment.
pub(crate) fn season_for_label(label: Option<&str>) -> Season {
    label
        .map(normalize_label)
        .as_deref()
        .and_then(Season::parse)
        .unwrap_or(Season::AllSeason)
}

#[cfg(test)]
pub(crate) fn category_lookup_for_tests(label: &str) -> Option<Category> {
    category_for_label(label)
}
