use super::super::domain::{Category, Garment, Mood, OutfitCandidate};
use super::{reasons, rules};

/// Upper bound on accessory variants per (top, bottom) pair.
///
/// Load-bearing for combinatorial control: loosening it changes both the
/// candidate count and which combinations reach the score threshold.
pub(crate) const ACCESSORY_VARIANTS_PER_PAIR: usize = 2;

struct CategoryGroups<'a> {
    tops: Vec<&'a Garment>,
    bottoms: Vec<&'a Garment>,
    shoes: Vec<&'a Garment>,
    accessories: Vec<&'a Garment>,
}

impl<'a> CategoryGroups<'a> {
    fn from_eligible(garments: &[&'a Garment]) -> Self {
        let mut groups = Self {
            tops: Vec::new(),
            bottoms: Vec::new(),
            shoes: Vec::new(),
            accessories: Vec::new(),
        };

        for &garment in garments {
            match garment.category {
                Category::Top => groups.tops.push(garment),
                Category::Bottom => groups.bottoms.push(garment),
                Category::Shoes => groups.shoes.push(garment),
                Category::Accessory => groups.accessories.push(garment),
                // Outerwear passes the filter for cold contexts but does not
                // enter combinations.
                Category::Outerwear => {}
            }
        }

        // Combination order is pinned to id order so "first shoe" and "first
        // two accessories" stay stable across requests regardless of how the
        // supplier ordered the wardrobe.
        for group in [
            &mut groups.tops,
            &mut groups.bottoms,
            &mut groups.shoes,
            &mut groups.accessories,
        ] {
            group.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        }

        groups
    }
}

/// Enumerates every valid combination with provisional score and reasons.
///
/// Returns an empty list when no top or no bottom is available; that is a
/// normal outcome, not an error.
pub(crate) fn generate_candidates(
    eligible: &[&Garment],
    mood: Option<Mood>,
) -> Vec<OutfitCandidate> {
    let groups = CategoryGroups::from_eligible(eligible);
    if groups.tops.is_empty() || groups.bottoms.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for &top in &groups.tops {
        for &bottom in &groups.bottoms {
            if groups.shoes.is_empty() {
                candidates.push(build_candidate(&[top, bottom], mood));
            } else {
                for &shoe in &groups.shoes {
                    candidates.push(build_candidate(&[top, bottom, shoe], mood));
                }
            }

            for &accessory in groups
                .accessories
                .iter()
                .take(ACCESSORY_VARIANTS_PER_PAIR)
            {
                let mut pieces = vec![top, bottom];
                if let Some(&shoe) = groups.shoes.first() {
                    pieces.push(shoe);
                }
                pieces.push(accessory);
                candidates.push(build_candidate(&pieces, mood));
            }
        }
    }

    candidates
}

fn build_candidate(pieces: &[&Garment], mood: Option<Mood>) -> OutfitCandidate {
    let score = rules::score_candidate(pieces, mood);
    let reasons = reasons::candidate_reasons(pieces, mood);

    OutfitCandidate {
        garment_ids: pieces.iter().map(|piece| piece.id.clone()).collect(),
        score: score.total,
        components: score.components,
        reasons,
    }
}
