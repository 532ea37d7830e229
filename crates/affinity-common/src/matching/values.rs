use super::scoring::DimensionScore;
use crate::profile::UserProfile;

const RATING_SCALE: f64 = 10.0;
const ALIGNED_SIMILARITY: f64 = 0.8;
const MAX_VALUES_EVIDENCE: usize = 3;

/// `career_importance` -> `Career Importance`
pub fn readable_value_key(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Mean similarity over the value keys both sides answered numerically.
/// Keys are visited in `a`'s order so evidence is deterministic.
pub fn score_values(a: &UserProfile, b: &UserProfile) -> DimensionScore {
    if a.values.is_empty() || b.values.is_empty() {
        return DimensionScore::neutral();
    }

    let mut terms = Vec::new();
    let mut evidence = Vec::new();

    for (key, rating_a) in a.values.iter() {
        let Some(rating_b) = b.values.get(key) else {
            continue;
        };
        let (Some(va), Some(vb)) = (rating_a.parse_numeric(), rating_b.parse_numeric()) else {
            continue;
        };

        let similarity = 1.0 - (va - vb).abs() / RATING_SCALE;
        terms.push(similarity.max(0.0));
        if similarity > ALIGNED_SIMILARITY {
            evidence.push(format!("Aligned on {}", readable_value_key(key)));
        }
    }

    if terms.is_empty() {
        return DimensionScore::neutral();
    }

    evidence.truncate(MAX_VALUES_EVIDENCE);
    DimensionScore::from_terms(&terms, evidence)
}
