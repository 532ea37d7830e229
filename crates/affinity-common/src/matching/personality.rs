use super::scoring::DimensionScore;
use crate::profile::{AttachmentStyle, UserProfile};

const SIMILARITY_EVIDENCE_GAP: f64 = 0.2;
const LOW_NEUROTICISM_AVG: f64 = 40.0;
/// Extraversion scores best at this normalized gap, not at zero.
const IDEAL_EXTRAVERSION_GAP: f64 = 0.2;
const SOCIAL_ENERGY_GAP: f64 = 0.3;
const HEALTHY_ATTACHMENT: f64 = 0.7;
const NEUTRAL_ATTACHMENT: f64 = 0.5;

/// Symmetric affinity between two attachment styles. Pairs involving an
/// unrecognized style, or any pairing with DISORGANIZED, are neutral.
pub fn attachment_affinity(a: &AttachmentStyle, b: &AttachmentStyle) -> f64 {
    use AttachmentStyle::*;

    match (a, b) {
        (Secure, Secure) => 1.0,
        (Secure, Anxious) | (Anxious, Secure) => 0.7,
        (Secure, Avoidant) | (Avoidant, Secure) => 0.7,
        (Anxious, Avoidant) | (Avoidant, Anxious) => 0.3,
        (Anxious, Anxious) => 0.5,
        (Avoidant, Avoidant) => 0.4,
        _ => NEUTRAL_ATTACHMENT,
    }
}

fn trait_gap(a: f64, b: f64) -> f64 {
    (a - b).abs() / 100.0
}

/// Big Five + attachment compatibility: mean of six sub-terms.
pub fn score_personality(a: &UserProfile, b: &UserProfile) -> DimensionScore {
    let mut evidence = Vec::new();
    let mut terms = Vec::with_capacity(6);

    for (gap, label) in [
        (
            trait_gap(a.conscientiousness, b.conscientiousness),
            "Similar life organization styles",
        ),
        (
            trait_gap(a.agreeableness, b.agreeableness),
            "Compatible communication styles",
        ),
        (
            trait_gap(a.openness, b.openness),
            "Shared curiosity and creativity",
        ),
    ] {
        terms.push(1.0 - gap);
        if gap < SIMILARITY_EVIDENCE_GAP {
            evidence.push(label.to_string());
        }
    }

    let neuroticism_avg = (a.neuroticism + b.neuroticism) / 2.0;
    terms.push(1.0 - neuroticism_avg / 100.0);
    if neuroticism_avg < LOW_NEUROTICISM_AVG {
        evidence.push("Emotional stability".to_string());
    }

    let extraversion_gap = trait_gap(a.extraversion, b.extraversion);
    terms.push(1.0 - (extraversion_gap - IDEAL_EXTRAVERSION_GAP).abs());
    if extraversion_gap < SOCIAL_ENERGY_GAP {
        evidence.push("Compatible social energy".to_string());
    }

    let attachment = attachment_affinity(&a.attachment_style, &b.attachment_style);
    terms.push(attachment);
    if attachment >= HEALTHY_ATTACHMENT {
        evidence.push("Healthy attachment dynamics".to_string());
    }

    DimensionScore::from_terms(&terms, evidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{profile_a, profile_b, profile_c};

    #[test]
    fn attachment_table_is_symmetric() {
        let styles = [
            AttachmentStyle::Secure,
            AttachmentStyle::Anxious,
            AttachmentStyle::Avoidant,
            AttachmentStyle::Disorganized,
            AttachmentStyle::Unrecognized("FEARFUL".into()),
        ];
        for x in &styles {
            for y in &styles {
                assert_eq!(attachment_affinity(x, y), attachment_affinity(y, x));
            }
        }
        assert_eq!(
            attachment_affinity(&AttachmentStyle::Anxious, &AttachmentStyle::Avoidant),
            0.3
        );
        assert_eq!(
            attachment_affinity(&AttachmentStyle::Disorganized, &AttachmentStyle::Secure),
            0.5
        );
    }

    #[test]
    fn similar_profiles_collect_all_evidence() {
        let result = score_personality(&profile_a(), &profile_b());

        assert!((result.score - 0.8958).abs() < 1e-3, "got {}", result.score);
        assert_eq!(
            result.evidence,
            vec![
                "Similar life organization styles",
                "Compatible communication styles",
                "Shared curiosity and creativity",
                "Emotional stability",
                "Compatible social energy",
                "Healthy attachment dynamics",
            ]
        );
    }

    #[test]
    fn identical_reference_profile_scores_high() {
        let a = profile_a();
        let result = score_personality(&a, &a);

        assert!(result.score >= 0.9, "got {}", result.score);
    }

    #[test]
    fn extraversion_prefers_a_small_gap() {
        let a = profile_a();
        let mut same = profile_a();
        same.extraversion = a.extraversion;
        let mut offset = profile_a();
        offset.extraversion = a.extraversion - 20.0;

        assert!(score_personality(&a, &offset).score > score_personality(&a, &same).score);
    }

    #[test]
    fn contrasting_profiles_score_lower() {
        let result = score_personality(&profile_a(), &profile_c());

        assert!((result.score - 0.6417).abs() < 1e-3, "got {}", result.score);
        assert_eq!(result.evidence, vec!["Healthy attachment dynamics"]);
    }
}
