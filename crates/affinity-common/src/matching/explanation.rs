use super::scoring::CompatibilityBreakdown;

const STRONG_DIMENSION: f64 = 0.75;
const MAX_STRENGTHS: usize = 3;
const MAX_AWARENESS: usize = 2;

/// Intro sentence for the overall band (overall in 0..1).
pub fn intro_for(overall: f64) -> &'static str {
    if overall >= 0.85 {
        "Exceptional compatibility! You share remarkable alignment across key areas."
    } else if overall >= 0.75 {
        "Strong compatibility. You have solid foundation for a meaningful connection."
    } else if overall >= 0.65 {
        "Good compatibility. You share several important qualities."
    } else if overall >= 0.50 {
        "Moderate compatibility. You have some things in common, with room to grow."
    } else {
        "You have different perspectives which could be challenging but also enriching."
    }
}

/// Banded intro, then `. `-joined call-outs ending with a period.
/// With nothing to call out the intro stands alone.
pub fn compose_explanation(breakdown: &CompatibilityBreakdown, strengths: &[String]) -> String {
    let intro = intro_for(breakdown.overall);
    let mut details: Vec<String> = Vec::new();

    for (score, line) in [
        (
            breakdown.personality.score,
            "Your personalities complement each other well",
        ),
        (breakdown.values.score, "You share important life values"),
        (breakdown.lifestyle.score, "Your lifestyles are well-aligned"),
    ] {
        if score >= STRONG_DIMENSION {
            details.push(line.to_string());
        }
    }

    if !strengths.is_empty() {
        let named: Vec<&str> = strengths.iter().take(MAX_STRENGTHS).map(String::as_str).collect();
        details.push(format!("Key strengths: {}", named.join(", ")));
    }

    let challenges = &breakdown.growth.challenges;
    if !challenges.is_empty() {
        let named: Vec<&str> = challenges.iter().take(MAX_AWARENESS).map(String::as_str).collect();
        details.push(format!("Areas for awareness: {}", named.join(", ")));
    }

    if details.is_empty() {
        return intro.to_string();
    }
    format!("{intro} {}.", details.join(". "))
}
