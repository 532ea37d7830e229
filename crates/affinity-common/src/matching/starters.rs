use std::collections::HashSet;

use crate::profile::{UserProfile, ValueKey};

pub const MAX_STARTERS: usize = 5;

const FALLBACK_STARTERS: [&str; 3] = [
    "What's something that made you smile today?",
    "I'd love to hear the story behind your photos!",
    "What are you most passionate about right now?",
];

fn both_rate_above(a: &UserProfile, b: &UserProfile, key: ValueKey, threshold: f64) -> bool {
    let rating = |p: &UserProfile| p.values.numeric(key.as_str()).unwrap_or(0.0);
    rating(a) > threshold && rating(b) > threshold
}

/// Icebreakers for a pair, most specific first, topped up with generic
/// prompts. Pure: the same pair always gets the same list.
pub fn conversation_starters(a: &UserProfile, b: &UserProfile) -> Vec<String> {
    let mut starters: Vec<&str> = Vec::new();

    let interests_a: HashSet<i64> = a.interests.iter().copied().collect();
    if b.interests.iter().any(|id| interests_a.contains(id)) {
        starters.push("I noticed we share some hobbies! What got you into them?");
    }

    if a.openness > 70.0 && b.openness > 70.0 {
        starters.push("What's the most interesting thing you've learned recently?");
        starters.push("If you could travel anywhere tomorrow, where would you go?");
    }

    if a.extraversion > 60.0 && b.extraversion > 60.0 {
        starters.push("What's your ideal weekend look like?");
    } else if a.extraversion < 40.0 && b.extraversion < 40.0 {
        starters.push("What's your favorite way to unwind after a long day?");
    }

    if a.conscientiousness > 60.0 && b.conscientiousness > 60.0 {
        starters.push("What's something you're working toward right now?");
    }

    if both_rate_above(a, b, ValueKey::Career, 7.0) {
        starters.push("What do you love most about what you do?");
    }
    if both_rate_above(a, b, ValueKey::Adventure, 7.0) {
        starters.push("What's been your best adventure so far?");
    }

    for fallback in FALLBACK_STARTERS {
        if starters.len() >= MAX_STARTERS {
            break;
        }
        starters.push(fallback);
    }

    starters.truncate(MAX_STARTERS);
    starters.into_iter().map(str::to_string).collect()
}
