//! Reference profiles shared by the unit tests.

use crate::profile::{AttachmentStyle, UserProfile, ValueRatings};

fn values(entries: &[(&str, f64)]) -> ValueRatings {
    entries.iter().map(|(k, v)| (*k, *v)).collect()
}

/// New York, secure, outgoing-ish, wants kids.
pub fn profile_a() -> UserProfile {
    UserProfile {
        user_id: 1,
        uuid: "uuid-a".into(),
        age: 28,
        gender: "female".into(),
        location_lat: 40.7128,
        location_lon: -74.0060,
        openness: 80.0,
        conscientiousness: 70.0,
        extraversion: 60.0,
        agreeableness: 75.0,
        neuroticism: 30.0,
        attachment_style: AttachmentStyle::Secure,
        interests: vec![1, 5, 10, 15, 20],
        values: values(&[
            ("career_importance", 7.0),
            ("family_importance", 8.0),
            ("adventure_importance", 9.0),
            ("stability_importance", 6.0),
        ]),
        wants_kids: Some(true),
        drinks: Some(1),
        smokes: Some(0),
        preferred_age_min: 25,
        preferred_age_max: 35,
        preferred_gender: vec!["male".into()],
        max_distance_km: 50,
        reputation_score: 85.0,
        is_video_verified: true,
        ..UserProfile::default()
    }
}

/// Two kilometres from A and close to her on almost everything.
pub fn profile_b() -> UserProfile {
    UserProfile {
        user_id: 2,
        uuid: "uuid-b".into(),
        age: 30,
        gender: "male".into(),
        location_lat: 40.7300,
        location_lon: -74.0100,
        openness: 75.0,
        conscientiousness: 65.0,
        extraversion: 55.0,
        agreeableness: 70.0,
        neuroticism: 35.0,
        attachment_style: AttachmentStyle::Secure,
        interests: vec![1, 5, 12, 15, 25],
        values: values(&[
            ("career_importance", 8.0),
            ("family_importance", 7.0),
            ("adventure_importance", 8.0),
            ("stability_importance", 7.0),
        ]),
        wants_kids: Some(true),
        drinks: Some(1),
        smokes: Some(0),
        preferred_age_min: 24,
        preferred_age_max: 34,
        preferred_gender: vec!["female".into()],
        max_distance_km: 50,
        reputation_score: 80.0,
        is_video_verified: true,
        ..UserProfile::default()
    }
}

/// Los Angeles, avoidant, contrasting on every axis.
pub fn profile_c() -> UserProfile {
    UserProfile {
        user_id: 3,
        uuid: "uuid-c".into(),
        age: 45,
        gender: "male".into(),
        location_lat: 34.0522,
        location_lon: -118.2437,
        openness: 30.0,
        conscientiousness: 40.0,
        extraversion: 20.0,
        agreeableness: 40.0,
        neuroticism: 70.0,
        attachment_style: AttachmentStyle::Avoidant,
        interests: vec![50, 51, 52],
        values: values(&[
            ("career_importance", 3.0),
            ("family_importance", 2.0),
            ("adventure_importance", 2.0),
        ]),
        wants_kids: Some(false),
        has_kids: true,
        drinks: Some(3),
        smokes: Some(2),
        religion: Some(1),
        preferred_age_min: 35,
        preferred_age_max: 50,
        preferred_gender: vec!["female".into()],
        max_distance_km: 25,
        reputation_score: 45.0,
        is_video_verified: false,
        ..UserProfile::default()
    }
}
