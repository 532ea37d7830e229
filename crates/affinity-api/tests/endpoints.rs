use affinity_api::{CacheBackend, SharedState, create_router, test_state, test_state_with};
use axum::{body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn profile_a() -> Value {
    json!({
        "user_id": 1,
        "uuid": "uuid-a",
        "age": 28,
        "gender": "female",
        "location_lat": 40.7128,
        "location_lon": -74.0060,
        "openness": 80.0,
        "conscientiousness": 70.0,
        "extraversion": 60.0,
        "agreeableness": 75.0,
        "neuroticism": 30.0,
        "attachment_style": "SECURE",
        "interests": [1, 5, 10, 15, 20],
        "values": {
            "career_importance": 7,
            "family_importance": 8,
            "adventure_importance": 9,
            "stability_importance": 6
        },
        "wants_kids": true,
        "drinks": 1,
        "smokes": 0,
        "preferred_age_min": 25,
        "preferred_age_max": 35,
        "preferred_gender": ["male"],
        "max_distance_km": 50,
        "reputation_score": 85.0,
        "is_video_verified": true
    })
}

fn profile_b() -> Value {
    json!({
        "user_id": 2,
        "uuid": "uuid-b",
        "age": 30,
        "gender": "male",
        "location_lat": 40.7300,
        "location_lon": -74.0100,
        "openness": 75.0,
        "conscientiousness": 65.0,
        "extraversion": 55.0,
        "agreeableness": 70.0,
        "neuroticism": 35.0,
        "attachment_style": "SECURE",
        "interests": [1, 5, 12, 15, 25],
        "values": {
            "career_importance": 8,
            "family_importance": 7,
            "adventure_importance": 8,
            "stability_importance": 7
        },
        "wants_kids": true,
        "drinks": 1,
        "smokes": 0,
        "preferred_age_min": 24,
        "preferred_age_max": 34,
        "preferred_gender": ["female"],
        "max_distance_km": 50,
        "reputation_score": 80.0,
        "is_video_verified": true
    })
}

fn profile_c() -> Value {
    json!({
        "user_id": 3,
        "uuid": "uuid-c",
        "age": 45,
        "gender": "male",
        "location_lat": 34.0522,
        "location_lon": -118.2437,
        "openness": 30.0,
        "conscientiousness": 40.0,
        "extraversion": 20.0,
        "agreeableness": 40.0,
        "neuroticism": 70.0,
        "attachment_style": "AVOIDANT",
        "interests": [50, 51, 52],
        "values": {
            "career_importance": 3,
            "family_importance": 2,
            "adventure_importance": 2
        },
        "wants_kids": false,
        "has_kids": true,
        "drinks": 3,
        "smokes": 2,
        "religion": 1,
        "preferred_age_min": 35,
        "preferred_age_max": 50,
        "preferred_gender": ["female"],
        "max_distance_km": 25,
        "reputation_score": 45.0,
        "is_video_verified": false
    })
}

fn with_id(mut profile: Value, user_id: i64) -> Value {
    profile["user_id"] = json!(user_id);
    profile["uuid"] = json!(format!("uuid-{user_id}"));
    profile
}

async fn send(
    state: SharedState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn compatibility_for_a_close_pair() {
    let (status, body) = send(
        test_state(),
        "POST",
        "/api/compatibility",
        Some(json!({ "user_a": profile_a(), "user_b": profile_b() })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_score"], 90.1);
    assert_eq!(body["personality_score"], 89.6);
    assert!(
        body["explanation"]
            .as_str()
            .unwrap()
            .starts_with("Exceptional compatibility!")
    );
    let tops = body["top_compatibilities"].as_array().unwrap();
    assert!(!tops.is_empty() && tops.len() <= 5);
}

#[tokio::test]
async fn compatibility_rejects_out_of_range_traits() {
    let mut user_b = profile_b();
    user_b["openness"] = json!(140.0);

    let (status, body) = send(
        test_state(),
        "POST",
        "/api/compatibility",
        Some(json!({ "user_a": profile_a(), "user_b": user_b })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn embeddings_reject_ratings_off_the_scale() {
    let mut profile = profile_a();
    profile["values"]["career_importance"] = json!(1e39);

    let (status, body) = send(test_state(), "POST", "/api/embeddings", Some(profile)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn recommend_orders_excludes_and_limits() {
    let mut broken = with_id(profile_b(), 5);
    broken["reputation_score"] = json!(-10.0);

    let request = json!({
        "user": profile_a(),
        "candidates": [profile_c(), profile_b(), with_id(profile_b(), 4), broken],
        "excluded_user_ids": [4],
    });

    let (status, body) = send(
        test_state(),
        "POST",
        "/api/matches/recommend",
        Some(request.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let recs = body.as_array().unwrap();
    let ids: Vec<i64> = recs.iter().map(|r| r["user_id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(recs[0]["compatibility_score"], 90.1);
    assert!(recs[0]["match_reasons"].as_array().unwrap().len() <= 3);
    assert!(!recs[0]["conversation_starters"].as_array().unwrap().is_empty());

    let mut limited = request.clone();
    limited["limit"] = json!(1);
    let (_, body) = send(test_state(), "POST", "/api/matches/recommend", Some(limited)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let mut none = request;
    none["limit"] = json!(0);
    let (status, body) = send(test_state(), "POST", "/api/matches/recommend", Some(none)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn conversation_starters_are_capped() {
    let (status, body) = send(
        test_state(),
        "POST",
        "/api/conversation-starters",
        Some(json!({ "user_a": profile_a(), "user_b": profile_b(), "compatibility_score": 90.1 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let starters = body["starters"].as_array().unwrap();
    assert!(!starters.is_empty() && starters.len() <= 5);
}

#[tokio::test]
async fn embeddings_generate_fetch_and_rank() {
    let state = test_state();

    let (status, body) = send(state.clone(), "POST", "/api/embeddings", Some(profile_a())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "user_id": 1, "embedding_dim": 128, "cached": true }));

    for profile in [profile_b(), profile_c()] {
        let (status, _) = send(state.clone(), "POST", "/api/embeddings", Some(profile)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(state.clone(), "GET", "/api/embeddings/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["embedding"].as_array().unwrap().len(), 128);

    let (status, body) = send(state.clone(), "GET", "/api/embeddings/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");

    let (status, body) = send(
        state,
        "POST",
        "/api/similar-users",
        Some(json!({ "user_id": 1, "candidate_ids": [3, 2, 42] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let similar = body["similar_users"].as_array().unwrap();
    let ids: Vec<i64> = similar.iter().map(|s| s["user_id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn embeddings_without_cache() {
    let state = test_state_with(CacheBackend::Disabled);

    let (status, body) = send(state.clone(), "POST", "/api/embeddings", Some(profile_a())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached"], false);

    let (status, body) = send(state.clone(), "GET", "/api/embeddings/1", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "service_unavailable");

    let (status, _) = send(
        state,
        "POST",
        "/api/similar-users",
        Some(json!({ "user_id": 1, "candidate_ids": [2] })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
