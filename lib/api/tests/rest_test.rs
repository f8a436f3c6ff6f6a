// HTTP-level tests for the RankX REST API
use actix_web::http::StatusCode;
use actix_web::{test, App};
use rankx_api::RestApi;
use rankx_core::{EngineConfig, ItemAttributes, RankingEngine};
use serde_json::{json, Value};
use std::sync::Arc;

fn seeded_engine(names: &[(&str, &str)]) -> Arc<RankingEngine> {
    let engine = RankingEngine::in_memory(EngineConfig::default()).unwrap();
    engine
        .seed(names.iter().map(|(name, category)| ItemAttributes::new(*name, *category)))
        .unwrap();
    Arc::new(engine)
}

fn sites() -> Arc<RankingEngine> {
    seeded_engine(&[
        ("Taj Mahal", "CULTURAL"),
        ("Kaziranga National Park", "NATURAL"),
        ("Khangchendzonga National Park", "MIXED"),
    ])
}

#[actix_web::test]
async fn test_list_items_ordered_by_rank() {
    let engine = sites();
    engine.record_vote(3, 1).unwrap();
    let app = test::init_service(App::new().configure(RestApi::configure(engine))).await;

    let req = test::TestRequest::get().uri("/api/items").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], 3);
    assert_eq!(items[0]["rank"], 1);
    assert_eq!(items[2]["id"], 1);
    assert_eq!(items[2]["rank"], 3);
}

#[actix_web::test]
async fn test_get_item() {
    let app = test::init_service(App::new().configure(RestApi::configure(sites()))).await;

    let req = test::TestRequest::get().uri("/api/items/2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Kaziranga National Park");
    assert_eq!(body["rating"], 1500);

    let req = test::TestRequest::get().uri("/api/items/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/items/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
}

#[actix_web::test]
async fn test_list_by_category() {
    let app = test::init_service(App::new().configure(RestApi::configure(sites()))).await;

    let req = test::TestRequest::get().uri("/api/items/category/natural").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Kaziranga National Park");
}

#[actix_web::test]
async fn test_random_matchup() {
    let app = test::init_service(App::new().configure(RestApi::configure(sites()))).await;

    let req = test::TestRequest::get().uri("/api/matchups/random").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_ne!(body["left_item"]["id"], body["right_item"]["id"]);
    assert!(body["matchup_id"].as_u64().unwrap() >= 1);
}

#[actix_web::test]
async fn test_random_matchup_insufficient_items() {
    let engine = seeded_engine(&[("Hampi", "CULTURAL")]);
    let app = test::init_service(App::new().configure(RestApi::configure(engine))).await;

    let req = test::TestRequest::get().uri("/api/matchups/random").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "insufficient_items");
}

#[actix_web::test]
async fn test_record_vote() {
    let engine = sites();
    let app = test::init_service(App::new().configure(RestApi::configure(engine.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/votes")
        .set_json(json!({ "winner_id": 1, "loser_id": 2 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["vote"]["winner_id"], 1);
    assert_eq!(body["vote"]["winner_prev_rating"], 1500);
    assert_eq!(body["vote"]["winner_new_rating"], 1516);
    assert_eq!(body["vote"]["loser_new_rating"], 1484);
    assert_ne!(body["new_matchup"]["left_item"]["id"], body["new_matchup"]["right_item"]["id"]);
    assert_eq!(engine.total_vote_count(), 1);
}

#[actix_web::test]
async fn test_record_vote_rejections() {
    let engine = sites();
    let app = test::init_service(App::new().configure(RestApi::configure(engine.clone()))).await;

    let cases = [
        (json!({ "winner_id": 2, "loser_id": 2 }), StatusCode::BAD_REQUEST, "invalid_vote"),
        (json!({ "winner_id": 1, "loser_id": 42 }), StatusCode::NOT_FOUND, "not_found"),
        (json!({ "winner_id": 0, "loser_id": 1 }), StatusCode::BAD_REQUEST, "invalid_input"),
        (json!({ "winner_id": "one", "loser_id": 2 }), StatusCode::BAD_REQUEST, "invalid_input"),
        (json!({ "winner_id": 1 }), StatusCode::BAD_REQUEST, "invalid_input"),
    ];

    for (payload, status, kind) in cases {
        let req = test::TestRequest::post().uri("/api/votes").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], kind);
    }

    assert_eq!(engine.total_vote_count(), 0);
}

#[actix_web::test]
async fn test_recent_votes_annotated() {
    let engine = sites();
    for _ in 0..12 {
        engine.record_vote(2, 3).unwrap();
    }
    let app = test::init_service(App::new().configure(RestApi::configure(engine))).await;

    let req = test::TestRequest::get().uri("/api/votes/recent?limit=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let votes = body.as_array().unwrap();
    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0]["id"], 12);
    assert_eq!(votes[0]["winner_name"], "Kaziranga National Park");
    assert_eq!(votes[0]["loser_name"], "Khangchendzonga National Park");

    let req = test::TestRequest::get().uri("/api/votes/recent").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 10);

    let req = test::TestRequest::get().uri("/api/votes/recent?limit=-5").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 10);

    let req = test::TestRequest::get().uri("/api/votes/recent?limit=many").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_stats() {
    let engine = sites();
    engine.record_vote(1, 3).unwrap();
    engine.record_vote(2, 3).unwrap();
    let app = test::init_service(App::new().configure(RestApi::configure(engine))).await;

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "total_votes": 2, "total_items": 3 }));
}
