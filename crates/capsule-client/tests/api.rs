//! Client SDK tests against a mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use capsule_client::{CapsuleClient, ClientError};
use capsule_core::{CharacterId, ItemId};

#[tokio::test]
async fn list_characters_decodes_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "name": "Bria Reign",
                "traits": ["Chronically online", "Sassy", "Culturally fluent"],
                "avatar": "/images/bria.jpeg",
                "bio": "bio",
                "borderColor": "primary"
            }
        ])))
        .mount(&server)
        .await;

    let client = CapsuleClient::new(server.uri());
    let characters = client.list_characters().await.unwrap();

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, CharacterId::from_i64(1));
    assert_eq!(characters[0].name, "Bria Reign");
    assert_eq!(characters[0].border_color, "primary");
}

#[tokio::test]
async fn get_item_decodes_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 11,
            "characterId": 2,
            "title": "Vision Pro Unboxing",
            "description": "d",
            "significance": "s",
            "category": "Technology",
            "resource": "Complete teardown with technical specifications"
        })))
        .mount(&server)
        .await;

    let client = CapsuleClient::new(server.uri());
    let item = client.get_item(ItemId::from_i64(11)).await.unwrap();

    assert_eq!(item.character_id, CharacterId::from_i64(2));
    assert_eq!(item.title, "Vision Pro Unboxing");
}

#[tokio::test]
async fn missing_character_surfaces_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/characters/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "code": "not_found",
                "message": "Character not found: 9999"
            }
        })))
        .mount(&server)
        .await;

    let client = CapsuleClient::new(server.uri());
    let err = client
        .get_character(CharacterId::from_i64(9999))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn items_for_unknown_character_is_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/characters/9999/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = CapsuleClient::new(server.uri());
    let items = client
        .items_for_character(CharacterId::from_i64(9999))
        .await
        .unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn non_envelope_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = CapsuleClient::new(server.uri());
    let err = client.list_items().await.unwrap_err();

    match err {
        ClientError::Api { code, status, .. } => {
            assert_eq!(code, "unknown");
            assert_eq!(status, 500);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn health_decodes_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "service": "capsule",
            "version": "0.1.0"
        })))
        .mount(&server)
        .await;

    let client = CapsuleClient::new(server.uri());
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "capsule");
}
