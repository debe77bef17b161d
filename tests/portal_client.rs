//! HTTP-level tests for `PortalClient`.
//!
//! Uses wiremock to verify request shape, pagination behavior, and error
//! mapping against a local mock portal.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portal_sweep::portal::{PortalApi, PortalClient};
use portal_sweep::{Error, PortalSession};

fn client_for(server: &MockServer, page_size: u32) -> PortalClient {
    let session = PortalSession {
        base_url: server.uri(),
        token: "test-token".to_string(),
    };
    PortalClient::new(&session, page_size).unwrap()
}

fn member_json(username: &str, created: i64) -> serde_json::Value {
    json!({
        "username": username,
        "email": format!("{}@example.com", username),
        "categories": ["/Categories/1-year Researcher"],
        "created": created,
    })
}

#[tokio::test]
async fn search_members_follows_pagination_to_exhaustion() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community/users"))
        .and(query_param("q", "/Categories/1-year Researcher"))
        .and(query_param("start", "1"))
        .and(query_param("num", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "nextStart": 3,
            "results": [member_json("alice", 1), member_json("bob", 2)],
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/community/users"))
        .and(query_param("start", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "nextStart": -1,
            "results": [member_json("carol", 3)],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let members = client
        .search_members("/Categories/1-year Researcher")
        .await
        .unwrap();

    assert_eq!(members.len(), 3);
    assert_eq!(members[2].username, "carol");
}

#[tokio::test]
async fn list_items_paginates_and_defaults_missing_tags() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/users/alice"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "nextStart": 2,
            "items": [{"id": "i1", "title": "Survey", "owner": "alice"}],
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/content/users/alice"))
        .and(query_param("start", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "nextStart": -1,
            "items": [{"id": "i2", "title": "Map", "owner": "alice", "tags": ["gis"]}],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let items = client.list_items("alice").await.unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[0].tags.is_empty());
    assert_eq!(items[1].tags, vec!["gis".to_string()]);
}

#[tokio::test]
async fn get_member_maps_404_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community/users/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    assert!(client.get_member("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn get_member_returns_member_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(member_json("alice", 42)))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let member = client.get_member("alice").await.unwrap().unwrap();
    assert_eq!(member.username, "alice");
    assert_eq!(member.created, Some(42));
}

#[tokio::test]
async fn reassign_item_posts_target_username() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/users/alice/items/i1/reassign"))
        .and(body_json(json!({"targetUsername": "holding"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    client.reassign_item("alice", "i1", "holding").await.unwrap();
}

#[tokio::test]
async fn update_item_tags_posts_full_tag_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/users/alice/items/i1/update"))
        .and(body_json(json!({"tags": ["gis", "alice@example.com"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let tags = vec!["gis".to_string(), "alice@example.com".to_string()];
    client.update_item_tags("alice", "i1", &tags).await.unwrap();
}

#[tokio::test]
async fn delete_member_posts_to_delete_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/community/users/alice/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    client.delete_member("alice").await.unwrap();
}

#[tokio::test]
async fn non_success_status_surfaces_as_portal_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("token expired"))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let err = client.search_members("anything").await.unwrap_err();

    match err {
        Error::Portal(msg) => {
            assert!(msg.contains("403"));
            assert!(msg.contains("token expired"));
        }
        other => panic!("expected Portal error, got {:?}", other),
    }
}
