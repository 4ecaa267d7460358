//! Integration tests for cursor pagination against a mock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use twitter_ads::resource::{FieldBag, Resource, ResourceEndpoints};
use twitter_ads::{AccessToken, Account, AccountId, AdsClient, AdsConfig};

#[derive(Debug, Clone, Default)]
struct LineItem {
    fields: FieldBag,
}

impl Resource for LineItem {
    const NAME: &'static str = "line_item";
    const ENDPOINTS: ResourceEndpoints = ResourceEndpoints::new(
        "accounts/{account_id}/line_items",
        "accounts/{account_id}/line_items/{id}",
    );
    const PROPERTIES: &'static [&'static str] = &["name", "campaign_id", "paused"];

    fn fields(&self) -> &FieldBag {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FieldBag {
        &mut self.fields
    }
}

async fn test_account(server: &MockServer) -> Account {
    let config = AdsConfig::builder()
        .access_token(AccessToken::new("test-bearer-token").unwrap())
        .host(server.uri())
        .build()
        .unwrap();
    Account::new(
        AdsClient::new(&config),
        AccountId::new("18ce54d4x5t").unwrap(),
    )
}

const COLLECTION: &str = "/12/accounts/18ce54d4x5t/line_items";

#[tokio::test]
async fn all_returns_the_first_page_with_pagination_state() {
    let server = MockServer::start().await;
    let account = test_account(&server).await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-1"}, {"id": "li-2"}],
            "next_cursor": "c-page2",
            "total_count": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cursor = LineItem::all(&account, None).await.unwrap();

    assert_eq!(cursor.items().len(), 2);
    assert_eq!(cursor.next_cursor(), Some("c-page2"));
    assert_eq!(cursor.total_count(), Some(3));
    assert!(!cursor.is_exhausted());
}

#[tokio::test]
async fn next_page_follows_the_cursor_token() {
    let server = MockServer::start().await;
    let account = test_account(&server).await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("cursor", "c-page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-3"}],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-1"}, {"id": "li-2"}],
            "next_cursor": "c-page2"
        })))
        .mount(&server)
        .await;

    let mut cursor = LineItem::all(&account, None).await.unwrap();

    let page = cursor.next_page(&account).await.unwrap().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id(), Some("li-3"));
    assert!(cursor.is_exhausted());

    // Exhausted cursors yield no further pages without a request
    assert!(cursor.next_page(&account).await.unwrap().is_none());
}

#[tokio::test]
async fn next_page_replays_the_original_filters() {
    let server = MockServer::start().await;
    let account = test_account(&server).await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("campaign_ids", "8yn7m"))
        .and(query_param("cursor", "c-page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-3"}],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("campaign_ids", "8yn7m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-1"}],
            "next_cursor": "c-page2"
        })))
        .mount(&server)
        .await;

    let mut params = std::collections::HashMap::new();
    params.insert("campaign_ids".to_string(), "8yn7m".to_string());

    let mut cursor = LineItem::all(&account, Some(params)).await.unwrap();
    let page = cursor.next_page(&account).await.unwrap().unwrap();

    assert_eq!(page[0].id(), Some("li-3"));
}

#[tokio::test]
async fn collect_all_walks_every_page() {
    let server = MockServer::start().await;
    let account = test_account(&server).await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("cursor", "c-page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-3"}, {"id": "li-4"}],
            "next_cursor": "c-page3"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("cursor", "c-page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-5"}],
            "next_cursor": null
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-1"}, {"id": "li-2"}],
            "next_cursor": "c-page2"
        })))
        .mount(&server)
        .await;

    let cursor = LineItem::all(&account, None).await.unwrap();
    let items = cursor.collect_all(&account).await.unwrap();

    let ids: Vec<_> = items.iter().filter_map(LineItem::id).collect();
    assert_eq!(ids, ["li-1", "li-2", "li-3", "li-4", "li-5"]);
}

#[tokio::test]
async fn failed_page_fetch_keeps_the_cursor_token() {
    let server = MockServer::start().await;
    let account = test_account(&server).await;

    // The first fetch of page two fails; the retry succeeds
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("cursor", "c-page2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"code": "SERVICE_UNAVAILABLE", "message": "over capacity"}]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("cursor", "c-page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-3"}],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "li-1"}, {"id": "li-2"}],
            "next_cursor": "c-page2"
        })))
        .mount(&server)
        .await;

    let mut cursor = LineItem::all(&account, None).await.unwrap();

    cursor.next_page(&account).await.unwrap_err();

    // The token and current page survive the failure
    assert!(!cursor.is_exhausted());
    assert_eq!(cursor.next_cursor(), Some("c-page2"));
    assert_eq!(cursor.items().len(), 2);

    let page = cursor.next_page(&account).await.unwrap().unwrap();
    assert_eq!(page[0].id(), Some("li-3"));
    assert!(cursor.is_exhausted());
}

#[tokio::test]
async fn empty_collection_is_an_exhausted_cursor() {
    let server = MockServer::start().await;
    let account = test_account(&server).await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "next_cursor": null
        })))
        .mount(&server)
        .await;

    let cursor = LineItem::all(&account, None).await.unwrap();
    assert!(cursor.items().is_empty());
    assert!(cursor.is_exhausted());

    let items = cursor.collect_all(&account).await.unwrap();
    assert!(items.is_empty());
}
