//! Graph adapter tests against a mock HTTP server.

use std::sync::Arc;

use clientele::{
    ClientCache, ClientFactory, GraphApiError, GraphClientFactory, GraphFactoryConfig, ScopeSet,
    StaticIdentityResolver, StaticTokenProvider,
};

fn factory_for(server_url: String) -> GraphClientFactory {
    let config = GraphFactoryConfig {
        base_url: server_url,
        timeout_secs: 5,
        scopes: ScopeSet::default(),
    };
    GraphClientFactory::with_config(config, Arc::new(StaticTokenProvider::new("dev-token")))
        .expect("factory should build")
}

#[tokio::test]
async fn get_json_sends_bearer_token_and_parses_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/me")
        .match_header("authorization", "Bearer dev-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"displayName":"Alice","mail":"alice@example.test"}"#)
        .create_async()
        .await;

    let factory = factory_for(server.url());
    let provisioned = factory.build("alice").await.unwrap();

    let value = provisioned.client.get_json("me").await.unwrap();
    assert_eq!(value["displayName"], "Alice");
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_response_maps_to_typed_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/me")
        .with_status(401)
        .with_body("token expired")
        .create_async()
        .await;

    let factory = factory_for(server.url());
    let provisioned = factory.build("alice").await.unwrap();

    let err = provisioned.client.get_json("me").await.unwrap_err();
    assert!(matches!(err, GraphApiError::Unauthorized));
    assert!(err.is_permanent());
}

#[tokio::test]
async fn throttled_response_is_transient() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users")
        .with_status(429)
        .create_async()
        .await;

    let factory = factory_for(server.url());
    let provisioned = factory.build("alice").await.unwrap();

    let err = provisioned.client.get_json("users").await.unwrap_err();
    assert!(matches!(err, GraphApiError::Throttled));
    assert!(err.is_transient());
}

#[tokio::test]
async fn cache_reuses_one_provisioned_graph_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"displayName":"Reporting Service"}"#)
        .expect(2)
        .create_async()
        .await;

    let resolver = Arc::new(StaticIdentityResolver::new("svc-reporting"));
    let factory = Arc::new(factory_for(server.url()));
    let cache = ClientCache::new(resolver, factory);

    // Two uses within the TTL share one provisioned client; both still issue
    // their own HTTP request.
    for _ in 0..2 {
        let value = cache
            .use_client(|client| async move { client.get_json("me").await })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(value["displayName"], "Reporting Service");
    }

    mock.assert_async().await;
    assert_eq!(cache.entry_count().await, 1);

    cache.shutdown().await;
    assert_eq!(cache.entry_count().await, 0);
}
