//! Tile client error handling without a real tile server.

use campus_map::{MapError, TileClient, TileId, TileSource};

#[test]
fn client_builds_with_default_source() {
    let client = TileClient::new(TileSource::default()).expect("client");
    let tile = TileId::new(0, 0, 0).expect("tile");
    assert!(client.source().url_for(tile).contains("openstreetmap"));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Port 9 (discard) is closed on test machines, so the connect fails fast.
    let source = TileSource::new("http://127.0.0.1:9/{z}/{x}/{y}.png", Vec::new());
    let client = TileClient::new(source).expect("client");
    let tile = TileId::new(0, 0, 0).expect("tile");

    let err = client.fetch(tile).await.expect_err("fetch should fail");
    assert!(matches!(err, MapError::Network(_)), "got {err:?}");
}
