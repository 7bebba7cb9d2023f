//! Viewport behaviour over the campus locations.

use campus_map::{DEFAULT_ZOOM, MapViewport, TileCache, TileId, TileSource, external_maps_url};
use campus_model::{LOCATIONS, location_by_id};

fn campus_viewport() -> MapViewport {
    let mut viewport = MapViewport::new(LOCATIONS[0].point(), DEFAULT_ZOOM).expect("valid zoom");
    viewport.resize(640.0, 400.0);
    viewport
}

#[test]
fn recentering_on_library_moves_center_and_link() {
    let mut viewport = campus_viewport();
    let lib = location_by_id("lib").expect("library");

    assert!(viewport.recenter(lib.point()));
    assert_eq!(viewport.center().latitude, lib.latitude);
    assert_eq!(viewport.center().longitude, lib.longitude);

    let url = external_maps_url(viewport.center());
    assert!(url.ends_with("query=17.545853792704165,78.57150321231636"));
}

#[test]
fn marker_of_selected_location_sits_in_the_middle() {
    let mut viewport = campus_viewport();
    for record in LOCATIONS {
        viewport.recenter(record.point());
        let marker = viewport.project(record.point());
        assert!((marker.x - 320.0).abs() < 0.01, "{}", record.id);
        assert!((marker.y - 200.0).abs() < 0.01, "{}", record.id);
    }
}

#[test]
fn visible_tiles_contain_the_center_tile() {
    let viewport = campus_viewport();
    let center = TileId::containing(viewport.center(), DEFAULT_ZOOM).expect("center tile");
    assert!(
        viewport
            .visible_tiles()
            .iter()
            .any(|placed| placed.tile == center)
    );
}

#[test]
fn recentering_reuses_cached_tiles() {
    let mut viewport = campus_viewport();
    let mut cache: TileCache<()> = TileCache::default();

    let first: usize = viewport
        .visible_tiles()
        .iter()
        .filter(|placed| cache.request(placed.tile))
        .count();
    assert!(first > 0);

    // Mess 1 is a couple of hundred meters away; most tiles overlap.
    viewport.recenter(location_by_id("mess1").expect("mess1").point());
    let second: usize = viewport
        .visible_tiles()
        .iter()
        .filter(|placed| cache.request(placed.tile))
        .count();
    assert!(second < first);
}

#[test]
fn tile_urls_stay_on_one_host_per_tile() {
    let source = TileSource::openstreetmap();
    for placed in campus_viewport().visible_tiles() {
        let url = source.url_for(placed.tile);
        assert!(url.starts_with("https://"));
        assert!(url.ends_with(&format!("/{}/{}/{}.png", placed.tile.zoom, placed.tile.x, placed.tile.y)));
        assert_eq!(url, source.url_for(placed.tile));
    }
}
