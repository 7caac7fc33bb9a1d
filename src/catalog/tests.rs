use super::*;
use crate::shop::{RemoteProduct, RemoteTrack};

#[test]
fn sample_catalog_has_one_featured_track_and_one_release() {
    let c = Catalog::sample();
    assert_eq!(c.featured_track().unwrap().title, "Games (Remastered)");
    assert_eq!(c.releases().count(), 1);
    assert_eq!(c.playlist().count(), 2);
    assert_eq!(c.featured_products().len(), 2);
    assert!(c.products.iter().all(|p| p.price_label() == "$49.99"));
}

#[test]
fn featured_products_caps_at_four() {
    let mut c = Catalog::sample();
    let template = c.products[0].clone();
    for id in 3..=7 {
        c.products.push(Product { id, ..template.clone() });
    }
    assert_eq!(c.featured_products().len(), Catalog::FEATURED_PRODUCTS);
    assert_eq!(c.featured_products()[3].id, 4);
}

#[test]
fn display_joins_artist_and_title() {
    let c = Catalog::sample();
    assert_eq!(c.tracks[0].display(), "German Brigante - Games (Remastered)");

    let untitled = Track {
        artist: "  ".into(),
        ..c.tracks[0].clone()
    };
    assert_eq!(untitled.display(), "Games (Remastered)");
}

#[test]
fn remote_catalog_has_no_featured_track() {
    let products = vec![RemoteProduct {
        id: 9,
        name: "Tote".into(),
        price: 20.0,
        image: None,
    }];
    let playlist = vec![
        RemoteTrack {
            id: 1,
            title: "A".into(),
            artist: "X".into(),
            cover: None,
            url: Some("https://api.soundcloud.com/tracks/1".into()),
        },
        RemoteTrack {
            id: 2,
            title: "B".into(),
            artist: "Y".into(),
            cover: None,
            url: None,
        },
    ];

    let c = Catalog::from_remote(products, playlist);
    assert!(c.featured_track().is_none());
    assert_eq!(c.playlist().count(), 2);
    assert_eq!(c.tracks[0].source, SourceType::SoundCloud);
    assert_eq!(c.tracks[1].source, SourceType::Local);
    assert_eq!(c.products[0].price_label(), "$20.00");
}

#[test]
fn fetch_fails_when_the_shop_is_unreachable() {
    use crate::config::ShopSettings;
    use crate::shop::{ShopClient, ShopError};

    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = ShopClient::new(&ShopSettings {
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_ms: 1000,
        load_catalog: true,
    })
    .unwrap();

    assert!(matches!(Catalog::fetch(&client), Err(ShopError::Network(_))));
}
