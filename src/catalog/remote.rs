use crate::shop::{RemoteProduct, RemoteTrack, ShopClient, ShopError};

use super::model::{Catalog, Product, SourceType, Track};

impl From<RemoteProduct> for Product {
    fn from(p: RemoteProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: None,
            price: p.price,
            image_url: p.image,
            category: None,
            stock: 0,
        }
    }
}

impl From<RemoteTrack> for Track {
    fn from(t: RemoteTrack) -> Self {
        let source = match t.url.as_deref() {
            Some(url) if url.contains("soundcloud.com") => SourceType::SoundCloud,
            _ => SourceType::Local,
        };
        Self {
            id: t.id,
            title: t.title,
            artist: t.artist,
            cover_url: t.cover,
            audio_url: t.url,
            source,
            featured: false,
            is_release: false,
        }
    }
}

impl Catalog {
    /// Build a catalog from the shop's listing endpoints.
    ///
    /// The playlist endpoint does not say which track is featured or released,
    /// so every remote track lands in the playlist and the page has no
    /// featured player.
    pub fn from_remote(products: Vec<RemoteProduct>, playlist: Vec<RemoteTrack>) -> Self {
        Self {
            products: products.into_iter().map(Product::from).collect(),
            tracks: playlist.into_iter().map(Track::from).collect(),
        }
    }

    /// Fetch products and the playlist from the shop.
    pub fn fetch(client: &ShopClient) -> Result<Self, ShopError> {
        let products = client.products()?;
        let playlist = client.playlist()?;
        Ok(Self::from_remote(products, playlist))
    }
}
