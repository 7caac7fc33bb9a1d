use super::model::{Catalog, Product, SourceType, Track};

fn hat(id: u64, name: &str, description: &str, image: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        price: 49.99,
        image_url: Some(image.to_string()),
        category: Some("Clothing".to_string()),
        stock: 25,
    }
}

fn soundcloud(id: u64, title: &str, artist: &str, url: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        cover_url: Some("featured-track.jpg".to_string()),
        audio_url: Some(url.to_string()),
        source: SourceType::SoundCloud,
        featured: false,
        is_release: false,
    }
}

impl Catalog {
    /// The label's seed catalog, used when the shop is not queried.
    pub fn sample() -> Self {
        let products = vec![
            hat(
                1,
                "Delus Trucker Hat",
                "Essential Delus trucker",
                "images/collection/item1.jpg",
            ),
            hat(
                2,
                "Delus Trucker II",
                "Second Edition Delus trucker",
                "images/collection/item2.jpg",
            ),
        ];

        let tracks = vec![
            Track {
                featured: true,
                ..soundcloud(
                    1,
                    "Games (Remastered)",
                    "German Brigante",
                    "https://soundcloud.com/german-brigante/german-brigante-games-pura",
                )
            },
            soundcloud(
                2,
                "Kettenkarussell - Maybe",
                "Da Brøski",
                "https://api.soundcloud.com/tracks/470610045",
            ),
            soundcloud(
                3,
                "Delus Feature: Traxler",
                "Traxler",
                "https://api.soundcloud.com/tracks/1825112544",
            ),
            Track {
                is_release: true,
                ..soundcloud(
                    4,
                    "Delus Feature: Traxler",
                    "Traxler",
                    "https://api.soundcloud.com/tracks/1825112544",
                )
            },
        ];

        Self { products, tracks }
    }
}
