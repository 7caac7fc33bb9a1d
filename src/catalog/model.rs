//! Catalog entities: tracks and merchandise.

/// Where a track's audio lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceType {
    SoundCloud,
    Local,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub cover_url: Option<String>,
    pub audio_url: Option<String>,
    pub source: SourceType,
    pub featured: bool,
    pub is_release: bool,
}

impl Track {
    /// `Artist - Title`, or just the title when the artist is blank.
    pub fn display(&self) -> String {
        let artist = self.artist.trim();
        if artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", artist, self.title)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: u32,
}

impl Product {
    /// Price formatted the way the shop prints it, e.g. `$49.99`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Everything the page can show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub tracks: Vec<Track>,
}

impl Catalog {
    /// How many products the home page lists.
    pub const FEATURED_PRODUCTS: usize = 4;

    /// Index of the first track flagged as featured.
    pub fn featured_index(&self) -> Option<usize> {
        self.tracks.iter().position(|t| t.featured)
    }

    pub fn featured_track(&self) -> Option<&Track> {
        self.featured_index().map(|i| &self.tracks[i])
    }

    /// Released tracks with their index into `tracks`.
    pub fn releases(&self) -> impl Iterator<Item = (usize, &Track)> {
        self.tracks.iter().enumerate().filter(|(_, t)| t.is_release)
    }

    /// Tracks that are neither the featured track nor a release.
    pub fn playlist(&self) -> impl Iterator<Item = (usize, &Track)> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.featured && !t.is_release)
    }

    pub fn featured_products(&self) -> &[Product] {
        let n = self.products.len().min(Self::FEATURED_PRODUCTS);
        &self.products[..n]
    }
}
