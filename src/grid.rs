//! Poster Grid Model
//!
//! What gets rendered, independent of the DOM.

use crate::models::MediaItem;

// Class names styled by the dashboard's custom CSS
pub const GRID_CLASS: &str = "jellyfin-recent-grid";
pub const ITEM_CLASS: &str = "jellyfin-recent-item";
pub const POSTER_CLASS: &str = "jellyfin-recent-poster";
pub const BADGE_CLASS: &str = "jellyfin-recent-badge";

/// Selector matching an already rendered grid
pub const GRID_SELECTOR: &str = ".jellyfin-recent-grid";

#[derive(Debug, Clone, PartialEq)]
pub struct PosterTile {
    pub link: String,
    pub caption: String,
    pub poster: String,
    pub badge: &'static str,
}

impl From<&MediaItem> for PosterTile {
    fn from(item: &MediaItem) -> Self {
        Self {
            link: item.link.clone(),
            caption: item.caption(),
            poster: item.poster.clone(),
            badge: item.kind().badge(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PosterGrid {
    pub tiles: Vec<PosterTile>,
}

impl PosterGrid {
    pub fn from_items(items: &[MediaItem]) -> Self {
        Self {
            tiles: items.iter().map(PosterTile::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tiles_keep_order() {
        let items = vec![
            MediaItem {
                title: "Andor".into(),
                year: "2022".into(),
                link: "l1".into(),
                poster: "p1".into(),
                media_type: "TV".into(),
            },
            MediaItem {
                title: "Arrival".into(),
                year: "2016".into(),
                link: "l2".into(),
                poster: "p2".into(),
                media_type: "Movie".into(),
            },
        ];

        let grid = PosterGrid::from_items(&items);

        assert_eq!(
            grid.tiles,
            vec![
                PosterTile {
                    link: "l1".into(),
                    caption: "Andor (2022)".into(),
                    poster: "p1".into(),
                    badge: "TV",
                },
                PosterTile {
                    link: "l2".into(),
                    caption: "Arrival (2016)".into(),
                    poster: "p2".into(),
                    badge: "Movie",
                },
            ]
        );
    }

    #[test]
    fn test_selector_matches_class() {
        assert_eq!(GRID_SELECTOR, format!(".{}", GRID_CLASS));
    }
}
