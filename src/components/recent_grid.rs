//! Recent Grid Component
//!
//! The grid container holding one `PosterCard` per item.

use leptos::prelude::*;

use super::PosterCard;
use crate::grid::{PosterGrid, GRID_CLASS};

#[component]
pub fn RecentGrid(grid: PosterGrid, placeholder: String) -> impl IntoView {
    view! {
        <div class=GRID_CLASS>
            {grid.tiles.into_iter().map(|tile| {
                view! { <PosterCard tile=tile placeholder={placeholder.clone()} /> }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PosterTile;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    fn tile(link: &str, caption: &str, badge: &'static str) -> PosterTile {
        PosterTile {
            link: link.to_string(),
            caption: caption.to_string(),
            poster: format!("{}.jpg", link),
            badge,
        }
    }

    fn render(grid: PosterGrid) -> String {
        Owner::new().with(|| {
            view! { <RecentGrid grid=grid placeholder={"/img/none.png".to_string()} /> }.to_html()
        })
    }

    #[test]
    fn test_grid_markup() {
        let html = render(PosterGrid {
            tiles: vec![
                tile("https://jf/andor", "Andor (2022)", "TV"),
                tile("https://jf/arrival", "Arrival (2016)", "Movie"),
            ],
        });

        assert!(html.starts_with(r#"<div class="jellyfin-recent-grid">"#), "{}", html);
        assert_eq!(html.matches("jellyfin-recent-grid").count(), 1);
        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches(r#"class="jellyfin-recent-item""#).count(), 2);
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert_eq!(html.matches(r#"rel="noopener""#).count(), 2);
        assert_eq!(html.matches(r#"loading="lazy""#).count(), 2);
        assert_eq!(html.matches(r#"class="jellyfin-recent-poster""#).count(), 2);

        assert!(html.contains(r#"href="https://jf/andor""#));
        assert!(html.contains(r#"title="Andor (2022)""#));
        assert!(html.contains(r#"src="https://jf/arrival.jpg""#));
        assert!(html.contains(r#"<span class="jellyfin-recent-badge">TV"#));
        assert!(html.contains(r#"<span class="jellyfin-recent-badge">Movie"#));
    }

    #[test]
    fn test_empty_grid_markup() {
        let html = render(PosterGrid::default());
        assert!(html.starts_with(r#"<div class="jellyfin-recent-grid">"#), "{}", html);
        assert_eq!(html.matches("<a ").count(), 0);
    }
}
