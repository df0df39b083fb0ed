//! UI Components
//!
//! Leptos components mounted into the host dashboard.

mod poster_card;
mod recent_grid;

pub use poster_card::PosterCard;
pub use recent_grid::RecentGrid;
