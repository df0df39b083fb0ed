//! Poster Card Component
//!
//! One linked poster with its TV/Movie badge.

use std::cell::Cell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::grid::{PosterTile, BADGE_CLASS, ITEM_CLASS, POSTER_CLASS};

/// Fallback image for one poster, handed out at most once.
/// A placeholder that fails to load too must not restart the swap.
pub struct PlaceholderSwap {
    placeholder: String,
    used: Cell<bool>,
}

impl PlaceholderSwap {
    pub fn new(placeholder: String) -> Self {
        Self {
            placeholder,
            used: Cell::new(false),
        }
    }

    pub fn take(&self) -> Option<&str> {
        if self.used.replace(true) {
            None
        } else {
            Some(&self.placeholder)
        }
    }
}

/// Poster linking to the item's Jellyfin page in a new tab
#[component]
pub fn PosterCard(
    tile: PosterTile,
    /// Image swapped in when the poster fails to load
    placeholder: String,
) -> impl IntoView {
    let swap = PlaceholderSwap::new(placeholder);

    view! {
        <a href=tile.link target="_blank" rel="noopener" class=ITEM_CLASS title=tile.caption>
            <img
                src=tile.poster
                class=POSTER_CLASS
                loading="lazy"
                on:error=move |ev| {
                    let img = ev.target().and_then(|t| t.dyn_into::<HtmlImageElement>().ok());
                    if let Some(img) = img {
                        if let Some(src) = swap.take() {
                            img.set_src(src);
                        }
                    }
                }
            />
            <span class=BADGE_CLASS>{tile.badge}</span>
        </a>
    }
}
