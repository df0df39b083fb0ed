//! Dashboard Host
//!
//! DOM access the injector needs from the host page.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::RecentGrid;
use crate::error::{WidgetError, WidgetResult};
use crate::grid::{PosterGrid, GRID_SELECTOR};

/// Page the widget is injected into
pub trait DashboardHost {
    /// Handle to the card element; equality means "same node"
    type Card: Clone + PartialEq;

    fn find_card(&self, card_id: &str) -> Option<Self::Card>;

    /// True once the card contains a rendered grid
    /// False once the host page has removed the card from the document
    fn is_attached(&self, card: &Self::Card) -> bool;

    fn has_grid(&self, card: &Self::Card) -> bool;

    /// Append `grid` to the inner container, or to the card itself
    fn mount_grid(&self, card: &Self::Card, grid: PosterGrid) -> WidgetResult<()>;
}

/// The real page, rendered with Leptos
pub struct BrowserDashboard {
    document: Document,
    inner_selector: String,
    placeholder: String,
}

impl BrowserDashboard {
    pub fn new(inner_selector: &str, placeholder: &str) -> WidgetResult<Self> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or_else(|| WidgetError::Dom("no document".to_string()))?;
        Ok(Self {
            document,
            inner_selector: inner_selector.to_string(),
            placeholder: placeholder.to_string(),
        })
    }

    fn mount_target(&self, card: &Element) -> WidgetResult<HtmlElement> {
        let inner = card
            .query_selector(&self.inner_selector)
            .map_err(WidgetError::dom_from_js)?;
        inner
            .unwrap_or_else(|| card.clone())
            .dyn_into::<HtmlElement>()
            .map_err(|_| WidgetError::Dom("mount target is not an HTML element".to_string()))
    }
}

impl DashboardHost for BrowserDashboard {
    type Card = Element;

    fn find_card(&self, card_id: &str) -> Option<Element> {
        self.document.get_element_by_id(card_id)
    }

    fn is_attached(&self, card: &Element) -> bool {
        card.is_connected()
    }

    fn has_grid(&self, card: &Element) -> bool {
        matches!(card.query_selector(GRID_SELECTOR), Ok(Some(_)))
    }

    fn mount_grid(&self, card: &Element, grid: PosterGrid) -> WidgetResult<()> {
        let target = self.mount_target(card)?;
        let placeholder = self.placeholder.clone();
        // The grid stays until the host page removes it
        leptos::mount::mount_to(target, move || {
            view! { <RecentGrid grid=grid placeholder=placeholder /> }
        })
        .forget();
        Ok(())
    }
}
