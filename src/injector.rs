//! Widget Injector
//!
//! Finds the dashboard card, fetches the recent items and mounts the poster
//! grid. Safe to trigger on every page mutation: a card that is loading or
//! already populated is left alone.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::api::RecentSource;
use crate::dashboard::DashboardHost;
use crate::error::WidgetError;
use crate::grid::PosterGrid;

/// Why a trigger did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoCard,
    InFlight,
    Populated,
}

/// Result of one fetch-and-render attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Rendered(usize),
    ApiError,
    FetchFailed,
    MountFailed,
}

/// A fetch-and-render attempt handed to the spawner
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs tasks on the page's event loop
pub type Spawner = Rc<dyn Fn(LocalTask)>;

fn spawn_in_browser(task: LocalTask) {
    wasm_bindgen_futures::spawn_local(task);
}

/// A card node with its in-flight flag.
/// A node seen for the first time (the host replaced the card) starts clean.
struct TrackedCard<C> {
    card: C,
    in_flight: Rc<Cell<bool>>,
}

/// An attempt that holds the card's in-flight flag; dropping it clears the flag
pub struct InFlight<C> {
    card: C,
    flag: Rc<Cell<bool>>,
}

impl<C> Drop for InFlight<C> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct Injector<H: DashboardHost, S> {
    card_id: String,
    host: H,
    source: S,
    spawner: Spawner,
    tracked: RefCell<Vec<TrackedCard<H::Card>>>,
}

impl<H: DashboardHost, S: RecentSource> Injector<H, S> {
    pub fn new(card_id: impl Into<String>, host: H, source: S) -> Self {
        Self {
            card_id: card_id.into(),
            host,
            source,
            spawner: Rc::new(spawn_in_browser),
            tracked: RefCell::new(Vec::new()),
        }
    }

    pub fn with_spawner(mut self, spawner: Spawner) -> Self {
        self.spawner = spawner;
        self
    }

    /// Check the preconditions and take the card's in-flight flag
    pub fn begin(&self) -> Result<InFlight<H::Card>, Skip> {
        let card = self.host.find_card(&self.card_id).ok_or(Skip::NoCard)?;
        let flag = self.flag_for(&card);

        if flag.get() {
            return Err(Skip::InFlight);
        }
        if self.host.has_grid(&card) {
            return Err(Skip::Populated);
        }

        flag.set(true);
        log::info!("Target found, fetching data...");
        Ok(InFlight { card, flag })
    }

    /// Fetch, render, and release the flag whatever happens
    pub async fn complete(&self, flight: InFlight<H::Card>) -> InjectOutcome {
        match self.source.fetch_recent().await {
            Ok(items) => {
                let grid = PosterGrid::from_items(&items);
                let count = grid.len();
                match self.host.mount_grid(&flight.card, grid) {
                    Ok(()) => {
                        log::info!("Grid injected successfully ({} items).", count);
                        InjectOutcome::Rendered(count)
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        InjectOutcome::MountFailed
                    }
                }
            }
            Err(e @ WidgetError::Api(_)) => {
                log::error!("{}", e);
                InjectOutcome::ApiError
            }
            Err(e) => {
                log::error!("{}", e);
                InjectOutcome::FetchFailed
            }
        }
    }

    fn flag_for(&self, card: &H::Card) -> Rc<Cell<bool>> {
        let mut tracked = self.tracked.borrow_mut();
        // Detached idle nodes can't come back with a pending fetch
        tracked.retain(|seen| seen.in_flight.get() || seen.card == *card || self.host.is_attached(&seen.card));

        if let Some(seen) = tracked.iter().find(|seen| seen.card == *card) {
            return Rc::clone(&seen.in_flight);
        }
        let in_flight = Rc::new(Cell::new(false));
        tracked.push(TrackedCard {
            card: card.clone(),
            in_flight: Rc::clone(&in_flight),
        });
        in_flight
    }
}

impl<H, S> Injector<H, S>
where
    H: DashboardHost + 'static,
    H::Card: 'static,
    S: RecentSource + 'static,
{
    /// Fire-and-forget entry point used by the page bootstrap and the watcher
    pub fn trigger(self: &Rc<Self>) {
        match self.begin() {
            Ok(flight) => {
                let injector = Rc::clone(self);
                (self.spawner)(Box::pin(async move {
                    injector.complete(flight).await;
                }));
            }
            Err(skip) => log::trace!("Injector skipped: {:?}", skip),
        }
    }
}
