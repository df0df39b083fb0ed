//! Widget Bootstrap
//!
//! Wires config, logging, the injector and the mutation watcher together and
//! keeps them alive for the lifetime of the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use console_logger::ConsoleLogger;
use dom_watch::{when_body_ready, MutationWatcher};

use crate::api::HttpRecentSource;
use crate::config::WidgetConfig;
use crate::dashboard::BrowserDashboard;
use crate::error::{WidgetError, WidgetResult};
use crate::injector::Injector;

/// Prefix of every console line written by the widget
pub const LOG_PREFIX: &str = "Jellyfin Widget";

pub type BrowserInjector = Injector<BrowserDashboard, HttpRecentSource>;

thread_local! {
    static WIDGET: RefCell<Option<Widget>> = const { RefCell::new(None) };
    static LOGGER: Cell<Option<&'static ConsoleLogger>> = const { Cell::new(None) };
}

/// Page-lifetime widget state
pub struct Widget {
    injector: Rc<BrowserInjector>,
    watcher: Option<MutationWatcher>,
}

impl Widget {
    pub fn new(config: &WidgetConfig) -> WidgetResult<Self> {
        config.validate()?;
        let host = BrowserDashboard::new(&config.inner_selector, &config.placeholder_poster)?;
        let source = HttpRecentSource::new(config.proxy_url.as_str());
        Ok(Self {
            injector: Rc::new(Injector::new(config.card_id.as_str(), host, source)),
            watcher: None,
        })
    }

    pub fn trigger(&self) {
        self.injector.trigger();
    }

    /// Re-run the injector on every mutation batch under `document.body`
    pub fn watch(&mut self) -> WidgetResult<()> {
        if self.watcher.is_some() {
            return Ok(());
        }
        let injector = Rc::clone(&self.injector);
        let watcher = MutationWatcher::observe_body(move |records| {
            log::trace!("{} mutation records", records);
            injector.trigger();
        })
        .map_err(WidgetError::dom_from_js)?;
        self.watcher = Some(watcher);
        log::debug!("Watching page mutations");
        Ok(())
    }
}

/// Start the widget: config, logging, first pass, then the watcher
pub fn boot() -> WidgetResult<()> {
    let (config, config_error) = WidgetConfig::from_page();

    match console_logger::init_logger(LOG_PREFIX, config.log_level) {
        Ok(logger) => LOGGER.with(|slot| slot.set(Some(logger))),
        Err(e) => web_sys::console::warn_1(&format!("{}: logger already set: {}", LOG_PREFIX, e).into()),
    }
    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }
    log::debug!("Config: {:?}", config);

    let widget = Widget::new(&config)?;
    widget.trigger();
    WIDGET.with(|slot| *slot.borrow_mut() = Some(widget));

    when_body_ready(|| {
        let started = WIDGET.with(|slot| match slot.borrow_mut().as_mut() {
            Some(widget) => {
                widget.trigger();
                widget.watch()
            }
            None => Ok(()),
        });
        if let Err(e) = started {
            log::error!("{}", e);
        }
    })
    .map_err(WidgetError::dom_from_js)
}

/// Lines kept by the console logger, oldest first
pub fn recent_log() -> Vec<String> {
    LOGGER.with(|slot| slot.get().map(|logger| logger.recent_lines()).unwrap_or_default())
}
