//! DOM Watch Utilities
//!
//! Page-lifetime DOM observers for scripts injected into pages they don't own.
//! The host page may re-render at any time, so callers react to mutations
//! instead of assuming their target exists once.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MutationObserver, MutationObserverInit, Node};

/// Owned `MutationObserver` plus the closure it calls.
///
/// Dropping the watcher disconnects the observer, so keep it alive for as long
/// as mutations should be reported.
pub struct MutationWatcher {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl MutationWatcher {
    /// Report every batch of child additions/removals anywhere under `target`.
    /// The callback receives the number of records in the batch.
    pub fn observe_subtree<F>(target: &Node, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(usize) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                on_change(records.length() as usize);
            },
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(target, &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Same as [`observe_subtree`](Self::observe_subtree) on `document.body`
    pub fn observe_body<F>(on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(usize) + 'static,
    {
        let body = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.body())
            .ok_or_else(|| JsValue::from_str("document.body is not available"))?;
        Self::observe_subtree(&body, on_change)
    }
}

impl Drop for MutationWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Run `f` now if `document.body` exists, otherwise on `DOMContentLoaded`
pub fn when_body_ready<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    if document.body().is_some() {
        f();
        return Ok(());
    }

    let on_ready = Closure::once(f);
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    // DOMContentLoaded fires once per page; the listener lives until then
    on_ready.forget();
    Ok(())
}
