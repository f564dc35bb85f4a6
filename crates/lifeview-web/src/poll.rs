//! The polling loop: periodic refresh with cancel-and-replace.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AbortController, Document};

use crate::client::StateClient;
use crate::config::ViewConfig;
use crate::error::{ViewError, js_error};
use crate::render::TableView;

/// State shared between the interval closure and the in-flight fetch.
struct Poller {
    client: StateClient,
    view: TableView,
    inflight: Option<AbortController>,
}

impl Poller {
    /// Abort the previous request (if any), then fetch and paint a fresh
    /// snapshot.
    ///
    /// Overlapping ticks never race on the table: the older request is
    /// cancelled before the newer one starts, so only the newest response
    /// can paint. Failures are logged and swallowed — the view just keeps
    /// its previous frame.
    fn tick(poller: &Rc<RefCell<Poller>>) {
        let controller = {
            let mut p = poller.borrow_mut();
            if let Some(prev) = p.inflight.take() {
                prev.abort();
            }
            let controller = match AbortController::new() {
                Ok(c) => c,
                Err(err) => {
                    log::error!("failed to create abort controller: {err:?}");
                    return;
                }
            };
            p.inflight = Some(controller.clone());
            controller
        };

        let poller = Rc::clone(poller);
        wasm_bindgen_futures::spawn_local(async move {
            let client = poller.borrow().client.clone();
            match client.fetch_state(Some(&controller.signal())).await {
                Ok(state) => {
                    let p = poller.borrow();
                    match p.view.render(&state.world, &state.previous_world) {
                        Ok(()) => p.view.set_life_count(state.life_count),
                        Err(err) => log::error!("failed to paint game table: {err}"),
                    }
                }
                Err(ViewError::Aborted) => {
                    log::debug!("game state request superseded by a newer poll");
                }
                Err(err) => log::error!("failed to refresh game state: {err}"),
            }
        });
    }
}

/// Attach the view and start polling the server.
///
/// Performs one immediate refresh, then repeats every
/// `config.poll_interval_ms` milliseconds. The interval closure is leaked
/// (`Closure::forget`) so it lives for the page lifetime.
pub fn run(document: &Document, config: ViewConfig) -> Result<(), ViewError> {
    let view = TableView::attach(document, &config)?;
    let client = StateClient::new(config.api_url.clone());
    let poller = Rc::new(RefCell::new(Poller {
        client,
        view,
        inflight: None,
    }));

    Poller::tick(&poller);

    let window = web_sys::window().ok_or_else(|| ViewError::Js("no global `window`".into()))?;
    let tick = {
        let poller = Rc::clone(&poller);
        Closure::<dyn FnMut()>::new(move || Poller::tick(&poller))
    };
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            config.poll_interval_ms as i32,
        )
        .map_err(js_error)?;
    tick.forget();

    Ok(())
}
