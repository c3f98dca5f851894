//! One-shot catalog fetch.
//!
//! Uses channel-based communication to bridge the async request
//! with egui's synchronous update loop.

use super::error::CatalogError;
use super::parse::{parse_catalog, ParsedCatalog};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

/// Result delivered to the UI thread when the fetch settles.
pub type FetchResult = Result<ParsedCatalog, CatalogError>;

/// Channel-based loader for the catalog payload.
///
/// The request is async but egui's update() is synchronous. The spawned
/// task sends its result through the channel and requests a repaint; the
/// UI polls with [`CatalogChannel::try_recv`].
///
/// Dropping the channel drops the receiver, so a result arriving after the
/// app is gone is discarded. In the browser the in-flight request is also
/// aborted.
pub struct CatalogChannel {
    sender: Sender<FetchResult>,
    receiver: Receiver<FetchResult>,

    #[cfg(target_arch = "wasm32")]
    abort: Option<web_sys::AbortController>,
}

impl Default for CatalogChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            #[cfg(target_arch = "wasm32")]
            abort: None,
        }
    }

    /// Spawns the catalog request using the browser's fetch API.
    ///
    /// No timeout is applied; the request lives until it settles or the
    /// channel is dropped.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&mut self, ctx: egui::Context, endpoint: String, _timeout: Duration) {
        let sender = self.sender.clone();

        let controller = match web_sys::AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("AbortController unavailable: {:?}", e);
                None
            }
        };
        let signal = controller.as_ref().map(|c| c.signal());
        self.abort = controller;

        wasm_bindgen_futures::spawn_local(async move {
            let started = web_time::Instant::now();
            let result = match fetch_body(&endpoint, signal.as_ref()).await {
                Ok(body) => parse_timed(&body, started),
                Err(e) => Err(e),
            };
            if sender.send(result).is_err() {
                log::debug!("Catalog view dropped before fetch settled");
                return;
            }
            ctx.request_repaint();
        });
    }

    /// Native fetch on a background thread with a blocking client.
    ///
    /// The worker yields true when its result was delivered and false when
    /// the channel was dropped first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(
        &mut self,
        ctx: egui::Context,
        endpoint: String,
        timeout: Duration,
    ) -> std::thread::JoinHandle<bool> {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let started = web_time::Instant::now();
            let result = fetch_body_blocking(&endpoint, timeout)
                .and_then(|body| parse_timed(&body, started));
            if sender.send(result).is_err() {
                log::debug!("Catalog view dropped before fetch settled");
                return false;
            }
            ctx.request_repaint();
            true
        })
    }

    /// Non-blocking check for the settled fetch.
    ///
    /// Returns Some(result) once, None while the request is in flight.
    pub fn try_recv(&self) -> Option<FetchResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for CatalogChannel {
    fn drop(&mut self) {
        if let Some(controller) = self.abort.take() {
            controller.abort();
        }
    }
}

fn parse_timed(body: &str, started: web_time::Instant) -> FetchResult {
    let catalog = parse_catalog(body)?;
    log::info!(
        "Fetched {} catalog records ({} skipped, {} bytes) in {:.0}ms",
        catalog.records.len(),
        catalog.skipped,
        body.len(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(catalog)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_body(
    endpoint: &str,
    signal: Option<&web_sys::AbortSignal>,
) -> Result<String, CatalogError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let js_err = |e: wasm_bindgen::JsValue| CatalogError::Request(format!("{:?}", e));

    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    init.set_mode(web_sys::RequestMode::Cors);
    init.set_signal(signal);

    let request = web_sys::Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    let window =
        web_sys::window().ok_or_else(|| CatalogError::Request("no window".to_string()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let body_err = |e: wasm_bindgen::JsValue| CatalogError::Body(format!("{:?}", e));
    let text = JsFuture::from(response.text().map_err(body_err)?)
        .await
        .map_err(body_err)?;
    text.as_string()
        .ok_or_else(|| CatalogError::Body("response body is not a string".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_body_blocking(endpoint: &str, timeout: Duration) -> Result<String, CatalogError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    let response = client
        .get(endpoint)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }

    response
        .text()
        .map_err(|e| CatalogError::Body(e.to_string()))
}
