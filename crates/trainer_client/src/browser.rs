//! Browser implementations of the transport and handler seams.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, XmlHttpRequest};

use crate::handlers::{ClickTarget, FieldSource};
use crate::transport::{ApiRequest, HttpBackend, HttpResponse, Notifier, ResponseCallback};

/// `XMLHttpRequest` transport. Each request gets its own object and
/// `onreadystatechange` closure; the callback fires on the DONE state.
#[derive(Debug, Clone, Copy, Default)]
pub struct XhrBackend;

impl HttpBackend for XhrBackend {
    fn send(&self, request: ApiRequest, on_done: ResponseCallback) {
        let mut on_done = Some(on_done);
        if let Err(err) = dispatch(&request, &mut on_done) {
            log::warn!(
                "[XhrBackend] {} {} failed to send: {:?}",
                request.method.as_str(),
                request.path,
                err
            );
            if let Some(on_done) = on_done.take() {
                on_done(HttpResponse {
                    status: 0,
                    body: String::new(),
                });
            }
        }
    }
}

fn dispatch(request: &ApiRequest, on_done: &mut Option<ResponseCallback>) -> Result<(), JsValue> {
    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async(request.method.as_str(), &request.path, true)?;
    if request.body.is_some() {
        xhr.set_request_header("Content-Type", "application/json")?;
    }

    let handle = xhr.clone();
    let mut callback = on_done.take();
    let on_ready = Closure::wrap(Box::new(move || {
        if handle.ready_state() != XmlHttpRequest::DONE {
            return;
        }
        let response = HttpResponse {
            status: handle.status().unwrap_or(0),
            body: handle.response_text().ok().flatten().unwrap_or_default(),
        };
        if let Some(done) = callback.take() {
            done(response);
        }
    }) as Box<dyn FnMut()>);
    xhr.set_onreadystatechange(Some(on_ready.as_ref().unchecked_ref()));
    // The XHR owns the only reference to the closure from here on.
    on_ready.forget();

    match request.body.as_deref() {
        Some(body) => xhr.send_with_opt_str(Some(body)),
        None => xhr.send(),
    }
}

/// `window.alert` for messages, the console for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.alert_with_message(message) {
                    log::error!("[BrowserNotifier] alert failed: {:?}", err);
                }
            }
            None => log::error!("[BrowserNotifier] no window to alert: {message}"),
        }
    }

    /// Written with `console.log` directly so the configured log level never hides it.
    fn diagnostic(&self, status: u16) {
        web_sys::console::log_1(&JsValue::from(status));
    }
}

/// Reads input values straight from the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomFields;

impl FieldSource for DomFields {
    fn field_value(&self, id: &str) -> Option<String> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|input| input.value())
    }
}

/// Ids of the element a click landed on and of its parent.
pub fn click_target(event: &Event) -> ClickTarget {
    let element = event.target().and_then(|t| t.dyn_into::<Element>().ok());
    match element {
        Some(element) => ClickTarget::new(
            element.id(),
            element.parent_element().map(|parent| parent.id()),
        ),
        None => ClickTarget::default(),
    }
}

/// Text of the inline configuration block, if the page has one.
pub fn config_text(element_id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?
        .text_content()
}
