use js_sys::Function;
use typeswitch::preference::{PreferenceError, StorageArea, StorageChange};
use typeswitch::{FONT_CHANGED_EVENT, FrameCallback, FrameScheduler, Host};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Event, StorageEvent, Window};

use crate::dom::WebDocument;
use crate::errors::{WebError, describe};

const STORAGE_EVENT: &str = "storage";

/// Frame scheduler backed by `requestAnimationFrame`.
#[derive(Debug, Clone)]
pub struct WebFrames {
    window: Window,
}

impl FrameScheduler for WebFrames {
    fn request_frame(&self, callback: FrameCallback) {
        let closure = Closure::once_into_js(move || callback());
        if let Err(err) = self
            .window
            .request_animation_frame(closure.unchecked_ref::<Function>())
        {
            log::warn!("animation frame request failed: {}", describe(&err));
        }
    }
}

/// `window.localStorage` as a [`StorageArea`].
#[derive(Debug, Clone)]
pub struct WebStorage {
    storage: web_sys::Storage,
}

fn unavailable(err: JsValue) -> PreferenceError {
    PreferenceError::Unavailable {
        message: describe(&err),
    }
}

impl StorageArea for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage.get_item(key).map_err(unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage.set_item(key, value).map_err(unavailable)
    }
}

/// Event listener registered on the window.
pub struct WebListener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// The current browser tab.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
    document: WebDocument,
    storage: WebStorage,
}

impl WebHost {
    pub fn current() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let storage = window
            .local_storage()
            .map_err(|err| WebError::StorageUnavailable {
                message: describe(&err),
            })?
            .ok_or_else(|| WebError::StorageUnavailable {
                message: String::from("localStorage is disabled"),
            })?;

        Ok(Self {
            document: WebDocument::new(document)?,
            storage: WebStorage { storage },
            window,
        })
    }

    fn listen(
        &self,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> WebListener {
        if let Err(err) = self.window.add_event_listener_with_callback(
            event,
            closure.as_ref().unchecked_ref(),
        ) {
            log::warn!(
                "{event} listener registration failed: {}",
                describe(&err)
            );
        }
        WebListener { event, closure }
    }
}

impl Host for WebHost {
    type Document = WebDocument;
    type Frames = WebFrames;
    type Storage = WebStorage;
    type Listener = WebListener;

    fn document(&self) -> WebDocument {
        self.document.clone()
    }

    fn frames(&self) -> WebFrames {
        WebFrames {
            window: self.window.clone(),
        }
    }

    fn storage(&self) -> WebStorage {
        self.storage.clone()
    }

    fn listen_font_changed<F>(&self, handler: F) -> WebListener
    where
        F: Fn(&str) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let font_id = event
                .dyn_ref::<CustomEvent>()
                .and_then(|custom| custom.detail().as_string());
            if let Some(font_id) = font_id {
                handler(&font_id);
            }
        });
        self.listen(FONT_CHANGED_EVENT, closure)
    }

    fn listen_storage_changed<F>(&self, handler: F) -> WebListener
    where
        F: Fn(&StorageChange) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(event) = event.dyn_ref::<StorageEvent>() else {
                return;
            };
            // `localStorage.clear()` reports a null key.
            let Some(key) = event.key() else {
                return;
            };
            handler(&StorageChange {
                key,
                old_value: event.old_value(),
                new_value: event.new_value(),
            });
        });
        self.listen(STORAGE_EVENT, closure)
    }

    fn remove_listener(&self, listener: WebListener) {
        let WebListener { event, closure } = listener;
        if let Err(err) = self.window.remove_event_listener_with_callback(
            event,
            closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("{event} listener removal failed: {}", describe(&err));
        }
    }

    fn dispatch_font_changed(&self, font_id: &str) {
        let init = CustomEventInit::new();
        init.set_detail(&JsValue::from_str(font_id));
        let event = match CustomEvent::new_with_event_init_dict(
            FONT_CHANGED_EVENT,
            &init,
        ) {
            Ok(event) => event,
            Err(err) => {
                log::warn!(
                    "{FONT_CHANGED_EVENT} creation failed: {}",
                    describe(&err)
                );
                return;
            },
        };
        if let Err(err) = self.window.dispatch_event(&event) {
            log::warn!(
                "{FONT_CHANGED_EVENT} dispatch failed: {}",
                describe(&err)
            );
        }
    }
}
