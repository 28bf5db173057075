//! Browser glue for reCAPTCHA v3 and a timer usable as a race arm.

use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::contact::{TokenError, TokenProvider};

/// Token provider backed by the `grecaptcha` global the v3 script installs.
pub struct Recaptcha {
    site_key: &'static str,
}

impl Recaptcha {
    pub fn new(site_key: &'static str) -> Self {
        Self { site_key }
    }
}

impl TokenProvider for Recaptcha {
    #[cfg(feature = "hydrate")]
    async fn token(&self, action: &str) -> Result<String, TokenError> {
        use js_sys::{Function, Object, Promise, Reflect};
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let rejected = |err: JsValue| TokenError::Rejected(format!("{err:?}"));

        let grecaptcha = Reflect::get(&window(), &JsValue::from_str("grecaptcha"))
            .map_err(|_| TokenError::Unavailable)?;
        if grecaptcha.is_undefined() || grecaptcha.is_null() {
            return Err(TokenError::Unavailable);
        }
        let execute = Reflect::get(&grecaptcha, &JsValue::from_str("execute"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(TokenError::Unavailable)?;

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("action"), &JsValue::from_str(action))
            .map_err(rejected)?;
        let promise = execute
            .call2(&grecaptcha, &JsValue::from_str(self.site_key), &options)
            .map_err(rejected)?
            .dyn_into::<Promise>()
            .map_err(rejected)?;

        JsFuture::from(promise)
            .await
            .map_err(rejected)?
            .as_string()
            .ok_or_else(|| TokenError::Rejected("token was not a string".to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn token(&self, _action: &str) -> Result<String, TokenError> {
        log::debug!("no verification script outside the browser ({})", self.site_key);
        Err(TokenError::Unavailable)
    }
}

/// Resolves after `duration`, driven by the browser's timer queue.
pub async fn sleep(duration: Duration) {
    let (tx, rx) = oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        duration,
    );
    // a dropped sender also ends the wait
    let _ = rx.await;
}
