//! One-shot feedback messages carried across a redirect.
//!
//! A [`Flash`] is a write-once success/error pair built in the handler that
//! performed the mutation and stored in a cookie on the redirect response.
//! The next rendered page takes the pending flash, which also queues the
//! cookie's removal, so every message is shown at most once.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }

    /// Cookie-safe rendition of the pair: JSON wrapped in unpadded
    /// url-safe base64, so arbitrary message text survives the trip.
    pub fn encode(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Reads the pending flash and queues the cookie's removal on the returned
/// jar. Tampered or stale cookie values decode to an empty flash.
pub fn take(jar: CookieJar) -> (CookieJar, Flash) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Flash::default());
    };
    let flash = Flash::decode(cookie.value()).unwrap_or_default();
    let jar = jar.remove(removal_cookie());
    (jar, flash)
}

/// Redirects to `to` with `flash` stored for the next rendered page.
pub fn redirect_with_flash(jar: CookieJar, to: &str, flash: Flash) -> (CookieJar, Redirect) {
    let cookie = Cookie::build((FLASH_COOKIE, flash.encode()))
        .path("/")
        .http_only(true)
        .build();
    (jar.add(cookie), Redirect::to(to))
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, "")).path("/").build()
}
