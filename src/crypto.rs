//! SHA-256 through the browser's `crypto.subtle`.

use breachgrid_core::{BreachError, BreachResult, DigestSource};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::SubtleCrypto;

const SHA_256: &str = "SHA-256";

fn unavailable(err: JsValue) -> BreachError {
    BreachError::DigestUnavailable(format!("{:?}", err))
}

/// `crypto.subtle` is undefined outside secure contexts (plain http).
fn subtle_crypto() -> BreachResult<SubtleCrypto> {
    let crypto = gloo::utils::window().crypto().map_err(unavailable)?;
    let subtle = crypto.subtle();
    if subtle.is_undefined() {
        return Err(BreachError::DigestUnavailable(
            "crypto.subtle is undefined".to_string(),
        ));
    }
    Ok(subtle)
}

/// Digest source backed by the Web Crypto API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtleDigest;

impl DigestSource for SubtleDigest {
    async fn digest(&self, text: &str) -> BreachResult<Vec<u8>> {
        let subtle = subtle_crypto()?;
        let data = js_sys::Uint8Array::from(text.as_bytes());
        let promise = subtle
            .digest_with_str_and_buffer_source(SHA_256, &data)
            .map_err(unavailable)?;
        let buffer = JsFuture::from(promise).await.map_err(unavailable)?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Seed for the page's small RNGs, from `Math.random`.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
