//! Categories - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::a001_category::Category;
use contracts::shared::ApiEnvelope;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url("/category/list");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let envelope: ApiEnvelope<Vec<Category>> =
        serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    envelope.into_data()
}

/// Decorative icon for the known seeded categories; the backend carries no
/// icon data.
pub fn category_icon(name: &str) -> &'static str {
    match name {
        "Books" => "📚",
        "Electronics" => "💻",
        "Clothing" => "👕",
        "Sports" => "⚽",
        "Furniture" => "🪑",
        _ => "📦",
    }
}
