//! Image upload sequencing shared by the sell and edit flows.
//!
//! A batch of selected files is uploaded strictly one at a time so the
//! resulting URL list preserves the user's selection order even when the
//! endpoint's latency varies. When an upload fails, the batch stops there:
//! URLs collected before the failure are kept (the draft keeps them too) and
//! no further file is attempted. There is no retry; re-invoking the batch is
//! the caller's decision.

use std::future::Future;

use crate::shared::api_utils::api_url;
use contracts::shared::ApiEnvelope;

/// Result of one upload batch. `urls` holds the URLs of every completed
/// upload, in submission order; `error` is set when the batch stopped early.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadBatch {
    pub urls: Vec<String>,
    pub error: Option<String>,
}

impl UploadBatch {
    pub fn all_succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Drive a batch of `total` uploads sequentially through `upload_one`,
/// awaiting each settlement before issuing the next request.
pub async fn run_batch<F, Fut>(total: usize, mut upload_one: F) -> UploadBatch
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    let mut urls = Vec::with_capacity(total);
    for index in 0..total {
        match upload_one(index).await {
            Ok(url) => urls.push(url),
            Err(error) => {
                return UploadBatch {
                    urls,
                    error: Some(error),
                }
            }
        }
    }
    UploadBatch { urls, error: None }
}

/// Upload one file as a multipart body to `POST /image/upload`; the response
/// envelope carries the public URL of the stored image.
pub async fn upload_image(file: web_sys::File) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/image/upload");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

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
    let envelope: ApiEnvelope<String> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    envelope.into_data()
}

/// Upload the selected files in order.
pub async fn upload_files(files: Vec<web_sys::File>) -> UploadBatch {
    run_batch(files.len(), |index| upload_image(files[index].clone())).await
}

/// Collect the files of an `<input type="file" multiple>` change event.
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let mut files = Vec::new();
    if let Some(list) = input.files() {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                files.push(file);
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_successful_batch_keeps_selection_order() {
        let calls = RefCell::new(Vec::new());
        let batch = block_on(run_batch(3, |index| {
            calls.borrow_mut().push(index);
            async move { Ok::<_, String>(format!("u{}", index + 1)) }
        }));

        assert!(batch.all_succeeded());
        assert_eq!(batch.urls, vec!["u1", "u2", "u3"]);
        // One request per file, issued in order.
        assert_eq!(*calls.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_failure_keeps_the_prefix_and_stops_the_batch() {
        let calls = RefCell::new(0usize);
        let batch = block_on(run_batch(4, |index| {
            *calls.borrow_mut() += 1;
            async move {
                if index == 2 {
                    Err("HTTP 500".to_string())
                } else {
                    Ok(format!("u{}", index + 1))
                }
            }
        }));

        assert!(!batch.all_succeeded());
        assert_eq!(batch.urls, vec!["u1", "u2"]);
        assert_eq!(batch.error.as_deref(), Some("HTTP 500"));
        // Files after the failing one are never attempted, and nothing is
        // retried.
        assert_eq!(*calls.borrow(), 3);
    }

    #[test]
    fn test_first_failure_yields_an_empty_prefix() {
        let batch = block_on(run_batch(2, |_| async {
            Err::<String, _>("boom".to_string())
        }));
        assert!(batch.urls.is_empty());
        assert!(batch.error.is_some());
    }

    #[test]
    fn test_reinvoking_a_failed_batch_starts_fresh() {
        let attempts = RefCell::new(0usize);
        let upload = |index: usize| {
            *attempts.borrow_mut() += 1;
            let fail = *attempts.borrow() == 1;
            async move {
                if fail {
                    Err("transient".to_string())
                } else {
                    Ok(format!("u{}", index + 1))
                }
            }
        };

        let first = block_on(run_batch(2, upload));
        assert!(!first.all_succeeded());

        // The caller re-invokes for the same files; the sequencer holds no
        // state between batches.
        let second = block_on(run_batch(2, upload));
        assert!(second.all_succeeded());
        assert_eq!(second.urls, vec!["u1", "u2"]);
    }
}
