//! Blob + object-URL download adapter.

use platform_host::{DownloadFile, DownloadFuture, DownloadService};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default)]
/// Saves files by clicking a temporary `<a download>` pointing at a Blob URL.
pub struct WebDownloadService;

impl DownloadService for WebDownloadService {
    fn save<'a>(&'a self, file: DownloadFile) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return save_blob(&file);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err(format!(
                    "downloads are only available when compiled for wasm32 ({})",
                    file.file_name
                ))
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn save_blob(file: &DownloadFile) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "document unavailable".to_string())?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| format!("failed to create blob: {err:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|err| format!("failed to create object url: {err:?}"))?;

    let anchor = document
        .create_element("a")
        .map_err(|err| format!("failed to create anchor: {err:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "failed to cast anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.set_hidden(true);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
