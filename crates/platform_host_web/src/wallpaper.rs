//! File-picker backed custom wallpaper loader.

use platform_host::{
    custom_wallpaper_from_data_url, next_monotonic_timestamp_ms, Wallpaper, WallpaperFileFuture,
    WallpaperFileService, WallpaperLoadError,
};

use futures::channel::oneshot;
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Opens a hidden `<input type=file>` and reads the chosen image as a data URL.
pub struct WebWallpaperFileService;

impl WallpaperFileService for WebWallpaperFileService {
    fn pick_custom_wallpaper<'a>(
        &'a self,
    ) -> WallpaperFileFuture<'a, Result<Wallpaper, WallpaperLoadError>> {
        Box::pin(async move {
            let picked = pick_file().await?;
            custom_wallpaper_from_data_url(
                &picked.name,
                &picked.mime_type,
                picked.data_url,
                next_monotonic_timestamp_ms(),
            )
        })
    }
}

/// Sender shared by several DOM callbacks; only the first one to fire delivers.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct SettleOnce<T> {
    slot: Rc<RefCell<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for SettleOnce<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl<T> SettleOnce<T> {
    fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                slot: Rc::new(RefCell::new(Some(tx))),
            },
            rx,
        )
    }

    fn settle(&self, value: T) {
        if let Some(tx) = self.slot.borrow_mut().take() {
            let _ = tx.send(value);
        }
    }
}

/// Maps the picker outcome to a file; dismissal and a dropped picker both mean no selection.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn selected_file<F>(picked: Result<Option<F>, oneshot::Canceled>) -> Result<F, WallpaperLoadError> {
    picked.ok().flatten().ok_or(WallpaperLoadError::NoFileSelected)
}

#[derive(Debug)]
struct PickedFile {
    name: String,
    mime_type: String,
    data_url: String,
}

async fn pick_file() -> Result<PickedFile, WallpaperLoadError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(WallpaperLoadError::Unsupported)
    }

    #[cfg(target_arch = "wasm32")]
    {
        let read_err = |message: &str| WallpaperLoadError::Read(message.to_string());
        let window = web_sys::window().ok_or_else(|| read_err("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| read_err("document unavailable"))?;
        let input = document
            .create_element("input")
            .map_err(|err| WallpaperLoadError::Read(format!("failed to create file input: {err:?}")))?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| read_err("failed to cast file input"))?;
        input.set_type("file");
        input.set_accept("image/*");
        input.set_hidden(true);

        if let Some(body) = document.body() {
            let _ = body.append_child(&input);
        }

        let (settle, rx) = SettleOnce::<Option<web_sys::File>>::channel();
        let input_for_change = input.clone();
        let change_settle = settle.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            change_settle.settle(input_for_change.files().and_then(|files| files.get(0)));
        }));
        let on_cancel = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            settle.settle(None);
        }));
        input.set_onchange(Some(on_change.as_ref().unchecked_ref()));
        let _ = input
            .add_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref());
        input.click();

        let picked = rx.await;
        input.set_onchange(None);
        let _ = input
            .remove_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref());
        input.remove();
        drop(on_change);
        drop(on_cancel);
        let file = selected_file(picked)?;

        let data_url = read_file_as_data_url(&file).await?;
        Ok(PickedFile {
            name: file.name(),
            mime_type: file.type_(),
            data_url,
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, WallpaperLoadError> {
    let reader = web_sys::FileReader::new()
        .map_err(|err| WallpaperLoadError::Read(format!("{err:?}")))?;
    let (settle, rx) = SettleOnce::<Result<String, WallpaperLoadError>>::channel();

    let reader_for_load = reader.clone();
    let load_settle = settle.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let result = reader_for_load
            .result()
            .map_err(|err| WallpaperLoadError::Read(format!("{err:?}")))
            .and_then(|value| {
                value.as_string().ok_or_else(|| {
                    WallpaperLoadError::Read("file reader returned non-string result".to_string())
                })
            });
        load_settle.settle(result);
    }));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        settle.settle(Err(WallpaperLoadError::Read(
            "failed to load wallpaper file".to_string(),
        )));
    }));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|err| WallpaperLoadError::Read(format!("failed to start file read: {err:?}")))?;

    let result = rx
        .await
        .map_err(|_| WallpaperLoadError::Read("wallpaper file read was interrupted".to_string()))?;
    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);
    result
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dismissed_picker_resolves_to_no_selection() {
        let (settle, rx) = SettleOnce::<Option<&str>>::channel();
        let on_change = settle.clone();

        settle.settle(None);
        on_change.settle(Some("late.png"));

        assert_eq!(
            selected_file(block_on(rx)),
            Err(WallpaperLoadError::NoFileSelected)
        );
    }

    #[test]
    fn first_callback_wins() {
        let (settle, rx) = SettleOnce::<Option<&str>>::channel();
        settle.clone().settle(Some("beach.png"));
        settle.settle(None);
        assert_eq!(selected_file(block_on(rx)), Ok("beach.png"));
    }

    #[test]
    fn dropped_picker_counts_as_no_selection() {
        let (settle, rx) = SettleOnce::<Option<&str>>::channel();
        drop(settle);
        assert_eq!(
            selected_file(block_on(rx)),
            Err(WallpaperLoadError::NoFileSelected)
        );
    }
}
