//! Wallpaper settings panel: registry grid, custom image loading, dynamic mode, and reseeding.

#![warn(rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::*;
use platform_host::{thumbnail_style, Wallpaper, WallpaperLoadError};
use system_ui::prelude::*;

const NO_IMAGE_TEXT: &str = "No image selected";
const LOAD_FAILED_TEXT: &str = "Failed to load image";

/// Caption under the custom picker after a pick attempt.
pub fn pick_caption(result: &Result<Wallpaper, WallpaperLoadError>) -> String {
    match result {
        Ok(wallpaper) => wallpaper.name.clone(),
        Err(WallpaperLoadError::NoFileSelected) => NO_IMAGE_TEXT.to_string(),
        Err(_) => LOAD_FAILED_TEXT.to_string(),
    }
}

/// Mounts the wallpaper settings panel.
pub fn mount(context: AppMountContext) -> View {
    view! { <WallpaperSettingsApp services=context.services /> }.into_view()
}

#[component]
fn WallpaperSettingsApp(services: AppServices) -> impl IntoView {
    let wallpapers = services.wallpaper;
    let pending = create_rw_signal::<Option<Wallpaper>>(None);
    let caption = create_rw_signal(NO_IMAGE_TEXT.to_string());
    let loading = create_rw_signal(false);
    let host = store_value(services.host.clone());

    let pick = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let host = host.get_value();
        spawn_local(async move {
            let result = host.wallpaper_files.pick_custom_wallpaper().await;
            caption.set(pick_caption(&result));
            match result {
                Ok(wallpaper) => pending.set(Some(wallpaper)),
                Err(err) => {
                    if err != WallpaperLoadError::NoFileSelected {
                        logging::warn!("custom wallpaper load failed: {err}");
                    }
                    pending.set(None);
                }
            }
            loading.set(false);
        });
    };

    let apply_custom = move || {
        if let Some(wallpaper) = pending.get_untracked() {
            wallpapers.apply_custom(wallpaper);
        }
    };

    view! {
        <div class="app-shell app-wallpaper-shell">
            <Panel heading="Wallpapers" aria_label="Wallpaper gallery">
                <div class="wallpaper-grid" id="wallpaper-grid">
                    <For
                        each=move || wallpapers.ordered.get()
                        key=|wallpaper| wallpaper.id.clone()
                        let:wallpaper
                    >
                        {
                            let id = wallpaper.id.clone();
                            let active_id = id.clone();
                            view! {
                                <button
                                    type="button"
                                    class="wallpaper-option"
                                    class:active=move || wallpapers.current.with(|w| w.id == active_id)
                                    title=format!("Apply {}", wallpaper.name)
                                    on:click=move |_| wallpapers.select(id.clone())
                                >
                                    <span class="wallpaper-preview" style=thumbnail_style(&wallpaper)></span>
                                    <span class="wallpaper-name">{wallpaper.name.clone()}</span>
                                </button>
                            }
                        }
                    </For>
                </div>
            </Panel>
            <Panel heading="Custom Wallpaper" aria_label="Custom wallpaper">
                <div class="custom-wallpaper-row">
                    <Button
                        id="custom-wallpaper-input"
                        disabled=loading
                        on_click=Callback::new(move |_| pick())
                    >
                        "Choose Image…"
                    </Button>
                    <span class="custom-wallpaper-name" id="custom-wallpaper-name">
                        {move || caption.get()}
                    </span>
                </div>
                <Show when=move || pending.with(Option::is_some) fallback=|| ()>
                    <div
                        class="custom-wallpaper-preview"
                        style=move || {
                            pending.with(|w| w.as_ref().map(thumbnail_style).unwrap_or_default())
                        }
                    ></div>
                </Show>
                <Button
                    variant=ButtonVariant::Primary
                    id="apply-custom-wallpaper"
                    disabled=Signal::derive(move || pending.with(Option::is_none))
                    on_click=Callback::new(move |_| apply_custom())
                >
                    "Apply Custom"
                </Button>
            </Panel>
            <Panel heading="Options" aria_label="Wallpaper options">
                <ToggleRow
                    title="Dynamic wallpaper"
                    description="Cycle through wallpapers every 15 seconds"
                >
                    <Switch
                        id="dynamic-wallpaper-toggle"
                        aria_label="Dynamic wallpaper"
                        checked=wallpapers.dynamic_enabled
                        on_toggle=Callback::new(move |enabled| wallpapers.set_dynamic(enabled))
                    />
                </ToggleRow>
                <Button
                    id="sync-wallpapers"
                    on_click=Callback::new(move |_| wallpapers.sync_defaults())
                >
                    "Sync Defaults"
                </Button>
            </Panel>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use platform_host::custom_wallpaper_from_data_url;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn caption_shows_file_name_or_failure() {
        let loaded =
            custom_wallpaper_from_data_url("beach.jpg", "image/jpeg", "data:image/jpeg;base64,AA".to_string(), 7);
        assert_eq!(pick_caption(&loaded), "beach.jpg");
        assert_eq!(
            pick_caption(&Err(WallpaperLoadError::NoFileSelected)),
            "No image selected"
        );
        assert_eq!(
            pick_caption(&Err(WallpaperLoadError::Read("denied".to_string()))),
            "Failed to load image"
        );
        assert_eq!(
            pick_caption(&Err(WallpaperLoadError::NotAnImage {
                file_name: "notes.txt".to_string(),
                mime_type: "text/plain".to_string(),
            })),
            "Failed to load image"
        );
    }
}
