//! Reduced-motion query, element geometry, and Web Animations adapter.

use platform_host::{AnimationOutcome, AnimationRequest, MotionFuture, MotionService, ScreenRect};
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Clone, Copy, Default)]
/// Browser motion adapter.
pub struct WebMotionService;

#[cfg(target_arch = "wasm32")]
#[derive(Serialize)]
struct AnimationTiming<'a> {
    duration: u32,
    easing: &'a str,
    fill: &'static str,
}

impl MotionService for WebMotionService {
    fn prefers_reduced_motion(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
                .map(|query| query.matches())
                .unwrap_or(false);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = REDUCED_MOTION_QUERY;
            false
        }
    }

    fn element_bounds(&self, element_id: &str) -> Option<ScreenRect> {
        #[cfg(target_arch = "wasm32")]
        {
            let element = web_sys::window()?
                .document()?
                .get_element_by_id(element_id)?;
            let rect = element.get_bounding_client_rect();
            return Some(ScreenRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = element_id;
            None
        }
    }

    fn viewport_size(&self) -> (f64, f64) {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                return (width, height);
            }
        }
        (1280.0, 800.0)
    }

    fn play<'a>(
        &'a self,
        request: AnimationRequest,
    ) -> MotionFuture<'a, Result<AnimationOutcome, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return play_animation(request).await;
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = request;
                Ok(AnimationOutcome::Finished)
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn play_animation(request: AnimationRequest) -> Result<AnimationOutcome, String> {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&request.element_id))
        .ok_or_else(|| format!("element `{}` not found", request.element_id))?;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let keyframes = request
        .keyframes
        .serialize(&serializer)
        .map_err(|err| format!("failed to encode keyframes: {err}"))?;
    let timing = AnimationTiming {
        duration: request.duration_ms,
        easing: &request.easing,
        fill: "forwards",
    }
    .serialize(&serializer)
    .map_err(|err| format!("failed to encode timing: {err}"))?;

    let animation = element.animate_with_keyframe_animation_options(
        Some(keyframes.unchecked_ref::<js_sys::Object>()),
        timing.unchecked_ref::<web_sys::KeyframeAnimationOptions>(),
    );
    let finished = animation
        .finished()
        .map_err(|err| format!("animation has no finished promise: {err:?}"))?;
    let outcome = match wasm_bindgen_futures::JsFuture::from(finished).await {
        Ok(_) => AnimationOutcome::Finished,
        Err(_) => AnimationOutcome::Cancelled,
    };
    animation.cancel();
    Ok(outcome)
}
