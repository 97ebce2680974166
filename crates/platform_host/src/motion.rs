//! Motion preference, element geometry, and element animation contracts.

use std::{future::Future, pin::Pin};

use serde::Serialize;

/// Object-safe boxed future used by [`MotionService`].
pub type MotionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Viewport-relative bounding box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl ScreenRect {
    /// Horizontal centre.
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical centre.
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// One keyframe of an element animation, serialized as a Web Animations keyframe object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationKeyframe {
    /// CSS `transform` value.
    pub transform: String,
    /// CSS `opacity` value.
    pub opacity: f64,
    /// CSS `clip-path` value.
    pub clip_path: String,
}

/// Animation to play on one element.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    /// DOM id of the animated element.
    pub element_id: String,
    /// Keyframes from first to last.
    pub keyframes: Vec<AnimationKeyframe>,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// CSS easing function.
    pub easing: String,
}

/// How an element animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// The animation played to its last keyframe.
    Finished,
    /// The animation was cancelled or its element disappeared.
    Cancelled,
}

/// Host service for reduced-motion detection, element geometry, and element animation.
pub trait MotionService {
    /// Returns whether the platform asks for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Returns the bounding box of the element with `element_id`, if it is rendered.
    fn element_bounds(&self, element_id: &str) -> Option<ScreenRect>;

    /// Returns the viewport size as `(width, height)`.
    fn viewport_size(&self) -> (f64, f64);

    /// Plays `request`, resolving once the animation finishes or is cancelled.
    fn play<'a>(
        &'a self,
        request: AnimationRequest,
    ) -> MotionFuture<'a, Result<AnimationOutcome, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Motion service for headless targets: always reduced motion, no geometry.
pub struct NoopMotionService;

impl MotionService for NoopMotionService {
    fn prefers_reduced_motion(&self) -> bool {
        true
    }

    fn element_bounds(&self, _element_id: &str) -> Option<ScreenRect> {
        None
    }

    fn viewport_size(&self) -> (f64, f64) {
        (1280.0, 800.0)
    }

    fn play<'a>(
        &'a self,
        _request: AnimationRequest,
    ) -> MotionFuture<'a, Result<AnimationOutcome, String>> {
        Box::pin(async { Ok(AnimationOutcome::Finished) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyframes_serialize_with_web_animation_property_names() {
        let frame = AnimationKeyframe {
            transform: "translate(0px, 0px) scale(1)".to_string(),
            opacity: 1.0,
            clip_path: "inset(0% 0% 0% 0% round 16px)".to_string(),
        };
        let value = serde_json::to_value(&frame).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "transform": "translate(0px, 0px) scale(1)",
                "opacity": 1.0,
                "clipPath": "inset(0% 0% 0% 0% round 16px)",
            })
        );
    }

    #[test]
    fn rect_centers() {
        let rect = ScreenRect {
            left: 10.0,
            top: 20.0,
            width: 80.0,
            height: 40.0,
        };
        assert_eq!((rect.center_x(), rect.center_y()), (50.0, 40.0));
    }
}
