//! Window-manager geometry, stacking, and dock animation helpers used by the reducer and host.

use desktop_app_contract::AppId;
use platform_host::{AnimationKeyframe, AnimationRequest, ScreenRect};

use crate::model::{
    DesktopState, PointerPosition, WindowAnimation, WindowRect, MENU_BAR_HEIGHT_PX,
};

/// Top-left corner of the first window.
pub const CASCADE_ORIGIN: (i32, i32) = (100, 100);
/// Offset applied per already-open window.
pub const CASCADE_STEP_PX: i32 = 30;
/// Dock minimize/restore duration.
pub const DOCK_ANIMATION_MS: u32 = 420;
/// Dock minimize/restore easing.
pub const DOCK_ANIMATION_EASING: &str = "cubic-bezier(0.22, 0.61, 0.36, 1)";

const DOCK_SCALE: f64 = 0.05;
const OPEN_CLIP_PATH: &str = "inset(0% 0% 0% 0% round 16px)";
const DOCKED_CLIP_PATH: &str = "inset(55% 45% 0% 45% round 72px)";
const FALLBACK_TARGET_WIDTH: f64 = 80.0;
const FALLBACK_TARGET_HEIGHT: f64 = 40.0;
const FALLBACK_TARGET_BOTTOM_GAP: f64 = 40.0;

/// Initial window size for `app_id`.
pub fn default_window_size(app_id: AppId) -> (i32, i32) {
    match app_id {
        AppId::UserManager => (720, 480),
        AppId::Terminal => (640, 420),
        AppId::HistoryViewer => (720, 480),
        AppId::ReportGenerator => (680, 520),
        AppId::ExportData => (520, 400),
        AppId::AdvancedSettings => (520, 440),
        AppId::WallpaperSettings => (760, 560),
    }
}

/// Rect for a new window, cascading from [`CASCADE_ORIGIN`] by the number of open windows.
pub fn cascade_rect(app_id: AppId, open_windows: usize) -> WindowRect {
    let offset = open_windows as i32 * CASCADE_STEP_PX;
    let (w, h) = default_window_size(app_id);
    WindowRect {
        x: CASCADE_ORIGIN.0 + offset,
        y: CASCADE_ORIGIN.1 + offset,
        w,
        h,
    }
}

/// Raises `app_id` above every other window.
///
/// Returns `false` when no window exists for the app.
pub fn bring_to_front(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.app_id == app_id) else {
        return false;
    };
    state.next_z_index += 1;
    window.z_index = state.next_z_index;
    true
}

/// Rect after dragging from `pointer_start` to `pointer`, kept below the menu bar.
pub fn dragged_rect(
    rect_start: WindowRect,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
) -> WindowRect {
    let moved = rect_start.offset(pointer.x - pointer_start.x, pointer.y - pointer_start.y);
    WindowRect {
        y: moved.y.max(MENU_BAR_HEIGHT_PX),
        ..moved
    }
}

/// Screen-space box the window animates toward.
///
/// Falls back from the app's dock icon to the dock itself, then to a small box starting at the
/// horizontal centre, 40 px above the bottom of the viewport.
pub fn dock_target_rect(
    icon: Option<ScreenRect>,
    dock: Option<ScreenRect>,
    viewport: (f64, f64),
) -> ScreenRect {
    icon.or(dock).unwrap_or_else(|| {
        let (width, height) = viewport;
        ScreenRect {
            left: width / 2.0,
            top: height - FALLBACK_TARGET_BOTTOM_GAP,
            width: FALLBACK_TARGET_WIDTH,
            height: FALLBACK_TARGET_HEIGHT,
        }
    })
}

/// Converts a layout rect into screen space for animation math.
pub fn screen_rect(rect: WindowRect) -> ScreenRect {
    ScreenRect {
        left: f64::from(rect.x),
        top: f64::from(rect.y),
        width: f64::from(rect.w),
        height: f64::from(rect.h),
    }
}

fn docked_keyframe(window: ScreenRect, target: ScreenRect) -> AnimationKeyframe {
    let translate_x = target.center_x() - window.center_x();
    let translate_y = target.center_y() - window.center_y();
    AnimationKeyframe {
        transform: format!("translate({translate_x}px, {translate_y}px) scale({DOCK_SCALE})"),
        opacity: 0.0,
        clip_path: DOCKED_CLIP_PATH.to_string(),
    }
}

fn open_keyframe() -> AnimationKeyframe {
    AnimationKeyframe {
        transform: "translate(0, 0) scale(1)".to_string(),
        opacity: 1.0,
        clip_path: OPEN_CLIP_PATH.to_string(),
    }
}

/// Keyframes for `animation` between the window bounds and the dock target.
pub fn dock_keyframes(
    animation: WindowAnimation,
    window: ScreenRect,
    target: ScreenRect,
) -> Vec<AnimationKeyframe> {
    let open = open_keyframe();
    let docked = docked_keyframe(window, target);
    match animation {
        WindowAnimation::Minimizing => vec![open, docked],
        WindowAnimation::Restoring => vec![docked, open],
    }
}

/// Full animation request for `element_id`.
pub fn dock_animation_request(
    element_id: String,
    animation: WindowAnimation,
    window: ScreenRect,
    target: ScreenRect,
) -> AnimationRequest {
    AnimationRequest {
        element_id,
        keyframes: dock_keyframes(animation, window, target),
        duration_ms: DOCK_ANIMATION_MS,
        easing: DOCK_ANIMATION_EASING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRecord;

    fn record(app_id: AppId) -> WindowRecord {
        WindowRecord {
            app_id,
            rect: cascade_rect(app_id, 0),
            z_index: 0,
            minimized: false,
            maximized: false,
            animation: None,
        }
    }

    #[test]
    fn cascade_offsets_by_open_window_count() {
        let rect = cascade_rect(AppId::Terminal, 2);
        assert_eq!((rect.x, rect.y), (160, 160));
    }

    #[test]
    fn bring_to_front_hands_out_increasing_z() {
        let mut state = DesktopState::default();
        state.windows.push(record(AppId::Terminal));
        state.windows.push(record(AppId::UserManager));

        assert!(bring_to_front(&mut state, AppId::Terminal));
        assert!(bring_to_front(&mut state, AppId::UserManager));
        assert_eq!(state.windows[0].z_index, 101);
        assert_eq!(state.windows[1].z_index, 102);
        assert!(!bring_to_front(&mut state, AppId::ExportData));
    }

    #[test]
    fn drag_is_clamped_below_menu_bar() {
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 200,
        };
        let rect = dragged_rect(
            start,
            PointerPosition { x: 150, y: 110 },
            PointerPosition { x: 90, y: -300 },
        );
        assert_eq!(
            rect,
            WindowRect {
                x: 40,
                y: MENU_BAR_HEIGHT_PX,
                w: 300,
                h: 200
            }
        );
    }

    #[test]
    fn dock_target_falls_back_to_viewport_box() {
        let dock = ScreenRect {
            left: 300.0,
            top: 700.0,
            width: 600.0,
            height: 70.0,
        };
        assert_eq!(dock_target_rect(None, Some(dock), (1200.0, 800.0)), dock);

        let fallback = dock_target_rect(None, None, (1200.0, 800.0));
        assert_eq!((fallback.left, fallback.top), (600.0, 760.0));
        assert_eq!((fallback.width, fallback.height), (80.0, 40.0));
    }

    #[test]
    fn minimize_keyframes_translate_to_target_centre() {
        let window = ScreenRect {
            left: 100.0,
            top: 100.0,
            width: 400.0,
            height: 300.0,
        };
        let target = ScreenRect {
            left: 580.0,
            top: 740.0,
            width: 40.0,
            height: 40.0,
        };
        let frames = dock_keyframes(WindowAnimation::Minimizing, window, target);
        assert_eq!(frames[0].transform, "translate(0, 0) scale(1)");
        assert_eq!(frames[1].transform, "translate(300px, 510px) scale(0.05)");
        assert_eq!(frames[1].clip_path, "inset(55% 45% 0% 45% round 72px)");
        assert_eq!(frames[1].opacity, 0.0);

        let restore = dock_keyframes(WindowAnimation::Restoring, window, target);
        assert_eq!(restore[0], frames[1]);
        assert_eq!(restore[1], frames[0]);

        let request = dock_animation_request(
            "window-terminal".to_string(),
            WindowAnimation::Minimizing,
            window,
            target,
        );
        assert_eq!(request.duration_ms, 420);
        assert_eq!(request.easing, "cubic-bezier(0.22, 0.61, 0.36, 1)");
    }
}
