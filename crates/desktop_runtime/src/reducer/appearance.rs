//! Wallpaper transitions: selection, custom images, dynamic cycling, and reseeding.

use platform_host::Wallpaper;

use super::RuntimeEffect;
use crate::{
    model::DesktopState,
    wallpaper::{DYNAMIC_WALLPAPER_INTERVAL_MS, WALLPAPER_TRANSITION_MS},
};

pub(super) fn apply_wallpaper(
    state: &mut DesktopState,
    wallpaper: Wallpaper,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.wallpaper.apply(wallpaper) {
        begin_transition(state, effects);
    }
}

fn begin_transition(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    state.wallpaper_transitioning = true;
    effects.push(RuntimeEffect::ScheduleWallpaperTransitionEnd {
        delay_ms: WALLPAPER_TRANSITION_MS,
    });
}

fn disable_dynamic(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.wallpaper.dynamic_enabled() {
        state.wallpaper.stop_dynamic();
        effects.push(RuntimeEffect::StopDynamicWallpaper);
    }
}

pub(super) fn select_wallpaper(
    state: &mut DesktopState,
    wallpaper_id: &str,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some(wallpaper) = state.wallpaper.get(wallpaper_id).cloned() else {
        return;
    };
    apply_wallpaper(state, wallpaper, effects);
    disable_dynamic(state, effects);
}

pub(super) fn apply_custom_wallpaper(
    state: &mut DesktopState,
    wallpaper: Wallpaper,
    effects: &mut Vec<RuntimeEffect>,
) {
    state.wallpaper.register_custom(wallpaper.clone());
    let registered = Wallpaper {
        is_custom: true,
        ..wallpaper
    };
    apply_wallpaper(state, registered, effects);
    disable_dynamic(state, effects);
    state.status_text = "Custom wallpaper applied".to_string();
}

pub(super) fn set_dynamic_wallpaper(
    state: &mut DesktopState,
    enabled: bool,
    effects: &mut Vec<RuntimeEffect>,
) {
    if enabled && state.wallpaper.start_dynamic() {
        effects.push(RuntimeEffect::StartDynamicWallpaper {
            interval_ms: DYNAMIC_WALLPAPER_INTERVAL_MS,
        });
        state.status_text = "Dynamic wallpaper enabled".to_string();
        return;
    }
    state.wallpaper.stop_dynamic();
    effects.push(RuntimeEffect::StopDynamicWallpaper);
    state.status_text = "Dynamic wallpaper disabled".to_string();
}

pub(super) fn advance_dynamic_wallpaper(
    state: &mut DesktopState,
    effects: &mut Vec<RuntimeEffect>,
) {
    if let Some(next) = state.wallpaper.next_dynamic() {
        apply_wallpaper(state, next, effects);
    }
}

pub(super) fn cycle_login_wallpaper(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if let Some(next) = state.wallpaper.next_for_login() {
        apply_wallpaper(state, next, effects);
    }
}

/// Reseeds the registry and applies the surviving selection without a transition.
pub(super) fn sync_wallpapers(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    let was_dynamic = state.wallpaper.dynamic_enabled();
    state.wallpaper.reset_to_builtins();
    if was_dynamic {
        effects.push(RuntimeEffect::StopDynamicWallpaper);
    }
    state.wallpaper_transitioning = false;
    state.status_text = "Wallpapers refreshed".to_string();
}

#[cfg(test)]
mod tests {
    use platform_host::WallpaperKind;
    use pretty_assertions::assert_eq;

    use crate::{
        model::InteractionState,
        reducer::{reduce_desktop, DesktopAction},
    };

    use super::*;

    fn reduce(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        let mut interaction = InteractionState::default();
        reduce_desktop(state, &mut interaction, action).expect("reduce")
    }

    fn custom(id: &str) -> Wallpaper {
        Wallpaper {
            id: id.to_string(),
            name: "beach.jpg".to_string(),
            kind: WallpaperKind::Image,
            value: "data:image/jpeg;base64,AAAA".to_string(),
            thumbnail: None,
            palette: None,
            is_custom: true,
            is_default: false,
        }
    }

    #[test]
    fn applying_same_wallpaper_twice_changes_nothing() {
        let mut state = DesktopState::default();
        let aurora = state.wallpaper.get("aurora").cloned().expect("aurora");

        let first = reduce(&mut state, DesktopAction::ApplyWallpaper(aurora.clone()));
        assert_eq!(
            first,
            vec![RuntimeEffect::ScheduleWallpaperTransitionEnd { delay_ms: 600 }]
        );
        reduce(&mut state, DesktopAction::EndWallpaperTransition);
        let snapshot = state.clone();

        let second = reduce(&mut state, DesktopAction::ApplyWallpaper(aurora));
        assert!(second.is_empty());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn selecting_wallpaper_disables_dynamic_mode() {
        let mut state = DesktopState::default();
        let effects = reduce(
            &mut state,
            DesktopAction::SetDynamicWallpaper { enabled: true },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::StartDynamicWallpaper {
                interval_ms: 15_000
            }]
        );
        assert_eq!(state.status_text, "Dynamic wallpaper enabled");

        let effects = reduce(
            &mut state,
            DesktopAction::SelectWallpaper {
                wallpaper_id: "sonoma-dunes".to_string(),
            },
        );
        assert!(effects.contains(&RuntimeEffect::StopDynamicWallpaper));
        assert!(!state.wallpaper.dynamic_enabled());
        assert_eq!(state.wallpaper.current_id(), "sonoma-dunes");
    }

    #[test]
    fn dynamic_tick_advances_registry() {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::SetDynamicWallpaper { enabled: true },
        );
        reduce(&mut state, DesktopAction::AdvanceDynamicWallpaper);
        assert_eq!(state.wallpaper.current_id(), "monterey-waves");
    }

    #[test]
    fn second_custom_replaces_first() {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::ApplyCustomWallpaper(custom("custom-1")),
        );
        reduce(
            &mut state,
            DesktopAction::ApplyCustomWallpaper(custom("custom-2")),
        );
        let customs: Vec<_> = state
            .wallpaper
            .entries()
            .iter()
            .filter(|w| w.is_custom)
            .map(|w| w.id.clone())
            .collect();
        assert_eq!(customs, vec!["custom-2".to_string()]);
        assert_eq!(state.status_text, "Custom wallpaper applied");
    }

    #[test]
    fn sync_drops_custom_and_falls_back_to_default() {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::ApplyCustomWallpaper(custom("custom-7")),
        );
        reduce(&mut state, DesktopAction::SyncWallpapers);
        assert!(state.wallpaper.custom().is_none());
        assert_eq!(state.wallpaper.current_id(), "ventura-sky");
        assert_eq!(state.status_text, "Wallpapers refreshed");
    }

    #[test]
    fn login_switcher_steps_through_registry() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::CycleLoginWallpaper);
        assert_eq!(state.wallpaper.current_id(), "monterey-waves");
        assert!(state.wallpaper_transitioning);
    }
}
