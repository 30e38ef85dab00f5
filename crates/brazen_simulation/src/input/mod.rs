//! Cursor-lock glue
//!
//! Host шлёт `CursorToggleInput` (нажатие клавиши), crate держит желаемый
//! режим в `CursorLockState`; host применяет его к реальному курсору
//! каждый кадр.

use bevy::prelude::*;

/// Желаемый режим курсора (host читает и применяет)
#[derive(Resource, Debug, Clone, Copy)]
pub struct CursorLockState {
    pub locked: bool,
}

impl Default for CursorLockState {
    fn default() -> Self {
        // Игра стартует с захваченным курсором
        Self { locked: true }
    }
}

/// Нажатие toggle-клавиши (host пишет из своего Input API)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CursorToggleInput;

/// Система: каждый toggle переключает режим
pub fn apply_cursor_toggle(
    mut toggles: EventReader<CursorToggleInput>,
    mut state: ResMut<CursorLockState>,
) {
    for _ in toggles.read() {
        state.locked = !state.locked;
    }
}

/// Cursor Plugin (glue)
pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorLockState>()
            .add_event::<CursorToggleInput>()
            .add_systems(Update, apply_cursor_toggle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_app() -> App {
        let mut app = App::new();
        app.init_resource::<CursorLockState>()
            .add_event::<CursorToggleInput>()
            .add_systems(Update, apply_cursor_toggle);
        app
    }

    #[test]
    fn test_starts_locked() {
        let app = cursor_app();
        assert!(app.world().resource::<CursorLockState>().locked);
    }

    #[test]
    fn test_toggle_flips_lock() {
        let mut app = cursor_app();

        app.world_mut().send_event(CursorToggleInput);
        app.update();
        assert!(!app.world().resource::<CursorLockState>().locked);

        app.world_mut().send_event(CursorToggleInput);
        app.update();
        assert!(app.world().resource::<CursorLockState>().locked);
    }

    #[test]
    fn test_double_toggle_same_frame() {
        let mut app = cursor_app();

        // Два нажатия за кадр аннулируют друг друга
        app.world_mut().send_event(CursorToggleInput);
        app.world_mut().send_event(CursorToggleInput);
        app.update();
        assert!(app.world().resource::<CursorLockState>().locked);
    }
}
