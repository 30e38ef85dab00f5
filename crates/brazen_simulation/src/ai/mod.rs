//! AI decision-making module
//!
//! FSM враждебного агента: perception → timed phases → navigation/audio bridges.

use bevy::prelude::*;

pub mod components;
pub mod systems;

// Re-export основных типов
pub use components::fsm::{Investigation, ListeningSchedule, MinotaurState};
pub use systems::fsm::{
    apply_difficulty_presets, minotaur_fsm_transitions, minotaur_spawn_init, ARRIVAL_RADIUS,
};
pub use systems::movement::minotaur_movement_from_state;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. minotaur_spawn_init — стартовый wander приказ
/// 2. minotaur_fsm_transitions — perception + таймеры + transitions
/// 3. minotaur_movement_from_state — state → MovementCommand
/// 4. minotaur_audio_cues — state → AudioCue
/// 5. apply_difficulty_presets — глобальный override скоростей (после state логики)
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<crate::audio::AudioCue>()
            .init_resource::<crate::components::DifficultySettings>()
            .add_systems(
                FixedUpdate,
                (
                    systems::fsm::minotaur_spawn_init,
                    systems::fsm::minotaur_fsm_transitions,
                    systems::movement::minotaur_movement_from_state,
                    crate::audio::minotaur_audio_cues,
                    systems::fsm::apply_difficulty_presets,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            );
    }
}
