//! Output bridge: audio cues для хоста
//!
//! Fire-and-forget: crate пишет `AudioCue` events, host проигрывает.
//! Обратной связи нет — состояние плеера нас не интересует.

use bevy::prelude::*;

use crate::ai::MinotaurState;
use crate::components::Minotaur;

/// Идентификатор звука (host мапит на свои AudioClip'ы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CueKind {
    Wander,
    Charge,
    Recovery,
    Listening,
}

/// Команда хосту: проиграть звук
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AudioCue {
    pub cue: CueKind,
    pub looped: bool,
}

/// Последний выданный cue (дедупликация: зацикленный wander не перезапускаем
/// каждый тик)
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct CueTracker {
    pub last: Option<CueKind>,
}

/// Система: cue по текущему состоянию FSM
///
/// Searching/Calming своего звука не имеют — tracker не трогаем, чтобы
/// возврат в Wandering перезапустил wander loop.
pub fn minotaur_audio_cues(
    mut query: Query<(&MinotaurState, &mut CueTracker), With<Minotaur>>,
    mut cues: EventWriter<AudioCue>,
) {
    for (state, mut tracker) in query.iter_mut() {
        let desired = match state {
            MinotaurState::Wandering => Some((CueKind::Wander, true)),
            MinotaurState::Listening { .. } => Some((CueKind::Listening, false)),
            MinotaurState::PreparingToCharge { .. } | MinotaurState::Charging { .. } => {
                Some((CueKind::Charge, false))
            }
            MinotaurState::Recovering { .. } => Some((CueKind::Recovery, false)),
            MinotaurState::Searching | MinotaurState::Calming { .. } => None,
        };

        let Some((cue, looped)) = desired else {
            continue;
        };

        if tracker.last != Some(cue) {
            tracker.last = Some(cue);
            cues.write(AudioCue { cue, looped });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Minotaur;
    use bevy::prelude::*;

    fn drain_cues(app: &mut App) -> Vec<AudioCue> {
        let mut events = app.world_mut().resource_mut::<Events<AudioCue>>();
        events.drain().collect()
    }

    fn cue_app() -> App {
        let mut app = App::new();
        app.add_event::<AudioCue>()
            .add_systems(Update, minotaur_audio_cues);
        app
    }

    #[test]
    fn test_wander_cue_fires_once() {
        let mut app = cue_app();
        app.world_mut()
            .spawn((Minotaur, Transform::default()));

        app.update();
        let first = drain_cues(&mut app);
        assert_eq!(
            first,
            vec![AudioCue {
                cue: CueKind::Wander,
                looped: true
            }]
        );

        // Повторный тик в том же состоянии — cue не дублируется
        app.update();
        app.update();
        let rest = drain_cues(&mut app);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_state_change_fires_new_cue() {
        let mut app = cue_app();
        let agent = app
            .world_mut()
            .spawn((Minotaur, Transform::default()))
            .id();

        app.update();
        drain_cues(&mut app);

        *app.world_mut().get_mut::<MinotaurState>(agent).unwrap() =
            MinotaurState::Recovering { timer: 2.0 };
        app.update();

        let cues = drain_cues(&mut app);
        assert_eq!(
            cues,
            vec![AudioCue {
                cue: CueKind::Recovery,
                looped: false
            }]
        );
    }

    #[test]
    fn test_searching_keeps_previous_cue() {
        let mut app = cue_app();
        let agent = app
            .world_mut()
            .spawn((Minotaur, Transform::default()))
            .id();

        app.update();
        drain_cues(&mut app);

        // Searching не имеет своего звука — ничего не выдаём
        *app.world_mut().get_mut::<MinotaurState>(agent).unwrap() = MinotaurState::Searching;
        app.update();
        assert!(drain_cues(&mut app).is_empty());

        // Возврат в Wandering перезапускает wander loop
        *app.world_mut().get_mut::<MinotaurState>(agent).unwrap() = MinotaurState::Wandering;
        app.update();
        let cues = drain_cues(&mut app);
        assert_eq!(
            cues,
            vec![AudioCue {
                cue: CueKind::Wander,
                looped: true
            }]
        );
    }
}
