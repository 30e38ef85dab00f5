//! Scene-transition glue: триггер-объём → запрос смены сцены
//!
//! Загрузка сцен — целиком на стороне хоста. Crate только сообщает
//! "игрок вошёл в телепорт" через `SceneChangeRequest`.

use bevy::prelude::*;

use crate::components::Player;

/// Триггер-объём перехода между сценами
#[derive(Component, Debug, Clone)]
pub struct Teleporter {
    /// Имя сцены для загрузки (host мапит на свой asset)
    pub scene_to_load: String,
    /// Радиус срабатывания (метры)
    pub radius: f32,
    /// Уже сработал; перевзводится когда игрок вышел из радиуса
    pub triggered: bool,
}

impl Teleporter {
    pub fn new(scene_to_load: impl Into<String>, radius: f32) -> Self {
        Self {
            scene_to_load: scene_to_load.into(),
            radius,
            triggered: false,
        }
    }
}

/// Команда хосту: загрузить сцену
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SceneChangeRequest {
    pub scene: String,
}

/// Система: проверка входа игрока в триггер-объёмы
///
/// Событие выдаётся один раз на вход; повторное срабатывание — только
/// после выхода из радиуса.
pub fn teleporter_triggers(
    mut teleporters: Query<(&mut Teleporter, &Transform)>,
    players: Query<&Transform, (With<Player>, Without<Teleporter>)>,
    mut requests: EventWriter<SceneChangeRequest>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };

    for (mut teleporter, transform) in teleporters.iter_mut() {
        let inside =
            transform.translation.distance(player.translation) < teleporter.radius;

        if inside && !teleporter.triggered {
            teleporter.triggered = true;
            crate::log(&format!("teleporter → scene '{}'", teleporter.scene_to_load));
            requests.write(SceneChangeRequest {
                scene: teleporter.scene_to_load.clone(),
            });
        } else if !inside && teleporter.triggered {
            teleporter.triggered = false;
        }
    }
}

/// Scene Plugin (glue, без собственного состояния кроме triggered флагов)
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SceneChangeRequest>()
            .add_systems(FixedUpdate, teleporter_triggers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_requests(app: &mut App) -> Vec<SceneChangeRequest> {
        let mut events = app.world_mut().resource_mut::<Events<SceneChangeRequest>>();
        events.drain().collect()
    }

    fn scene_app() -> App {
        let mut app = App::new();
        app.add_event::<SceneChangeRequest>()
            .add_systems(Update, teleporter_triggers);
        app
    }

    #[test]
    fn test_player_entering_trigger_fires_once() {
        let mut app = scene_app();
        app.world_mut().spawn((
            Teleporter::new("labyrinth_2", 2.0),
            Transform::from_translation(Vec3::ZERO),
        ));
        let player = app
            .world_mut()
            .spawn((Player, Transform::from_translation(Vec3::new(10.0, 0.0, 0.0))))
            .id();

        // Далеко — тишина
        app.update();
        assert!(drain_requests(&mut app).is_empty());

        // Вошёл в радиус — ровно один запрос
        app.world_mut().get_mut::<Transform>(player).unwrap().translation = Vec3::new(1.0, 0.0, 0.0);
        app.update();
        app.update();
        let requests = drain_requests(&mut app);
        assert_eq!(
            requests,
            vec![SceneChangeRequest {
                scene: "labyrinth_2".to_string()
            }]
        );
    }

    #[test]
    fn test_trigger_rearms_after_exit() {
        let mut app = scene_app();
        app.world_mut().spawn((
            Teleporter::new("labyrinth_2", 2.0),
            Transform::from_translation(Vec3::ZERO),
        ));
        let player = app
            .world_mut()
            .spawn((Player, Transform::from_translation(Vec3::new(1.0, 0.0, 0.0))))
            .id();

        app.update();
        assert_eq!(drain_requests(&mut app).len(), 1);

        // Вышел и вернулся — триггер перевзвёлся
        app.world_mut().get_mut::<Transform>(player).unwrap().translation = Vec3::new(5.0, 0.0, 0.0);
        app.update();
        app.world_mut().get_mut::<Transform>(player).unwrap().translation = Vec3::ZERO;
        app.update();
        assert_eq!(drain_requests(&mut app).len(), 1);
    }

    #[test]
    fn test_no_player_is_noop() {
        let mut app = scene_app();
        app.world_mut().spawn((
            Teleporter::new("labyrinth_2", 2.0),
            Transform::from_translation(Vec3::ZERO),
        ));

        app.update();
        assert!(drain_requests(&mut app).is_empty());
    }
}
