//! FSM системы: spawn init, state transitions, difficulty override.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::{Investigation, ListeningSchedule, MinotaurState};
use crate::components::{
    DifficultySettings, Minotaur, MinotaurConfig, MovementCommand, MovementSpeed, NavigationState,
    Player,
};
use crate::navigation::NavigationHost;
use crate::perception::{can_see_target, target_made_noise, RaycastHost};
use crate::DeterministicRng;

/// Дистанция прибытия: remaining_distance меньше — считаем что доехали
pub const ARRIVAL_RADIUS: f32 = 1.0;

/// Система: стартовый wander приказ сразу после спавна
///
/// Агент рождается в Wandering и сразу получает destination.
pub fn minotaur_spawn_init(
    mut query: Query<
        (
            &MinotaurConfig,
            &Transform,
            &mut MovementCommand,
            &mut MovementSpeed,
            &mut NavigationState,
            &mut Investigation,
        ),
        Added<Minotaur>,
    >,
    mut rng: ResMut<DeterministicRng>,
    navmesh: Option<Res<NavigationHost>>,
) {
    for (config, transform, mut command, mut speed, mut nav, mut investigation) in query.iter_mut()
    {
        speed.speed = config.wander_speed;
        issue_wander(
            config,
            transform,
            &mut rng,
            navmesh.as_deref(),
            &mut command,
            &mut nav,
            &mut investigation,
        );
    }
}

/// Система: FSM transitions
///
/// Порядок приоритетов в Wandering (проверяется каждый тик):
/// 1. Видим цель → PreparingToCharge
/// 2. Слышим цель → investigate (остаёмся в Wandering)
/// 3. Дедлайн listening наступил → Listening
/// 4. Доехали (remaining < 1) → новый wander destination,
///    либо Searching если доехали до неподтверждённого шума
pub fn minotaur_fsm_transitions(
    mut query: Query<
        (
            Entity,
            &mut MinotaurState,
            &mut ListeningSchedule,
            &mut Investigation,
            &MinotaurConfig,
            &Transform,
            &mut MovementCommand,
            &mut MovementSpeed,
            &mut NavigationState,
        ),
        With<Minotaur>,
    >,
    players: Query<(Entity, &Transform), (With<Player>, Without<Minotaur>)>,
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
    raycast: Option<Res<RaycastHost>>,
    navmesh: Option<Res<NavigationHost>>,
) {
    let delta = time.delta_secs();
    let now = time.elapsed_secs();

    // Цель опциональна: отсутствие — валидное состояние, не ошибка
    let target = players.iter().next().map(|(e, t)| (e, t.translation));

    for (
        entity,
        mut state,
        mut schedule,
        mut investigation,
        config,
        transform,
        mut command,
        mut speed,
        mut nav,
    ) in query.iter_mut()
    {
        let sees = target.map_or(false, |(target_entity, target_position)| {
            can_see_target(
                config,
                transform,
                target_entity,
                target_position,
                raycast.as_deref(),
            )
        });
        let hears = target.map_or(false, |(_, target_position)| {
            target_made_noise(
                transform.translation,
                target_position,
                config.noise_attraction_radius,
            )
        });

        let new_state = match &*state {
            MinotaurState::Wandering => {
                if sees {
                    crate::log(&format!(
                        "⚔️ {:?} Wandering → PreparingToCharge (цель замечена)",
                        entity
                    ));
                    investigation.point = None;
                    MinotaurState::PreparingToCharge {
                        timer: config.charge_delay,
                    }
                } else if hears {
                    // Investigate — действие внутри Wandering, не состояние
                    if let Some((_, target_position)) = target {
                        investigate_noise(
                            entity,
                            target_position,
                            &mut command,
                            &mut nav,
                            &mut investigation,
                        );
                    }
                    MinotaurState::Wandering
                } else if now >= schedule.next_listening_time {
                    crate::log(&format!("👂 {:?} Wandering → Listening", entity));
                    *command = MovementCommand::Hold;
                    MinotaurState::Listening {
                        timer: config.listening_duration,
                    }
                } else if nav.remaining_distance < ARRIVAL_RADIUS {
                    if investigation.point.take().is_some() {
                        // Дошли до источника шума, цели нет — осматриваемся
                        crate::log(&format!(
                            "🔍 {:?} Wandering → Searching (шум не подтвердился)",
                            entity
                        ));
                        speed.speed = config.search_speed;
                        MinotaurState::Searching
                    } else {
                        issue_wander(
                            config,
                            transform,
                            &mut rng,
                            navmesh.as_deref(),
                            &mut command,
                            &mut nav,
                            &mut investigation,
                        );
                        MinotaurState::Wandering
                    }
                } else {
                    MinotaurState::Wandering
                }
            }

            MinotaurState::Listening { timer } => {
                if hears {
                    // Шум прерывает фазу; дедлайн следующей НЕ переносится
                    if let Some((_, target_position)) = target {
                        investigate_noise(
                            entity,
                            target_position,
                            &mut command,
                            &mut nav,
                            &mut investigation,
                        );
                    }
                    MinotaurState::Wandering
                } else {
                    let new_timer = (timer - delta).max(0.0);
                    if new_timer <= 0.0 {
                        // Непрерванное завершение — единственное место где
                        // переносится дедлайн
                        schedule.next_listening_time = now + config.listening_interval;
                        crate::log(&format!(
                            "👂 {:?} Listening → Wandering (next listen at {:.1}s)",
                            entity, schedule.next_listening_time
                        ));
                        issue_wander(
                            config,
                            transform,
                            &mut rng,
                            navmesh.as_deref(),
                            &mut command,
                            &mut nav,
                            &mut investigation,
                        );
                        MinotaurState::Wandering
                    } else {
                        MinotaurState::Listening { timer: new_timer }
                    }
                }
            }

            MinotaurState::PreparingToCharge { timer } => {
                let new_timer = (timer - delta).max(0.0);
                if new_timer > 0.0 {
                    MinotaurState::PreparingToCharge { timer: new_timer }
                } else if let Some((_, target_position)) = target {
                    match (target_position - transform.translation).try_normalize() {
                        Some(direction) => {
                            // Destination = прямая точка рывка; velocity форсится
                            // movement системой каждый тик
                            let dash = direction * config.charge_speed * config.charge_duration;
                            *command = MovementCommand::MoveToPosition {
                                target: transform.translation + dash,
                            };
                            nav.remaining_distance = f32::INFINITY;
                            speed.speed = config.charge_speed;
                            crate::log(&format!(
                                "🐂 {:?} PreparingToCharge → Charging ({:?})",
                                entity, direction
                            ));
                            MinotaurState::Charging {
                                direction,
                                timer: config.charge_duration,
                            }
                        }
                        // Цель в той же точке — направление не определено
                        None => MinotaurState::PreparingToCharge { timer: 0.0 },
                    }
                } else {
                    // Цели нет — молча остаёмся, попробуем на следующем тике
                    MinotaurState::PreparingToCharge { timer: 0.0 }
                }
            }

            MinotaurState::Charging { direction, timer } => {
                let new_timer = (timer - delta).max(0.0);
                if new_timer <= 0.0 {
                    crate::log(&format!("{:?} Charging → Recovering", entity));
                    *command = MovementCommand::Hold;
                    MinotaurState::Recovering {
                        timer: config.recovery_time,
                    }
                } else {
                    MinotaurState::Charging {
                        direction: *direction,
                        timer: new_timer,
                    }
                }
            }

            MinotaurState::Recovering { timer } => {
                let new_timer = (timer - delta).max(0.0);
                if new_timer <= 0.0 {
                    crate::log(&format!("{:?} Recovering → Wandering", entity));
                    speed.speed = config.wander_speed;
                    issue_wander(
                        config,
                        transform,
                        &mut rng,
                        navmesh.as_deref(),
                        &mut command,
                        &mut nav,
                        &mut investigation,
                    );
                    MinotaurState::Wandering
                } else {
                    MinotaurState::Recovering { timer: new_timer }
                }
            }

            MinotaurState::Searching => {
                // Destination прибита к собственной позиции (movement система) —
                // arrival выполняется тривиально
                if nav.remaining_distance < ARRIVAL_RADIUS {
                    crate::log(&format!("{:?} Searching → Calming", entity));
                    MinotaurState::Calming {
                        time_since_last_seen: 0.0,
                    }
                } else {
                    MinotaurState::Searching
                }
            }

            MinotaurState::Calming { time_since_last_seen } => {
                if sees {
                    crate::log(&format!(
                        "⚔️ {:?} Calming → PreparingToCharge (цель снова замечена)",
                        entity
                    ));
                    MinotaurState::PreparingToCharge {
                        timer: config.charge_delay,
                    }
                } else {
                    let elapsed = time_since_last_seen + delta;
                    if elapsed >= config.calm_down_time {
                        crate::log(&format!("{:?} Calming → Wandering (успокоился)", entity));
                        speed.speed = config.wander_speed;
                        issue_wander(
                            config,
                            transform,
                            &mut rng,
                            navmesh.as_deref(),
                            &mut command,
                            &mut nav,
                            &mut investigation,
                        );
                        MinotaurState::Wandering
                    } else {
                        MinotaurState::Calming {
                            time_since_last_seen: elapsed,
                        }
                    }
                }
            }
        };

        if *state != new_state {
            *state = new_state;
        }
    }
}

/// Система: difficulty override (после state логики, каждый тик)
///
/// Читает инжектированный flag и жёстко ставит тройку скоростей в один из
/// двух пресетов. Промежуточных значений нет.
pub fn apply_difficulty_presets(
    settings: Res<DifficultySettings>,
    mut query: Query<&mut MinotaurConfig, With<Minotaur>>,
) {
    let preset = settings.preset();
    for mut config in query.iter_mut() {
        if config.charge_speed != preset.charge
            || config.wander_speed != preset.wander
            || config.search_speed != preset.search
        {
            config.charge_speed = preset.charge;
            config.wander_speed = preset.wander;
            config.search_speed = preset.search;
        }
    }
}

/// Helper: выдать новый случайный wander destination
///
/// Отказ navmesh (нет resource / нет проходимой точки) — не ошибка:
/// приказ просто не выдаётся, агент стоит до следующей удачной выборки.
fn issue_wander(
    config: &MinotaurConfig,
    transform: &Transform,
    rng: &mut DeterministicRng,
    navmesh: Option<&NavigationHost>,
    command: &mut MovementCommand,
    nav: &mut NavigationState,
    investigation: &mut Investigation,
) {
    // Новый wander закрывает любое текущее расследование шума
    investigation.point = None;

    let Some(host) = navmesh else {
        return;
    };

    let offset = Vec3::new(
        rng.rng.gen_range(-config.wander_radius..config.wander_radius),
        0.0,
        rng.rng.gen_range(-config.wander_radius..config.wander_radius),
    );

    let Some(point) = host
        .0
        .sample_point(transform.translation + offset, config.wander_radius)
    else {
        crate::log("wander: navmesh не дал проходимой точки, стоим");
        return;
    };

    *command = MovementCommand::MoveToPosition { target: point };
    nav.remaining_distance = f32::INFINITY;
}

/// Helper: выдвинуться к источнику шума
///
/// Команда переписывается только при смене точки — иначе Changed<MovementCommand>
/// спамит host каждый тик.
fn investigate_noise(
    entity: Entity,
    noise_position: Vec3,
    command: &mut MovementCommand,
    nav: &mut NavigationState,
    investigation: &mut Investigation,
) {
    let already_going =
        matches!(command, MovementCommand::MoveToPosition { target } if *target == noise_position);
    if !already_going {
        crate::log(&format!(
            "🔊 {:?} слышит цель, investigate → {:?}",
            entity, noise_position
        ));
        *command = MovementCommand::MoveToPosition {
            target: noise_position,
        };
        nav.remaining_distance = f32::INFINITY;
    }
    investigation.point = Some(noise_position);
}
