//! Property-based тесты детерминизма
//!
//! Wander-поведение с одинаковым seed даёт идентичные траектории:
//! единственный источник случайности — DeterministicRng.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use brazen_simulation::*;

/// Host-заглушка движения: интегрирует позицию и отчитывается remaining_distance
fn host_movement_stub(
    time: Res<Time<Fixed>>,
    mut query: Query<(
        &MovementCommand,
        &MovementSpeed,
        &mut Transform,
        &mut NavigationState,
    )>,
) {
    let delta = time.delta_secs();
    for (command, speed, mut transform, mut nav) in query.iter_mut() {
        match command {
            MovementCommand::MoveToPosition { target } => {
                let to_target = *target - transform.translation;
                let distance = to_target.length();
                let step = speed.speed * delta;
                if distance > step && distance > 0.0 {
                    transform.translation += to_target / distance * step;
                } else {
                    transform.translation = *target;
                }
                nav.remaining_distance = transform.translation.distance(*target);
            }
            MovementCommand::ForceVelocity { velocity } => {
                transform.translation += *velocity * delta;
            }
            MovementCommand::Hold | MovementCommand::Idle => {}
        }
    }
}

/// Запускает симуляцию и возвращает snapshot мира
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .insert_resource(NavigationHost::new(OpenFieldNavMesh));
    app.add_systems(
        FixedUpdate,
        host_movement_stub.before(brazen_simulation::ai::minotaur_spawn_init),
    );

    app.world_mut()
        .spawn((Minotaur, Transform::from_translation(Vec3::ZERO)));

    for _ in 0..tick_count {
        app.update();
    }

    // Snapshot: состояние FSM + команды + позиции
    let mut snapshot = world_snapshot::<MinotaurState>(app.world_mut());
    snapshot.extend(world_snapshot::<MovementCommand>(app.world_mut()));
    snapshot.extend(world_snapshot::<Transform>(app.world_mut()));
    snapshot
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 2000;

    // Первый прогон
    let snapshot1 = run_simulation(SEED, TICK_COUNT);

    // Второй прогон с тем же seed
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    // Снепшоты должны быть идентичны
    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 1000;

    // Запускаем 3 раза — все должны быть идентичны
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICK_COUNT)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}
