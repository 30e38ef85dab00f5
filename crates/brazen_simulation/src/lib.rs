//! Brazen Simulation Core
//!
//! ECS-симуляция враждебного агента (минотавра) на Bevy 0.16.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (FSM, perception, расписание фаз)
//! - Host engine = tactical layer (pathfinding, physics raycast, audio, scenes)
//!
//! Crate пишет команды (`MovementCommand`, `AudioCue`, `SceneChangeRequest`),
//! host исполняет их и возвращает `NavigationState` + `RaycastHost`/`NavigationHost`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod audio;
pub mod components;
pub mod input;
pub mod logger;
pub mod navigation;
pub mod perception;
pub mod scene;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, Investigation, ListeningSchedule, MinotaurState};
pub use audio::{AudioCue, CueKind, CueTracker};
pub use components::*;
pub use input::{CursorLockState, CursorPlugin, CursorToggleInput};
pub use logger::{log, log_error, log_info, log_warning};
pub use navigation::{NavMeshQuery, NavigationHost, OpenFieldNavMesh};
pub use perception::{RayHit, RaycastHost, RaycastQuery};
pub use scene::{SceneChangeRequest, ScenePlugin, Teleporter};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // Детерминистичный RNG (seed по умолчанию; не затираем seed из create_headless_app)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        // Подсистемы (ECS strategic layer)
        app.add_plugins((AIPlugin, ScenePlugin, CursorPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
/// (Debug-формат достаточен: сравниваем байты, не читаем их)
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
