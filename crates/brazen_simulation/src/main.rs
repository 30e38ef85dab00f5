//! Headless симуляция Brazen
//!
//! Запускает Bevy App без рендера: один минотавр + неподвижная цель,
//! navmesh-заглушка вместо хоста.

use bevy::prelude::*;
use brazen_simulation::{
    create_headless_app, Minotaur, MinotaurState, NavigationHost, OpenFieldNavMesh, Player,
    SimulationPlugin,
};

fn main() {
    let seed = 42;
    println!("Starting Brazen headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(NavigationHost::new(OpenFieldNavMesh));

    app.world_mut().spawn((
        Minotaur,
        Transform::from_translation(Vec3::ZERO),
    ));
    app.world_mut().spawn((
        Player,
        Transform::from_translation(Vec3::new(40.0, 0.0, 40.0)),
    ));

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let mut states = app.world_mut().query::<&MinotaurState>();
            for state in states.iter(app.world()) {
                println!("Tick {}: minotaur state = {:?}", tick, state);
            }
        }
    }

    println!("Simulation complete!");
}
