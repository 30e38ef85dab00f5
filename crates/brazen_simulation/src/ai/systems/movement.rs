//! AI movement systems.

use bevy::prelude::*;

use crate::ai::MinotaurState;
use crate::components::{Minotaur, MinotaurConfig, MovementCommand};

/// Система: state → MovementCommand
///
/// Поддерживает команды, которые должны держаться каждый тик:
/// - Charging: прямолинейная velocity поверх path-following
/// - Listening/Recovering: навигация приостановлена
/// - Searching: destination = собственная позиция (stop-and-scan)
///
/// Destination для Wandering/investigate выдаёт transitions система.
pub fn minotaur_movement_from_state(
    mut query: Query<
        (
            &MinotaurState,
            &MinotaurConfig,
            &Transform,
            &mut MovementCommand,
        ),
        With<Minotaur>,
    >,
) {
    for (state, config, transform, mut command) in query.iter_mut() {
        match state {
            MinotaurState::Charging { direction, .. } => {
                // Каждый тик: никаких объездов, только прямая
                let velocity = *direction * config.charge_speed;
                let already =
                    matches!(&*command, MovementCommand::ForceVelocity { velocity: v } if *v == velocity);
                if !already {
                    *command = MovementCommand::ForceVelocity { velocity };
                }
            }

            MinotaurState::Listening { .. } | MinotaurState::Recovering { .. } => {
                if !matches!(&*command, MovementCommand::Hold) {
                    *command = MovementCommand::Hold;
                }
            }

            MinotaurState::Searching => {
                let here = transform.translation;
                let already =
                    matches!(&*command, MovementCommand::MoveToPosition { target } if *target == here);
                if !already {
                    *command = MovementCommand::MoveToPosition { target: here };
                }
            }

            MinotaurState::Wandering
            | MinotaurState::PreparingToCharge { .. }
            | MinotaurState::Calming { .. } => {
                // Команду не трогаем: агент доезжает текущий путь
            }
        }
    }
}
