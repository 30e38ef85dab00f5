//! Movement компоненты: навигация, скорость, команды перемещения

use bevy::prelude::*;

/// Команда движения для агента (исполняется navigation engine хоста)
///
/// Архитектура:
/// - ECS система пишет MovementCommand (high-level intent)
/// - Host система читает и конвертирует в navigation agent target / velocity
/// - Host physics применяет движение
#[derive(Component, Debug, Clone, PartialEq)]
pub enum MovementCommand {
    /// Не выдавать новых приказов (navigation agent доезжает текущий путь)
    Idle,
    /// Двигаться к позиции (world coordinates)
    MoveToPosition { target: Vec3 },
    /// Прямолинейная velocity, минуя path-following (charge)
    ForceVelocity { velocity: Vec3 },
    /// Стоять на месте (navigation agent приостановлен)
    Hold,
}

impl Default for MovementCommand {
    fn default() -> Self {
        Self::Idle
    }
}

/// Readback навигации от хоста (обновляется каждый тик)
///
/// remaining_distance = INFINITY пока host не отчитался или после новой
/// команды: "ещё не приехали" — безопасный default, arrival не срабатывает
/// на устаревших данных.
#[derive(Component, Clone, Copy, Debug)]
pub struct NavigationState {
    /// Оставшееся расстояние до текущей destination (метры)
    pub remaining_distance: f32,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            remaining_distance: f32::INFINITY,
        }
    }
}

/// Скорость движения агента (метры/сек)
///
/// Host navigation agent использует её для расчёта velocity
#[derive(Component, Clone, Copy, Debug)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 2.0 } // базовая скорость ходьбы (wander)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_command_default() {
        assert_eq!(MovementCommand::default(), MovementCommand::Idle);
    }

    #[test]
    fn test_navigation_state_default_not_arrived() {
        let nav = NavigationState::default();
        // INFINITY — arrival check (< 1.0) не должен сработать без host readback
        assert!(nav.remaining_distance >= 1.0);
    }
}
