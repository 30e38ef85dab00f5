//! Маркеры акторов: Minotaur (враждебный агент), Player (цель)

use bevy::prelude::*;

use crate::ai::{Investigation, ListeningSchedule, MinotaurState};
use crate::audio::CueTracker;
use crate::components::config::MinotaurConfig;
use crate::components::movement::{MovementCommand, MovementSpeed, NavigationState};

/// Враждебный агент (минотавр)
///
/// Автоматически добавляет FSM, config, навигационные и audio компоненты
/// через Required Components. Transform спавнится явно (host authoritative).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(
    MinotaurState,
    MinotaurConfig,
    ListeningSchedule,
    Investigation,
    MovementCommand,
    MovementSpeed,
    NavigationState,
    CueTracker
)]
pub struct Minotaur;

/// Цель агента (игрок) — read-only reference для perception
///
/// Позиция читается каждый тик. Отсутствие entity — валидное состояние:
/// инициация charge без цели молча не происходит.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Player;
