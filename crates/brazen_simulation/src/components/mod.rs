//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: маркеры агента и цели (Minotaur, Player)
//! - movement: навигация и перемещение (MovementCommand, NavigationState, MovementSpeed)
//! - config: параметры агента и difficulty пресеты (MinotaurConfig, DifficultySettings)
//! - ai: искусственный интеллект (MinotaurState, ListeningSchedule, Investigation)

pub mod actor;
pub mod ai;
pub mod config;
pub mod movement;

// Re-exports для удобного импорта
pub use actor::*;
pub use ai::*;
pub use config::*;
pub use movement::*;
