//! AI компоненты: state machine, расписание, investigation

// NOTE: MinotaurState и связанные компоненты определены в crate::ai module
// Экспортируем их здесь для единообразия, но они живут в ai/components/fsm.rs

// Re-export из ai module (избегаем дублирования)
pub use crate::ai::{Investigation, ListeningSchedule, MinotaurState};
