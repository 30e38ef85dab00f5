//! FSM AI components (state machine, listening schedule, investigation).

use bevy::prelude::*;

/// FSM состояния минотавра
///
/// Ровно один вариант активен; countdown таймеры и направление charge живут
/// внутри варианта. Следствия представления:
/// - максимум один таймер на агента в любой момент
/// - повторный вход в состояние перезапускает таймер с полной длительности
/// - таймер не может сработать после выхода из состояния (уходит вместе
///   с вариантом — "поколение" таймера совпадает с поколением состояния)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum MinotaurState {
    /// Wandering — случайное блуждание; сюда же входит investigate-поведение
    /// (движение на шум остаётся действием внутри Wandering, не состоянием)
    Wandering,

    /// Listening — пассивное прослушивание, навигация приостановлена
    Listening {
        /// Оставшееся время фазы (сек)
        timer: f32,
    },

    /// PreparingToCharge — телеграф перед рывком
    PreparingToCharge {
        /// Оставшаяся задержка (сек)
        timer: f32,
    },

    /// Charging — прямолинейный рывок, препятствия не объезжаются
    Charging {
        /// Unit vector; фиксируется при входе и не меняется до конца рывка
        direction: Vec3,
        /// Оставшееся время рывка (сек)
        timer: f32,
    },

    /// Searching — stop-and-scan: destination прибита к собственной позиции
    Searching,

    /// Calming — остывание после потери цели
    Calming {
        /// Накопленное время с последнего контакта (сек); обнуляется при входе
        time_since_last_seen: f32,
    },

    /// Recovering — cooldown после рывка, навигация приостановлена
    Recovering {
        /// Оставшееся время восстановления (сек)
        timer: f32,
    },
}

impl Default for MinotaurState {
    fn default() -> Self {
        Self::Wandering
    }
}

/// Расписание listening фаз
///
/// Единственный таймер-исключение: абсолютный дедлайн, не countdown.
/// Переносится ТОЛЬКО при непрерванном завершении listening фазы —
/// прерванная шумом фаза оставляет старый дедлайн в силе.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ListeningSchedule {
    /// Абсолютное simulation time следующей listening фазы (сек)
    pub next_listening_time: f32,
}

/// Последний investigate-пункт (источник шума)
///
/// Investigate — действие внутри Wandering; компонент хранит куда шли,
/// чтобы прибытие без подтверждения шума перевело в Searching.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Investigation {
    pub point: Option<Vec3>,
}
