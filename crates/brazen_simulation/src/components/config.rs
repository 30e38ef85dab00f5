//! Конфигурация агента и difficulty пресеты

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Параметры минотавра (все настраиваются извне, defaults как в игре)
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MinotaurConfig {
    /// Радиус случайного wander target (метры)
    pub wander_radius: f32,
    /// Радиус слуха (метры); стены звук НЕ блокируют
    pub noise_attraction_radius: f32,
    /// Полный угол зрения (градусы)
    pub vision_angle: f32,
    /// Максимальная дальность зрения (метры)
    pub vision_distance: f32,
    /// Скорость charge (м/с)
    pub charge_speed: f32,
    /// Скорость ходьбы (м/с)
    pub wander_speed: f32,
    /// Скорость во время search (м/с)
    pub search_speed: f32,
    /// Время до прекращения поиска (сек)
    pub calm_down_time: f32,
    /// Задержка-телеграф перед charge (сек)
    pub charge_delay: f32,
    /// Cooldown после charge (сек)
    pub recovery_time: f32,
    /// Длительность рывка вперёд (сек)
    pub charge_duration: f32,
    /// Интервал между listening фазами (сек)
    pub listening_interval: f32,
    /// Длительность listening фазы (сек)
    pub listening_duration: f32,
}

impl Default for MinotaurConfig {
    fn default() -> Self {
        Self {
            wander_radius: 50.0,
            noise_attraction_radius: 15.0,
            vision_angle: 120.0,
            vision_distance: 20.0,
            charge_speed: 10.0,
            wander_speed: 2.0,
            search_speed: 8.0,
            calm_down_time: 10.0,
            charge_delay: 1.5,
            recovery_time: 2.0,
            charge_duration: 3.0,
            listening_interval: 20.0,
            listening_duration: 6.0,
        }
    }
}

/// Тройка скоростей (charge, wander, search)
///
/// Ровно два пресета, промежуточных значений нет.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedPreset {
    pub charge: f32,
    pub wander: f32,
    pub search: f32,
}

/// Slow-mode: все три скорости равны
pub const SLOW_PRESET: SpeedPreset = SpeedPreset {
    charge: 2.0,
    wander: 2.0,
    search: 2.0,
};

/// Нормальный пресет
pub const NORMAL_PRESET: SpeedPreset = SpeedPreset {
    charge: 10.0,
    wander: 2.0,
    search: 8.0,
};

/// Difficulty flag — инжектится явно как resource, owner обновляет снаружи.
/// Контроллер читает раз в тик, не лезет в ambient storage.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub slow_mode: bool,
}

impl DifficultySettings {
    pub fn preset(&self) -> SpeedPreset {
        if self.slow_mode {
            SLOW_PRESET
        } else {
            NORMAL_PRESET
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MinotaurConfig::default();
        assert_eq!(config.wander_radius, 50.0);
        assert_eq!(config.noise_attraction_radius, 15.0);
        assert_eq!(config.vision_angle, 120.0);
        assert_eq!(config.vision_distance, 20.0);
        assert_eq!(config.charge_speed, 10.0);
        assert_eq!(config.wander_speed, 2.0);
        assert_eq!(config.search_speed, 8.0);
        assert_eq!(config.calm_down_time, 10.0);
        assert_eq!(config.charge_delay, 1.5);
        assert_eq!(config.recovery_time, 2.0);
        assert_eq!(config.charge_duration, 3.0);
        assert_eq!(config.listening_interval, 20.0);
        assert_eq!(config.listening_duration, 6.0);
    }

    #[test]
    fn test_difficulty_presets() {
        let normal = DifficultySettings { slow_mode: false };
        assert_eq!(normal.preset(), NORMAL_PRESET);

        let slow = DifficultySettings { slow_mode: true };
        let preset = slow.preset();
        // Slow-mode: все три скорости равны
        assert_eq!(preset.charge, preset.wander);
        assert_eq!(preset.wander, preset.search);
        assert_eq!(preset.charge, 2.0);
    }
}
