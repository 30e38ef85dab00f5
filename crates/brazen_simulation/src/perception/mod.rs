//! Perception: vision cone + line-of-sight + proximity hearing
//!
//! Raycast делегирован хосту (`RaycastHost` resource). Любой отказ —
//! отсутствие resource, промах луча, попадание в препятствие — означает
//! "не вижу". Никогда не паникует.

use bevy::prelude::*;

use crate::components::MinotaurConfig;

/// Результат raycast от хоста
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Entity, которой принадлежит первая задетая поверхность
    pub entity: Entity,
    /// Точка попадания (world coordinates)
    pub point: Vec3,
}

/// Point-query к physics движку хоста: первая поверхность вдоль луча
pub trait RaycastQuery: Send + Sync {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Resource-обёртка над raycast движка (host устанавливает при старте)
#[derive(Resource)]
pub struct RaycastHost(pub Box<dyn RaycastQuery>);

impl RaycastHost {
    pub fn new(query: impl RaycastQuery + 'static) -> Self {
        Self(Box::new(query))
    }
}

/// Видит ли агент цель?
///
/// Три условия, все обязательны:
/// 1. угол между facing и направлением на цель < vision_angle / 2
/// 2. дистанция < vision_distance
/// 3. луч (origin → цель, max = vision_distance) первым задевает именно цель
pub fn can_see_target(
    config: &MinotaurConfig,
    agent: &Transform,
    target_entity: Entity,
    target_position: Vec3,
    raycast: Option<&RaycastHost>,
) -> bool {
    let to_target = target_position - agent.translation;
    let Some(direction) = to_target.try_normalize() else {
        return false;
    };

    let angle = (*agent.forward()).angle_between(direction).to_degrees();
    if angle >= config.vision_angle / 2.0 {
        return false;
    }

    if to_target.length() >= config.vision_distance {
        return false;
    }

    // Line-of-sight: без raycast хоста считаем что не видим
    let Some(host) = raycast else {
        return false;
    };
    let Some(hit) = host
        .0
        .cast_ray(agent.translation, direction, config.vision_distance)
    else {
        return false;
    };

    hit.entity == target_entity
}

/// Слышит ли агент цель?
///
/// Чистая проверка дистанции — слух проходит сквозь стены.
pub fn target_made_noise(agent_position: Vec3, target_position: Vec3, radius: f32) -> bool {
    agent_position.distance(target_position) < radius
}
