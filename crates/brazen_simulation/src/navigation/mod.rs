//! Navigation bridge: выборка точек на navmesh хоста
//!
//! Pathfinding целиком на стороне хоста. Crate только просит "дай
//! проходимую точку около center" и пишет `MovementCommand`; оставшееся
//! расстояние host возвращает через `NavigationState`.

use bevy::prelude::*;

/// Point-query к navmesh хоста
pub trait NavMeshQuery: Send + Sync {
    /// Ближайшая навигируемая точка в радиусе max_radius от center,
    /// None если в радиусе нет проходимой поверхности
    fn sample_point(&self, center: Vec3, max_radius: f32) -> Option<Vec3>;
}

/// Resource-обёртка над navmesh движка (host устанавливает при старте)
#[derive(Resource)]
pub struct NavigationHost(pub Box<dyn NavMeshQuery>);

impl NavigationHost {
    pub fn new(query: impl NavMeshQuery + 'static) -> Self {
        Self(Box::new(query))
    }
}

/// Navmesh-заглушка: вся плоскость проходима (headless прогоны и тесты)
pub struct OpenFieldNavMesh;

impl NavMeshQuery for OpenFieldNavMesh {
    fn sample_point(&self, center: Vec3, _max_radius: f32) -> Option<Vec3> {
        Some(center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_field_returns_center() {
        let navmesh = OpenFieldNavMesh;
        let center = Vec3::new(3.0, 0.0, -7.0);
        assert_eq!(navmesh.sample_point(center, 50.0), Some(center));
    }
}
