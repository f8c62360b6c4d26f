//! Simulation manager: the owner of the compiled scene.

use tracing::debug;

use brine_types::{Robot, SolidEntity, StaticEntity, Transform};

use crate::environment::{Ocean, Sun};
use crate::look::LookRegistry;
use crate::material::MaterialRegistry;
use crate::ned::Ned;

/// A static entity together with its world placement.
#[derive(Debug)]
pub struct PlacedStatic {
    /// The entity.
    pub entity: StaticEntity,
    /// World transform.
    pub transform: Transform,
}

/// A solid entity together with its world placement.
#[derive(Debug)]
pub struct PlacedSolid {
    /// The entity.
    pub entity: SolidEntity,
    /// World transform.
    pub transform: Transform,
}

/// A robot together with its world placement.
#[derive(Debug)]
pub struct PlacedRobot {
    /// The robot definition.
    pub robot: Robot,
    /// World transform of the base link.
    pub transform: Transform,
}

/// Central container for a compiled scene.
///
/// The manager owns the material and look registries and every registered
/// entity. Registration is an opaque ownership transfer: callers hand over
/// finished entities with their world placement and do not read them back.
#[derive(Debug, Default)]
pub struct SimulationManager {
    ned: Ned,
    sun: Sun,
    ocean: Option<Ocean>,
    materials: MaterialRegistry,
    looks: LookRegistry,
    statics: Vec<PlacedStatic>,
    solids: Vec<PlacedSolid>,
    robots: Vec<PlacedRobot>,
}

impl SimulationManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the NED geographic frame.
    pub fn ned_mut(&mut self) -> &mut Ned {
        &mut self.ned
    }

    /// The NED geographic frame.
    #[must_use]
    pub fn ned(&self) -> &Ned {
        &self.ned
    }

    /// Set the sun position. Azimuth and elevation in degrees.
    pub fn setup_sun_position(&mut self, azimuth: f64, elevation: f64) {
        self.sun = Sun::new(azimuth, elevation);
        debug!(azimuth, elevation, "sun position set");
    }

    /// The sun position.
    #[must_use]
    pub fn sun(&self) -> Sun {
        self.sun
    }

    /// Enable the ocean with the given wave amplitude factor.
    pub fn enable_ocean(&mut self, waves: f64) {
        self.ocean = Some(Ocean::new(waves));
        debug!(waves, "ocean enabled");
    }

    /// The ocean state, if enabled.
    #[must_use]
    pub fn ocean(&self) -> Option<Ocean> {
        self.ocean
    }

    /// The material registry.
    #[must_use]
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Insert capability for the material registry.
    pub fn materials_mut(&mut self) -> &mut MaterialRegistry {
        &mut self.materials
    }

    /// The look registry.
    #[must_use]
    pub fn looks(&self) -> &LookRegistry {
        &self.looks
    }

    /// Insert capability for the look registry.
    pub fn looks_mut(&mut self) -> &mut LookRegistry {
        &mut self.looks
    }

    /// Register a static entity with its world transform. The manager
    /// becomes the sole owner.
    pub fn add_static_entity(&mut self, entity: StaticEntity, transform: Transform) {
        debug!(name = %entity.name, kind = entity.shape.kind(), "static entity registered");
        self.statics.push(PlacedStatic { entity, transform });
    }

    /// Register a solid entity with its world transform. The manager
    /// becomes the sole owner.
    pub fn add_solid_entity(&mut self, entity: SolidEntity, transform: Transform) {
        debug!(name = %entity.name(), "solid entity registered");
        self.solids.push(PlacedSolid { entity, transform });
    }

    /// Register a robot with its world placement. The manager becomes the
    /// sole owner.
    pub fn add_robot(&mut self, robot: Robot, transform: Transform) {
        debug!(
            name = %robot.name,
            links = robot.links.len() + 1,
            joints = robot.joints.len(),
            sensors = robot.sensors.len(),
            "robot registered"
        );
        self.robots.push(PlacedRobot { robot, transform });
    }

    /// Registered static entities, in registration order.
    #[must_use]
    pub fn statics(&self) -> &[PlacedStatic] {
        &self.statics
    }

    /// Registered solid entities, in registration order.
    #[must_use]
    pub fn solids(&self) -> &[PlacedSolid] {
        &self.solids
    }

    /// Registered robots, in registration order.
    #[must_use]
    pub fn robots(&self) -> &[PlacedRobot] {
        &self.robots
    }

    /// Number of registered static entities.
    #[must_use]
    pub fn static_count(&self) -> usize {
        self.statics.len()
    }

    /// Number of registered solid entities.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    /// Number of registered robots.
    #[must_use]
    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use brine_types::{ShapeSolid, SolidShape, StaticShape};

    #[test]
    fn registration_transfers_ownership() {
        let mut manager = SimulationManager::new();
        manager.add_static_entity(
            StaticEntity::new("seafloor", "sand", "beige", StaticShape::plane()),
            Transform::identity(),
        );
        manager.add_solid_entity(
            SolidEntity::Shape(ShapeSolid::new(
                "buoy",
                SolidShape::Sphere { radius: 0.3 },
                "plastic",
                "orange",
            )),
            Transform::identity(),
        );

        assert_eq!(manager.static_count(), 1);
        assert_eq!(manager.solid_count(), 1);
        assert_eq!(manager.robot_count(), 0);
        assert_eq!(manager.statics()[0].entity.name, "seafloor");
    }

    #[test]
    fn environment_state() {
        let mut manager = SimulationManager::new();
        assert!(manager.ocean().is_none());

        manager.ned_mut().init(41.77, 3.03, 0.0);
        manager.setup_sun_position(20.0, 50.0);
        manager.enable_ocean(1.0);

        assert!(manager.ned().is_initialized());
        assert!((manager.sun().elevation - 50.0).abs() < 1e-10);
        assert!((manager.ocean().expect("ocean enabled").waves - 1.0).abs() < 1e-10);
    }
}
