//! Scenario document compiler for marine robotics simulation.
//!
//! This crate parses declarative XML scenario documents and compiles them
//! into a validated, cross-referenced object graph registered with a
//! [`SimulationManager`](brine_core::SimulationManager).
//!
//! # Example
//!
//! ```
//! use brine_core::SimulationManager;
//! use brine_scenario::load_scenario_str;
//!
//! let xml = r#"
//!     <scenario>
//!         <environment>
//!             <ned latitude="41.77" longitude="3.03"/>
//!             <sun azimuth="20.0" elevation="50.0"/>
//!             <ocean enabled="true" waves="0.5"/>
//!         </environment>
//!         <materials>
//!             <material name="steel" density="7800" restitution="0.2"/>
//!         </materials>
//!         <looks>
//!             <look name="gray" color="0.5 0.5 0.5" roughness="0.4"/>
//!         </looks>
//!         <static name="seafloor" type="plane">
//!             <material name="steel"/>
//!             <look name="gray"/>
//!             <world_transform xyz="0 0 20" rpy="0 0 0"/>
//!         </static>
//!     </scenario>
//! "#;
//!
//! let mut manager = SimulationManager::new();
//! load_scenario_str(xml, &mut manager).expect("should load");
//! assert_eq!(manager.static_count(), 1);
//! ```
//!
//! # Supported Elements
//!
//! ## Environment
//!
//! - `<ned latitude="..." longitude="..."/>` - Geographic origin of the
//!   NED world frame
//! - `<sun azimuth="..." elevation="..."/>` - Sun position in degrees
//! - `<ocean enabled="..." waves="..."/>` - Ocean enable; `waves` required
//!   only when enabled
//!
//! ## Registries
//!
//! - `<material name="..." density="..." restitution="..."/>` - At least
//!   one required
//! - `<friction_table>` with `<friction material1 material2 static dynamic>`
//!   entries - Optional pairwise friction overrides
//! - `<look name="..." color="R G B" roughness="..."/>` - Optional
//!   `metalness`, `reflectivity`, `texture`
//!
//! ## Entities
//!
//! - `<static type="...">` - box, cylinder, sphere, model, plane, terrain
//! - `<dynamic type="...">` - box, cylinder, sphere, torus, model, compound;
//!   optional `physics` mode (surface, floating, submerged, aerodynamic),
//!   `buoyant` flag and shell `thickness`
//! - Compound bodies assemble `<external_part>` and `<internal_part>`
//!   children, each with a `<compound_transform>`
//!
//! ## Robots
//!
//! - `<robot name fixed self_collisions>` with `<base_link>`, repeated
//!   `<link>`, `<joint>` (fixed, prismatic, revolute), `<sensor>` (imu,
//!   dvl, gps, pressure, odometry, fog) and `<actuator>` elements
//!
//! # Compilation Model
//!
//! Compilation is single-threaded, synchronous and one-shot. The loader
//! walks the document in the fixed dependency order environment ->
//! materials -> looks -> statics -> dynamics -> robots and aborts at the
//! first error. Entities registered by earlier, already-succeeded
//! top-level elements stay in the manager; there is no whole-document
//! rollback. Numeric tuples (`xyz`, `rpy`, `color`, velocity vectors) are
//! whitespace-separated scalar literals with a fixed expected count.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unnecessary_wraps
)]

mod document;
mod environment;
mod error;
mod loader;
mod registries;
mod robots;
mod solids;
mod statics;
mod transform;

pub use document::{Document, Element};
pub use error::{Result, ScenarioError};
pub use loader::{ScenarioLoader, load_scenario_file, load_scenario_str};
pub use transform::{parse_transform, require_color, require_vector3};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use brine_core::SimulationManager;
    use brine_types::{SolidEntity, StaticShape};

    /// Minimal complete document: one material, one look, one static
    /// plane, one robot with a base link only.
    #[test]
    fn minimal_end_to_end() {
        let xml = r#"
            <scenario>
                <environment>
                    <ned latitude="41.77" longitude="3.03"/>
                    <sun azimuth="20.0" elevation="50.0"/>
                    <ocean enabled="true" waves="0.0"/>
                </environment>
                <materials>
                    <material name="steel" density="7800" restitution="0.2"/>
                </materials>
                <looks>
                    <look name="gray" color="0.5 0.5 0.5" roughness="0.4"/>
                </looks>
                <static name="seafloor" type="plane">
                    <material name="steel"/>
                    <look name="gray"/>
                    <world_transform xyz="0 0 20" rpy="0 0 0"/>
                </static>
                <robot name="auv" fixed="false" self_collisions="false">
                    <world_transform xyz="0 0 1" rpy="0 0 0"/>
                    <base_link name="hull" type="cylinder">
                        <material name="steel"/>
                        <look name="gray"/>
                        <origin xyz="0 0 0" rpy="0 0 1.5708"/>
                        <dimensions radius="0.2" height="1.5"/>
                    </base_link>
                </robot>
            </scenario>
        "#;

        let mut manager = SimulationManager::new();
        load_scenario_str(xml, &mut manager).expect("should load");

        assert_eq!(manager.static_count(), 1);
        assert_eq!(manager.robot_count(), 1);
        assert!(matches!(
            manager.statics()[0].entity.shape,
            StaticShape::Plane { .. }
        ));

        let robot = &manager.robots()[0].robot;
        assert_eq!(robot.name, "auv");
        assert!(robot.links.is_empty());
        assert!(robot.joints.is_empty());
        assert!(robot.sensors.is_empty());
    }

    /// A full underwater vehicle scenario exercising every builder.
    #[test]
    fn full_vehicle_scenario() {
        let xml = r#"
            <scenario>
                <environment>
                    <ned latitude="41.77" longitude="3.03"/>
                    <sun azimuth="20.0" elevation="50.0"/>
                    <ocean enabled="true" waves="1.0"/>
                </environment>
                <materials>
                    <material name="steel" density="7800" restitution="0.2"/>
                    <material name="foam" density="400" restitution="0.1"/>
                    <friction_table>
                        <friction material1="steel" material2="foam" static="0.6" dynamic="0.4"/>
                    </friction_table>
                </materials>
                <looks>
                    <look name="yellow" color="1.0 0.9 0.0" roughness="0.3"/>
                    <look name="black" color="0.05 0.05 0.05" roughness="0.8"/>
                </looks>
                <static name="seafloor" type="plane">
                    <material name="steel"/>
                    <look name="black"/>
                    <world_transform xyz="0 0 50" rpy="0 0 0"/>
                </static>
                <dynamic name="marker" type="sphere">
                    <material name="foam"/>
                    <look name="yellow"/>
                    <origin xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions radius="0.1"/>
                    <world_transform xyz="5 5 1" rpy="0 0 0"/>
                </dynamic>
                <robot name="auv" fixed="false" self_collisions="false">
                    <world_transform xyz="0 0 2" rpy="0 0 0"/>
                    <base_link name="vehicle" type="compound" physics="submerged">
                        <external_part name="hull" type="cylinder">
                            <material name="steel"/>
                            <look name="yellow"/>
                            <origin xyz="0 0 0" rpy="0 1.5708 0"/>
                            <dimensions radius="0.15" height="1.2" thickness="0.005"/>
                            <compound_transform xyz="0 0 0" rpy="0 0 0"/>
                        </external_part>
                        <internal_part name="battery" type="box" buoyant="false">
                            <material name="steel"/>
                            <look name="black"/>
                            <origin xyz="0 0 0" rpy="0 0 0"/>
                            <dimensions xyz="0.2 0.1 0.1"/>
                            <compound_transform xyz="0 0 0.05" rpy="0 0 0"/>
                        </internal_part>
                    </base_link>
                    <link name="rudder" type="box">
                        <material name="steel"/>
                        <look name="yellow"/>
                        <origin xyz="0 0 0" rpy="0 0 0"/>
                        <dimensions xyz="0.01 0.1 0.2"/>
                    </link>
                    <joint name="rudder_servo" type="revolute">
                        <parent name="vehicle"/>
                        <child name="rudder"/>
                        <origin xyz="-0.7 0 0" rpy="0 0 0"/>
                        <axis xyz="0 0 1"/>
                        <limits min="-0.6" max="0.6"/>
                    </joint>
                    <sensor name="ahrs" type="imu" rate="100.0">
                        <link name="vehicle"/>
                        <origin xyz="0 0 0" rpy="0 0 0"/>
                        <noise angle="0.001" angular_velocity="0.01"/>
                    </sensor>
                    <sensor name="dvl" type="dvl" rate="5.0">
                        <link name="vehicle"/>
                        <origin xyz="0 0 0.1" rpy="3.1416 0 0"/>
                        <properties beam_angle="0.26"/>
                    </sensor>
                    <actuator name="thruster"/>
                </robot>
            </scenario>
        "#;

        let mut manager = SimulationManager::new();
        load_scenario_str(xml, &mut manager).expect("should load");

        assert!(manager.ocean().is_some());
        assert_eq!(manager.materials().len(), 2);
        assert_eq!(manager.static_count(), 1);
        assert_eq!(manager.solid_count(), 1);
        assert_eq!(manager.robot_count(), 1);

        let robot = &manager.robots()[0].robot;
        let SolidEntity::Compound(base) = &robot.base_link else {
            panic!("expected compound base link");
        };
        assert_eq!(base.external_parts.len(), 1);
        assert_eq!(base.internal_parts.len(), 1);
        assert_eq!(robot.links.len(), 1);
        assert_eq!(robot.joints.len(), 1);
        assert_eq!(robot.sensors.len(), 2);
        assert!(robot.actuators.is_empty());
    }

    /// A compound with a second external part lacking its transform fails
    /// the whole load and registers nothing.
    #[test]
    fn failed_compound_registers_nothing() {
        let xml = r#"
            <scenario>
                <environment>
                    <ned latitude="0" longitude="0"/>
                    <sun azimuth="0" elevation="90"/>
                    <ocean enabled="false"/>
                </environment>
                <materials>
                    <material name="steel" density="7800" restitution="0.2"/>
                </materials>
                <dynamic name="vehicle" type="compound">
                    <external_part name="hull" type="sphere">
                        <material name="steel"/>
                        <look name="gray"/>
                        <origin xyz="0 0 0" rpy="0 0 0"/>
                        <dimensions radius="0.3"/>
                        <compound_transform xyz="0 0 0" rpy="0 0 0"/>
                    </external_part>
                    <external_part name="fin" type="sphere">
                        <material name="steel"/>
                        <look name="gray"/>
                        <origin xyz="0 0 0" rpy="0 0 0"/>
                        <dimensions radius="0.1"/>
                    </external_part>
                    <world_transform xyz="0 0 0" rpy="0 0 0"/>
                </dynamic>
            </scenario>
        "#;

        let mut manager = SimulationManager::new();
        let result = load_scenario_str(xml, &mut manager);
        assert!(matches!(
            result,
            Err(ScenarioError::MissingElement {
                element: "compound_transform",
                ..
            })
        ));
        assert_eq!(manager.solid_count(), 0);
    }
}
