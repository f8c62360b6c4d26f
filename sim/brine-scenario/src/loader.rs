//! Top-level scenario loader.
//!
//! Drives compilation in the fixed dependency order environment ->
//! materials -> looks -> statics -> dynamics -> robots, stopping at the
//! first failure. Entities registered by earlier, already-succeeded
//! stages are not retracted when a later stage fails.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use brine_core::SimulationManager;

use crate::document::{Document, Element};
use crate::environment::build_environment;
use crate::error::{Result, ScenarioError};
use crate::registries::{build_looks, build_materials};
use crate::robots::build_robot;
use crate::solids::build_solid;
use crate::statics::build_static;
use crate::transform::parse_transform;

/// Compiles scenario documents into a simulation manager.
///
/// # Example
///
/// ```
/// use brine_core::SimulationManager;
/// use brine_scenario::ScenarioLoader;
///
/// let xml = r#"
///     <scenario>
///         <environment>
///             <ned latitude="41.77" longitude="3.03"/>
///             <sun azimuth="20.0" elevation="50.0"/>
///             <ocean enabled="false"/>
///         </environment>
///         <materials>
///             <material name="steel" density="7800" restitution="0.2"/>
///         </materials>
///     </scenario>
/// "#;
///
/// let mut manager = SimulationManager::new();
/// ScenarioLoader::new(&mut manager).load_str(xml).expect("should load");
/// assert!(manager.materials().contains("steel"));
/// ```
#[derive(Debug)]
pub struct ScenarioLoader<'a> {
    manager: &'a mut SimulationManager,
}

impl<'a> ScenarioLoader<'a> {
    /// Create a loader compiling into the given manager.
    pub fn new(manager: &'a mut SimulationManager) -> Self {
        Self { manager }
    }

    /// Load a scenario from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the document fails
    /// to compile.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading scenario");
        let xml = fs::read_to_string(path)?;
        self.load_str(&xml)
    }

    /// Load a scenario from an XML string.
    ///
    /// # Errors
    ///
    /// Returns the first compilation error encountered in stage order.
    pub fn load_str(&mut self, xml: &str) -> Result<()> {
        let document = Document::parse_str(xml)?;
        let root = document
            .child("scenario")
            .ok_or_else(|| ScenarioError::missing_element("scenario", "document"))?;

        let environment = root.require_child("environment")?;
        stage("environment", build_environment(environment, self.manager))?;

        let materials = root.require_child("materials")?;
        stage("materials", build_materials(materials, self.manager))?;

        match root.child("looks") {
            Some(looks) => stage("looks", build_looks(looks, self.manager))?,
            None => info!("looks not defined, using standard look"),
        }

        for item in root.children("static") {
            stage("static", build_static(item, self.manager))?;
        }

        for item in root.children("dynamic") {
            stage("dynamic", self.load_dynamic(item))?;
        }

        for item in root.children("robot") {
            stage("robot", build_robot(item, self.manager))?;
        }

        info!(
            statics = self.manager.static_count(),
            solids = self.manager.solid_count(),
            robots = self.manager.robot_count(),
            "scenario loaded"
        );
        Ok(())
    }

    fn load_dynamic(&mut self, element: &Element) -> Result<()> {
        let solid = build_solid(element)?;
        let transform = parse_transform(element.require_child("world_transform")?)?;
        self.manager.add_solid_entity(solid, transform);
        Ok(())
    }
}

/// Log a stage failure before propagating it.
fn stage<T>(name: &'static str, result: Result<T>) -> Result<T> {
    result.inspect_err(|err| error!(stage = name, %err, "scenario compilation failed"))
}

/// Load a scenario string into a manager.
///
/// # Errors
///
/// Same failure modes as [`ScenarioLoader::load_str`].
pub fn load_scenario_str(xml: &str, manager: &mut SimulationManager) -> Result<()> {
    ScenarioLoader::new(manager).load_str(xml)
}

/// Load a scenario file into a manager.
///
/// # Errors
///
/// Same failure modes as [`ScenarioLoader::load_file`].
pub fn load_scenario_file(path: impl AsRef<Path>, manager: &mut SimulationManager) -> Result<()> {
    ScenarioLoader::new(manager).load_file(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
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
    "#;

    #[test]
    fn missing_root_fails() {
        let mut manager = SimulationManager::new();
        let result = load_scenario_str("<scene/>", &mut manager);
        assert!(matches!(
            result,
            Err(ScenarioError::MissingElement {
                element: "scenario",
                ..
            })
        ));
    }

    #[test]
    fn missing_environment_fails() {
        let mut manager = SimulationManager::new();
        let result = load_scenario_str("<scenario><materials/></scenario>", &mut manager);
        assert!(matches!(
            result,
            Err(ScenarioError::MissingElement {
                element: "environment",
                ..
            })
        ));
    }

    #[test]
    fn missing_materials_fails() {
        let mut manager = SimulationManager::new();
        let result = load_scenario_str(
            r#"
            <scenario>
                <environment>
                    <ned latitude="0" longitude="0"/>
                    <sun azimuth="0" elevation="90"/>
                    <ocean enabled="false"/>
                </environment>
            </scenario>
        "#,
            &mut manager,
        );
        assert!(matches!(
            result,
            Err(ScenarioError::MissingElement {
                element: "materials",
                ..
            })
        ));
    }

    #[test]
    fn looks_are_optional_at_document_level() {
        let mut manager = SimulationManager::new();
        load_scenario_str(
            r#"
            <scenario>
                <environment>
                    <ned latitude="0" longitude="0"/>
                    <sun azimuth="0" elevation="90"/>
                    <ocean enabled="false"/>
                </environment>
                <materials>
                    <material name="steel" density="7800" restitution="0.2"/>
                </materials>
            </scenario>
        "#,
            &mut manager,
        )
        .expect("should load");
        assert!(manager.looks().is_empty());
    }

    #[test]
    fn dynamic_requires_world_transform() {
        let mut manager = SimulationManager::new();
        let result = load_scenario_str(
            &format!(
                r#"
            <scenario>
                {HEADER}
                <dynamic name="buoy" type="sphere">
                    <material name="steel"/>
                    <look name="gray"/>
                    <origin xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions radius="0.3"/>
                </dynamic>
            </scenario>
        "#
            ),
            &mut manager,
        );
        assert!(matches!(
            result,
            Err(ScenarioError::MissingElement {
                element: "world_transform",
                ..
            })
        ));
        assert_eq!(manager.solid_count(), 0);
    }

    #[test]
    fn earlier_stages_are_not_rolled_back() {
        let mut manager = SimulationManager::new();
        let result = load_scenario_str(
            &format!(
                r#"
            <scenario>
                {HEADER}
                <static name="seafloor" type="plane">
                    <material name="steel"/>
                    <look name="gray"/>
                    <world_transform xyz="0 0 5" rpy="0 0 0"/>
                </static>
                <static name="broken" type="box">
                    <material name="steel"/>
                    <look name="gray"/>
                    <world_transform xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions xyz="1 2"/>
                </static>
            </scenario>
        "#
            ),
            &mut manager,
        );

        assert!(result.is_err());
        // The first static and both registries survive the failure.
        assert_eq!(manager.static_count(), 1);
        assert!(manager.materials().contains("steel"));
        assert!(manager.looks().contains("gray"));
    }
}
