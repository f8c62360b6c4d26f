//! Material and look registry builders.
//!
//! Both collections require at least one entry. Entries are validated in
//! document order before anything is inserted, so a malformed entry leaves
//! the shared registry untouched.

use tracing::debug;

use brine_core::SimulationManager;
use brine_types::{Look, Material};

use crate::document::Element;
use crate::error::{Result, ScenarioError};
use crate::transform::require_color;

/// Compile the `materials` block into the shared material registry.
pub(crate) fn build_materials(element: &Element, manager: &mut SimulationManager) -> Result<()> {
    if element.child("material").is_none() {
        return Err(ScenarioError::missing_element("material", element.describe()));
    }

    let mut materials = Vec::new();
    for item in element.children("material") {
        let name = item.require_attr("name")?;
        let density = item.require_f64("density")?;
        let restitution = item.require_f64("restitution")?;
        materials.push(Material::new(name, density, restitution));
    }

    // Friction overrides are optional as a whole block; present entries
    // require all four fields.
    let mut overrides = Vec::new();
    if let Some(table) = element.child("friction_table") {
        for friction in table.children("friction") {
            let material1 = friction.require_attr("material1")?.to_string();
            let material2 = friction.require_attr("material2")?.to_string();
            let static_coef = friction.require_f64("static")?;
            let dynamic_coef = friction.require_f64("dynamic")?;
            overrides.push((material1, material2, static_coef, dynamic_coef));
        }
    }

    debug!(
        materials = materials.len(),
        friction_overrides = overrides.len(),
        "material registry built"
    );

    let registry = manager.materials_mut();
    for material in materials {
        registry.create_material(material.name, material.density, material.restitution);
    }
    for (material1, material2, static_coef, dynamic_coef) in overrides {
        registry.set_materials_interaction(material1, material2, static_coef, dynamic_coef);
    }

    Ok(())
}

/// Compile the `looks` block into the shared look registry.
pub(crate) fn build_looks(element: &Element, manager: &mut SimulationManager) -> Result<()> {
    if element.child("look").is_none() {
        return Err(ScenarioError::missing_element("look", element.describe()));
    }

    let mut looks = Vec::new();
    for item in element.children("look") {
        let name = item.require_attr("name")?;
        let color = require_color(item, "color")?;
        let roughness = item.require_f64("roughness")?;

        let mut look = Look::new(name, color, roughness)
            .with_metalness(item.f64_or("metalness", 0.0))
            .with_reflectivity(item.f64_or("reflectivity", 0.0));
        if let Some(texture) = item.attr("texture") {
            look = look.with_texture(texture);
        }
        looks.push(look);
    }

    debug!(looks = looks.len(), "look registry built");

    let registry = manager.looks_mut();
    for look in looks {
        registry.create_look(look);
    }

    Ok(())
}
