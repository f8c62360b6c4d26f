//! Static entity builder.
//!
//! Builds immovable world geometry and registers it with the simulation
//! manager together with its world transform. Static entities are flat:
//! the object is either fully constructed or not constructed at all.

use brine_core::SimulationManager;
use brine_types::{MeshGeometry, StaticEntity, StaticShape};

use crate::document::Element;
use crate::error::{Result, ScenarioError};
use crate::transform::{parse_transform, require_vector3};

/// Compile one `static` element and register the entity.
pub(crate) fn build_static(element: &Element, manager: &mut SimulationManager) -> Result<()> {
    let name = element.require_attr("name")?;
    let kind = element.require_attr("type")?;

    let material = element.require_child("material")?.require_attr("name")?;
    let look = element.require_child("look")?.require_attr("name")?;
    let transform = parse_transform(element.require_child("world_transform")?)?;

    let shape = match kind {
        "box" => {
            let dims = element.require_child("dimensions")?;
            StaticShape::box_shape(require_vector3(dims, "xyz")?)
        }
        "cylinder" => {
            let dims = element.require_child("dimensions")?;
            StaticShape::cylinder(dims.require_f64("radius")?, dims.require_f64("height")?)
        }
        "sphere" => {
            let dims = element.require_child("dimensions")?;
            StaticShape::sphere(dims.require_f64("radius")?)
        }
        "model" => {
            let physics = parse_mesh_block(element.require_child("physics")?)?;
            let graphics = match element.child("graphics") {
                Some(block) => Some(parse_mesh_block(block)?),
                None => None,
            };
            StaticShape::Model { physics, graphics }
        }
        // Fixed, effectively infinite extent; any dimension block is ignored.
        "plane" => StaticShape::plane(),
        "terrain" => {
            let height_map = element
                .require_child("height_map")?
                .require_attr("filename")?
                .to_string();
            let dims = element.require_child("dimensions")?;
            StaticShape::Terrain {
                height_map,
                scale_x: dims.require_f64("scalex")?,
                scale_y: dims.require_f64("scaley")?,
                height: dims.require_f64("height")?,
            }
        }
        _ => return Err(ScenarioError::UnknownStaticKind(kind.to_string())),
    };

    manager.add_static_entity(StaticEntity::new(name, material, look, shape), transform);
    Ok(())
}

/// Parse a `physics`/`graphics` mesh block: `mesh[filename]`,
/// `scale[value]` and an `origin` transform.
pub(crate) fn parse_mesh_block(block: &Element) -> Result<MeshGeometry> {
    let filename = block.require_child("mesh")?.require_attr("filename")?;
    let scale = block.require_child("scale")?.require_f64("value")?;
    let origin = parse_transform(block.require_child("origin")?)?;
    Ok(MeshGeometry::new(filename, scale, origin))
}
