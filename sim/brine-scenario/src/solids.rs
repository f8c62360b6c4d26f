//! Solid entity builder, including recursive compound assembly.
//!
//! Every entity allocated while a build is in progress is owned by the
//! building call until it is either attached to a parent structure or the
//! call returns. On any failure the in-progress compound and any orphan
//! part are dropped before the error propagates, so a failed build leaves
//! no allocations behind.

use brine_types::{
    BodyPhysicsMode, CompoundSolid, ShapeSolid, SolidEntity, SolidShape, Transform,
};

use crate::document::Element;
use crate::error::{Result, ScenarioError};
use crate::statics::parse_mesh_block;
use crate::transform::{parse_transform, require_vector3};

/// Compile one solid element (a `dynamic`, a robot link, or a compound
/// part) into a [`SolidEntity`].
pub(crate) fn build_solid(element: &Element) -> Result<SolidEntity> {
    let name = element.require_attr("name")?.to_string();
    let kind = element.require_attr("type")?;

    // Resolved once for the whole call.
    let physics_mode = match element.attr("physics") {
        None => BodyPhysicsMode::default(),
        Some(value) => BodyPhysicsMode::from_str(value)
            .ok_or_else(|| ScenarioError::UnknownPhysicsMode(value.to_string()))?,
    };
    let buoyant = element.bool_or("buoyant", true);

    if kind == "compound" {
        build_compound(element, name, physics_mode)
    } else {
        build_shape(element, name, kind, physics_mode, buoyant).map(SolidEntity::Shape)
    }
}

/// Assemble a compound body from its external and internal parts.
///
/// The first external part seeds the compound; the remaining external
/// parts and then all internal parts are built and attached one by one.
/// Any part failure aborts the assembly and drops everything built so far.
fn build_compound(
    element: &Element,
    name: String,
    physics_mode: BodyPhysicsMode,
) -> Result<SolidEntity> {
    let mut external = element.children("external_part");

    let first = external
        .next()
        .ok_or_else(|| ScenarioError::missing_element("external_part", element.describe()))?;
    let (part, origin) = build_part(first)?;
    let mut compound = CompoundSolid::new(name, part, origin, physics_mode);

    for item in external {
        let (part, origin) = build_part(item)?;
        compound.add_external_part(part, origin);
    }

    for item in element.children("internal_part") {
        let (part, origin) = build_part(item)?;
        compound.add_internal_part(part, origin);
    }

    Ok(SolidEntity::Compound(compound))
}

/// Build one compound part: the part solid plus its compound-local
/// transform from the required `compound_transform` child.
///
/// A part that builds but lacks a valid transform is dropped here, before
/// the error reaches the compound loop.
fn build_part(element: &Element) -> Result<(ShapeSolid, Transform)> {
    let part = match build_solid(element)? {
        SolidEntity::Shape(shape) => shape,
        SolidEntity::Compound(compound) => {
            return Err(ScenarioError::Unsupported(format!(
                "nested compound part '{}'",
                compound.name
            )));
        }
    };

    let transform_element = element.require_child("compound_transform")?;
    let origin = parse_transform(transform_element)?;
    Ok((part, origin))
}

/// Build a non-compound shape solid.
fn build_shape(
    element: &Element,
    name: String,
    kind: &str,
    physics_mode: BodyPhysicsMode,
    buoyant: bool,
) -> Result<ShapeSolid> {
    let material = element.require_child("material")?.require_attr("name")?.to_string();
    let look = element.require_child("look")?.require_attr("name")?.to_string();

    // Model placement comes from its mesh origin blocks.
    let origin = if kind == "model" {
        Transform::identity()
    } else {
        parse_transform(element.require_child("origin")?)?
    };

    let (shape, thickness) = match kind {
        "box" => {
            let dims = element.require_child("dimensions")?;
            let shape = SolidShape::Box {
                dimensions: require_vector3(dims, "xyz")?,
            };
            (shape, dims.f64_or("thickness", -1.0))
        }
        "cylinder" => {
            let dims = element.require_child("dimensions")?;
            let shape = SolidShape::Cylinder {
                radius: dims.require_f64("radius")?,
                height: dims.require_f64("height")?,
            };
            (shape, dims.f64_or("thickness", -1.0))
        }
        "sphere" => {
            let dims = element.require_child("dimensions")?;
            let shape = SolidShape::Sphere {
                radius: dims.require_f64("radius")?,
            };
            (shape, dims.f64_or("thickness", -1.0))
        }
        "torus" => {
            let dims = element.require_child("dimensions")?;
            let shape = SolidShape::Torus {
                major_radius: dims.require_f64("major_radius")?,
                minor_radius: dims.require_f64("minor_radius")?,
            };
            (shape, dims.f64_or("thickness", -1.0))
        }
        "model" => {
            let physics_block = element.require_child("physics")?;
            let physics = parse_mesh_block(physics_block)?;
            let thickness = physics_block
                .child("thickness")
                .map_or(-1.0, |t| t.f64_or("value", -1.0));
            let graphics = match element.child("graphics") {
                Some(block) => Some(parse_mesh_block(block)?),
                None => None,
            };
            (SolidShape::Model { physics, graphics }, thickness)
        }
        _ => return Err(ScenarioError::UnknownSolidKind(kind.to_string())),
    };

    Ok(ShapeSolid::new(name, shape, material, look)
        .with_origin(origin)
        .with_physics_mode(physics_mode)
        .with_thickness(thickness)
        .with_buoyant(buoyant))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::document::Document;
    use approx::assert_relative_eq;

    fn build(xml: &str) -> Result<SolidEntity> {
        let doc = Document::parse_str(xml).expect("should parse");
        build_solid(doc.child("dynamic").expect("dynamic"))
    }

    #[test]
    fn sphere_with_defaults() {
        let solid = build(
            r#"
            <dynamic name="buoy" type="sphere">
                <material name="plastic"/>
                <look name="orange"/>
                <origin xyz="0 0 0" rpy="0 0 0"/>
                <dimensions radius="0.3"/>
            </dynamic>
        "#,
        )
        .expect("should build");

        let SolidEntity::Shape(shape) = solid else {
            panic!("expected shape");
        };
        assert_eq!(shape.name, "buoy");
        assert_eq!(shape.physics_mode, BodyPhysicsMode::Submerged);
        assert!(shape.buoyant);
        assert!(!shape.is_shell());
    }

    #[test]
    fn physics_mode_and_thickness() {
        let solid = build(
            r#"
            <dynamic name="hull" type="cylinder" physics="floating" buoyant="false">
                <material name="steel"/>
                <look name="gray"/>
                <origin xyz="0 0 0" rpy="0 0 0"/>
                <dimensions radius="0.2" height="1.5" thickness="0.01"/>
            </dynamic>
        "#,
        )
        .expect("should build");

        let SolidEntity::Shape(shape) = solid else {
            panic!("expected shape");
        };
        assert_eq!(shape.physics_mode, BodyPhysicsMode::Floating);
        assert!(!shape.buoyant);
        assert_relative_eq!(shape.thickness, 0.01, epsilon = 1e-10);
    }

    #[test]
    fn unknown_physics_mode_fails() {
        let result = build(
            r#"
            <dynamic name="buoy" type="sphere" physics="ballistic">
                <material name="plastic"/>
                <look name="orange"/>
                <origin xyz="0 0 0" rpy="0 0 0"/>
                <dimensions radius="0.3"/>
            </dynamic>
        "#,
        );
        assert!(matches!(result, Err(ScenarioError::UnknownPhysicsMode(_))));
    }

    #[test]
    fn unknown_kind_fails() {
        let result = build(
            r#"
            <dynamic name="thing" type="cone">
                <material name="plastic"/>
                <look name="orange"/>
                <origin xyz="0 0 0" rpy="0 0 0"/>
                <dimensions radius="0.3"/>
            </dynamic>
        "#,
        );
        assert!(matches!(result, Err(ScenarioError::UnknownSolidKind(_))));
    }

    #[test]
    fn torus_dimensions() {
        let solid = build(
            r#"
            <dynamic name="ring" type="torus">
                <material name="rubber"/>
                <look name="black"/>
                <origin xyz="0 0 0" rpy="0 0 0"/>
                <dimensions major_radius="0.5" minor_radius="0.05"/>
            </dynamic>
        "#,
        )
        .expect("should build");

        let SolidEntity::Shape(shape) = solid else {
            panic!("expected shape");
        };
        let SolidShape::Torus {
            major_radius,
            minor_radius,
        } = shape.shape
        else {
            panic!("expected torus");
        };
        assert_relative_eq!(major_radius, 0.5, epsilon = 1e-10);
        assert_relative_eq!(minor_radius, 0.05, epsilon = 1e-10);
    }

    #[test]
    fn model_takes_placement_from_mesh_origin() {
        let solid = build(
            r#"
            <dynamic name="propeller" type="model">
                <material name="bronze"/>
                <look name="gold"/>
                <physics>
                    <mesh filename="prop.obj"/>
                    <scale value="0.001"/>
                    <origin xyz="0 0 0.1" rpy="0 0 0"/>
                    <thickness value="0.003"/>
                </physics>
            </dynamic>
        "#,
        )
        .expect("should build");

        let SolidEntity::Shape(shape) = solid else {
            panic!("expected shape");
        };
        assert_relative_eq!(shape.thickness, 0.003, epsilon = 1e-10);
        let SolidShape::Model { physics, graphics } = &shape.shape else {
            panic!("expected model");
        };
        assert_relative_eq!(physics.origin.translation.z, 0.1, epsilon = 1e-10);
        assert!(graphics.is_none());
    }

    const PART_A: &str = r#"
        <external_part name="hull" type="cylinder">
            <material name="steel"/>
            <look name="gray"/>
            <origin xyz="0 0 0" rpy="0 0 0"/>
            <dimensions radius="0.2" height="1.5"/>
            <compound_transform xyz="0 0 0" rpy="0 0 0"/>
        </external_part>
    "#;

    #[test]
    fn compound_assembles_parts_in_order() {
        let solid = build(&format!(
            r#"
            <dynamic name="vehicle" type="compound" physics="floating">
                {PART_A}
                <external_part name="fin" type="box">
                    <material name="steel"/>
                    <look name="gray"/>
                    <origin xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions xyz="0.01 0.2 0.3"/>
                    <compound_transform xyz="0 0 0.5" rpy="0 0 0"/>
                </external_part>
                <internal_part name="battery" type="box">
                    <material name="lithium"/>
                    <look name="black"/>
                    <origin xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions xyz="0.1 0.1 0.3"/>
                    <compound_transform xyz="0 0 -0.2" rpy="0 0 0"/>
                </internal_part>
            </dynamic>
        "#
        ))
        .expect("should build");

        let SolidEntity::Compound(compound) = solid else {
            panic!("expected compound");
        };
        assert_eq!(compound.physics_mode, BodyPhysicsMode::Floating);
        assert_eq!(compound.external_parts.len(), 2);
        assert_eq!(compound.internal_parts.len(), 1);
        assert_eq!(compound.external_parts[0].solid.name, "hull");
        assert_eq!(compound.external_parts[1].solid.name, "fin");
        assert_relative_eq!(
            compound.external_parts[1].origin.translation.z,
            0.5,
            epsilon = 1e-10
        );
        assert_eq!(compound.internal_parts[0].solid.name, "battery");
    }

    #[test]
    fn compound_without_external_part_fails() {
        let result = build(
            r#"
            <dynamic name="vehicle" type="compound">
                <internal_part name="battery" type="box">
                    <material name="lithium"/>
                    <look name="black"/>
                    <origin xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions xyz="0.1 0.1 0.3"/>
                    <compound_transform xyz="0 0 0" rpy="0 0 0"/>
                </internal_part>
            </dynamic>
        "#,
        );
        assert!(matches!(
            result,
            Err(ScenarioError::MissingElement {
                element: "external_part",
                ..
            })
        ));
    }

    #[test]
    fn part_without_compound_transform_aborts_assembly() {
        let result = build(&format!(
            r#"
            <dynamic name="vehicle" type="compound">
                {PART_A}
                <external_part name="fin" type="box">
                    <material name="steel"/>
                    <look name="gray"/>
                    <origin xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions xyz="0.01 0.2 0.3"/>
                </external_part>
            </dynamic>
        "#
        ));
        assert!(matches!(
            result,
            Err(ScenarioError::MissingElement {
                element: "compound_transform",
                ..
            })
        ));
    }

    #[test]
    fn malformed_part_aborts_assembly() {
        let result = build(&format!(
            r#"
            <dynamic name="vehicle" type="compound">
                {PART_A}
                <internal_part name="battery" type="box">
                    <material name="lithium"/>
                    <look name="black"/>
                    <origin xyz="0 0 0" rpy="0 0 0"/>
                    <dimensions xyz="0.1 0.1"/>
                    <compound_transform xyz="0 0 0" rpy="0 0 0"/>
                </internal_part>
            </dynamic>
        "#
        ));
        assert!(matches!(result, Err(ScenarioError::InvalidAttribute { .. })));
    }

    #[test]
    fn nested_compound_part_is_rejected() {
        let result = build(&format!(
            r#"
            <dynamic name="vehicle" type="compound">
                {PART_A}
                <external_part name="pod" type="compound">
                    <external_part name="shell" type="sphere">
                        <material name="steel"/>
                        <look name="gray"/>
                        <origin xyz="0 0 0" rpy="0 0 0"/>
                        <dimensions radius="0.1"/>
                        <compound_transform xyz="0 0 0" rpy="0 0 0"/>
                    </external_part>
                    <compound_transform xyz="0 0 0" rpy="0 0 0"/>
                </external_part>
            </dynamic>
        "#
        ));
        assert!(matches!(result, Err(ScenarioError::Unsupported(_))));
    }
}
