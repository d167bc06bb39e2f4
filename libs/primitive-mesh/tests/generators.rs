use approx::assert_relative_eq;
use glam::DVec3;
use primitive_mesh::{generate_cube, generate_icosphere, generate_quad, Geometry, MeshError, Primitive};

fn outward_everywhere(geometry: &Geometry) -> bool {
    (0..geometry.triangle_count()).all(|i| {
        let [a, b, c] = geometry.triangle_corners(i);
        geometry.face_normal(i).dot(a + b + c) > 0.0
    })
}

#[test]
fn icosphere_level_one_scenario() {
    let mesh = generate_icosphere(1.0, 1).unwrap();
    assert_eq!(mesh.vertex_count(), 42);
    assert_eq!(mesh.triangle_count(), 80);
    assert!(outward_everywhere(&mesh));
}

#[test]
fn icosphere_seed_radius_two_scenario() {
    let mesh = generate_icosphere(2.0, 0).unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.triangle_count(), 20);
    for v in mesh.vertices() {
        assert_relative_eq!(v.length(), 2.0, epsilon = 1e-12);
    }
}

#[test]
fn icosphere_negative_subdivisions_fail() {
    match generate_icosphere(1.0, -1) {
        Err(MeshError::InvalidArgument { .. }) => {}
        other => panic!("expected invalid argument, got {other:?}"),
    }
}

#[test]
fn icosphere_deeper_levels_keep_invariants() {
    let mesh = generate_icosphere(3.0, 5).unwrap();
    assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(5));
    assert_eq!(mesh.vertex_count(), mesh.triangle_count() / 2 + 2);
    assert!(mesh.validate());
    assert!(outward_everywhere(&mesh));
    for v in mesh.vertices() {
        assert_relative_eq!(v.length(), 3.0, epsilon = 1e-9);
    }
}

#[test]
fn icosphere_exports_for_renderer() {
    let mesh = generate_icosphere(1.0, 2).unwrap();
    assert_eq!(mesh.vertices_f32().len(), mesh.vertex_count() * 3);
    let indices = mesh.indices_u32();
    assert_eq!(indices.len(), mesh.triangle_count() * 3);
    assert!(indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}

#[test]
fn cube_scenario() {
    let mesh = generate_cube(2.0, 2.0, 2.0);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(outward_everywhere(&mesh));
    for v in mesh.vertices() {
        assert_eq!(v.abs(), DVec3::ONE);
    }
}

#[test]
fn quad_scenario() {
    let mesh = generate_quad(4.0, 2.0);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    for v in mesh.vertices() {
        assert_eq!(v.abs(), DVec3::new(2.0, 1.0, 0.0));
    }
    let (min, max) = mesh.bounding_box();
    assert_eq!(min + max, DVec3::ZERO);
}

#[test]
fn descriptors_match_direct_calls() {
    let descriptors: Vec<Primitive> = serde_json::from_str(
        r#"[
            { "type": "icosphere", "radius": 1.0, "subdivisions": 2 },
            { "type": "cube", "x_length": 1.0, "y_length": 2.0, "z_length": 3.0 },
            { "type": "quad", "width": 4.0, "height": 2.0 }
        ]"#,
    )
    .unwrap();

    let meshes: Vec<Geometry> = descriptors
        .iter()
        .map(|d| d.generate())
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(meshes[0], generate_icosphere(1.0, 2).unwrap());
    assert_eq!(meshes[1], generate_cube(1.0, 2.0, 3.0));
    assert_eq!(meshes[2], generate_quad(4.0, 2.0));
}
