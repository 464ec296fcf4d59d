#![allow(dead_code)]
use ugrid_checker::prelude::*;

pub const TRIANGLE_MESH: &str = include_str!("fixtures/triangle_mesh.json");
pub const NONSTANDARD_LINE_MESH: &str = include_str!("fixtures/nonstandard_line_mesh.json");

/// Parse a JSON dataset fixture.
pub fn load(json: &str) -> InMemoryDataset {
    serde_json::from_str(json).expect("valid dataset fixture")
}

/// A `cf_role = mesh_topology` variable named `mesh` with the given attributes.
pub fn mesh_variable(attrs: &[(&str, AttributeValue)]) -> Variable {
    attrs.iter().fold(
        Variable::new("mesh").with_attribute("cf_role", "mesh_topology"),
        |var, (name, value)| var.with_attribute(name, value.clone()),
    )
}

/// 1D line mesh: 5 nodes, 4 edges, edge array over `edge_dims`.
pub fn line_mesh(edge_dims: [&str; 2], extra: &[(&str, AttributeValue)]) -> InMemoryDataset {
    let mut attrs = vec![
        ("topology_dimension", AttributeValue::Int(1)),
        ("node_coordinates", "node_x".into()),
        ("edge_node_connectivity", "edge_nodes".into()),
    ];
    attrs.extend(extra.iter().cloned());
    InMemoryDataset::new()
        .with_dimension("nnodes", 5)
        .with_dimension("nedges", 4)
        .with_dimension("two", 2)
        .with_variable(mesh_variable(&attrs))
        .with_variable(Variable::new("node_x").with_dimensions(["nnodes"]))
        .with_variable(Variable::new("edge_nodes").with_dimensions(edge_dims))
}

/// Run the default checker over every discovered mesh.
pub fn check(ds: &InMemoryDataset) -> CheckReport {
    UgridChecker::new().check_dataset(ds)
}

/// The result a stage produced for mesh `mesh`.
pub fn stage<'a>(report: &'a CheckReport, mesh: &str, stage: Stage) -> &'a CheckResult {
    report
        .for_mesh(mesh)
        .find(|result| result.name == stage.name())
        .unwrap_or_else(|| panic!("no {stage} result for {mesh}"))
}

/// `(score, out_of)` of a result.
pub fn graded(result: &CheckResult) -> (u32, u32) {
    (result.score, result.out_of)
}
