mod util;

use ugrid_checker::prelude::*;
use util::{check, graded, line_mesh, stage};

#[test]
fn valid_topology_dimension_scores_and_is_recorded() {
    let report = check(&line_mesh(["nedges", "two"], &[]));
    assert_eq!(graded(stage(&report, "mesh", Stage::TopologyDimension)), (1, 1));

    let (_, ctx) = report.registry.iter().next().expect("one mesh context");
    assert_eq!(ctx.topology_dimension(), Some(1));
}

#[test]
fn integral_float_topology_dimension_is_accepted() {
    let ds = line_mesh(["nedges", "two"], &[("topology_dimension", 1.0.into())]);
    let report = check(&ds);
    assert_eq!(graded(stage(&report, "mesh", Stage::TopologyDimension)), (1, 1));
}

#[test]
fn out_of_range_topology_dimension_names_the_value() {
    let ds = line_mesh(["nedges", "two"], &[("topology_dimension", 4.into())]);
    let report = check(&ds);
    let result = stage(&report, "mesh", Stage::TopologyDimension);
    assert_eq!(graded(result), (0, 1));
    assert_eq!(
        result.messages,
        vec!["Invalid topology_dimension \"4\" of type \"int\"".to_string()]
    );
}

#[test]
fn text_topology_dimension_is_invalid() {
    let ds = line_mesh(["nedges", "two"], &[("topology_dimension", "1".into())]);
    let report = check(&ds);
    let result = stage(&report, "mesh", Stage::TopologyDimension);
    assert_eq!(graded(result), (0, 1));
    assert!(result.messages[0].contains("of type \"str\""), "{:?}", result.messages);
}

#[test]
fn missing_topology_dimension_fails_dependent_stages() {
    let ds = InMemoryDataset::new().with_variable(
        Variable::new("mesh")
            .with_attribute("cf_role", "mesh_topology")
            .with_attribute("node_coordinates", "x y"),
    );
    let report = check(&ds);

    let topology = stage(&report, "mesh", Stage::TopologyDimension);
    assert_eq!(graded(topology), (0, 1));
    assert!(topology.messages[0].contains("\"topology_dimension\""));

    assert_eq!(graded(stage(&report, "mesh", Stage::ConnectivityAttributes)), (0, 1));
    let nodes = stage(&report, "mesh", Stage::NodeCoordinates);
    assert_eq!(graded(nodes), (0, 1));
    assert_eq!(nodes.messages, vec!["Failed because no topology dimension exists".to_string()]);
}

#[test]
fn out_of_range_topology_dimension_still_checks_present_connectivity() {
    let ds = line_mesh(["nedges", "two"], &[("topology_dimension", 4.into())]);
    let report = check(&ds);

    let connectivity = stage(&report, "mesh", Stage::ConnectivityAttributes);
    assert_eq!(graded(connectivity), (1, 1), "{:?}", connectivity.messages);
    let (_, ctx) = report.registry.iter().next().expect("one mesh context");
    assert_eq!(ctx.nedges().map(Dimension::size), Some(4));
    assert_eq!(ctx.topology_dimension(), None);

    let nodes = stage(&report, "mesh", Stage::NodeCoordinates);
    assert_eq!(graded(nodes), (0, 1));
    assert_eq!(
        nodes.messages,
        vec!["The size of mesh's node coordinates (1) does not match the topology dimension (4)".to_string()]
    );
}

#[test]
fn zero_topology_dimension_counts_as_undeclared() {
    let ds = line_mesh(["nedges", "two"], &[("topology_dimension", 0.into())]);
    let report = check(&ds);
    assert_eq!(graded(stage(&report, "mesh", Stage::ConnectivityAttributes)), (0, 1));
    assert_eq!(
        stage(&report, "mesh", Stage::NodeCoordinates).messages,
        vec!["Failed because no topology dimension exists".to_string()]
    );
}
