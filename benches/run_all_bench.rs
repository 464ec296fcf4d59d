use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ugrid_checker::check::{CheckOptions, UgridChecker};
use ugrid_checker::dataset::{InMemoryDataset, Variable};

/// `meshes` independent 2D meshes, each with its own dimensions and arrays.
fn build_dataset(meshes: usize) -> InMemoryDataset {
    let mut ds = InMemoryDataset::new()
        .with_dimension("nedges", 12)
        .with_dimension("nfaces", 6)
        .with_dimension("two", 2)
        .with_dimension("maxnumnodesperface", 3);
    for m in 0..meshes {
        let nodes = format!("nnodes_{m}");
        ds.insert_dimension(&nodes, 8 + m);
        let var = |suffix: &str| format!("mesh{m}_{suffix}");
        ds.insert_variable(
            Variable::new(format!("mesh{m}"))
                .with_attribute("cf_role", "mesh_topology")
                .with_attribute("topology_dimension", 2)
                .with_attribute("node_coordinates", format!("{} {}", var("x"), var("y")))
                .with_attribute("edge_node_connectivity", var("edge_nodes"))
                .with_attribute("face_node_connectivity", var("face_nodes"))
                .with_attribute("edge_face_connectivity", var("edge_faces"))
                .with_attribute("face_face_connectivity", var("face_links"))
                .with_attribute("face_coordinates", var("face_x")),
        );
        for (suffix, dims) in [
            ("x", [nodes.as_str(), ""]),
            ("y", [nodes.as_str(), ""]),
            ("face_x", ["nfaces", ""]),
            ("edge_nodes", ["nedges", "two"]),
            ("edge_faces", ["nedges", "two"]),
            ("face_nodes", ["nfaces", "maxnumnodesperface"]),
            ("face_links", ["nfaces", "maxnumnodesperface"]),
        ] {
            let dims = dims.into_iter().filter(|d| !d.is_empty());
            ds.insert_variable(Variable::new(var(suffix)).with_dimensions(dims));
        }
    }
    ds
}

fn bench_run_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_all");

    for &meshes in &[1usize, 16, 128] {
        let ds = build_dataset(meshes);

        group.bench_with_input(BenchmarkId::new("full_pipeline", meshes), &meshes, |b, _| {
            let checker = UgridChecker::new();
            b.iter(|| {
                let report = checker.check_dataset(&ds);
                black_box(report);
            });
        });

        group.bench_with_input(BenchmarkId::new("required_only", meshes), &meshes, |b, _| {
            let checker = UgridChecker::with_options(CheckOptions::required_only());
            b.iter(|| {
                let report = checker.check_dataset(&ds);
                black_box(report);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_all);
criterion_main!(benches);
