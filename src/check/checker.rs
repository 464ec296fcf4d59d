//! The check orchestrator.

use crate::check::options::CheckOptions;
use crate::check::result::{CheckLevel, CheckReport, CheckResult};
use crate::check::stage::{DEFAULT_PIPELINE, StageDescriptor, validate_pipeline};
use crate::dataset::DatasetView;
use crate::debug_invariants::DebugInvariants;
use crate::mesh::context::MeshContext;
use crate::mesh::registry::MeshRegistry;
use crate::mesh::{MeshVariable, discover_meshes};
use crate::ugrid_error::UgridError;

/// UGRID conventions version the stages implement.
pub const UGRID_VERSION: &str = "2.0";

/// Name carried by the run summary result.
pub const SUMMARY_CHECK: &str = "mesh_presence";

/// Runs the stage pipeline over every mesh of a dataset.
#[derive(Clone, Debug)]
pub struct UgridChecker {
    options: CheckOptions,
    stages: Vec<StageDescriptor>,
}

impl Default for UgridChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl UgridChecker {
    /// Checker with default options and the default pipeline.
    pub fn new() -> Self {
        Self::with_options(CheckOptions::default())
    }

    /// Checker with the default pipeline.
    pub fn with_options(options: CheckOptions) -> Self {
        Self {
            options,
            stages: DEFAULT_PIPELINE.to_vec(),
        }
    }

    /// Checker with a custom pipeline.
    ///
    /// Fails when a stage that will run reads a context key no earlier stage writes.
    pub fn with_stages(
        options: CheckOptions,
        stages: Vec<StageDescriptor>,
    ) -> Result<Self, UgridError> {
        let checker = Self { options, stages };
        let active: Vec<StageDescriptor> = checker.active_stages().copied().collect();
        validate_pipeline(&active)?;
        Ok(checker)
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// The full pipeline, including stages disabled by the options.
    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    /// Human-readable checker description.
    pub fn description(&self) -> String {
        format!("UGRID {UGRID_VERSION} compliance-checker")
    }

    /// Discovers the dataset's meshes and checks them.
    pub fn check_dataset(&self, dataset: &dyn DatasetView) -> CheckReport {
        let meshes = discover_meshes(dataset);
        self.run(dataset, &meshes)
    }

    /// Checks the given meshes.
    ///
    /// Produces one result per active stage per mesh, in stage order, then
    /// one summary result. Without meshes only the failing summary is
    /// produced. Each run starts from a fresh registry.
    pub fn run(&self, dataset: &dyn DatasetView, meshes: &[MeshVariable]) -> CheckReport {
        let mut registry = MeshRegistry::new();
        let mut results = Vec::new();
        let mut summary = CheckResult::new(
            SUMMARY_CHECK,
            CheckLevel::High,
            "Run UGRID checks if mesh variables are present in the data",
        );

        if meshes.is_empty() {
            log::warn!("no mesh variables detected; all checks fail");
            summary.fail("No mesh variables are detected in the data; all checks fail.");
            results.push(summary);
            return CheckReport { results, registry };
        }

        for mesh in meshes {
            let ctx = registry.get(mesh);
            results.extend(self.run_mesh(dataset, ctx));
        }
        summary.pass();
        results.push(summary);

        let report = CheckReport { results, registry };
        let (score, out_of) = report.weighted_score();
        log::info!(
            "{}: checked {} mesh(es), weighted score {score}/{out_of}",
            self.description(),
            meshes.len()
        );
        report
    }

    /// Runs the active stages, in order, against one mesh context.
    pub fn run_mesh(&self, dataset: &dyn DatasetView, ctx: &mut MeshContext) -> Vec<CheckResult> {
        self.active_stages()
            .map(|descriptor| {
                log::debug!("mesh `{}`: running {}", ctx.name(), descriptor.stage);
                let result = (descriptor.run)(dataset, ctx, &self.options);
                ctx.debug_assert_invariants();
                result
            })
            .collect()
    }

    fn active_stages(&self) -> impl Iterator<Item = &StageDescriptor> {
        self.stages
            .iter()
            .filter(|descriptor| self.options.include_optional || !descriptor.stage.is_optional())
    }
}
