//! UGRID check stages and their orchestration.
//!
//! A run visits each mesh and executes the stages of the pipeline in order:
//!
//! 1. topology dimension
//! 2. connectivity attributes (derives `nedges`/`nfaces`)
//! 3. node coordinates
//! 4. edge-face connectivity (optional)
//! 5. face-edge connectivity (optional)
//! 6. face-face connectivity (optional)
//!
//! followed by one summary result for the whole run.

pub mod checker;
pub mod options;
pub mod result;
pub mod stage;
pub mod stages;

pub use checker::{SUMMARY_CHECK, UGRID_VERSION, UgridChecker};
pub use options::{CheckOptions, UnsupportedHandling};
pub use result::{CheckLevel, CheckReport, CheckResult};
pub use stage::{DEFAULT_PIPELINE, Stage, StageDescriptor, StageFn, validate_pipeline};
