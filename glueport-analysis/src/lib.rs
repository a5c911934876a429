//! glueport-analysis: the decision engine of the Glueport migration toolkit.
//!
//! Three subsystems, all pure over their inputs:
//! - [`inference`]: turns raw export columns into typed field-schema
//!   definitions using pattern and statistical heuristics
//! - [`orgs`]: reconciles source organizations against pre-existing target
//!   organizations by priority-ordered match rules
//! - [`audit`]: runs integrity checks over a parsed export and produces a
//!   severity-classified pre-flight report
//!
//! None of these raise for malformed input; absence of signal degrades to a
//! safe default (`text` field type, a `create` match outcome, or an emitted
//! warning). The orchestrator that performs the actual writes lives outside
//! this crate and must honor the report's blocker gate.

pub mod audit;
pub mod inference;
pub mod orgs;

pub use audit::{summarize, ReportSummary, WarningDetector};
pub use inference::{column_name_to_key, SchemaInference};
pub use orgs::{OrgMatcher, SourceOrganization, TargetOrganization};
