//! Impact layer - quantity resolution, evaluation, and reporting

pub mod diagnostics;
pub mod evaluator;
pub mod report;
pub mod resolver;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use evaluator::{Evaluation, ImpactEvaluator};
pub use report::{ElementImpact, ImpactReport};
pub use resolver::{QuantityResolver, QuantitySource, ResolvedQuantity};
