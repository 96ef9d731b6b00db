use crate::model::{Modification, ModificationType};
use crate::scan::ScanContext;

/// One modification check. Detectors are stateless and total: a check that
/// finds nothing returns an empty list, never an error, so a structurally
/// unparseable file still produces a full report.
pub trait Detector: Send + Sync {
    fn id(&self) -> &'static str;
    /// Category of the findings this check emits.
    fn kind(&self) -> ModificationType;
    fn run(&self, ctx: &ScanContext) -> anyhow::Result<Vec<Modification>>;
}
