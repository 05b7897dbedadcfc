mod analyzer;
mod extract;
mod graph;
mod model;

pub use analyzer::Analyzer;
pub use extract::EffortSource;
pub use extract::FieldConfig;
pub use graph::GraphResolver;
pub use model::AggregateOutcome;
pub use model::EffortRecord;
pub use model::GroupTotals;
pub use model::IterationSnapshot;
pub use model::RelationRole;
pub use model::Resolution;
pub use model::ResolvedWorkItem;
pub use model::WorkItemLookup;
