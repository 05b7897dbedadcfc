use crate::analyze::{
    AggregateOutcome, EffortSource, FieldConfig, GraphResolver, GroupTotals, IterationSnapshot,
    RelationRole, Resolution,
};
use crate::model::DataRow;
use indexmap::IndexMap;
use log::debug;

pub trait Analyzer {
    fn aggregate(&self, config: &FieldConfig) -> AggregateOutcome;
}

impl Analyzer for IterationSnapshot {
    /// Single pass over one iteration snapshot: resolve relations, extract
    /// numeric records, sum them per group. Groups keep the insertion order
    /// of their first record, so identical input always produces identical
    /// row order.
    fn aggregate(&self, config: &FieldConfig) -> AggregateOutcome {
        let resolution = self.relations.resolve_items(&self.work_items);
        debug!(
            "Resolved {} work items for iteration `{}` ({} parents, {} children)",
            resolution.items.len(),
            self.iteration.name,
            resolution.count_role(RelationRole::Parent),
            resolution.count_role(RelationRole::Child),
        );

        let mut non_numeric_fields = 0;
        let mut groups: IndexMap<String, GroupTotals> = IndexMap::new();
        for resolved in &resolution.items {
            let (record, non_numeric) = resolved.item.effort_record(config);
            non_numeric_fields += non_numeric;
            groups.entry(record.group.clone()).or_default().add(&record);
        }

        let rows = groups
            .into_iter()
            .map(|(name, totals)| {
                DataRow::new(name, totals.effort, totals.original_estimate, totals.count)
            })
            .collect::<Vec<_>>();

        AggregateOutcome {
            rows,
            dropped_references: resolution.dropped,
            non_numeric_fields,
        }
    }
}

trait RoleCount {
    fn count_role(&self, role: RelationRole) -> usize;
}

impl RoleCount for Resolution {
    fn count_role(&self, role: RelationRole) -> usize {
        self.items
            .iter()
            .filter(|resolved| resolved.role == role)
            .count()
    }
}
