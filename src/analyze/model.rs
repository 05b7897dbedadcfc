use crate::model::{DataRow, GenericResponse, IterationWorkItems, TeamSettingsIteration, WorkItem};
use std::collections::HashMap;

pub type WorkItemLookup = HashMap<i64, WorkItem>;

/// All raw data for one iteration, collected before aggregation starts.
#[derive(Debug, Clone)]
pub struct IterationSnapshot {
    pub iteration: TeamSettingsIteration,
    pub relations: IterationWorkItems,
    pub work_items: WorkItemLookup,
}

impl IterationSnapshot {
    pub fn new(iteration: TeamSettingsIteration, relations: IterationWorkItems) -> Self {
        Self {
            iteration,
            relations,
            work_items: HashMap::new(),
        }
    }

    pub fn insert_work_items(&mut self, work_items: Vec<WorkItem>) {
        for work_item in work_items {
            self.work_items.insert(work_item.id, work_item);
        }
    }
}

/// How a work item first appeared in the relation list: as the source of a
/// hierarchy link (a parent), as its target (a child), or in any other link.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RelationRole {
    Parent,
    Child,
    Related,
}

#[derive(Debug, Clone)]
pub struct ResolvedWorkItem {
    pub item: WorkItem,
    pub role: RelationRole,
}

/// Result of resolving relation references against the work item lookup.
/// References without a matching work item are dropped, not failed.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub items: Vec<ResolvedWorkItem>,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffortRecord {
    pub group: String,
    pub effort: f64,
    pub original_estimate: f64,
}

#[derive(Debug, Clone, Default)]
pub struct GroupTotals {
    pub effort: f64,
    pub original_estimate: f64,
    pub count: usize,
}

impl GroupTotals {
    pub fn add(&mut self, record: &EffortRecord) {
        self.effort += record.effort;
        self.original_estimate += record.original_estimate;
        self.count += 1;
    }
}

#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    pub rows: Vec<DataRow>,
    pub dropped_references: usize,
    pub non_numeric_fields: usize,
}

impl AggregateOutcome {
    pub fn into_response(self) -> GenericResponse<DataRow> {
        GenericResponse::new(self.rows)
    }
}
