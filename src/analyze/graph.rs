use crate::analyze::{RelationRole, Resolution, ResolvedWorkItem, WorkItemLookup};
use crate::model::{IterationWorkItems, WorkItemLink, WorkItemReference};
use itertools::Itertools;
use log::warn;

pub trait GraphResolver {
    fn resolve_items(&self, lookup: &WorkItemLookup) -> Resolution;
}

impl GraphResolver for IterationWorkItems {
    fn resolve_items(&self, lookup: &WorkItemLookup) -> Resolution {
        let references = self
            .work_item_relations
            .iter()
            .flat_map(|link| link.endpoints())
            .unique_by(|(reference, _)| reference.id);

        let mut resolution = Resolution::default();
        for (reference, role) in references {
            match lookup.get(&reference.id) {
                Some(item) => resolution.items.push(ResolvedWorkItem {
                    item: item.clone(),
                    role,
                }),
                None => {
                    warn!("No work item for referenced id {}, dropped", reference.id);
                    resolution.dropped += 1;
                }
            }
        }
        resolution
    }
}

trait LinkEndpoints {
    fn endpoints(&self) -> [(&WorkItemReference, RelationRole); 2];
}

impl LinkEndpoints for WorkItemLink {
    fn endpoints(&self) -> [(&WorkItemReference, RelationRole); 2] {
        if self.is_hierarchy() {
            [
                (&self.source, RelationRole::Parent),
                (&self.target, RelationRole::Child),
            ]
        } else {
            [
                (&self.source, RelationRole::Related),
                (&self.target, RelationRole::Related),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkItem;
    use std::collections::HashMap;

    fn reference(id: i64) -> WorkItemReference {
        WorkItemReference {
            id,
            url: format!("https://tracker.local/wit/{id}"),
        }
    }

    fn link(rel: &str, source: i64, target: i64) -> WorkItemLink {
        WorkItemLink {
            rel: rel.to_string(),
            source: reference(source),
            target: reference(target),
        }
    }

    fn relations(links: Vec<WorkItemLink>) -> IterationWorkItems {
        IterationWorkItems {
            url: "https://tracker.local/iterationworkitems".to_string(),
            work_item_relations: links,
        }
    }

    fn lookup(ids: &[i64]) -> WorkItemLookup {
        let mut map = HashMap::new();
        for id in ids {
            map.insert(
                *id,
                WorkItem {
                    id: *id,
                    url: format!("https://tracker.local/wit/{id}"),
                    fields: HashMap::new(),
                },
            );
        }
        map
    }

    #[test]
    fn empty_relations_resolve_to_empty_sequence() {
        let resolution = relations(vec![]).resolve_items(&lookup(&[1, 2]));

        assert!(resolution.items.is_empty());
        assert_eq!(resolution.dropped, 0);
    }

    #[test]
    fn hierarchy_links_annotate_parent_and_child_roles() {
        let links = vec![link("System.LinkTypes.Hierarchy-Forward", 1, 2)];
        let resolution = relations(links).resolve_items(&lookup(&[1, 2]));

        assert_eq!(resolution.items.len(), 2);
        assert_eq!(resolution.items[0].item.id, 1);
        assert_eq!(resolution.items[0].role, RelationRole::Parent);
        assert_eq!(resolution.items[1].item.id, 2);
        assert_eq!(resolution.items[1].role, RelationRole::Child);
    }

    #[test]
    fn non_hierarchy_links_annotate_related_role() {
        let links = vec![link("System.LinkTypes.Related", 3, 4)];
        let resolution = relations(links).resolve_items(&lookup(&[3, 4]));

        assert!(resolution
            .items
            .iter()
            .all(|resolved| resolved.role == RelationRole::Related));
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence_in_relation_order() {
        let links = vec![
            link("System.LinkTypes.Hierarchy-Forward", 1, 2),
            link("System.LinkTypes.Hierarchy-Forward", 1, 3),
            link("System.LinkTypes.Related", 3, 2),
        ];
        let resolution = relations(links).resolve_items(&lookup(&[1, 2, 3]));

        let ids = resolution
            .items
            .iter()
            .map(|resolved| resolved.item.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(resolution.items[0].role, RelationRole::Parent);
        assert_eq!(resolution.items[2].role, RelationRole::Child);
    }

    #[test]
    fn unresolved_references_are_dropped_and_counted() {
        let links = vec![
            link("System.LinkTypes.Hierarchy-Forward", 1, 99),
            link("System.LinkTypes.Related", 2, 98),
        ];
        let resolution = relations(links).resolve_items(&lookup(&[1, 2]));

        let ids = resolution
            .items
            .iter()
            .map(|resolved| resolved.item.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(resolution.dropped, 2);
    }
}
