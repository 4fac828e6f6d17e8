use crate::domain::model::Region;
use std::collections::{HashMap, HashSet, VecDeque};

/// Children keyed by parent slug.
pub fn children_by_parent(regions: &[Region]) -> HashMap<&str, Vec<&str>> {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for region in regions {
        if let Some(parent) = region.parent_slug.as_deref() {
            children.entry(parent).or_default().push(region.slug.as_str());
        }
    }
    children
}

/// Returns `start` plus every region whose parent chain passes through it.
///
/// Breadth-first over the parent -> children adjacency; depth is unbounded.
/// `start` is always part of the result, known region or not.
pub fn resolve_region_closure(regions: &[Region], start: &str) -> HashSet<String> {
    let children = children_by_parent(regions);

    let mut closure = HashSet::new();
    let mut queue = VecDeque::new();
    closure.insert(start.to_string());
    queue.push_back(start);

    while let Some(slug) = queue.pop_front() {
        for child in children.get(slug).into_iter().flatten() {
            // 已走訪的節點不再展開
            if closure.insert((*child).to_string()) {
                queue.push_back(*child);
            }
        }
    }

    tracing::trace!("Region closure of {} has {} members", start, closure.len());
    closure
}
