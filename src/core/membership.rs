use crate::domain::model::Port;
use std::collections::HashSet;

/// Port codes whose region is in `closure`, plus `destination` itself.
///
/// The literal destination is always a member so that a port code passed as
/// destination resolves to at least `{destination}`.
pub fn resolve_port_set(
    ports: &[Port],
    closure: &HashSet<String>,
    destination: &str,
) -> HashSet<String> {
    let mut port_set: HashSet<String> = ports
        .iter()
        .filter(|port| closure.contains(&port.parent_slug))
        .map(|port| port.code.clone())
        .collect();
    port_set.insert(destination.to_string());
    port_set
}
