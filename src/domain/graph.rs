//! Include graph for a category
//!
//! A read-only view of which lists include which, derived from the include
//! directives in each description. Uses petgraph for graph operations.

use petgraph::algo::{kosaraju_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

use super::directive;
use super::list::List;
use super::resolve::ResolveError;

/// Include relationships between the lists of one batch
#[derive(Debug, Default)]
pub struct IncludeGraph {
    /// Edge direction: included -> includer
    graph: DiGraph<String, ()>,

    /// Map from list name to node index (first match wins)
    node_map: HashMap<String, NodeIndex>,
}

impl IncludeGraph {
    /// Builds the graph from the include directives of every list
    pub fn from_lists(lists: &[List]) -> Result<Self, ResolveError> {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();

        for list in lists {
            node_map
                .entry(list.name.clone())
                .or_insert_with(|| graph.add_node(list.name.clone()));
        }

        for list in lists {
            let includer = node_map[&list.name];
            for include in directive::extract_includes(&list.description) {
                let included = node_map.get(&include).ok_or_else(|| ResolveError::ListNotFound {
                    name: include.clone(),
                    referenced_by: list.name.clone(),
                })?;
                graph.update_edge(*included, includer, ());
            }
        }

        Ok(Self { graph, node_map })
    }

    fn neighbors(&self, name: &str, direction: Direction) -> Vec<String> {
        let Some(&idx) = self.node_map.get(name) else {
            return vec![];
        };

        let mut names: Vec<String> = self
            .graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.graph.node_weight(n).cloned())
            .collect();
        names.sort();
        names
    }

    /// Lists directly included by `name`
    pub fn includes(&self, name: &str) -> Vec<String> {
        self.neighbors(name, Direction::Incoming)
    }

    /// Lists that directly include `name`
    pub fn dependents(&self, name: &str) -> Vec<String> {
        self.neighbors(name, Direction::Outgoing)
    }

    /// All lists with included lists before the lists that include them
    pub fn resolution_order(&self) -> Result<Vec<String>, ResolveError> {
        match toposort(&self.graph, None) {
            Ok(order) => Ok(order
                .into_iter()
                .filter_map(|idx| self.graph.node_weight(idx).cloned())
                .collect()),
            Err(cycle) => Err(ResolveError::CycleDetected {
                path: self.cycle_through(cycle.node_id()),
            }),
        }
    }

    /// Names in the strongly connected component containing `start`
    fn cycle_through(&self, start: NodeIndex) -> Vec<String> {
        let component = kosaraju_scc(&self.graph)
            .into_iter()
            .find(|scc| scc.contains(&start))
            .unwrap_or_else(|| vec![start]);

        let mut names: Vec<String> = component
            .into_iter()
            .filter_map(|idx| self.graph.node_weight(idx).cloned())
            .collect();
        names.sort();
        if let Some(first) = names.first().cloned() {
            names.push(first);
        }
        names
    }

    /// Returns the number of lists in the graph
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Returns true if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }
}
