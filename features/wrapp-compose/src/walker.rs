use crate::{dependency_graph::DependencyGraph, errors::CycleError, types::TypeInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    /// On the current descent path
    InProgress,
    Done,
}

/// Depth first walker over a [DependencyGraph]
///
/// Walks in post-order: all targets of a node's outgoing edges are visited before the node
/// itself. As edges point from a dependency to its dependents, reversing the visitation
/// sequence yields a construction order where every dependency comes first.
///
/// Roots are taken in node insertion order and targets in edge insertion order, so the
/// resulting order is deterministic but not sorted in any canonical way.
pub struct GraphWalker<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> GraphWalker<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Whether any descent reaches a node that is still on its own path
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Returns the first cycle found, starting and ending with the same type
    pub fn find_cycle(&self) -> Option<Vec<TypeInfo>> {
        self.walk_all(|_| {}).err().map(|error| error.chain)
    }

    /// Visits every node exactly once in depth first post-order
    ///
    /// Aborts with a [CycleError] as soon as a back edge is found. Nodes visited before
    /// the abort have already been passed to `visit`, callers must discard them.
    pub fn walk_all(&self, mut visit: impl FnMut(TypeInfo)) -> Result<(), CycleError> {
        let mut states = vec![VisitState::Unvisited; self.graph.node_count()];
        let mut path = Vec::new();

        for root in 0..self.graph.node_count() {
            if states[root] == VisitState::Done {
                continue;
            }
            descend(self.graph, root, &mut states, &mut path, &mut visit)?;
        }

        return Ok(());

        fn descend(
            graph: &DependencyGraph,
            node: usize,
            states: &mut [VisitState],
            path: &mut Vec<usize>,
            visit: &mut impl FnMut(TypeInfo),
        ) -> Result<(), CycleError> {
            states[node] = VisitState::InProgress;
            path.push(node);

            for &target in graph.targets(node) {
                match states[target] {
                    VisitState::Done => continue,
                    VisitState::InProgress => {
                        // `target` is an ancestor on the current path
                        let start = path.iter().position(|n| *n == target).unwrap_or(0);
                        let mut chain: Vec<TypeInfo> =
                            path[start..].iter().map(|n| graph.node(*n)).collect();
                        chain.push(graph.node(target));
                        return Err(CycleError { chain });
                    }
                    VisitState::Unvisited => descend(graph, target, states, path, visit)?,
                }
            }

            path.pop();
            states[node] = VisitState::Done;
            visit(graph.node(node));
            Ok(())
        }
    }

    /// The reversed post-order: each type appears after everything it depends on
    pub fn topological_order(&self) -> Result<Vec<TypeInfo>, CycleError> {
        let mut order = Vec::with_capacity(self.graph.node_count());
        self.walk_all(|node| order.push(node))?;
        order.reverse();
        Ok(order)
    }
}
