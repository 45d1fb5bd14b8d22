use crate::Move;
use crate::Posture;
use petgraph::Direction;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Immutable move-transition graph.
///
/// Every key of the source mapping becomes a node, in source order, before
/// any successor-only move is added. Edge weights hold the position of the
/// successor in its source list, so successor order survives the round trip
/// through petgraph's adjacency lists. Duplicate successors are kept as
/// parallel edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: DiGraph<Move, usize>,
    index: HashMap<Move, NodeIndex>,
}

impl Graph {
    /// Ordered successors of a move.
    ///
    /// An unknown move has no successors. This is not an error: a walk that
    /// reaches such a move simply ends there.
    pub fn successors(&self, m: &Move) -> Vec<&Move> {
        match self.index.get(m) {
            None => Vec::new(),
            Some(&i) => {
                let mut edges = self
                    .graph
                    .edges_directed(i, Direction::Outgoing)
                    .collect::<Vec<_>>();
                edges.sort_by_key(|e| *e.weight());
                edges.into_iter().map(|e| &self.graph[e.target()]).collect()
            }
        }
    }
    /// Moves whose successor list contains `m`, in source order, each once.
    pub fn predecessors(&self, m: &Move) -> Vec<&Move> {
        match self.index.get(m) {
            None => Vec::new(),
            Some(&i) => self
                .graph
                .node_indices()
                .filter(|&n| self.graph.contains_edge(n, i))
                .map(|n| &self.graph[n])
                .collect(),
        }
    }
    pub fn contains(&self, m: &Move) -> bool {
        self.index.contains_key(m)
    }
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.graph.node_weights()
    }
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn transitions(&self) -> usize {
        self.graph.edge_count()
    }
    /// Moves with no recorded successors. Walks end when they reach one.
    pub fn dead_ends(&self) -> Vec<&Move> {
        self.graph
            .node_indices()
            .filter(|&n| self.graph.edges(n).next().is_none())
            .map(|n| &self.graph[n])
            .collect()
    }
    /// Postures that cannot start a walk because the graph never mentions them.
    pub fn missing_postures(&self) -> Vec<Posture> {
        Posture::all()
            .into_iter()
            .filter(|p| !self.contains(&Move::from(*p)))
            .collect()
    }

    fn node(&mut self, m: Move) -> NodeIndex {
        match self.index.get(&m) {
            Some(&i) => i,
            None => {
                let i = self.graph.add_node(m.clone());
                self.index.insert(m, i);
                i
            }
        }
    }
    fn link(&mut self, from: NodeIndex, into: NodeIndex) {
        let rank = self.graph.edges(from).count();
        self.graph.add_edge(from, into, rank);
    }
}

/// Build from (move, successors) pairs. A move listed twice keeps all of
/// its successors, appended in the order they were given.
impl FromIterator<(Move, Vec<Move>)> for Graph {
    fn from_iter<T: IntoIterator<Item = (Move, Vec<Move>)>>(iter: T) -> Self {
        let rows = iter.into_iter().collect::<Vec<_>>();
        let mut this = Self::default();
        for (key, _) in rows.iter() {
            this.node(key.clone());
        }
        for (key, nexts) in rows {
            let from = this.node(key);
            for next in nexts {
                let into = this.node(next);
                this.link(from, into);
            }
        }
        this
    }
}

impl<'a> FromIterator<(&'a str, Vec<&'a str>)> for Graph {
    fn from_iter<T: IntoIterator<Item = (&'a str, Vec<&'a str>)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(k, v)| (Move::from(k), v.into_iter().map(Move::from).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_iter([
            ("squat", vec!["kneel"]),
            ("kneel", vec!["squat", "crawl"]),
            ("crawl", vec![]),
        ])
    }

    fn names(moves: Vec<&Move>) -> Vec<&str> {
        moves.into_iter().map(Move::as_str).collect()
    }

    #[test]
    fn successors_keep_source_order() {
        let graph = sample();
        assert_eq!(names(graph.successors(&Move::from("kneel"))), ["squat", "crawl"]);
        assert_eq!(names(graph.successors(&Move::from("squat"))), ["kneel"]);
    }

    #[test]
    fn unknown_move_has_no_successors() {
        let graph = sample();
        assert!(graph.successors(&Move::from("handstand")).is_empty());
        assert!(graph.predecessors(&Move::from("handstand")).is_empty());
        assert!(!graph.contains(&Move::from("handstand")));
    }

    #[test]
    fn empty_list_is_a_dead_end() {
        let graph = sample();
        assert!(graph.successors(&Move::from("crawl")).is_empty());
        assert_eq!(names(graph.dead_ends()), ["crawl"]);
    }

    #[test]
    fn successor_only_moves_are_nodes() {
        let graph = Graph::from_iter([("stand", vec!["lunge"])]);
        assert!(graph.contains(&Move::from("lunge")));
        assert!(graph.successors(&Move::from("lunge")).is_empty());
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.transitions(), 1);
    }

    #[test]
    fn predecessors_follow_key_order() {
        let graph = Graph::from_iter([
            ("a", vec!["b"]),
            ("c", vec!["x"]),
            ("b", vec!["x", "x"]),
        ]);
        assert_eq!(names(graph.predecessors(&Move::from("x"))), ["c", "b"]);
    }

    #[test]
    fn duplicates_and_self_loops_survive() {
        let graph = Graph::from_iter([("roll", vec!["roll", "sit", "roll"])]);
        assert_eq!(names(graph.successors(&Move::from("roll"))), ["roll", "sit", "roll"]);
        assert_eq!(names(graph.predecessors(&Move::from("roll"))), ["roll"]);
    }

    #[test]
    fn repeated_keys_append() {
        let graph = Graph::from_iter([("stand", vec!["lunge"]), ("stand", vec!["squat"])]);
        assert_eq!(names(graph.successors(&Move::from("stand"))), ["lunge", "squat"]);
    }

    #[test]
    fn reads_are_idempotent() {
        let graph = sample();
        let m = Move::from("kneel");
        assert_eq!(graph.successors(&m), graph.successors(&m));
        assert_eq!(graph.predecessors(&m), graph.predecessors(&m));
    }

    #[test]
    fn reports_missing_postures() {
        let graph = sample();
        assert_eq!(graph.missing_postures(), [Posture::Stand, Posture::Crab]);
    }
}
