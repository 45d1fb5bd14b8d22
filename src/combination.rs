use crate::Graph;
use crate::Move;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One way through a focus move: in from a predecessor, out to a successor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Combination {
    before: Move,
    focus: Move,
    after: Move,
}

impl Combination {
    /// Every predecessor × successor pair around `focus`, predecessors
    /// outermost, both sides in graph order. Empty when either side is.
    pub fn generate(graph: &Graph, focus: &Move) -> Vec<Self> {
        let befores = graph.predecessors(focus);
        let afters = graph.successors(focus);
        befores
            .iter()
            .flat_map(|&before| {
                afters.iter().map(move |&after| Self {
                    before: before.clone(),
                    focus: focus.clone(),
                    after: after.clone(),
                })
            })
            .collect()
    }

    /// Up to `k` distinct combinations, uniformly without replacement.
    /// Parallel edges make `generate` repeat triples; repeats are drawn once.
    pub fn sample<R: Rng>(all: &[Self], k: usize, rng: &mut R) -> Vec<Self> {
        let mut seen = std::collections::HashSet::new();
        let unique = all
            .iter()
            .filter(|c| seen.insert(*c))
            .collect::<Vec<_>>();
        unique.choose_multiple(rng, k).map(|&c| c.clone()).collect()
    }

    pub fn before(&self) -> &Move {
        &self.before
    }
    pub fn focus(&self) -> &Move {
        &self.focus
    }
    pub fn after(&self) -> &Move {
        &self.after
    }
}

impl From<Combination> for (Move, Move, Move) {
    fn from(c: Combination) -> Self {
        (c.before, c.focus, c.after)
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [&self.before, &self.focus, &self.after].map(Move::as_str);
        write!(f, "{}", names.join(crate::ARROW))
    }
}
