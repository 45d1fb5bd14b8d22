use crate::Graph;
use crate::Move;
use crate::Posture;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Inclusive range of counted (non-posture) moves a walk aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: usize,
    max: usize,
}

impl Bounds {
    pub fn new(min: usize, max: usize) -> anyhow::Result<Self> {
        if min > max {
            Err(anyhow::anyhow!("empty length range {}..={}", min, max))
        } else {
            Ok(Self { min, max })
        }
    }
    pub fn min(&self) -> usize {
        self.min
    }
    pub fn max(&self) -> usize {
        self.max
    }
    pub fn contains(&self, n: usize) -> bool {
        (self.min..=self.max).contains(&n)
    }
    /// Uniform target length.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: crate::MIN_LENGTH,
            max: crate::MAX_LENGTH,
        }
    }
}

/// One random walk over the transition graph.
///
/// Every move after the first is a successor of the move before it. The only
/// exception is the closing move appended by [`Sequence::close`], which
/// repeats the first move and only exists when that edge is real anyway.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Sequence {
    moves: Vec<Move>,
    closed: bool,
}

impl Sequence {
    /// Draw a target length from `bounds`, start at a random posture, and
    /// walk. The walk is left open; chain [`Sequence::close`] to close it.
    pub fn generate<R: Rng>(graph: &Graph, bounds: Bounds, rng: &mut R) -> Self {
        let target = bounds.sample(rng);
        let start = Posture::sample(rng);
        log::debug!("walking from {} toward {} moves", start, target);
        Self::walk(graph, Move::from(start), target, rng)
    }

    /// Walk from `start` until `target` non-posture moves were appended or a
    /// dead end is reached. A walk that appends [`crate::WALK_LIMIT`]
    /// postures in a row without a counted move gives up.
    pub fn walk<R: Rng>(graph: &Graph, start: Move, target: usize, rng: &mut R) -> Self {
        let mut moves = vec![start];
        let mut count = 0;
        let mut streak = 0;
        while count < target {
            if streak >= crate::WALK_LIMIT {
                log::warn!("walk abandoned after {} postures in a row", streak);
                break;
            }
            let last = moves.last().expect("walk starts non-empty");
            let next = match graph.successors(last).choose(rng) {
                Some(&next) => next.clone(),
                None => {
                    log::debug!("dead end at {} after {} moves", last, count);
                    break;
                }
            };
            match next.is_posture() {
                true => streak += 1,
                false => {
                    count += 1;
                    streak = 0;
                }
            }
            moves.push(next);
        }
        Self {
            moves,
            closed: false,
        }
    }

    /// Append the first move again if it is a successor of the last one.
    pub fn close(mut self, graph: &Graph) -> Self {
        if self.closed {
            return self;
        }
        let first = self.moves.first().expect("walk starts non-empty");
        let last = self.moves.last().expect("walk starts non-empty");
        if graph.successors(last).contains(&first) {
            let first = first.clone();
            self.moves.push(first);
            self.closed = true;
        }
        self
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    pub fn first(&self) -> &Move {
        self.moves.first().expect("walk starts non-empty")
    }
    pub fn is_closed(&self) -> bool {
        self.closed
    }
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Moves of the walk proper, without the closing repeat.
    pub fn walked(&self) -> &[Move] {
        match self.closed {
            true => &self.moves[..self.moves.len() - 1],
            false => &self.moves,
        }
    }
    /// Number of non-posture moves in the walk proper.
    pub fn count(&self) -> usize {
        self.walked().iter().filter(|m| !m.is_posture()).count()
    }
}

impl From<Sequence> for Vec<Move> {
    fn from(sequence: Sequence) -> Self {
        sequence.moves
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.moves.iter().map(Move::as_str).collect::<Vec<_>>();
        write!(f, "{}", names.join(crate::ARROW))
    }
}
