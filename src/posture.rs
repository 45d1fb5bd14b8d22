use crate::Move;
use rand::Rng;

/// One of the four canonical movement types.
///
/// Postures are the only legal starting points of a walk, and appending one
/// mid-walk does not count toward the walk's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Posture {
    Squat,
    Stand,
    Crawl,
    Crab,
}

impl Posture {
    pub const fn all() -> [Self; 4] {
        [Self::Squat, Self::Stand, Self::Crawl, Self::Crab]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Stand => "stand",
            Self::Crawl => "crawl",
            Self::Crab => "crab",
        }
    }
    /// Posture named exactly `s`, if any.
    pub fn lookup(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.name() == s)
    }
    /// Uniform draw using the caller's random source.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::all()[rng.random_range(0..4)]
    }
}

impl From<Posture> for Move {
    fn from(posture: Posture) -> Self {
        Move::from(posture.name())
    }
}

impl TryFrom<&str> for Posture {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::lookup(s).ok_or_else(|| anyhow::anyhow!("not a posture: {}", s))
    }
}
impl TryFrom<&Move> for Posture {
    type Error = anyhow::Error;
    fn try_from(m: &Move) -> Result<Self, Self::Error> {
        Self::try_from(m.as_str())
    }
}

impl std::fmt::Display for Posture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
