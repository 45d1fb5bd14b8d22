use crate::Posture;

/// A named position or transition technique. Nodes of the [`crate::Graph`].
///
/// Moves are compared by their exact name. Sources that accept loose input
/// (markdown notes) normalize before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
    /// Whether this move is one of the four walk-starting postures.
    /// Postures never count toward a sequence's length.
    pub fn is_posture(&self) -> bool {
        Posture::lookup(self.as_str()).is_some()
    }
}

impl From<&str> for Move {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for Move {
    fn from(name: String) -> Self {
        Self(name)
    }
}
impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.0
    }
}

impl AsRef<str> for Move {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
