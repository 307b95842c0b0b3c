#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Work,
    Travel,
    Free,
    /// Unrecognized tag, kept verbatim (lowercased) until derivation
    /// rewrites it to Free.
    Other(String),
}

impl EventType {
    /// Parse a raw tag. Matching is lowercase/trimmed; anything outside
    /// the three known kinds is carried along as Other.
    pub fn parse(s: &str) -> Self {
        let tag = s.trim().to_lowercase();
        match tag.as_str() {
            "work" => EventType::Work,
            "travel" => EventType::Travel,
            "free" => EventType::Free,
            _ => EventType::Other(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::Work => "work",
            EventType::Travel => "travel",
            EventType::Free => "free",
            EventType::Other(raw) => raw,
        }
    }

    /// Secondary sort key: work and free rows come before travel rows
    /// sharing the same start.
    pub fn sort_rank(&self) -> u8 {
        match self {
            EventType::Travel => 1,
            _ => 0,
        }
    }
}
