use crate::utils::formatting::title_case;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkMode {
    Onsite,
    Remote,
    Free,
    /// Unrecognized mode, kept verbatim (lowercased) so onsite-style
    /// work descriptions can still title-case it.
    Other(String),
}

impl WorkMode {
    pub fn parse(s: &str) -> Self {
        let tag = s.trim().to_lowercase();
        match tag.as_str() {
            "onsite" => WorkMode::Onsite,
            "remote" => WorkMode::Remote,
            "free" => WorkMode::Free,
            _ => WorkMode::Other(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WorkMode::Onsite => "onsite",
            WorkMode::Remote => "remote",
            WorkMode::Free => "free",
            WorkMode::Other(raw) => raw,
        }
    }

    /// Display form used in generated work descriptions ("Onsite work …").
    pub fn title(&self) -> String {
        title_case(self.as_str())
    }
}
