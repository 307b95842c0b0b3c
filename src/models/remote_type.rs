#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteType {
    Domestic,
    Foreign,
    NA,
    /// Unrecognized tag, kept verbatim (lowercased). A blank field loads
    /// as Other("") and is normalized to NA where derivation calls for it.
    Other(String),
}

impl RemoteType {
    pub fn parse(s: &str) -> Self {
        let tag = s.trim().to_lowercase();
        match tag.as_str() {
            "domestic" => RemoteType::Domestic,
            "foreign" => RemoteType::Foreign,
            "n/a" => RemoteType::NA,
            _ => RemoteType::Other(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RemoteType::Domestic => "domestic",
            RemoteType::Foreign => "foreign",
            RemoteType::NA => "n/a",
            RemoteType::Other(raw) => raw,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, RemoteType::Other(raw) if raw.is_empty())
    }
}
