use std::fmt;

/// The closed set of vendors this service can talk to.
///
/// Registry rows name one of these; a row whose name matches no variant is
/// rejected at dispatch time, before any HTTP leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorKind {
    OpenAi,
    Anthropic,
    Cohere,
    Gemini,
    DeepSeek,
}

impl VendorKind {
    /// Maps a registry name onto a vendor. ASCII-lowercase fold, matching the
    /// case-insensitive registry lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "anthropic" => Some(Self::Anthropic),
            "cohere" => Some(Self::Cohere),
            "gemini" => Some(Self::Gemini),
            "deepseek" => Some(Self::DeepSeek),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Cohere => "cohere",
            Self::Gemini => "gemini",
            Self::DeepSeek => "deepseek",
        }
    }
}

impl fmt::Display for VendorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mapping_is_case_insensitive() {
        assert_eq!(VendorKind::from_name("OpenAI"), Some(VendorKind::OpenAi));
        assert_eq!(VendorKind::from_name("ANTHROPIC"), Some(VendorKind::Anthropic));
        assert_eq!(VendorKind::from_name("cohere"), Some(VendorKind::Cohere));
        assert_eq!(VendorKind::from_name("Gemini"), Some(VendorKind::Gemini));
        assert_eq!(VendorKind::from_name("DeepSeek"), Some(VendorKind::DeepSeek));
    }

    #[test]
    fn unknown_names_map_to_none() {
        assert_eq!(VendorKind::from_name("mistral"), None);
        assert_eq!(VendorKind::from_name(""), None);
    }
}
