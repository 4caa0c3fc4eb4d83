use std::fmt;

use convert_case::{Case, Casing};

/// A widget name used in tree dumps and log output: lowercase ASCII
/// alphanumerics and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName {
    /// Stored name string.
    name: String,
}

impl NodeName {
    /// Munge an arbitrary string into a node name: snake case, with invalid
    /// characters removed. An empty result becomes `"node"`.
    pub fn convert(name: &str) -> Self {
        let snake = name.to_case(Case::Snake);
        let name: String = snake
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect();
        if name.is_empty() {
            return Self {
                name: "node".into(),
            };
        }
        Self { name }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert() {
        assert_eq!(NodeName::convert("TextInput"), "text_input");
        assert_eq!(NodeName::convert("SizedBox"), "sized_box");
        assert_eq!(NodeName::convert("Row 2"), "row_2");
        assert_eq!(NodeName::convert("--"), "node");
    }
}
