/// Which styling rule a derived name goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    /// Type declarations (classes, enums, unions, top-levels).
    Type,
    /// Fields and methods.
    Member,
    /// Enum constants.
    EnumCase,
}

/// An identifier request for one node or sub-element.
///
/// A fixed name is emitted verbatim and never renamed. A derived name is
/// styled by the target's [`crate::NamingConvention`] and may receive a
/// numeric suffix if it collides with a name already taken in its
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Name {
    Fixed(String),
    Derived { style: NameStyle, proposal: String },
}

impl Name {
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::Fixed(name.into())
    }

    pub fn derived(style: NameStyle, proposal: impl Into<String>) -> Self {
        Self::Derived {
            style,
            proposal: proposal.into(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The fixed identifier or the unstyled proposal.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixed(name) => name,
            Self::Derived { proposal, .. } => proposal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let fixed = Name::fixed("Class_Person");
        assert!(fixed.is_fixed());
        assert_eq!(fixed.as_str(), "Class_Person");

        let derived = Name::derived(NameStyle::Member, "first_name");
        assert!(!derived.is_fixed());
        assert_eq!(derived.as_str(), "first_name");
    }
}
