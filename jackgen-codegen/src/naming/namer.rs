//! Collision resolution within a namespace.

use std::collections::HashSet;

use super::{Name, NamingConvention};

/// Assigns identifiers within one namespace.
///
/// Fixed names are taken verbatim. Derived names are styled and then get
/// the first free candidate among `name`, `name2`, `name3`, ...
#[derive(Debug, Default, Clone)]
pub struct Namer {
    taken: HashSet<String>,
}

impl Namer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark identifiers as unavailable to derived names.
    pub fn reserve<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taken.extend(names.into_iter().map(Into::into));
    }

    /// Take a fixed name as-is.
    pub fn fixed(&mut self, name: &str) -> String {
        if !self.taken.insert(name.to_string()) {
            tracing::warn!(name, "fixed name is bound more than once in one namespace");
        }
        name.to_string()
    }

    /// Take the first free variant of an already styled name.
    pub fn derived(&mut self, styled: &str) -> String {
        let mut candidate = styled.to_string();
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{}{}", styled, n);
            n += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// Assign every name in order, fixed names first.
    ///
    /// The returned identifiers line up with `names`.
    pub fn assign_all(&mut self, names: &[Name], convention: &NamingConvention) -> Vec<String> {
        let mut assigned: Vec<Option<String>> = vec![None; names.len()];
        for (slot, name) in assigned.iter_mut().zip(names) {
            if let Name::Fixed(fixed) = name {
                *slot = Some(self.fixed(fixed));
            }
        }
        for (slot, name) in assigned.iter_mut().zip(names) {
            if let Name::Derived { style, proposal } = name {
                *slot = Some(self.derived(&convention.style(*style, proposal)));
            }
        }
        assigned.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use jackgen_core::{to_camel_case, to_pascal_case, to_upper_snake_case};

    use super::*;
    use crate::NameStyle;

    fn underscore(name: &str) -> String {
        format!("_{}", name)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        type_name: to_pascal_case,
        member_name: to_camel_case,
        enum_case_name: to_upper_snake_case,
        reserved_words: &[],
        escape_reserved: underscore,
    };

    #[test]
    fn test_derived_gets_suffix() {
        let mut namer = Namer::new();
        assert_eq!(namer.derived("Person"), "Person");
        assert_eq!(namer.derived("Person"), "Person2");
        assert_eq!(namer.derived("Person"), "Person3");
    }

    #[test]
    fn test_reserved_names_avoided() {
        let mut namer = Namer::new();
        namer.reserve(["Converter"]);
        assert_eq!(namer.derived("Converter"), "Converter2");
    }

    #[test]
    fn test_fixed_bypasses_resolution() {
        let mut namer = Namer::new();
        namer.reserve(["Converter"]);
        assert_eq!(namer.fixed("Converter"), "Converter");
    }

    #[test]
    fn test_fixed_names_win_over_earlier_derived() {
        let mut namer = Namer::new();
        let names = vec![
            Name::derived(NameStyle::Type, "class person"),
            Name::fixed("ClassPerson"),
        ];
        let assigned = namer.assign_all(&names, &TEST_NAMING);
        assert_eq!(assigned, vec!["ClassPerson2", "ClassPerson"]);
    }
}
