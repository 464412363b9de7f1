use std::fmt;

/// Top-level navigation tabs.
///
/// A closed set: navigation can only ever land on one of these values, so an
/// "unknown section" is unrepresentable past the input-handling boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Overview,
    Architecture,
    Dashboard,
    Workflows,
    Documents,
    Compliance,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Architecture,
        Section::Dashboard,
        Section::Workflows,
        Section::Documents,
        Section::Compliance,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Architecture => "Agent Architecture",
            Section::Dashboard => "Operations Center",
            Section::Workflows => "Live Workflows",
            Section::Documents => "Document Intelligence",
            Section::Compliance => "Audit & Compliance",
        }
    }

    /// Index into [`Section::ALL`], used for tab highlighting.
    #[must_use]
    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = self.index();
        Section::ALL[(i + 1) % Section::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let i = self.index();
        Section::ALL[(i + Section::ALL.len() - 1) % Section::ALL.len()]
    }

    /// Map a number-row key (`1`..`6`) to a section.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let idx = digit.to_digit(10)? as usize;
        (1..=Section::ALL.len())
            .contains(&idx)
            .then(|| Section::ALL[idx - 1])
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_are_inverse() {
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
            assert_eq!(section.prev().next(), section);
        }
    }

    #[test]
    fn digits_map_in_tab_order() {
        assert_eq!(Section::from_digit('1'), Some(Section::Overview));
        assert_eq!(Section::from_digit('6'), Some(Section::Compliance));
        assert_eq!(Section::from_digit('7'), None);
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('x'), None);
    }
}
