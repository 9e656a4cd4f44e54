//! Yes/no feature switches.

/// An optional feature toggled by a string input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureFlag {
    /// The input was exactly `yes`.
    Enabled,
    /// Any other value, including an empty one.
    #[default]
    Disabled,
}

impl FeatureFlag {
    /// Parses an action input. Only `yes` enables a feature.
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        if value.trim() == "yes" {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    /// Returns true if the feature should run.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_enables() {
        assert_eq!(FeatureFlag::from_input("yes"), FeatureFlag::Enabled);
        assert_eq!(FeatureFlag::from_input(" yes\n"), FeatureFlag::Enabled);
        assert_eq!(FeatureFlag::from_input("no"), FeatureFlag::Disabled);
        assert_eq!(FeatureFlag::from_input("YES"), FeatureFlag::Disabled);
        assert_eq!(FeatureFlag::from_input("true"), FeatureFlag::Disabled);
        assert_eq!(FeatureFlag::from_input(""), FeatureFlag::Disabled);
    }
}
