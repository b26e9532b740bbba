use std::sync::RwLock;

/// Holder for the currently selected theme.
///
/// The active name can be reassigned at any time; the full theme list is
/// fixed at construction. Interior mutability lets one holder be shared
/// between the caller and the locator, which re-reads the name on every
/// resolution call. Concurrent renames are last-writer-wins on the name
/// field; there is no transaction with in-flight lookups.
#[derive(Debug)]
pub struct ActiveTheme {
    name: RwLock<String>,
    themes: Vec<String>,
}

impl ActiveTheme {
    pub fn new(name: impl Into<String>, themes: Vec<String>) -> Self {
        Self {
            name: RwLock::new(name.into()),
            themes,
        }
    }

    /// Current active theme name.
    pub fn name(&self) -> String {
        match self.name.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the active theme name.
    ///
    /// The new name is not validated against the configured theme list;
    /// it takes effect for all subsequent resolution calls.
    pub fn set_name(&self, name: impl Into<String>) {
        match self.name.write() {
            Ok(mut guard) => *guard = name.into(),
            Err(poisoned) => *poisoned.into_inner() = name.into(),
        }
    }

    /// Full list of known themes, in fallback priority order.
    pub fn themes(&self) -> &[String] {
        &self.themes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_roundtrip() {
        let theme = ActiveTheme::new("foo", vec!["foo".into(), "bar".into()]);
        assert_eq!(theme.name(), "foo");

        theme.set_name("bar");
        assert_eq!(theme.name(), "bar");
    }

    #[test]
    fn set_name_skips_validation() {
        let theme = ActiveTheme::new("foo", vec!["foo".into(), "bar".into()]);

        theme.set_name("unlisted");
        assert_eq!(theme.name(), "unlisted");
    }

    #[test]
    fn theme_list_keeps_construction_order() {
        let theme = ActiveTheme::new("a", vec!["c".into(), "a".into(), "b".into()]);
        assert_eq!(
            theme.themes(),
            &["c".to_string(), "a".to_string(), "b".to_string()]
        );
    }
}
