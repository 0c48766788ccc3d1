//! Message key definitions

use std::borrow::Cow;

use super::MAX_PLACEHOLDER;

/// One message per field and failure condition
///
/// Built-in tables borrow static text; tables loaded at runtime own theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTable {
    pub login_required: Cow<'static, str>,
    /// May contain `{max}`
    pub login_too_long: Cow<'static, str>,
    pub password_required: Cow<'static, str>,
    /// May contain `{max}`
    pub password_too_long: Cow<'static, str>,
    /// May contain `{max}`
    pub label_too_long: Cow<'static, str>,
}

impl MessageTable {
    /// Render a "too long" template with its limit
    #[must_use]
    pub fn too_long(&self, template: &str, max: usize) -> String {
        template.replace(MAX_PLACEHOLDER, &max.to_string())
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        super::Language::default().messages().clone()
    }
}
