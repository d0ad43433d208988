// SPDX-License-Identifier: MPL-2.0
//! Host environment language preference.

/// Source of the user's preferred language as reported by the host.
pub trait HostLanguage {
    fn preferred_language(&self) -> Option<String>;
}

/// Queries the operating system locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLanguage;

impl HostLanguage for SystemLanguage {
    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A fixed preference, for hosts that report a known language up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLanguage(pub Option<String>);

impl FixedLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl HostLanguage for FixedLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}
