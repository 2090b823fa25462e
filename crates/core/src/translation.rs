//! Multi-locale text attached to entities.
//!
//! A translatable entity owns a list of [`Translation`] records and exposes
//! the one resolved by its most recent [`Translatable::translate`] call.
//!
//! Resolution policy: among the records translating this entity, take the
//! first whose culture equals the requested culture; otherwise take the first
//! such record by insertion order. A transient entity (no identifier) or one
//! without records resolves to nothing.

use serde::{Deserialize, Serialize};

use crate::entity::{Identifiable, Identity};
use crate::error::{DomainError, DomainResult, require_text};
use crate::id::Identifier;

/// Culture (locale) name such as `da-DK`.
///
/// Names are normalised on construction: the language subtag is lower-cased,
/// two-letter region subtags are upper-cased and four-letter script subtags
/// are title-cased, so `DA_dk` and `da-DK` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CultureInfo(String);

impl CultureInfo {
    pub fn new(name: impl AsRef<str>) -> DomainResult<Self> {
        let name = name.as_ref();
        require_text(name, "culture_name")?;

        let normalised = name
            .trim()
            .split(['-', '_'])
            .enumerate()
            .map(|(position, subtag)| match (position, subtag.len()) {
                (0, _) => subtag.to_ascii_lowercase(),
                (_, 2) => subtag.to_ascii_uppercase(),
                (_, 4) => {
                    let lower = subtag.to_ascii_lowercase();
                    let mut chars = lower.chars();
                    chars
                        .next()
                        .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                        .unwrap_or_default()
                }
                _ => subtag.to_string(),
            })
            .collect::<Vec<_>>()
            .join("-");

        if normalised.split('-').any(str::is_empty) {
            return Err(DomainError::illegal_value(name, "culture_name"));
        }
        Ok(Self(normalised))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CultureInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CultureInfo {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CultureInfo> for String {
    fn from(value: CultureInfo) -> Self {
        value.0
    }
}

/// Culture a translation is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInfo {
    identity: Identity,
    culture_info: CultureInfo,
}

impl TranslationInfo {
    pub fn new(identity: Identity, culture_info: CultureInfo) -> Self {
        Self {
            identity,
            culture_info,
        }
    }

    pub fn culture_name(&self) -> &str {
        self.culture_info.name()
    }

    pub fn culture_info(&self) -> &CultureInfo {
        &self.culture_info
    }
}

impl Identifiable for TranslationInfo {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

/// Text of one entity in one culture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    identity: Identity,
    translation_of_identifier: Identifier,
    translation_info: TranslationInfo,
    value: String,
}

impl Translation {
    /// Build a translation; `value` must not be blank.
    pub fn new(
        identity: Identity,
        translation_of_identifier: Identifier,
        translation_info: TranslationInfo,
        value: impl Into<String>,
    ) -> DomainResult<Self> {
        let value = value.into();
        require_text(&value, "value")?;
        Ok(Self {
            identity,
            translation_of_identifier,
            translation_info,
            value,
        })
    }

    pub fn translation_of_identifier(&self) -> Identifier {
        self.translation_of_identifier
    }

    pub fn translation_info(&self) -> &TranslationInfo {
        &self.translation_info
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        require_text(&value, "value")?;
        self.value = value;
        Ok(())
    }
}

impl Identifiable for Translation {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

/// Translation records of one entity plus the currently resolved one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: Vec<Translation>,
    current: Option<Translation>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicated cultures are kept; the first one wins.
    pub fn add(&mut self, translation: Translation) {
        self.entries.push(translation);
    }

    pub fn entries(&self) -> &[Translation] {
        &self.entries
    }

    /// Translation selected by the last [`Translations::resolve`].
    pub fn current(&self) -> Option<&Translation> {
        self.current.as_ref()
    }

    /// Resolve the active translation of the entity identified by `owner`.
    pub fn resolve(&mut self, owner: Option<Identifier>, culture: &CultureInfo) {
        self.current = owner.and_then(|owner| self.select(owner, culture).cloned());
    }

    fn select(&self, owner: Identifier, culture: &CultureInfo) -> Option<&Translation> {
        let mut owned = self
            .entries
            .iter()
            .filter(|t| t.translation_of_identifier == owner);

        let exact = owned
            .clone()
            .find(|t| t.translation_info.culture_info == *culture);
        if exact.is_some() {
            return exact;
        }

        let fallback = owned.next();
        if let Some(t) = fallback {
            tracing::debug!(
                %owner,
                requested = %culture,
                fallback = %t.translation_info.culture_info,
                "no translation for requested culture; using first translation"
            );
        }
        fallback
    }
}

/// Entity whose display text varies by culture.
pub trait Translatable: Identifiable {
    fn translations(&self) -> &Translations;

    fn translations_mut(&mut self) -> &mut Translations;

    /// Result of the last [`Translatable::translate`] call.
    fn translation(&self) -> Option<&Translation> {
        self.translations().current()
    }

    fn translation_add(&mut self, translation: Translation) {
        self.translations_mut().add(translation);
    }

    /// Resolve [`Translatable::translation`] for `culture`, then run
    /// [`Translatable::on_translation`].
    fn translate(&mut self, culture: &CultureInfo) {
        let owner = self.identifier();
        self.translations_mut().resolve(owner, culture);
        self.on_translation(culture);
    }

    /// Hook run after the entity's own translation is resolved; owners use it
    /// to translate the sub-objects they hold.
    fn on_translation(&mut self, _culture: &CultureInfo) {}
}
