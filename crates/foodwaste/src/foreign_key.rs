//! Keys that link a domain object to its counterpart at an external data provider.

use intranet_core::{DomainResult, Identifiable, Identifier, Identity, require_text};

/// Foreign key of a domain object at a data provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    identity: Identity,
    foreign_key_for_identifier: Identifier,
    data_provider_identifier: Identifier,
    value: String,
}

impl ForeignKey {
    pub fn new(
        identity: Identity,
        foreign_key_for_identifier: Identifier,
        data_provider_identifier: Identifier,
        value: impl Into<String>,
    ) -> DomainResult<Self> {
        let value = value.into();
        require_text(&value, "foreign_key_value")?;
        Ok(Self {
            identity,
            foreign_key_for_identifier,
            data_provider_identifier,
            value,
        })
    }

    pub fn foreign_key_for_identifier(&self) -> Identifier {
        self.foreign_key_for_identifier
    }

    pub fn data_provider_identifier(&self) -> Identifier {
        self.data_provider_identifier
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Identifiable for ForeignKey {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}
