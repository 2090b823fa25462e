//! Entity identity: an optional identifier that only exists once persisted.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::Identifier;

/// Identity slot carried by every persisted entity.
///
/// Absent until the persistence boundary assigns an identifier; once present
/// it never changes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Option<Identifier>);

impl Identity {
    /// Identity of an entity that has not been persisted yet.
    pub const fn transient() -> Self {
        Self(None)
    }

    /// Identity of an entity loaded from storage.
    pub const fn persisted(identifier: Identifier) -> Self {
        Self(Some(identifier))
    }

    pub fn get(&self) -> Option<Identifier> {
        self.0
    }

    /// Assign the identifier.
    ///
    /// Assigning the identifier already held is a no-op; assigning a
    /// different one is rejected.
    pub fn assign(&mut self, identifier: Identifier) -> DomainResult<()> {
        match self.0 {
            Some(existing) if existing != identifier => {
                Err(DomainError::illegal_value(identifier, "identifier"))
            }
            _ => {
                self.0 = Some(identifier);
                Ok(())
            }
        }
    }
}

/// Entity marker + minimal interface.
pub trait Identifiable {
    fn identity(&self) -> &Identity;

    fn identity_mut(&mut self) -> &mut Identity;

    /// Returns the identifier, if the entity has been persisted.
    fn identifier(&self) -> Option<Identifier> {
        self.identity().get()
    }

    fn is_persisted(&self) -> bool {
        self.identifier().is_some()
    }

    fn assign_identifier(&mut self, identifier: Identifier) -> DomainResult<()> {
        self.identity_mut().assign(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_identity_has_no_identifier() {
        let identity = Identity::transient();
        assert_eq!(identity.get(), None);
        assert_eq!(identity, Identity::default());
    }

    #[test]
    fn assign_sets_identifier_once() {
        let id = Identifier::new();
        let mut identity = Identity::transient();

        identity.assign(id).unwrap();
        assert_eq!(identity.get(), Some(id));

        // Same identifier again is accepted.
        identity.assign(id).unwrap();

        let err = identity.assign(Identifier::new()).unwrap_err();
        assert!(matches!(err, DomainError::IllegalValue { ref property, .. } if property == "identifier"));
        assert_eq!(identity.get(), Some(id));
    }
}
