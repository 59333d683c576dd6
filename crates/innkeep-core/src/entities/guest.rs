//! Guest entity - a person who can hold reservations

use std::hash::{Hash, Hasher};

use crate::value_objects::{Address, Identity, Name};

/// A hotel guest. Equality and hashing use the id only; name and address are
/// descriptive attributes, not identity.
#[derive(Debug, Clone)]
pub struct Guest {
    id: Identity,
    name: Name,
    address: Address,
}

impl Guest {
    /// Create a guest with a freshly generated id
    pub fn new(name: Name, address: Address) -> Self {
        Self {
            id: Identity::generate(),
            name,
            address,
        }
    }

    /// Create a guest with an explicit id (e.g. from an external registry)
    pub fn with_id(id: Identity, name: Name, address: Address) -> Self {
        Self { id, name, address }
    }

    #[inline]
    pub fn id(&self) -> &Identity {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl PartialEq for Guest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Guest {}

impl Hash for Guest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
