//! Widget identity.
//!
//! Every widget's persistent state is keyed by a 32-bit FNV-1a hash of the
//! bytes the caller supplies, seeded by the enclosing id scope. The same call
//! site in the same scope hashes to the same [`Id`] every frame.

/// FNV-1a offset basis; the seed when no id scope is active.
pub const HASH_INITIAL: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
const FNV_PRIME: u32 = 16_777_619;

/// Stable identifier of a widget or container.
///
/// Collisions are possible and accepted; two widgets hashing to the same id
/// share state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Id(pub u32);

impl Id {
    /// Hashes `data` onto `seed` (or [`HASH_INITIAL`] without one).
    #[must_use]
    pub fn hash(seed: Option<Self>, data: &[u8]) -> Self {
        let start = seed.map_or(HASH_INITIAL, |id| id.0);
        Self(fnv1a(start, data))
    }

    /// Returns the raw hash value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Folds `data` into `hash` with 32-bit FNV-1a.
#[must_use]
pub fn fnv1a(hash: u32, data: &[u8]) -> u32 {
    data.iter()
        .fold(hash, |h, &byte| (h ^ u32::from(byte)).wrapping_mul(FNV_PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(fnv1a(HASH_INITIAL, b""), 0x811c_9dc5);
        assert_eq!(fnv1a(HASH_INITIAL, b"a"), 0xe40c_292c);
        assert_eq!(fnv1a(HASH_INITIAL, b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let a = Id::hash(None, b"button");
        let b = Id::hash(None, b"button");
        assert_eq!(a, b);
        assert_ne!(a, Id::hash(None, b"buttons"));
    }

    #[test]
    fn test_seed_scopes_the_hash() {
        let outer = Id::hash(None, b"window");
        let scoped = Id::hash(Some(outer), b"ok");
        assert_ne!(scoped, Id::hash(None, b"ok"));
        assert_eq!(scoped, Id::hash(Some(outer), b"ok"));
    }
}
