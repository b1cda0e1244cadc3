//! Config-keyed validation cache of certificate fields
//!
//! A field is validated lazily on its first query. The verdict is reused while
//! queries keep using an equal config; any other config discards the entry and
//! revalidates. The entry sits behind a mutex so a shared field can be queried
//! from several threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::field::FieldElement;
use crate::types::SizedByteObject;

/// Validation state of a certificate field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    NotInitialized,
    Valid,
    Invalid,
}

#[derive(Debug, Clone)]
struct CacheEntry<C> {
    state: ValidationState,
    reference_cfg: Option<C>,
    field_element: FieldElement,
}

#[derive(Debug)]
pub(crate) struct ValidationCache<C> {
    entry: Mutex<CacheEntry<C>>,
}

impl<C> Default for ValidationCache<C> {
    fn default() -> Self {
        Self {
            entry: Mutex::new(CacheEntry {
                state: ValidationState::NotInitialized,
                reference_cfg: None,
                field_element: FieldElement::default(),
            }),
        }
    }
}

impl<C: Clone + PartialEq> ValidationCache<C> {
    fn lock(&self) -> MutexGuard<'_, CacheEntry<C>> {
        // A panic inside `validate` leaves the entry pessimistically Invalid
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached field element for `cfg`, running `validate` on a miss.
    ///
    /// `validate` returns the null field element to signal an invalid field.
    pub(crate) fn get_or_validate<F>(&self, cfg: &C, validate: F) -> FieldElement
    where
        F: FnOnce(&C) -> FieldElement,
    {
        let mut entry = self.lock();

        if entry.state != ValidationState::NotInitialized
            && entry.reference_cfg.as_ref() == Some(cfg)
        {
            return entry.field_element.clone();
        }

        entry.state = ValidationState::Invalid;
        entry.reference_cfg = Some(cfg.clone());
        entry.field_element = FieldElement::default();

        let field_element = validate(cfg);
        if !field_element.is_null() {
            entry.state = ValidationState::Valid;
        }
        entry.field_element = field_element.clone();

        field_element
    }

    pub(crate) fn state(&self) -> ValidationState {
        self.lock().state
    }

    pub(crate) fn reference_cfg(&self) -> Option<C> {
        self.lock().reference_cfg.clone()
    }
}

impl<C: Clone + PartialEq> Clone for ValidationCache<C> {
    /// Independent copy: the config and field element are cloned, nothing is shared
    fn clone(&self) -> Self {
        let entry = self.lock().clone();
        Self {
            entry: Mutex::new(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SC_FIELD_SIZE;
    use std::cell::Cell;

    fn valid_fe() -> FieldElement {
        FieldElement::from_bytes(vec![1u8; SC_FIELD_SIZE])
    }

    #[test]
    fn test_hit_and_miss() {
        let cache = ValidationCache::<u32>::default();
        let calls = Cell::new(0);
        let validate = |_: &u32| {
            calls.set(calls.get() + 1);
            valid_fe()
        };

        assert_eq!(cache.state(), ValidationState::NotInitialized);
        assert_eq!(cache.get_or_validate(&1, validate), valid_fe());
        assert_eq!(cache.get_or_validate(&1, validate), valid_fe());
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.state(), ValidationState::Valid);

        cache.get_or_validate(&2, validate);
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.reference_cfg(), Some(2));
    }

    #[test]
    fn test_invalid_verdict_is_cached() {
        let cache = ValidationCache::<u32>::default();
        let calls = Cell::new(0);
        let validate = |_: &u32| {
            calls.set(calls.get() + 1);
            FieldElement::default()
        };

        assert!(cache.get_or_validate(&7, validate).is_null());
        assert!(cache.get_or_validate(&7, validate).is_null());
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.state(), ValidationState::Invalid);
    }

    #[test]
    fn test_clone_is_independent() {
        let cache = ValidationCache::<u32>::default();
        cache.get_or_validate(&1, |_| valid_fe());

        let copy = cache.clone();
        cache.get_or_validate(&2, |_| FieldElement::default());

        assert_eq!(copy.state(), ValidationState::Valid);
        assert_eq!(copy.reference_cfg(), Some(1));
        assert_eq!(copy.get_or_validate(&1, |_| unreachable!()), valid_fe());
        assert_eq!(cache.state(), ValidationState::Invalid);
    }
}
