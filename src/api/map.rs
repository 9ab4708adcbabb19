//! Assertions on hash maps

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::info::{descriptable, AssertionInfo};

pub struct MapAssert<K, V> {
    actual: HashMap<K, V>,
    info: AssertionInfo,
}

descriptable!(MapAssert<K, V>);

impl<K, V> MapAssert<K, V>
where
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
{
    pub(crate) fn new(actual: HashMap<K, V>, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    pub fn has_size(self, expected: usize) -> Self {
        self.info.check(self.actual.len() == expected, || {
            format!(
                "\nExpected size: {} but was: {} in:\n{:?}",
                expected,
                self.actual.len(),
                self.actual
            )
        });
        self
    }

    pub fn is_empty(self) -> Self {
        self.info.check(self.actual.is_empty(), || {
            format!("\nExpecting empty but was: {:?}", self.actual)
        });
        self
    }

    pub fn contains_key<Q>(self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.info.check(self.actual.contains_key(key), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto contain key:\n  {:?}",
                self.actual, key
            )
        });
        self
    }

    pub fn does_not_contain_key<Q>(self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.info.check(!self.actual.contains_key(key), || {
            format!(
                "\nExpecting actual:\n  {:?}\nnot to contain key:\n  {:?}",
                self.actual, key
            )
        });
        self
    }

    pub fn contains_entry<Q>(self, key: &Q, value: V) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.info.check(self.actual.get(key) == Some(&value), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto contain entry:\n  {:?}={:?}",
                self.actual, key, value
            )
        });
        self
    }
}
