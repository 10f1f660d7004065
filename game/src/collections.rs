use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

/// Immutable reference data addressable by key or by name, iterated in insertion order.
pub struct Dictionary<K, T> {
    items: Vec<Rc<T>>,
    keys: HashMap<K, usize>,
    strings: HashMap<String, usize>,
}

impl<K, T> Default for Dictionary<K, T> {
    fn default() -> Self {
        Self {
            items: vec![],
            keys: HashMap::default(),
            strings: HashMap::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum DictionaryError {
    KeyNotFound { key: String },
    NameNotFound { name: String },
}

impl<K, T> Dictionary<K, T>
where
    K: Debug + Hash + Eq,
{
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, key: K, name: String, kind: T) {
        let index = self.items.len();
        self.items.push(Rc::new(kind));
        self.keys.insert(key, index);
        self.strings.insert(name, index);
    }

    pub fn get(&self, key: K) -> Result<Rc<T>, DictionaryError> {
        self.keys
            .get(&key)
            .map(|index| self.items[*index].clone())
            .ok_or(DictionaryError::KeyNotFound {
                key: format!("{:?}", key),
            })
    }

    pub fn find(&self, name: &str) -> Result<Rc<T>, DictionaryError> {
        self.strings
            .get(name)
            .map(|index| self.items[*index].clone())
            .ok_or(DictionaryError::NameNotFound {
                name: name.to_string(),
            })
    }

    pub fn values(&self) -> impl Iterator<Item = &Rc<T>> {
        self.items.iter()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<Rc<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}
