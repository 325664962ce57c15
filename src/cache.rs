use ahash::HashMap;
use log::debug;

use crate::{qname, Error, Pair};

/// Remembers the packed form of qualified names seen before.
///
/// Documents repeat the same element and attribute names over and over;
/// the cache packs and checks each distinct name once. Names that fail to
/// pack are not remembered.
///
/// Entries are never evicted: the cache grows with every distinct name until
/// [`NameCache::clear`] is called or the cache is dropped.
#[derive(Debug, Default)]
pub struct NameCache {
    by_text: HashMap<String, Box<[char]>>,
}

impl NameCache {
    pub fn new() -> Self {
        Self {
            by_text: HashMap::default(),
        }
    }

    /// The packed buffer for `prefix:local` text.
    pub fn packed(&mut self, text: &str) -> Result<&[char], Error> {
        if self.by_text.contains_key(text) {
            return Ok(&self.by_text[text]);
        }
        debug!("packing new name {}", text);
        let chars = qname::parse(text)?;
        Ok(&**self.by_text.entry(text.to_string()).or_insert(chars))
    }

    /// A new pair for `prefix:local` text.
    pub fn pair(&mut self, text: &str) -> Result<Pair, Error> {
        let chars = self.packed(text)?;
        Pair::new(chars)
    }

    pub fn len(&self) -> usize {
        self.by_text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_text.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_text.clear();
    }
}
