use std::fmt::{Display, Formatter};

use crate::arena::PairId;
use crate::owned::QNameOwned;
use crate::qname;
use crate::Error;

/// A name with value pair.
///
/// The pair keeps a qualified name in packed form (see [`crate::qname`])
/// together with a few caller-defined slots. Pairs can be chained through
/// `next`, and can refer to an associated chain (such as the attributes of
/// an element) through `list`. Both links are handles into a
/// [`crate::PairArena`] and don't own the pairs they point to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The pair name.
    pub name: Option<String>,
    /// The pair value.
    pub value: Option<String>,
    /// The pair numeric value.
    pub num: i32,
    /// The pair identifier.
    pub id: i32,
    /// The associated chain of pairs.
    pub list: Option<PairId>,
    /// The next pair in a chain.
    pub next: Option<PairId>,
    chars: Box<[char]>,
}

impl Pair {
    /// Create a pair from a packed qualified name buffer.
    ///
    /// The buffer is checked once here; the accessors rely on it afterwards.
    pub fn new(chars: impl Into<Box<[char]>>) -> Result<Self, Error> {
        let chars = chars.into();
        qname::validate(&chars)?;
        Ok(Self {
            name: None,
            value: None,
            num: 0,
            id: 0,
            list: None,
            next: None,
            chars,
        })
    }

    /// Create a pair from a prefix and local name.
    ///
    /// The empty prefix means no prefix.
    pub fn from_parts(prefix: &str, local_name: &str) -> Result<Self, Error> {
        Self::new(qname::encode(prefix, local_name)?)
    }

    /// Create a pair from `prefix:local` or `local` text.
    pub fn parse(text: &str) -> Result<Self, Error> {
        Self::new(qname::parse(text)?)
    }

    /// The packed qualified name.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The number of prefix characters, 0 without prefix.
    #[inline]
    pub fn prefix_len(&self) -> usize {
        self.chars[0] as usize
    }

    pub fn has_prefix(&self) -> bool {
        self.prefix_len() != 0
    }

    /// The qualified name without the length char: prefix and local name
    /// run together.
    pub fn qname(&self) -> String {
        self.chars[1..].iter().collect()
    }

    /// The local name.
    pub fn local(&self) -> String {
        let first = self.prefix_len();
        if first != 0 {
            self.chars[first + 1..].iter().collect()
        } else {
            self.chars[1..].iter().collect()
        }
    }

    /// The prefix, or the empty string if there is none.
    pub fn pref(&self) -> String {
        let first = self.prefix_len();
        if first != 0 {
            self.chars[1..=first].iter().collect()
        } else {
            String::new()
        }
    }

    /// Compare the prefix of this pair with the prefix of a packed
    /// qualified name. Local names are ignored.
    ///
    /// A buffer that is empty or shorter than its declared prefix never
    /// compares equal.
    pub fn eqpref(&self, qname: &[char]) -> bool {
        let len = self.prefix_len();
        match qname.get(..=len) {
            Some(other) => self.chars[..=len] == *other,
            None => false,
        }
    }

    /// Compare the whole packed buffer, length char included.
    pub fn eqname(&self, qname: &[char]) -> bool {
        *self.chars == *qname
    }

    /// The name as written in XML: `prefix:local`, or just the local name.
    pub fn full_name(&self) -> String {
        let first = self.prefix_len();
        if first != 0 {
            let mut s = String::with_capacity(self.chars.len());
            s.extend(&self.chars[1..=first]);
            s.push(':');
            s.extend(&self.chars[first + 1..]);
            s
        } else {
            self.chars[1..].iter().collect()
        }
    }

    pub fn to_owned_name(&self) -> QNameOwned {
        QNameOwned::new(self.pref(), self.local())
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name())
    }
}
