use std::borrow::Cow;

use crate::qname;
use crate::Error;

/// A qualified name stored as two owned strings.
///
/// Handy where the packed form is awkward, such as in serialized data. It
/// is serde serializable if you enable the `serde` feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QNameOwned {
    // the empty prefix means no prefix
    prefix: String,
    local_name: String,
}

impl QNameOwned {
    pub fn new(prefix: String, local_name: String) -> Self {
        Self { prefix, local_name }
    }

    /// The prefix; empty if there is none.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// `prefix:local`, or just the local name without prefix.
    pub fn full_name(&self) -> Cow<'_, str> {
        if !self.prefix.is_empty() {
            Cow::Owned(format!("{}:{}", self.prefix, self.local_name))
        } else {
            Cow::Borrowed(&self.local_name)
        }
    }

    /// Pack into a qualified name buffer.
    pub fn to_chars(&self) -> Result<Box<[char]>, Error> {
        qname::encode(&self.prefix, &self.local_name)
    }
}
