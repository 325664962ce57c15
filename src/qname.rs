//! The packed qualified name encoding.
//!
//! A qualified name is stored as a single buffer of chars. The first char
//! holds the number of prefix characters as its code point, followed by the
//! prefix characters and then the local name characters. The colon is not
//! stored. A name without a prefix has `'\0'` in the first position:
//!
//! ```text
//! foo:bar  ->  ['\u{3}', 'f', 'o', 'o', 'b', 'a', 'r']
//! baz      ->  ['\0', 'b', 'a', 'z']
//! ```
use crate::Error;

/// The length char meaning "no prefix".
pub const NO_PREFIX: char = '\0';

/// The longest prefix that can be packed.
///
/// This is the largest count that converts to a `char` without running into
/// the surrogate range.
pub const MAX_PREFIX_LEN: usize = 0xD7FF;

/// The number of prefix characters declared by a packed buffer.
///
/// Returns 0 for the empty buffer.
#[inline]
pub fn prefix_len(chars: &[char]) -> usize {
    chars.first().map(|c| *c as usize).unwrap_or(0)
}

/// Check that a buffer follows the packed encoding.
pub fn validate(chars: &[char]) -> Result<(), Error> {
    let first = chars.first().ok_or(Error::EmptyQName)?;
    let prefix_len = *first as usize;
    if prefix_len > MAX_PREFIX_LEN {
        return Err(Error::PrefixTooLong(prefix_len));
    }
    if prefix_len + 1 > chars.len() {
        return Err(Error::PrefixOutOfBounds {
            prefix_len,
            len: chars.len(),
        });
    }
    Ok(())
}

/// Pack a prefix and local name. The empty prefix means no prefix.
///
/// Neither part may contain a colon.
pub fn encode(prefix: &str, local_name: &str) -> Result<Box<[char]>, Error> {
    if prefix.contains(':') {
        return Err(Error::ColonInPart(prefix.to_string()));
    }
    if local_name.contains(':') {
        return Err(Error::ColonInPart(local_name.to_string()));
    }
    let prefix_len = prefix.chars().count();
    if prefix_len > MAX_PREFIX_LEN {
        return Err(Error::PrefixTooLong(prefix_len));
    }
    // prefix_len is below the surrogate range so this always converts
    let first = char::from_u32(prefix_len as u32).ok_or(Error::PrefixTooLong(prefix_len))?;
    let mut chars = Vec::with_capacity(1 + prefix_len + local_name.len());
    chars.push(first);
    chars.extend(prefix.chars());
    chars.extend(local_name.chars());
    Ok(chars.into_boxed_slice())
}

/// Split `prefix:local` text into its parts.
///
/// A name without colon has the empty prefix.
pub fn split(text: &str) -> Result<(&str, &str), Error> {
    match text.split_once(':') {
        Some((prefix, local_name)) => {
            if local_name.contains(':') {
                return Err(Error::MultipleColons(text.to_string()));
            }
            if prefix.is_empty() {
                return Err(Error::EmptyPrefix(text.to_string()));
            }
            if local_name.is_empty() {
                return Err(Error::EmptyLocalName(text.to_string()));
            }
            Ok((prefix, local_name))
        }
        None => {
            if text.is_empty() {
                return Err(Error::EmptyLocalName(text.to_string()));
            }
            Ok(("", text))
        }
    }
}

/// Pack `prefix:local` text.
pub fn parse(text: &str) -> Result<Box<[char]>, Error> {
    let (prefix, local_name) = split(text)?;
    encode(prefix, local_name)
}
