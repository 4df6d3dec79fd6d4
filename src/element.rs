use std::fmt;

/// An element removed from a queue
///
/// Removal transfers ownership of the stored string to the caller. The queue
/// keeps no reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    pub(crate) fn new(value: String) -> Self {
        Element { value }
    }

    /// Returns the stored string
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the element and returns the stored string
    #[inline]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Releases the element and its string
    pub fn release(self) {
        drop(self);
    }

    /// Copies the value into a caller supplied buffer
    ///
    /// At most `buf.len() - 1` bytes are copied and the rest of the buffer is
    /// zeroed, so the result is always NUL terminated. An empty buffer is left
    /// untouched.
    pub fn copy_to(&self, buf: &mut [u8]) {
        let Some(limit) = buf.len().checked_sub(1) else {
            return;
        };
        let bytes = self.value.as_bytes();
        let n = bytes.len().min(limit);
        buf[..n].copy_from_slice(&bytes[..n]);
        buf[n..].fill(0);
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for Element {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Element {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let element = Element::new("gerbil".to_string());
        assert_eq!(element.value(), "gerbil");
        assert_eq!(element, "gerbil");
        assert_eq!(element.to_string(), "gerbil");
        assert_eq!(element.into_value(), "gerbil".to_string());
    }

    #[test]
    fn test_copy_to_fits() {
        let element = Element::new("abc".to_string());
        let mut buf = [0xffu8; 8];
        element.copy_to(&mut buf);
        assert_eq!(&buf, b"abc\0\0\0\0\0");
    }

    #[test]
    fn test_copy_to_truncates() {
        let element = Element::new("abcdef".to_string());
        let mut buf = [0xffu8; 4];
        element.copy_to(&mut buf);
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn test_copy_to_exact() {
        let element = Element::new("abc".to_string());
        let mut buf = [0xffu8; 4];
        element.copy_to(&mut buf);
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn test_copy_to_single_byte_buffer() {
        let element = Element::new("abc".to_string());
        let mut buf = [0xffu8; 1];
        element.copy_to(&mut buf);
        assert_eq!(&buf, b"\0");
    }

    #[test]
    fn test_copy_to_empty_buffer_untouched() {
        let element = Element::new("abc".to_string());
        let mut buf: [u8; 0] = [];
        element.copy_to(&mut buf);
        assert!(buf.is_empty());
    }
}
