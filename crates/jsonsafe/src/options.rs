use crate::{Error, Result};

/// Decoding options for tagged input.
///
/// The normalizer itself takes no options; these only steer how tagged
/// envelopes coming from a data-access layer are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Reject unknown tags and malformed envelopes instead of keeping them
    /// as plain records.
    pub strict: bool,
    /// Key holding the tag name (default: `$type`)
    pub type_key: String,
    /// Key holding the tagged payload (default: `value`)
    pub value_key: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            type_key: String::from("$type"),
            value_key: String::from("value"),
        }
    }
}

impl Options {
    /// Both keys must be non-empty and distinct, otherwise no object could
    /// ever be recognized as an envelope.
    pub fn validate(&self) -> Result<()> {
        if self.type_key.is_empty() || self.value_key.is_empty() {
            return Err(Error::Message(String::from("tag keys must not be empty")));
        }
        if self.type_key == self.value_key {
            return Err(Error::Message(format!(
                "type key and value key are both `{}`",
                self.type_key
            )));
        }
        Ok(())
    }

    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
