//! Greeting formatter — the default "Hello World" and its named variant.
//!
//! A named greeting is the salutation, one space, then the caller's name
//! exactly as given. The default greeting is the named form applied to
//! [`DEFAULT_NAME`]. Both operations are pure and total: every `&str`,
//! including the empty string, yields a greeting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Salutation every greeting starts with.
pub const GREETING_WORD: &str = "Hello";

/// Name used by [`say_hello`].
pub const DEFAULT_NAME: &str = "World";

/// Placed between [`GREETING_WORD`] and the name.
pub const SEPARATOR: &str = " ";

/// An immutable greeting string.
///
/// Built by the formatters in this module, so the text starts with
/// [`GREETING_WORD`] followed by [`SEPARATOR`]. Serializes as the bare string;
/// deserializing rejects any string without that prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Greeting(String);

/// Text that does not start with the greeting salutation and separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGreeting(pub String);

impl fmt::Display for InvalidGreeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a greeting (expected prefix {:?})",
            self.0,
            format!("{}{}", GREETING_WORD, SEPARATOR)
        )
    }
}

impl std::error::Error for InvalidGreeting {}

impl Greeting {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The name part: everything after the salutation and separator.
    ///
    /// `"World"` for [`say_hello`], the verbatim input for [`say_hello_to`].
    pub fn name(&self) -> &str {
        self.0
            .strip_prefix(GREETING_WORD)
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
            .unwrap_or("")
    }
}

impl TryFrom<String> for Greeting {
    type Error = InvalidGreeting;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let well_formed = text
            .strip_prefix(GREETING_WORD)
            .is_some_and(|rest| rest.starts_with(SEPARATOR));
        if well_formed {
            Ok(Greeting(text))
        } else {
            Err(InvalidGreeting(text))
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Greeting> for String {
    fn from(greeting: Greeting) -> Self {
        greeting.0
    }
}

impl PartialEq<str> for Greeting {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Greeting {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Returns `"Hello World"`.
pub fn say_hello() -> Greeting {
    say_hello_to(DEFAULT_NAME)
}

/// Returns `"Hello "` followed by `name`, untouched.
///
/// No trimming, case folding, or escaping is applied, so `say_hello_to("")`
/// is `"Hello "`.
pub fn say_hello_to(name: &str) -> Greeting {
    let mut text = String::with_capacity(GREETING_WORD.len() + SEPARATOR.len() + name.len());
    text.push_str(GREETING_WORD);
    text.push_str(SEPARATOR);
    text.push_str(name);
    Greeting(text)
}
