//! Pure logic for ScreepsLib.
//!
//! This crate holds the library's behavior independent of any host runtime.
//! Functions take plain data and return plain values, so they are
//! unit-testable and callable from native code, the C ABI wrapper, or the
//! headless harness alike.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`greeting`] | The `Greeting` value and the `say_hello` formatters |

pub mod greeting;

pub use greeting::{say_hello, say_hello_to, Greeting, InvalidGreeting};
