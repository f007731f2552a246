//! C FFI bindings for the ScreepsLib greeting
//!
//! This crate exposes the greeting formatter through a C-compatible API so
//! C and C++ hosts can call it directly. The header `screeps.h` is generated
//! by the build script.
//!
//! # Basic Usage (C)
//! ```c
//! #include "screeps.h"
//!
//! char *hello = screeps_say_hello();          // "Hello World"
//! char *named = screeps_say_hello_to("Alice"); // "Hello Alice"
//!
//! printf("%s\n%s\n", hello, named);
//!
//! // Strings are owned by the caller until handed back
//! screeps_string_free(hello);
//! screeps_string_free(named);
//! ```

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use screeps_logic::greeting::{self, Greeting};

// ============================================================================
// Greeting Functions
// ============================================================================

/// Return the default greeting, `"Hello World"`.
///
/// The returned string must be freed with `screeps_string_free`.
#[no_mangle]
pub extern "C" fn screeps_say_hello() -> *mut c_char {
    into_c_string(greeting::say_hello())
}

/// Return a greeting for `name`.
///
/// A null `name` is treated as the empty name. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD; all other input is kept verbatim.
///
/// The returned string must be freed with `screeps_string_free`.
#[no_mangle]
pub extern "C" fn screeps_say_hello_to(name: *const c_char) -> *mut c_char {
    if name.is_null() {
        log::debug!("screeps_say_hello_to called with null name");
        return into_c_string(greeting::say_hello_to(""));
    }

    let raw = unsafe { CStr::from_ptr(name) };
    let name = raw.to_string_lossy();
    into_c_string(greeting::say_hello_to(&name))
}

// ============================================================================
// Memory
// ============================================================================

/// Free a string returned by this library. Passing null is a no-op.
#[no_mangle]
pub extern "C" fn screeps_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn into_c_string(greeting: Greeting) -> *mut c_char {
    log::trace!("returning greeting {:?}", greeting.as_str());
    // Names arrive as C strings or Rust literals, so there is never an
    // interior NUL.
    CString::new(greeting.into_string()).map_or(std::ptr::null_mut(), CString::into_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned();
        screeps_string_free(ptr);
        s
    }

    #[test]
    fn test_say_hello() {
        assert_eq!(take(screeps_say_hello()), "Hello World");
    }

    #[test]
    fn test_say_hello_to() {
        let name = CString::new("Alice").unwrap();
        assert_eq!(take(screeps_say_hello_to(name.as_ptr())), "Hello Alice");
    }

    #[test]
    fn test_matches_rust_api() {
        for n in ["", "123!@#", "  spaced ", "Zoë"] {
            let c = CString::new(n).unwrap();
            let via_ffi = take(screeps_say_hello_to(c.as_ptr()));
            assert_eq!(via_ffi, greeting::say_hello_to(n).as_str());
        }
    }

    #[test]
    fn test_null_name_is_empty() {
        assert_eq!(take(screeps_say_hello_to(std::ptr::null())), "Hello ");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let c = CString::new(vec![b'A', 0xff, b'B']).unwrap();
        assert_eq!(take(screeps_say_hello_to(c.as_ptr())), "Hello A\u{fffd}B");
    }

    #[test]
    fn test_every_greeting_converts() {
        let long = "x".repeat(4096);
        for n in ["", " ", "Zoë", long.as_str()] {
            let ptr = into_c_string(greeting::say_hello_to(n));
            assert_eq!(take(ptr), format!("Hello {}", n));
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        screeps_string_free(std::ptr::null_mut());
    }
}
