//! Initialization failures.
//!
//! The rendering core itself cannot fail: mapping, escape-time
//! evaluation and coloring are total functions, and a poisoned lock is
//! treated as fatal rather than modelled.  The only error path in the
//! program is bringing up the display subsystem.

use std::error::Error;
use std::fmt;

/// Fatal failure while initializing the display subsystem.  Surfaced
/// once by the binary, which then exits with code 1.
#[derive(Debug)]
pub enum InitError {
    /// SDL itself, its video subsystem or its event pump failed to
    /// initialize.
    Sdl(String),
    /// The window could not be created.
    Window(String),
    /// The renderer or its backing texture could not be created.
    Renderer(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InitError::Sdl(e) => write!(f, "SDL initialization failed: {}", e),
            InitError::Window(e) => write!(f, "window creation failed: {}", e),
            InitError::Renderer(e) => write!(f, "renderer creation failed: {}", e),
        }
    }
}

impl Error for InitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_stage() {
        let e = InitError::Window("no display".to_string());
        assert_eq!(e.to_string(), "window creation failed: no display");
    }
}
