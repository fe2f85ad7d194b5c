use std::fmt;

/// Which per-frame stack an operation touched.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StackKind {
    ZLayer,
    Scissor,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackKind::ZLayer => f.write_str("z-layer"),
            StackKind::Scissor => f.write_str("scissor"),
        }
    }
}

/// Error returned by the z-layer and scissor stack operations.
///
/// These are caller bugs (unbalanced push/pop). They are reported the same way
/// in every build profile; callers that prefer the fail-fast behavior can
/// `expect` them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawError {
    /// A push would exceed the configured stack depth.
    StackOverflow { stack: StackKind, max: usize },
    /// A pop was issued on an empty stack.
    StackUnderflow { stack: StackKind },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::StackOverflow { stack, max } => write!(
                f,
                "too many {stack} entries pushed (max {max}); pop when done drawing to it"
            ),
            DrawError::StackUnderflow { stack } => write!(f, "no {stack} entries to pop"),
        }
    }
}

impl std::error::Error for DrawError {}
