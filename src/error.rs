//! Error types for the content-stream interpreter.

use thiserror::Error;

/// Errors the engine can raise.
///
/// Most failures described by the component contracts (unsupported
/// operator, graphics/resource-stack underflow, font metric failure) are
/// recovered from locally and never surface here; see the handling policy
/// on [`crate::engine::Engine`].
#[derive(Error, Debug)]
pub enum PdfError {
    /// The token stream collaborator failed to produce the next token.
    #[error("token stream I/O failure: {0}")]
    TokenStreamIo(String),

    /// An `OperatorConfig` entry named a handler identifier that does not
    /// exist in the compile-time handler table. This is a construction-time
    /// fatal error (spec §7, kind 7).
    #[error("unresolvable operator handler identifier: {0}")]
    UnknownHandlerIdentifier(String),

    /// A method was called on an engine after `dispose()`.
    #[error("engine used after dispose()")]
    Disposed,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PdfError>;
