/// Failure of a [Drawing](crate::Drawing) call.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// The glyph provider returned an outline that doesn't begin with a move.
    #[error("glyph outline for U+{code:04X} doesn't start with a move")]
    MalformedGlyph { code: u32 },
    /// A glyph in a text run has no point to place it by.
    #[error("placement of glyph U+{code:04X} cannot be found")]
    UnresolvedPlacement { code: u32 },
    #[error("drawing primitive issued before init")]
    NotInitialized,
    #[error("document already finished")]
    Finished,
    /// An earlier glyph error abandoned the document; only `init` can start over.
    #[error("document abandoned after a glyph error")]
    Aborted,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0:?} is not a rotation, expected one of N, R, I, L")]
pub struct ParseOrientationError(pub String);
