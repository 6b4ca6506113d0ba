/*! Diagnostics produced when a font metric file is rejected. */

use std::fmt::{Display, Formatter};

/// What kind of problem a [`Diagnostic`] reports.
#[derive(Copy,Clone,PartialEq,Eq,Debug)]
pub enum DiagnosticKind {
    /// The bytes do not form a valid font metric file.
    Format,
    /// The file could not be read at all.
    Io,
    /// The decoder's own bookkeeping broke; no input should ever produce this.
    Internal
}

/// The check that produced a [`Diagnostic`].
#[derive(Copy,Clone,PartialEq,Eq,Debug)]
pub enum Check {
    /// Fewer than the 24 bytes needed for the twelve counts.
    FileTooSmall,
    /// `lf < 6`
    FileLengthTooSmall,
    /// `lf * 4` differs from the actual number of bytes.
    FileSizeMismatch,
    /// `bc - 1 > ec` or `ec > 255`
    BadCharacterRange,
    /// `ne > 256`
    TooManyExtensibleCharacters,
    /// The table sizes do not add up to `lf`.
    InconsistentSubFileSizes,
    /// The length byte of the coding scheme exceeds 39.
    CodingSchemeTooLong,
    /// The length byte of the font identifier exceeds 19.
    FontIdentifierTooLong,
    /// Opening or reading the file failed.
    ReadFile,
    /// A read past the end of a stream whose size had already been validated.
    UnexpectedEndOfStream
}
impl Display for Check {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Check::*;
        f.write_str(match self {
            FileTooSmall => "file-too-small",
            FileLengthTooSmall => "file-length-too-small",
            FileSizeMismatch => "file-size-mismatch",
            BadCharacterRange => "bad-character-range",
            TooManyExtensibleCharacters => "too-many-extensible-characters",
            InconsistentSubFileSizes => "inconsistent-sub-file-sizes",
            CodingSchemeTooLong => "coding-scheme-too-long",
            FontIdentifierTooLong => "font-identifier-too-long",
            ReadFile => "read-file",
            UnexpectedEndOfStream => "unexpected-end-of-stream"
        })
    }
}

/// Why a font metric file was rejected. Returned as a value; decoding never panics.
#[derive(Clone,PartialEq,Eq,Debug,thiserror::Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub message:String,
    pub kind:DiagnosticKind,
    pub origin:Check
}
impl Diagnostic {
    pub fn format<S:Into<String>>(origin:Check,message:S) -> Self {
        Diagnostic { message:message.into(), kind:DiagnosticKind::Format, origin }
    }
    pub fn io(err:&std::io::Error,what:&str) -> Self {
        Diagnostic {
            message:format!("Could not read font metric file {}: {}",what,err),
            kind:DiagnosticKind::Io,
            origin:Check::ReadFile
        }
    }
    pub(crate) fn internal(err:crate::reader::EndOfStream) -> Self {
        log::error!("Font metric decoder read past a validated size ({}); this is a bug",err);
        Diagnostic {
            message:format!("Internal error while decoding font metrics: {}",err),
            kind:DiagnosticKind::Internal,
            origin:Check::UnexpectedEndOfStream
        }
    }
}
