use crate::ident::Ident;

/// One piece of statement text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SqlPart {
    /// Trusted text, copied verbatim.
    Raw(String),
    /// An identifier; quoted for the builder's flavor when rendered.
    Ident(Ident),
    /// A placeholder; numbered when the statement is rendered.
    Param,
}
