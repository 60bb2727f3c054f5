//! Error types for fragment parsing.

/// Error while parsing an XHTML fragment into a [`Node`](crate::Node) tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// XML syntax error.
    #[error("XML parse error")]
    Xml(#[from] quick_xml::Error),

    /// Encoding error while decoding text or names.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// The fragment contained no nodes.
    #[error("fragment contains no nodes")]
    Empty,
}
