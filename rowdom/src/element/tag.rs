use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Table,
    Caption,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
    A,
    Img,
    Time,
    Span,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Caption => "caption",
            Self::Thead => "thead",
            Self::Tbody => "tbody",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
            Self::A => "a",
            Self::Img => "img",
            Self::Time => "time",
            Self::Span => "span",
        }
    }

    /// Void elements never have children and are serialized without an end tag.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Img)
    }

    /// Elements whose children are laid out on their own lines when pretty-printing.
    pub fn is_block(self) -> bool {
        matches!(self, Self::Table | Self::Thead | Self::Tbody | Self::Tr)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
