//! Document classification flags and the controls they allow.

/// How the header classifies the document it sits on.
///
/// A page is a standalone page no matter what its draft flag says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Page,
    Draft,
    Published,
}

impl DocumentKind {
    pub fn from_flags(is_page: bool, is_draft: bool) -> Self {
        match (is_page, is_draft) {
            (true, _) => DocumentKind::Page,
            (false, true) => DocumentKind::Draft,
            (false, false) => DocumentKind::Published,
        }
    }

    /// External link: pages and published documents.
    pub fn shows_external_link(self) -> bool {
        !matches!(self, DocumentKind::Draft)
    }

    pub fn publish_control(self) -> Option<PublishControl> {
        match self {
            DocumentKind::Page => None,
            DocumentKind::Draft => Some(PublishControl::Publish),
            DocumentKind::Published => Some(PublishControl::Unpublish),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishControl {
    Publish,
    Unpublish,
}
