use std::fmt::Display;

use crate::pdf::content::PageGeometry;

pub use self::store::ObjectStore;

pub mod content;
mod store;

/// Identity of an object in the document graph.
///
/// Identities are dense integers assigned in creation order starting at 1.
/// The generation number is always 0; quire never rewrites a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Textual stand-in for the page-tree identity inside a page body.
///
/// The page tree does not exist until every page is known, so each page is
/// written with this token and patched once the tree is allocated.
pub(crate) const PARENT_PLACEHOLDER: &str = "__PARENT__";

/// The one built-in typeface shared by every page.
pub(crate) fn font_body() -> String {
    "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_owned()
}

/// Stream object wrapping `content`.
///
/// The declared length must match the serialized content bytes exactly;
/// readers trust it blindly, so it is always computed here.
pub(crate) fn stream_body(content: &str) -> String {
    format!(
        "<< /Length {} >>\nstream\n{}\nendstream",
        content.len(),
        content
    )
}

pub(crate) fn page_body(geometry: &PageGeometry, contents: ObjectId, font: ObjectId) -> String {
    format!(
        "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R /Resources << /Font << /F1 {} 0 R >> >> >>",
        PARENT_PLACEHOLDER, geometry.width, geometry.height, contents, font
    )
}

pub(crate) fn pages_body(kids: &[ObjectId]) -> String {
    let kids_refs: Vec<String> = kids.iter().map(|id| format!("{} 0 R", id)).collect();
    format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids_refs.join(" "),
        kids.len()
    )
}

pub(crate) fn catalog_body(pages: ObjectId) -> String {
    format!("<< /Type /Catalog /Pages {} 0 R >>", pages)
}
