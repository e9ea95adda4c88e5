//! Document assembly: pages in, one finished file out.

use std::{io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::{
    error::QuireError,
    pdf::{self, content, content::PageGeometry, ObjectId, ObjectStore},
    writer,
};

/// Lifecycle of a [`DocumentBuilder`].
///
/// `finish` consumes the builder, so the serialized phase is terminal: a
/// finished builder cannot be observed, let alone reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Accepting,
    Finalizing,
    Serialized,
}

/// Assembles a document one page at a time and writes it out in one pass.
///
/// The shared font object is allocated on construction, so it always holds
/// identity 1. Each added page allocates its content stream and then the
/// page itself; the page tree and catalog are deferred to [`finish`] because
/// the tree must list every page while every page must name the tree as its
/// parent.
///
/// Not safe to share across threads; use one builder per document.
///
/// [`finish`]: DocumentBuilder::finish
#[derive(Debug)]
pub struct DocumentBuilder {
    geometry: PageGeometry,
    store: ObjectStore,
    font: ObjectId,
    pages: Vec<ObjectId>,
    phase: Phase,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::with_geometry(PageGeometry::default())
    }

    pub fn with_geometry(geometry: PageGeometry) -> Self {
        let mut store = ObjectStore::new();
        let font = store.allocate(pdf::font_body());
        DocumentBuilder {
            geometry,
            store,
            font,
            pages: Vec::new(),
            phase: Phase::Accepting,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Add one page of pre-wrapped lines, in reading order.
    ///
    /// Fails with [`QuireError::CapacityExceeded`] if more lines are given
    /// than fit in the page bounds. The check runs before any allocation, so
    /// a rejected page leaves the store untouched and the call can be
    /// retried with re-split content.
    pub fn add_page<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), QuireError> {
        // `finish` consumes the builder, so no other phase is observable.
        debug_assert_eq!(self.phase, Phase::Accepting);

        let max = self.geometry.max_lines();
        if lines.len() > max {
            return Err(QuireError::CapacityExceeded {
                got: lines.len(),
                max,
            });
        }

        let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        let content = content::content_stream(&self.geometry, &lines);
        let content_id = self.store.allocate(pdf::stream_body(&content));
        let page_id = self
            .store
            .allocate(pdf::page_body(&self.geometry, content_id, self.font));
        self.pages.push(page_id);

        log::debug!("added page {} with {} lines", self.pages.len(), lines.len());
        Ok(())
    }

    /// Build the page tree and catalog, resolve every page's parent
    /// reference and write the document to `path`.
    ///
    /// The bytes go to a temporary file next to `path` and are renamed into
    /// place on success, so a failed write never leaves a partial document
    /// behind.
    pub fn finish(mut self, path: &Path) -> Result<(), QuireError> {
        if self.pages.is_empty() {
            return Err(QuireError::EmptyDocument);
        }
        self.phase = Phase::Finalizing;

        let tree_id = self.store.allocate(pdf::pages_body(&self.pages));
        let catalog_id = self.store.allocate(pdf::catalog_body(tree_id));

        for &page_id in &self.pages {
            let body = self
                .store
                .get(page_id)
                .filter(|body| body.contains(pdf::PARENT_PLACEHOLDER))
                .ok_or(QuireError::UnresolvedReference(page_id))?;
            let patched = body.replace(pdf::PARENT_PLACEHOLDER, &tree_id.to_string());
            self.store.patch(page_id, patched);
        }

        self.phase = Phase::Serialized;
        let mut out = Vec::new();
        writer::write_document(&self.store, catalog_id, &mut out)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&out)?;
        file.persist(path).map_err(|persist| persist.error)?;

        log::debug!(
            "wrote {} objects ({} pages) to {}",
            self.store.len(),
            self.pages.len(),
            path.display()
        );
        Ok(())
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
