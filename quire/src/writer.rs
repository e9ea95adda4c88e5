//! On-disk serialization: header, object definitions, cross-reference table
//! and trailer.

use crate::{
    error::QuireError,
    pdf::{ObjectId, ObjectStore, PARENT_PLACEHOLDER},
};

/// Version tag line.
const HEADER: &[u8] = b"%PDF-1.4\n";
/// Comment holding bytes above 127 so transports treat the file as binary.
const BINARY_MARKER: &[u8] = b"%\xe2\xe3\xcf\xd3\n";

pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

/// Write the complete file: header, every stored object in identity order,
/// the cross-reference table and the trailer pointing at `root`.
///
/// Offsets come from the writer's running byte position, captured right
/// before each `N 0 obj` line; they are never recomputed from body lengths.
pub fn write_document(
    store: &ObjectStore,
    root: ObjectId,
    writer: &mut dyn Writer,
) -> Result<(), QuireError> {
    log::trace!("write header");
    writer.write(HEADER);
    writer.write(BINARY_MARKER);

    let mut offsets = Vec::with_capacity(store.len());
    for (id, body) in store.iter() {
        if body.contains(PARENT_PLACEHOLDER) {
            return Err(QuireError::UnresolvedReference(id));
        }
        offsets.push(writer.position());
        log::trace!("write object {}", id);
        writer.write(format!("{} 0 obj\n", id).as_bytes());
        writer.write(body.as_bytes());
        writer.write(b"\nendobj\n");
    }

    let start_xref = writer.position();
    log::trace!("write xref at {}", start_xref);
    writer.write(format!("xref\n0 {}\n", store.len() + 1).as_bytes());
    // Free-list head, fixed sentinel.
    writer.write(b"0000000000 65535 f \n");
    for offset in offsets {
        writer.write(format!("{:010} 00000 n \n", offset).as_bytes());
    }

    log::trace!("write trailer");
    writer.write(b"trailer\n");
    writer.write(format!("<< /Size {} /Root {} 0 R >>\n", store.len() + 1, root).as_bytes());
    writer.write(b"startxref\n");
    writer.write(start_xref.to_string().as_bytes());
    writer.write(b"\n%%EOF");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> (ObjectStore, ObjectId) {
        let mut store = ObjectStore::new();
        store.allocate("<< /Kind /First >>".to_owned());
        store.allocate("<< /Kind /Second >>".to_owned());
        let root = store.allocate("<< /Type /Catalog >>".to_owned());
        (store, root)
    }

    // Offsets recorded in the xref table, in identity order. The binary
    // marker makes the file invalid UTF-8, so conversion must be lossy.
    fn xref_offsets(out: &[u8]) -> Vec<usize> {
        let text = String::from_utf8_lossy(out).into_owned();
        // "startxref" also ends in "xref\n", hence the subsection needle
        let xref = &text[text.rfind("xref\n0 ").unwrap()..];
        xref.lines()
            .skip(3) // keyword, subsection range and free-list head
            .take_while(|line| line.ends_with("n "))
            .map(|line| line[..10].parse().unwrap())
            .collect()
    }

    #[test]
    fn test_offsets_point_at_object_definitions() {
        let (store, root) = sample_store();
        let mut out = Vec::new();
        write_document(&store, root, &mut out).unwrap();

        let offsets = xref_offsets(&out);
        assert_eq!(offsets.len(), 3);
        for (index, offset) in offsets.iter().enumerate() {
            let expected = format!("{} 0 obj\n", index + 1);
            assert_eq!(&out[*offset..*offset + expected.len()], expected.as_bytes());
        }
    }

    #[test]
    fn test_startxref_points_at_xref_keyword() {
        let (store, root) = sample_store();
        let mut out = Vec::new();
        write_document(&store, root, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out);
        let start_xref: usize = text
            .rsplit_once("startxref\n")
            .unwrap()
            .1
            .strip_suffix("\n%%EOF")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(&out[start_xref..start_xref + 5], b"xref\n");
    }

    #[test]
    fn test_header_trailer_and_sentinel() {
        let (store, root) = sample_store();
        let mut out = Vec::new();
        write_document(&store, root, &mut out).unwrap();

        assert!(out.starts_with(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n"));
        assert!(out.ends_with(b"%%EOF"));

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("xref\n0 4\n0000000000 65535 f \n"));
        assert!(text.contains(&format!("trailer\n<< /Size 4 /Root {} 0 R >>\n", root)));
    }

    #[test]
    fn test_surviving_placeholder_aborts() {
        let mut store = ObjectStore::new();
        let page = store.allocate(format!("<< /Parent {} 0 R >>", PARENT_PLACEHOLDER));
        let root = store.allocate("<< /Type /Catalog >>".to_owned());

        let mut out = Vec::new();
        let err = write_document(&store, root, &mut out).unwrap_err();
        assert!(matches!(err, QuireError::UnresolvedReference(id) if id == page));
    }
}
