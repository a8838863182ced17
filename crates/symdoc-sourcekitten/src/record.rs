//! Raw indexer record model.
//!
//! One [`RawRecord`] is one entry of the indexer's JSON output: a
//! `key.`-prefixed mapping describing a syntactic or semantic element, with
//! nested substructure. Only the fields the pipeline consumes are modeled;
//! everything else in the output (offsets, lengths, accessibility…) is
//! ignored on deserialization.

use std::path::PathBuf;

use serde::Deserialize;

/// One record from the indexer output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    /// Kind identifier (a SourceKit UID such as `source.lang.swift.decl.class`).
    #[serde(rename = "key.kind")]
    pub kind: Option<String>,

    /// Display name of the element.
    #[serde(rename = "key.name")]
    pub name: Option<String>,

    /// Stable unique symbol identifier.
    #[serde(rename = "key.usr")]
    pub usr: Option<String>,

    /// Absolute path of the file the element was parsed from.
    #[serde(rename = "key.filepath")]
    pub filepath: Option<PathBuf>,

    /// Nested records.
    #[serde(rename = "key.substructure", default)]
    pub substructure: Vec<RawRecord>,

    /// Compiler stage marker on non-semantic wrapper records.
    #[serde(rename = "key.diagnostic_stage")]
    pub diagnostic_stage: Option<String>,

    /// Doc-comment XML blob, present only for documented symbols.
    #[serde(rename = "key.doc.full_as_xml")]
    pub doc_xml: Option<String>,

    /// Number of documented symbols in this file (top-level records only).
    #[serde(rename = "key.doc.documented", default)]
    pub documented: u64,

    /// Number of undocumented symbols in this file (top-level records only).
    #[serde(rename = "key.doc.undocumented", default)]
    pub undocumented: u64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    // Records cross rayon worker threads during multi-unit parsing
    static_assertions::assert_impl_all!(super::RawRecord: Send, Sync);

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_nested_records() {
        let json = r#"[{
            "key.diagnostic_stage": "source.diagnostic.stage.swift.parse",
            "key.doc.documented": 2,
            "key.doc.undocumented": 1,
            "key.substructure": [{
                "key.kind": "source.lang.swift.decl.class",
                "key.name": "Musician",
                "key.usr": "s:8Band8MusicianC",
                "key.filepath": "/tmp/Musician.swift",
                "key.offset": 120,
                "key.substructure": [{
                    "key.kind": "source.lang.swift.decl.var.instance",
                    "key.name": "name"
                }]
            }]
        }]"#;

        let records: Vec<RawRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);

        let wrapper = &records[0];
        assert_eq!(
            wrapper.diagnostic_stage.as_deref(),
            Some("source.diagnostic.stage.swift.parse")
        );
        assert_eq!(wrapper.documented, 2);
        assert_eq!(wrapper.undocumented, 1);

        let class = &wrapper.substructure[0];
        assert_eq!(class.kind.as_deref(), Some("source.lang.swift.decl.class"));
        assert_eq!(class.name.as_deref(), Some("Musician"));
        assert_eq!(class.usr.as_deref(), Some("s:8Band8MusicianC"));
        assert_eq!(class.filepath, Some(PathBuf::from("/tmp/Musician.swift")));
        assert_eq!(class.substructure.len(), 1);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let record: RawRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, RawRecord::default());
        assert_eq!(record.documented, 0);
        assert_eq!(record.undocumented, 0);
        assert!(record.substructure.is_empty());
    }

    #[test]
    fn test_doc_xml_preserved_verbatim() {
        let json = r#"{"key.doc.full_as_xml": "<Class line=\"1\" column=\"7\"></Class>"}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.doc_xml.as_deref(),
            Some("<Class line=\"1\" column=\"7\"></Class>")
        );
    }
}
