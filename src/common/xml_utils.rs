//! Reader-based checks run before serde decoding
//!
//! `quick_xml::de` matches elements by local name only and happily maps any
//! root element onto the target struct. These helpers walk the document once
//! with a namespace-aware reader so that malformed or foreign payloads are
//! rejected instead of decoding into an empty value. They also drop elements
//! from a foreign vocabulary that share a local name with an expected field
//! (e.g. `dc:title` inside an Atom entry).

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::{CiNiiError, Result};

pub(crate) const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
pub(crate) const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Check that `xml` is well-formed and its root element is `{namespace}local_name`.
pub(crate) fn verify_document(xml: &str, namespace: &str, local_name: &str) -> Result<()> {
    let mut reader = NsReader::from_str(xml);
    let mut depth: usize = 0;
    let mut seen_root = false;

    loop {
        let position = reader.buffer_position();
        let root = match reader.read_resolved_event() {
            Ok((ns, Event::Start(e))) => {
                depth += 1;
                (depth == 1).then(|| (resolved_namespace(&ns), local(e.local_name().as_ref())))
            }
            Ok((ns, Event::Empty(e))) => {
                (depth == 0).then(|| (resolved_namespace(&ns), local(e.local_name().as_ref())))
            }
            Ok((_, Event::End(_))) => {
                depth = depth.saturating_sub(1);
                None
            }
            Ok((_, Event::Eof)) => break,
            Ok(_) => None,
            Err(e) => {
                return Err(CiNiiError::xml(
                    &format!("Malformed XML after byte {}", position),
                    e,
                ));
            }
        };

        if let Some((found_ns, found_name)) = root {
            if seen_root {
                return Err(CiNiiError::XmlError(
                    "Document has more than one root element".to_string(),
                ));
            }
            seen_root = true;
            if found_name != local_name || found_ns.as_deref() != Some(namespace) {
                return Err(CiNiiError::XmlError(format!(
                    "Unexpected root element {{{}}}{}, expected {{{}}}{}",
                    found_ns.unwrap_or_default(),
                    found_name,
                    namespace,
                    local_name
                )));
            }
        }
    }

    if !seen_root {
        return Err(CiNiiError::XmlError("Document has no root element".to_string()));
    }
    if depth != 0 {
        return Err(CiNiiError::XmlError(format!(
            "Unexpected end of document: {} element(s) left open",
            depth
        )));
    }
    Ok(())
}

/// Expanded element names (`(namespace, local name)`) a decoder reads
pub(crate) type Vocabulary = [(&'static str, &'static str)];

/// Remove elements whose local name belongs to `vocabulary` under another namespace
///
/// Serde decoding matches on local names only, so such an element would be
/// read into the wrong field or collide with the expected one. Elements with
/// unknown local names are kept; the decoder ignores them. The input is
/// returned unchanged when nothing is removed.
pub(crate) fn retain_vocabulary<'a>(xml: &'a str, vocabulary: &Vocabulary) -> Result<Cow<'a, str>> {
    let mut reader = NsReader::from_str(xml);
    let mut removed: Vec<(usize, usize)> = Vec::new();

    loop {
        let start = reader.buffer_position() as usize;
        let foreign = match reader.read_resolved_event() {
            Ok((ns, Event::Start(e))) => is_foreign(&ns, e.local_name().as_ref(), vocabulary)
                .then(|| Some(e.name().as_ref().to_vec())),
            Ok((ns, Event::Empty(e))) => {
                is_foreign(&ns, e.local_name().as_ref(), vocabulary).then_some(None)
            }
            Ok((_, Event::Eof)) => break,
            Ok(_) => None,
            Err(e) => {
                return Err(CiNiiError::xml(
                    &format!("Malformed XML after byte {}", start),
                    e,
                ));
            }
        };

        match foreign {
            Some(Some(name)) => {
                reader
                    .read_to_end(QName(&name))
                    .map_err(|e| CiNiiError::xml("Unterminated foreign element", e))?;
                removed.push((start, reader.buffer_position() as usize));
            }
            Some(None) => removed.push((start, reader.buffer_position() as usize)),
            None => {}
        }
    }

    if removed.is_empty() {
        return Ok(Cow::Borrowed(xml));
    }

    let mut kept = String::with_capacity(xml.len());
    let mut cursor = 0;
    for (start, end) in removed {
        kept.push_str(&xml[cursor..start]);
        cursor = end;
    }
    kept.push_str(&xml[cursor..]);
    Ok(Cow::Owned(kept))
}

fn is_foreign(ns: &ResolveResult, local_name: &[u8], vocabulary: &Vocabulary) -> bool {
    let namespace = resolved_namespace(ns);
    let mut expected = vocabulary
        .iter()
        .filter(|(_, local)| local.as_bytes() == local_name)
        .peekable();
    expected.peek().is_some() && !expected.any(|(uri, _)| namespace.as_deref() == Some(*uri))
}

fn resolved_namespace(ns: &ResolveResult) -> Option<String> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => Some(String::from_utf8_lossy(uri).into_owned()),
        _ => None,
    }
}

fn local(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}
