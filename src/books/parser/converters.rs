//! Conversion from XML schema types to the public models

use super::xml_types::{
    AtomEntryXml, AtomFeedXml, DescriptionXml, LinkedTextXml, NameFieldXml, RdfXml,
    ResourceAttrXml, ResourceFieldXml, TextFieldXml,
};
use crate::books::models::{
    Author, Description, DescriptionRole, Entry, EntryParent, Holding, NameField, Record,
    ResourceField, SearchResult, TextField, TextFields,
};

/// First non-empty value, trimmed
fn first_text(values: Vec<String>) -> Option<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn resources(values: Vec<ResourceAttrXml>) -> Vec<String> {
    trimmed(values.into_iter().filter_map(|r| r.resource).collect())
}

impl AtomFeedXml {
    pub(super) fn into_search_result(self) -> SearchResult {
        let self_link = self
            .link
            .iter()
            .find(|l| l.rel.as_deref() == Some("self"))
            .and_then(|l| l.href.clone());

        SearchResult {
            title: first_text(self.title).unwrap_or_default(),
            self_link,
            id: first_text(self.id).unwrap_or_default(),
            updated: first_text(self.updated).unwrap_or_default(),
            total_results: self.total_results,
            start_index: self.start_index,
            items_per_page: self.items_per_page,
            entries: self
                .entries
                .into_iter()
                .map(AtomEntryXml::into_entry)
                .collect(),
        }
    }
}

impl AtomEntryXml {
    fn into_entry(self) -> Entry {
        Entry {
            title: first_text(self.title).unwrap_or_default(),
            id: first_text(self.id).unwrap_or_default(),
            authors: trimmed(self.authors.into_iter().filter_map(|a| a.name).collect()),
            publishers: trimmed(self.publishers),
            publication_date: first_text(self.publication_date),
            parents: self
                .is_part_of
                .into_iter()
                .filter_map(|p| {
                    let title = p.title.clone().unwrap_or_default().trim().to_string();
                    p.target().map(|link| EntryParent { title, link })
                })
                .collect(),
            children: self
                .has_part
                .into_iter()
                .filter_map(LinkedTextXml::target)
                .collect(),
            owner_count: self.owner_count,
        }
    }
}

impl LinkedTextXml {
    /// Text content if present, otherwise the `rdf:resource` attribute
    fn target(self) -> Option<String> {
        let text = self.text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        text.or_else(|| {
            self.resource
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
        })
    }
}

impl RdfXml {
    pub(super) fn into_record(self) -> Record {
        Record {
            descriptions: self
                .descriptions
                .into_iter()
                .enumerate()
                .map(|(index, d)| d.into_description(index))
                .collect(),
        }
    }
}

impl DescriptionXml {
    fn into_description(self, index: usize) -> Description {
        let authors: Vec<Author> = self
            .makers
            .into_iter()
            .filter_map(|m| m.person)
            .map(|p| Author(p.into_name_field()))
            .collect();
        let holdings: Vec<Holding> = self
            .owners
            .into_iter()
            .filter_map(|o| o.organization)
            .map(|o| Holding(o.into_name_field()))
            .collect();

        Description {
            role: DescriptionRole::classify(index, !authors.is_empty(), !holdings.is_empty()),
            about: self.about.unwrap_or_default().trim().to_string(),
            resource_type: first_text(resources(self.types)),
            primary_topic_of: first_text(resources(self.is_primary_topic_of)),
            title: text_fields(self.title),
            alternatives: trimmed(self.alternatives),
            creator: first_text(self.creator),
            publishers: trimmed(self.publishers),
            language: first_text(self.language),
            date: first_text(self.date),
            topics: resource_fields(self.topics),
            ncid: first_text(self.ncid),
            edition: first_text(self.edition),
            is_part_of: resource_fields(self.is_part_of),
            has_part: resource_fields(self.has_part),
            content_of_works: trimmed(self.content_of_works),
            medium: first_text(self.medium.into_iter().filter_map(|m| m.title).collect()),
            owner_count: self.owner_count,
            lccn: trimmed(self.lccn),
            see_also: resources(self.see_also),
            authors,
            holdings,
        }
    }
}

impl NameFieldXml {
    fn into_name_field(self) -> NameField {
        NameField {
            about: self.about.unwrap_or_default().trim().to_string(),
            name: text_fields(self.name),
            see_also: first_text(resources(self.see_also)),
        }
    }
}

fn text_fields(values: Vec<TextFieldXml>) -> TextFields {
    TextFields(
        values
            .into_iter()
            .map(|v| TextField {
                lang: v.lang.filter(|l| !l.trim().is_empty()),
                text: v.text.unwrap_or_default().trim().to_string(),
            })
            .collect(),
    )
}

fn resource_fields(values: Vec<ResourceFieldXml>) -> Vec<ResourceField> {
    values
        .into_iter()
        .map(|v| ResourceField {
            resource: v.resource.unwrap_or_default().trim().to_string(),
            title: v.title.unwrap_or_default().trim().to_string(),
        })
        .collect()
}
