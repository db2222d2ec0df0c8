//! Location partitioning for multi-zone appliances.
//!
//! Multi-zone data arrives in three shapes:
//!
//! - the whole `property` section is a list of records, each tagged with
//!   `location.locationName` (ovens, cooktops, washers);
//! - one resource inside the `property` object is a list of records, each
//!   tagged with a flat `locationName` (refrigerator and wine cellar
//!   temperatures, refrigerator doors);
//! - the document holds one complete profile per top-level key, and status
//!   payloads hold one status object per key (washtower halves).

use crate::command::LocationStyle;
use crate::mapping::{Location, ProfileMapping};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Where the location name sits inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationTag {
    /// `{"location": {"locationName": "UPPER"}, ...}`
    Nested,
    /// `{"locationName": "FRIDGE", ...}`
    Flat,
    /// `{"washer": {...}, "dryer": {...}}`; records carry no tag.
    Section,
}

impl LocationTag {
    pub fn name_of<'a>(&self, record: &'a Value) -> Option<&'a str> {
        match self {
            Self::Nested => record.get("location")?.get("locationName")?.as_str(),
            Self::Flat => record.get("locationName")?.as_str(),
            Self::Section => None,
        }
    }

    pub fn matches(&self, record: &Value, key: &str) -> bool {
        self.name_of(record) == Some(key)
    }
}

/// Which part of the `property` section is split by location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceShape {
    PropertyList,
    ResourceList(String),
    /// A top-level key of the document holding a complete profile.
    Section,
}

/// One place locations are read from, with the vendor keys it may contain.
#[derive(Debug, Clone)]
pub struct LocationSource {
    pub shape: SourceShape,
    pub keys: Vec<(String, Location)>,
    /// Mapping of this source's locations when it differs from the layout's.
    pub mapping: Option<Arc<ProfileMapping>>,
}

impl LocationSource {
    fn new(shape: SourceShape, keys: &[(&str, Location)]) -> Self {
        Self {
            shape,
            keys: keys.iter().map(|(k, l)| (k.to_string(), *l)).collect(),
            mapping: None,
        }
    }

    pub fn property_list(keys: &[(&str, Location)]) -> Self {
        Self::new(SourceShape::PropertyList, keys)
    }

    pub fn resource_list(resource_key: &str, keys: &[(&str, Location)]) -> Self {
        Self::new(SourceShape::ResourceList(resource_key.to_string()), keys)
    }

    pub fn section(key: &str, location: Location) -> Self {
        Self::new(SourceShape::Section, &[(key, location)])
    }

    /// Resolve this source's locations with `mapping` instead of the layout's.
    pub fn with_mapping(mut self, mapping: ProfileMapping) -> Self {
        self.mapping = Some(Arc::new(mapping));
        self
    }

    fn location_for(&self, key: &str) -> Option<Location> {
        self.keys.iter().find(|(k, _)| k == key).map(|(_, l)| *l)
    }
}

/// Location layout of a multi-zone device type.
#[derive(Debug, Clone)]
pub struct LocationLayout {
    pub tag: LocationTag,
    pub sources: Vec<LocationSource>,
    /// Mapping every location's sub-profile is resolved with.
    pub sub_mapping: Arc<ProfileMapping>,
    /// How commands issued by a sub-device carry their location.
    pub style: LocationStyle,
    /// A single-unit device reports one untagged object instead of a list.
    pub accepts_unscoped: bool,
}

impl LocationLayout {
    pub fn new(tag: LocationTag, sub_mapping: ProfileMapping) -> Self {
        Self {
            tag,
            sources: Vec::new(),
            sub_mapping: Arc::new(sub_mapping),
            style: LocationStyle::TopLevel,
            accepts_unscoped: false,
        }
    }

    pub fn with_source(mut self, source: LocationSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_style(mut self, style: LocationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn accepting_unscoped(mut self) -> Self {
        self.accepts_unscoped = true;
        self
    }

    /// Declared locations present in a profile document, with their vendor key.
    ///
    /// Records whose location is not declared are skipped. A single untagged
    /// object resolves to [`Location::Main`] when the layout accepts it.
    pub fn discover(&self, document: &Value) -> BTreeMap<Location, String> {
        let property = document.get("property").unwrap_or(&Value::Null);
        let mut found = BTreeMap::new();
        for source in &self.sources {
            if source.shape == SourceShape::Section {
                for (key, location) in &source.keys {
                    if document.get(key).is_some_and(Value::is_object) {
                        found.insert(*location, key.clone());
                    }
                }
                continue;
            }

            let records = match (&source.shape, property) {
                (SourceShape::PropertyList, Value::Array(records)) => records.as_slice(),
                (SourceShape::PropertyList, Value::Object(_)) if self.accepts_unscoped => {
                    let key = source
                        .keys
                        .iter()
                        .find(|(_, l)| *l == Location::Main)
                        .map(|(k, _)| k.clone())
                        .unwrap_or_else(|| "MAIN".to_string());
                    found.insert(Location::Main, key);
                    continue;
                }
                (SourceShape::ResourceList(key), Value::Object(obj)) => {
                    match obj.get(key).and_then(Value::as_array) {
                        Some(records) => records.as_slice(),
                        None => continue,
                    }
                }
                _ => continue,
            };

            for record in records {
                let Some(name) = self.tag.name_of(record) else {
                    continue;
                };
                if let Some(location) = source.location_for(name) {
                    found.insert(location, name.to_string());
                }
            }
        }
        found
    }

    /// Mapping the sub-profile of vendor location `key` is resolved with.
    pub fn mapping_for(&self, key: &str) -> Arc<ProfileMapping> {
        self.sources
            .iter()
            .find(|source| source.keys.iter().any(|(k, _)| k == key))
            .and_then(|source| source.mapping.clone())
            .unwrap_or_else(|| Arc::clone(&self.sub_mapping))
    }

    /// Part of a profile document describing vendor location `key`.
    pub fn document_for<'a>(&self, document: &'a Value, key: &str) -> &'a Value {
        match self.tag {
            LocationTag::Section => document.get(key).unwrap_or(&Value::Null),
            LocationTag::Nested | LocationTag::Flat => document,
        }
    }

    pub fn scope(&self, key: &str) -> LocationScope {
        LocationScope {
            key: key.to_string(),
            tag: self.tag,
            style: self.style,
            accepts_unscoped: self.accepts_unscoped,
        }
    }
}

/// The location a sub-device is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationScope {
    /// Vendor location name, e.g. `UPPER`.
    pub key: String,
    pub tag: LocationTag,
    pub style: LocationStyle,
    pub accepts_unscoped: bool,
}

impl LocationScope {
    /// Scope of a device that is itself one location of a combined appliance.
    pub fn unit(key: &str, tag: LocationTag, style: LocationStyle) -> Self {
        Self {
            key: key.to_string(),
            tag,
            style,
            accepts_unscoped: true,
        }
    }

    pub fn matches(&self, record: &Value) -> bool {
        self.tag.matches(record, &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout(tag: LocationTag, source: LocationSource) -> LocationLayout {
        let sub = ProfileMapping::builder("sub").build().unwrap();
        LocationLayout::new(tag, sub).with_source(source)
    }

    #[test]
    fn test_discover_property_list() {
        let layout = layout(
            LocationTag::Nested,
            LocationSource::property_list(&[("UPPER", Location::Upper), ("LOWER", Location::Lower)]),
        );
        let document = json!({"property": [
            {"location": {"locationName": "UPPER"}},
            {"location": {"locationName": "LOWER"}},
            {"location": {"locationName": "SIDE"}},
        ]});

        let found = layout.discover(&document);
        assert_eq!(found.len(), 2);
        assert_eq!(found[&Location::Upper], "UPPER");
    }

    #[test]
    fn test_discover_resource_list() {
        let layout = layout(
            LocationTag::Flat,
            LocationSource::resource_list("temperatureInUnits", &[("FRIDGE", Location::Fridge)]),
        );
        let document = json!({"property": {
            "temperatureInUnits": [{"locationName": "FRIDGE"}, {"locationName": "FREEZER"}]
        }});

        let found = layout.discover(&document);
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![Location::Fridge]);
    }

    #[test]
    fn test_unscoped_object_resolves_to_main() {
        let layout = layout(
            LocationTag::Nested,
            LocationSource::property_list(&[("MAIN", Location::Main)]),
        )
        .accepting_unscoped();

        let found = layout.discover(&json!({"property": {"runState": {}}}));
        assert_eq!(found[&Location::Main], "MAIN");
    }

    #[test]
    fn test_discover_sections() {
        let dryer = ProfileMapping::builder("dryer_half").build().unwrap();
        let layout = layout(LocationTag::Section, LocationSource::section("washer", Location::Washer))
            .with_source(LocationSource::section("dryer", Location::Dryer).with_mapping(dryer));
        let document = json!({"washer": {"property": {}}, "dryer": {"property": {}}, "notification": {}});

        let found = layout.discover(&document);
        assert_eq!(found[&Location::Washer], "washer");
        assert_eq!(found[&Location::Dryer], "dryer");
        assert_eq!(layout.mapping_for("dryer").kind(), "dryer_half");
        assert_eq!(layout.mapping_for("washer").kind(), "sub");
        assert_eq!(layout.document_for(&document, "washer"), &json!({"property": {}}));

        let found = layout.discover(&json!({"washer": {"property": {}}}));
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![Location::Washer]);
    }

    #[test]
    fn test_scope_matching() {
        let layout = layout(LocationTag::Flat, LocationSource::property_list(&[]));
        let scope = layout.scope("FREEZER");
        assert!(scope.matches(&json!({"locationName": "FREEZER"})));
        assert!(!scope.matches(&json!({"location": {"locationName": "FREEZER"}})));
    }
}
