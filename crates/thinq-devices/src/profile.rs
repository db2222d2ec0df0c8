//! Profile resolution.
//!
//! [`DeviceProfile::resolve`] walks a vendor profile document with a
//! [`ProfileMapping`] and produces:
//!
//! - one [`CapabilityDescriptor`] per mapped property;
//! - a per-resource index of the properties the unit actually exposes;
//! - the public property map (`type`, `r`, `w`, `unit`) plus the
//!   `notification` and `error` pseudo-entries;
//! - one sub-profile per declared location found in the document.
//!
//! A mapping bound to a single location (one unit of a combined appliance)
//! resolves only the records tagged with that location.
//!
//! A profile is immutable once resolved and is shared through `Arc` with the
//! devices built from it.

use crate::capability::{CapabilityDescriptor, PropertySpec};
use crate::command::Payload;
use crate::error::{DeviceError, DeviceResult};
use crate::hooks::{ExtractContext, Extraction, HookRegistry};
use crate::location::{LocationLayout, LocationTag};
use crate::mapping::{property, Location, ProfileMapping, ResourceMapping};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Properties a resource resolved as readable and writable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceAccess {
    pub readable: Vec<String>,
    pub writable: Vec<String>,
}

/// Resolved capability model of a device or of one of its locations.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    mapping: Arc<ProfileMapping>,
    /// Vendor location key, set on sub-profiles.
    location: Option<String>,
    descriptors: HashMap<String, CapabilityDescriptor>,
    properties: Vec<(String, Vec<String>)>,
    resource_access: HashMap<String, Option<ResourceAccess>>,
    property_map: BTreeMap<String, PropertySpec>,
    notification: Option<CapabilityDescriptor>,
    error: Option<CapabilityDescriptor>,
    sub_profiles: BTreeMap<Location, Arc<DeviceProfile>>,
    location_keys: BTreeMap<Location, String>,
}

impl DeviceProfile {
    fn empty(mapping: Arc<ProfileMapping>, location: Option<String>) -> Self {
        Self {
            mapping,
            location,
            descriptors: HashMap::new(),
            properties: Vec::new(),
            resource_access: HashMap::new(),
            property_map: BTreeMap::new(),
            notification: None,
            error: None,
            sub_profiles: BTreeMap::new(),
            location_keys: BTreeMap::new(),
        }
    }

    /// Resolve a profile document.
    ///
    /// Fails with [`DeviceError::Configuration`] when the property section is
    /// missing and the mapping is not sub-profile only.
    pub fn resolve(
        document: &Value,
        mapping: Arc<ProfileMapping>,
        hooks: &HookRegistry,
    ) -> DeviceResult<Self> {
        let options = mapping.options();
        let scope = mapping.scope().cloned();
        let mut profile = Self::empty(Arc::clone(&mapping), scope.as_ref().map(|s| s.key.clone()));

        if options.use_notification {
            profile.notification = readonly_enum(document.pointer("/notification/push"));
        }

        if !options.use_sub_profile_only {
            profile.error = readonly_enum(document.get("error"));
            match (property_section(document, &mapping)?, &scope) {
                (Value::Array(records), Some(scope)) => {
                    for record in records.iter().filter(|r| scope.matches(r)) {
                        profile.generate_properties(record, hooks);
                    }
                }
                (section, _) => profile.generate_properties(section, hooks),
            }
        }

        if let Some(layout) = mapping.locations() {
            for (location, key) in layout.discover(document) {
                let sub = Self::resolve_location(document, layout, &key, hooks)?;
                debug!(
                    kind = mapping.kind(),
                    location = %location,
                    properties = sub.property_map.len(),
                    "resolved sub-profile"
                );
                profile.sub_profiles.insert(location, Arc::new(sub));
                profile.location_keys.insert(location, key);
            }
        }

        profile.build_property_map();
        Ok(profile)
    }

    /// Split a document by location and resolve one sub-profile per location.
    pub fn split_by_location(
        document: &Value,
        layout: &LocationLayout,
        hooks: &HookRegistry,
    ) -> DeviceResult<BTreeMap<Location, DeviceProfile>> {
        layout
            .discover(document)
            .into_iter()
            .map(|(location, key)| {
                Self::resolve_location(document, layout, &key, hooks).map(|p| (location, p))
            })
            .collect()
    }

    fn resolve_location(
        document: &Value,
        layout: &LocationLayout,
        key: &str,
        hooks: &HookRegistry,
    ) -> DeviceResult<Self> {
        let mapping = layout.mapping_for(key);
        let document = layout.document_for(document, key);
        let mut profile = Self::empty(Arc::clone(&mapping), Some(key.to_string()));

        if mapping.options().use_notification {
            profile.notification = readonly_enum(document.pointer("/notification/push"));
        }
        profile.error = readonly_enum(document.get("error"));

        match property_section(document, &mapping)? {
            Value::Array(records) if layout.tag != LocationTag::Section => {
                for record in records.iter().filter(|r| layout.tag.matches(r, key)) {
                    profile.generate_properties(record, hooks);
                }
            }
            section => profile.generate_properties(section, hooks),
        }

        profile.build_property_map();
        Ok(profile)
    }

    fn generate_properties(&mut self, section: &Value, hooks: &HookRegistry) {
        let mapping = Arc::clone(&self.mapping);
        for resource in mapping.resources() {
            match section.get(&resource.key).filter(|f| is_truthy(f)) {
                Some(fragment) => {
                    let extraction = if resource.custom {
                        match hooks.extractor(mapping.kind(), &resource.key) {
                            Some(extract) => {
                                let ctx = ExtractContext {
                                    resource,
                                    location: self.location.as_deref(),
                                };
                                extract(&ctx, fragment)
                            }
                            None => Extraction::default(),
                        }
                    } else if fragment.is_object() {
                        generic_extraction(resource, fragment)
                    } else {
                        Extraction::default()
                    };
                    self.record_extraction(resource, extraction);
                }
                None => {
                    self.merge_access(&resource.resource, None);
                    for (_, prop) in &resource.properties {
                        self.descriptors
                            .insert(prop.clone(), CapabilityDescriptor::disabled());
                    }
                }
            }
        }
    }

    fn record_extraction(&mut self, resource: &ResourceMapping, extraction: Extraction) {
        let Extraction {
            readable,
            writable,
            descriptors,
        } = extraction;
        self.descriptors.extend(descriptors);

        let mut exposed: Vec<String> = Vec::new();
        for name in readable.iter().chain(writable.iter()) {
            if !exposed.contains(name) {
                exposed.push(name.clone());
            }
        }
        if !exposed.is_empty() {
            match self
                .properties
                .iter_mut()
                .find(|(r, _)| *r == resource.resource)
            {
                Some((_, names)) => names.extend(exposed),
                None => self.properties.push((resource.resource.clone(), exposed)),
            }
        }

        self.merge_access(
            &resource.resource,
            Some(ResourceAccess { readable, writable }),
        );
    }

    /// Access lists accumulate across records; an absent record never erases them.
    fn merge_access(&mut self, resource: &str, access: Option<ResourceAccess>) {
        if let Some(Some(existing)) = self.resource_access.get_mut(resource) {
            if let Some(new) = access {
                existing.readable.extend(new.readable);
                existing.writable.extend(new.writable);
            }
            return;
        }
        self.resource_access.insert(resource.to_string(), access);
    }

    fn build_property_map(&mut self) {
        let mut map = BTreeMap::new();
        for (_, names) in &self.properties {
            for name in names {
                if let Some(descriptor) = self.descriptors.get(name) {
                    map.insert(name.clone(), descriptor.to_spec());
                }
            }
        }
        if let Some(notification) = &self.notification {
            map.insert(property::NOTIFICATION.to_string(), notification.to_spec());
        }
        if let Some(error) = &self.error {
            map.insert(property::ERROR.to_string(), error.to_spec());
        }
        self.property_map = map;
    }

    pub fn mapping(&self) -> &ProfileMapping {
        &self.mapping
    }

    pub fn kind(&self) -> &str {
        self.mapping.kind()
    }

    /// Vendor location key of a sub-profile.
    pub fn location_key(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Exposed properties per canonical resource.
    pub fn properties(&self) -> &[(String, Vec<String>)] {
        &self.properties
    }

    pub fn property_map(&self) -> &BTreeMap<String, PropertySpec> {
        &self.property_map
    }

    pub fn resource_access(&self, resource: &str) -> Option<&ResourceAccess> {
        self.resource_access.get(resource).and_then(Option::as_ref)
    }

    /// Writable properties of every exposed resource.
    pub fn writable_properties(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter_map(|(resource, _)| self.resource_access(resource))
            .flat_map(|access| access.writable.iter().map(String::as_str))
            .collect()
    }

    pub fn descriptor(&self, property: &str) -> Option<&CapabilityDescriptor> {
        match property {
            property::ERROR => self.error.as_ref(),
            property::NOTIFICATION => self.notification.as_ref(),
            _ => self.descriptors.get(property),
        }
    }

    /// Public description of a property.
    pub fn get_property(&self, property: &str) -> Option<PropertySpec> {
        self.descriptor(property).map(CapabilityDescriptor::to_spec)
    }

    pub fn notification(&self) -> Option<PropertySpec> {
        self.notification.as_ref().map(CapabilityDescriptor::to_spec)
    }

    pub fn error(&self) -> Option<PropertySpec> {
        self.error.as_ref().map(CapabilityDescriptor::to_spec)
    }

    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.sub_profiles.keys().copied()
    }

    pub fn sub_profile(&self, location: Location) -> Option<&Arc<DeviceProfile>> {
        self.sub_profiles.get(&location)
    }

    /// Vendor key of a declared location, e.g. `WINE_UPPER` for [`Location::Upper`].
    pub fn location_key_of(&self, location: Location) -> Option<&str> {
        self.location_keys.get(&location).map(String::as_str)
    }

    /// Exposed properties of one location.
    pub fn location_properties(&self, location: Location) -> Option<&[(String, Vec<String>)]> {
        self.sub_profiles.get(&location).map(|p| p.properties())
    }

    pub fn check_readable(&self, property: &str) -> bool {
        self.descriptor(property).is_some_and(|d| d.readable)
    }

    pub fn check_writable(&self, property: &str) -> bool {
        self.descriptor(property).is_some_and(|d| d.writable)
    }

    pub fn check_range_writable(&self, property: &str, value: &Value) -> bool {
        self.descriptor(property)
            .is_some_and(|d| d.accepts_range(value))
    }

    pub fn check_enum_writable(&self, property: &str, value: &Value) -> bool {
        self.descriptor(property)
            .is_some_and(|d| d.accepts_enum(value))
    }

    /// `{resource_key: {sub_key: value}}` for a writable property.
    pub fn attribute_payload(&self, property: &str, value: &Value) -> DeviceResult<Payload> {
        if !self.check_writable(property) {
            return Err(DeviceError::validation(property, "not writable"));
        }
        self.raw_payload(property, value)
    }

    pub fn range_attribute_payload(&self, property: &str, value: &Value) -> DeviceResult<Payload> {
        if !self.check_range_writable(property, value) {
            return Err(DeviceError::validation(property, display_value(value)));
        }
        self.raw_payload(property, value)
    }

    pub fn enum_attribute_payload(&self, property: &str, value: &Value) -> DeviceResult<Payload> {
        if !self.check_enum_writable(property, value) {
            return Err(DeviceError::validation(property, display_value(value)));
        }
        self.raw_payload(property, value)
    }

    fn raw_payload(&self, property: &str, value: &Value) -> DeviceResult<Payload> {
        let (resource, sub_key) = self.mapping.lookup(property).ok_or_else(|| {
            DeviceError::NotSupported(format!("{} has no resource mapping", property))
        })?;

        let mut fields = Map::new();
        fields.insert(sub_key.to_string(), value.clone());
        let mut payload = Map::new();
        payload.insert(resource.key.clone(), Value::Object(fields));
        Ok(payload)
    }
}

fn property_section<'a>(document: &'a Value, mapping: &ProfileMapping) -> DeviceResult<&'a Value> {
    let section = mapping.options().property_section();
    document
        .get(section)
        .filter(|v| !v.is_null())
        .ok_or_else(|| {
            DeviceError::Configuration(format!(
                "{}: profile has no '{}' section",
                mapping.kind(),
                section
            ))
        })
}

fn generic_extraction(resource: &ResourceMapping, fragment: &Value) -> Extraction {
    let mut extraction = Extraction::default();
    for (sub_key, prop) in &resource.properties {
        extraction.record(prop, CapabilityDescriptor::from_fragment(fragment, sub_key));
    }
    extraction
}

fn readonly_enum(values: Option<&Value>) -> Option<CapabilityDescriptor> {
    values
        .and_then(Value::as_array)
        .filter(|v| !v.is_empty())
        .map(|v| CapabilityDescriptor::readonly_enum(v.clone()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
