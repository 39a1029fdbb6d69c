//! Complete status document: application accounting plus provider outcomes.

use std::collections::BTreeMap;

use crate::application_info::ApplicationInfo;
use crate::config::{APPLICATION_INFO_TAG, RUNTIME_INFO_TAG, URL_PROVIDER_INFO_TAG};
use crate::error_handling::SaveError;
use crate::output::{JsonNode, OutputNode, XmlElement};
use crate::url_provider_info::UrlProviderInfo;

/// Everything a status snapshot contains.
///
/// Providers are keyed by name and written in name order.
#[derive(Debug, Clone, Default)]
pub struct RuntimeInfo {
    application: ApplicationInfo,
    providers: BTreeMap<String, UrlProviderInfo>,
}

impl RuntimeInfo {
    pub fn new(application: ApplicationInfo) -> Self {
        Self {
            application,
            providers: BTreeMap::new(),
        }
    }

    pub fn application(&self) -> &ApplicationInfo {
        &self.application
    }

    pub fn application_mut(&mut self) -> &mut ApplicationInfo {
        &mut self.application
    }

    /// Returns the provider named `name`, creating a never-run entry if needed.
    pub fn provider(&mut self, name: &str) -> &mut UrlProviderInfo {
        self.providers.entry(name.to_string()).or_default()
    }

    pub fn get_provider(&self, name: &str) -> Option<&UrlProviderInfo> {
        self.providers.get(name)
    }

    pub fn providers(&self) -> impl Iterator<Item = (&str, &UrlProviderInfo)> {
        self.providers.iter().map(|(name, info)| (name.as_str(), info))
    }

    /// Resets the application info and every provider. Nothing is removed.
    pub fn reset(&mut self) {
        self.application.reset();
        for provider in self.providers.values_mut() {
            provider.reset();
        }
    }

    /// Shorthand for [`ApplicationInfo::recompute_usage`].
    pub fn recompute_usage(&mut self) {
        self.application.recompute_usage();
    }

    /// Writes an `ApplicationInfo` child, then one `UrlProviderInfo` child per provider.
    ///
    /// A failure while writing the application info is returned before any
    /// provider is written.
    pub fn save<N: OutputNode>(&self, node: &mut N) -> Result<(), SaveError> {
        self.application.save(node.append_child(APPLICATION_INFO_TAG))?;

        for (name, provider) in &self.providers {
            let child = node.append_child(URL_PROVIDER_INFO_TAG);
            child.set_attribute("name", name.as_str());
            provider.save(child)?;
        }
        Ok(())
    }

    /// Builds the `RuntimeInfo` root element as XML.
    pub fn to_document(&self) -> Result<XmlElement, SaveError> {
        self.save_into(XmlElement::new(RUNTIME_INFO_TAG))
    }

    /// Builds the `RuntimeInfo` root element as JSON.
    pub fn to_json_document(&self) -> Result<JsonNode, SaveError> {
        self.save_into(JsonNode::new(RUNTIME_INFO_TAG))
    }

    fn save_into<N: OutputNode>(&self, mut root: N) -> Result<N, SaveError> {
        self.save(&mut root)?;
        Ok(root)
    }
}
