use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of services a provider may list.
pub const MAX_SERVICES: usize = 3;

/// A provider record exactly as the store holds it.
///
/// The payload is kept as untyped JSON; nothing about its shape is trusted until it
/// passes through [`Provider::from_document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDocument {
    pub id: String,
    pub data: Value,
}

impl ProviderDocument {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// A normalized, read-only provider snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Display-cased services, at most [`MAX_SERVICES`], none blank.
    pub services: Vec<String>,
    pub profile_views: u64,
    pub contacts_received: u64,
}

impl Provider {
    /// Normalizes a raw document into a `Provider`.
    ///
    /// Returns `None` only when the id is blank. A `services` field that is not a list
    /// is treated as empty, and non-string or blank entries are dropped.
    pub fn from_document(doc: &ProviderDocument) -> Option<Self> {
        let id = doc.id.trim();
        if id.is_empty() {
            tracing::warn!("Rejecting provider document with blank id");
            return None;
        }

        let data = &doc.data;
        let mut services = extract_services(data.get("services"));
        if services.len() > MAX_SERVICES {
            tracing::warn!(
                "Provider {} lists {} services, keeping the first {}",
                id,
                services.len(),
                MAX_SERVICES
            );
            services.truncate(MAX_SERVICES);
        }

        Some(Self {
            id: id.to_string(),
            name: string_field(data, "name").unwrap_or_default(),
            phone: string_field(data, "phone"),
            email: string_field(data, "email"),
            services,
            profile_views: counter_field(data, "profileViews"),
            contacts_received: counter_field(data, "contactsReceived"),
        })
    }
}

fn extract_services(field: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(entries)) = field else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|service| !service.is_empty())
        .map(str::to_string)
        .collect()
}

fn string_field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn counter_field(data: &Value, key: &str) -> u64 {
    data.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// Extracts provider documents from a seed/fallback JSON value.
///
/// Accepts the keyed seed shape `{"users": {"<id>": {...}}}` or an array of objects
/// carrying their own `id`. Any other shape yields no documents.
pub fn documents_from_json(value: &Value) -> Vec<ProviderDocument> {
    match value {
        Value::Object(root) => match root.get("users") {
            Some(Value::Object(users)) => users
                .iter()
                .map(|(id, data)| ProviderDocument::new(id.clone(), data.clone()))
                .collect(),
            _ => Vec::new(),
        },
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let id = item.get("id")?.as_str()?;
                Some(ProviderDocument::new(id, item.clone()))
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// An immutable set of providers searched by the local fallback lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSnapshot {
    providers: Vec<Provider>,
}

impl ProviderSnapshot {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    pub fn from_documents(docs: &[ProviderDocument]) -> Self {
        Self::new(docs.iter().filter_map(Provider::from_document).collect())
    }

    /// Parses a fallback dataset. See [`documents_from_json`] for accepted shapes.
    pub fn from_json(value: &Value) -> Self {
        let docs = documents_from_json(value);
        if docs.is_empty() {
            tracing::debug!("Fallback dataset contained no usable provider documents");
        }
        Self::from_documents(&docs)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
