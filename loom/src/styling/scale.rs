use crate::styling::error::DefinitionError;

/// An ordered token table mapping semantic keys to concrete CSS values,
/// e.g. spacing `"16"` to `"16px"`. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scale {
    name: String,
    entries: Vec<(String, String)>,
}

impl Scale {
    pub fn define(name: &str, entries: &[(&str, &str)]) -> Result<Self, DefinitionError> {
        let mut scale = Self {
            name: name.to_string(),
            entries: Vec::with_capacity(entries.len()),
        };
        for (key, value) in entries {
            if scale.entries.iter().any(|(existing, _)| existing == key) {
                return Err(DefinitionError::DuplicateScaleKey {
                    scale: scale.name,
                    key: (*key).to_string(),
                });
            }
            scale.entries.push(((*key).to_string(), (*value).to_string()));
        }
        Ok(scale)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Result<&str, DefinitionError> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| DefinitionError::UnknownScaleKey {
                scale: self.name.clone(),
                key: key.to_string(),
            })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
