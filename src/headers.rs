use crate::constants::header;
use indexmap::IndexMap;

/// Header name/value pairs in the order they were first written.
pub type Headers = IndexMap<String, String>;

/// Response header collection the CORS engine writes into.
///
/// Names are compared case-insensitively. Every header except `Vary` is
/// replaced on write; `Vary` entries are merged into a single
/// comma-separated value so values set by the host survive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::with_estimate(8)
    }

    pub fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
            return;
        }

        match self.position(&name) {
            Some(index) => {
                if let Some((_, existing)) = self.headers.get_index_mut(index) {
                    *existing = value.into();
                }
            }
            None => {
                self.headers.insert(name, value.into());
            }
        }
    }

    pub fn add_vary<S: Into<String>>(&mut self, value: S) {
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| split_vary(existing))
            .unwrap_or_default();
        entries.extend(split_vary(&value.into()));

        if entries.is_empty() {
            self.headers.shift_remove(header::VARY);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.headers
            .insert(header::VARY.to_string(), deduped.join(", "));
    }

    pub fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|index| self.headers.get_index(index))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Individual `Vary` entries, in insertion order.
    pub fn vary(&self) -> Vec<&str> {
        self.headers
            .get(header::VARY)
            .map(|value| value.split(", ").collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.headers
            .keys()
            .position(|existing| existing.eq_ignore_ascii_case(name))
    }
}

impl IntoIterator for HeaderCollection {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

fn split_vary(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
