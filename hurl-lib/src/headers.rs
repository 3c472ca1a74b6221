use crate::core::version::user_agent;

/// Ordered header assignments where the last writer wins.
///
/// Names compare case-insensitively. Overwriting keeps the original position
/// and takes the new spelling of the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers every outbound request starts from.
    pub fn base() -> Self {
        Self::new()
            .set(reqwest::header::USER_AGENT.as_str(), user_agent())
            .set(reqwest::header::ACCEPT.as_str(), "*/*")
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        match self
            .entries
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(i) => self.entries[i] = (name, value),
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn with_all<I>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .fold(self, |headers, (name, value)| headers.set(name, value))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
