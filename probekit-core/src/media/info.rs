use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option name to value mapping decoded from one `[FORMAT]` or `[STREAM]` block.
///
/// Values are kept exactly as ffprobe printed them; nothing is interpreted.
pub type Section = BTreeMap<String, String>;

/// Parsed output of one ffprobe run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Container-level metadata from the `[FORMAT]` block.
    pub format: Section,

    /// One section per elementary stream; `streams[i]` declares `index=i`.
    pub streams: Vec<Section>,
}

impl ProbeResult {
    /// Looks up a container-level option.
    #[must_use]
    pub fn format_value(&self, option: &str) -> Option<&str> {
        self.format.get(option).map(String::as_str)
    }

    /// Returns the stream declared with the given index.
    #[must_use]
    pub fn stream(&self, index: usize) -> Option<&Section> {
        self.streams.get(index)
    }

    #[must_use]
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Iterates over the streams whose `option` equals `value` exactly.
    pub fn streams_with<'a>(
        &'a self,
        option: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = &'a Section> + 'a {
        self.streams
            .iter()
            .filter(move |s| s.get(option).is_some_and(|v| v == value))
    }
}
