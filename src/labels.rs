//! Display names for state, output and source channels.
//!
//! Names are supplied as free-form comma-separated text (`"uC, iL"`). A
//! channel with no name, because the list is too short or the entry is blank,
//! is labeled by position: `state[i]`, `output[i]` or `source[i]`.

/// Which vector a channel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    State,
    Output,
    Source,
}

impl ChannelKind {
    fn prefix(&self) -> &'static str {
        match self {
            ChannelKind::State => "state",
            ChannelKind::Output => "output",
            ChannelKind::Source => "source",
        }
    }
}

/// Split a comma-separated name list, trimming whitespace around entries.
///
/// Blank entries are kept (as empty strings) so that later names stay at
/// their position.
pub fn parse_name_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Channel names for one model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelNames {
    pub states: Vec<String>,
    pub outputs: Vec<String>,
    pub sources: Vec<String>,
}

impl ChannelNames {
    /// Build names from three comma-separated lists.
    pub fn parse(states: &str, outputs: &str, sources: &str) -> Self {
        Self {
            states: parse_name_list(states),
            outputs: parse_name_list(outputs),
            sources: parse_name_list(sources),
        }
    }

    /// Label for channel `index` of the given kind.
    pub fn label(&self, kind: ChannelKind, index: usize) -> String {
        let names = match kind {
            ChannelKind::State => &self.states,
            ChannelKind::Output => &self.outputs,
            ChannelKind::Source => &self.sources,
        };
        match names.get(index) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("{}[{}]", kind.prefix(), index),
        }
    }

    /// Labels for the first `count` channels of the given kind.
    ///
    /// Surplus names beyond `count` are ignored.
    pub fn labels(&self, kind: ChannelKind, count: usize) -> Vec<String> {
        (0..count).map(|i| self.label(kind, i)).collect()
    }
}
