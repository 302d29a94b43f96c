/// An order-preserving HTTP header block.
///
/// Names and values are stored trimmed. Keys are case-sensitive; inserting
/// an existing name overwrites its value in place, keeping the original
/// position. Serialization emits entries in insertion order, which makes
/// `to_wire_string` the exact inverse of `parse`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    entries: Vec<(String, String)>,
}

impl HeaderBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw header section: CRLF-separated lines, each split once
    /// on `:`. A line with no colon yields an empty value; blank lines are
    /// skipped. A blank section yields an empty block. No line here can
    /// fail to parse.
    pub fn parse(section: &str) -> Self {
        let mut block = Self::new();

        if section.trim().is_empty() {
            return block;
        }

        for line in section.split("\r\n") {
            if line.is_empty() {
                continue;
            }
            match line.split_once(':') {
                Some((name, value)) => block.insert(name.trim(), value.trim()),
                None => block.insert(line.trim(), ""),
            }
        }

        block
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders every entry as `Name: Value\r\n`, in insertion order.
    /// Values are emitted exactly as stored.
    pub fn to_wire_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }
        out
    }
}
