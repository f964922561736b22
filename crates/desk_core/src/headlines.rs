/// Headlines grouped by news source, in the order the sources were fetched.
///
/// Source names are unique: inserting an existing source replaces its list
/// in place and keeps the original position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadlineSet {
    entries: Vec<(String, Vec<String>)>,
}

impl HeadlineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, headlines: Vec<String>) {
        let source = source.into();
        match self.entries.iter_mut().find(|(name, _)| *name == source) {
            Some((_, existing)) => *existing = headlines,
            None => self.entries.push((source, headlines)),
        }
    }

    pub fn remove(&mut self, source: &str) -> Option<Vec<String>> {
        let index = self.entries.iter().position(|(name, _)| name == source)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, source: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == source)
            .map(|(_, headlines)| headlines.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, headlines)| (name.as_str(), headlines.as_slice()))
    }

    pub fn sources(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for HeadlineSet {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut set = HeadlineSet::new();
        for (source, headlines) in iter {
            set.insert(source, headlines);
        }
        set
    }
}
