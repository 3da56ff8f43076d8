//! Row labels.

use std::fmt;

/// One row label. Frames built from columns get positional labels
/// `0..n`; labels survive concatenation unchanged, so duplicates are legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Pos(i64),
    Name(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Pos(p) => write!(f, "{p}"),
            Label::Name(n) => f.write_str(n),
        }
    }
}

impl From<i64> for Label {
    fn from(p: i64) -> Self {
        Label::Pos(p)
    }
}

impl From<usize> for Label {
    fn from(p: usize) -> Self {
        Label::Pos(i64::try_from(p).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Label {
    fn from(n: &str) -> Self {
        Label::Name(n.to_string())
    }
}

/// An ordered sequence of row labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Index {
    labels: Vec<Label>,
}

impl Index {
    /// Positional labels `0..len`, pandas' `RangeIndex`.
    pub fn range(len: usize) -> Self {
        Self {
            labels: (0..len).map(Label::from).collect(),
        }
    }

    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn get(&self, pos: usize) -> Option<&Label> {
        self.labels.get(pos)
    }

    /// Every position carrying `label`, in order.
    pub fn positions_of(&self, label: &Label) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| *l == label)
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Labels of every index in order, duplicates kept.
    pub(crate) fn concat<'a>(parts: impl IntoIterator<Item = &'a Index>) -> Index {
        Index {
            labels: parts
                .into_iter()
                .flat_map(|ix| ix.labels.iter().cloned())
                .collect(),
        }
    }

    pub(crate) fn take(&self, rows: &[usize]) -> Index {
        Index {
            labels: rows.iter().map(|&r| self.labels[r].clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let ix = Index::range(3);
        assert_eq!(ix.labels(), &[Label::Pos(0), Label::Pos(1), Label::Pos(2)]);
    }

    #[test]
    fn test_concat_keeps_duplicates() {
        let a = Index::range(2);
        let ix = Index::concat([&a, &a]);
        assert_eq!(ix.len(), 4);
        assert_eq!(ix.positions_of(&Label::Pos(1)), vec![1, 3]);
    }

    #[test]
    fn test_positions_of_missing() {
        assert!(Index::range(2).positions_of(&Label::from("x")).is_empty());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Pos(7).to_string(), "7");
        assert_eq!(Label::from("a").to_string(), "a");
    }
}
