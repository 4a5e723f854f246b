/// Lines entered during this session, oldest first. Nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `entry` as typed. Blank lines are ignored.
    pub fn add(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }
        self.entries.push(entry.to_owned());
    }

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut history = History::new();
        history.add("");
        history.add("   ");
        history.add("pwd");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let mut history = History::new();
        for i in 0..15 {
            history.add(&format!("echo {}", i));
        }

        let recent = history.recent(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0], "echo 5");
        assert_eq!(recent[9], "echo 14");
        assert_eq!(history.len(), 15);
    }

    #[test]
    fn test_recent_with_short_history() {
        let mut history = History::new();
        history.add("cd /tmp");
        history.add("ls");
        assert_eq!(history.recent(10), ["cd /tmp", "ls"]);
        assert!(History::new().recent(10).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        history.add("ls");
        history.add("ls");
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["ls", "ls"]);
    }
}
