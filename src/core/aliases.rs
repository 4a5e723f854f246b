use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::platform::Platform;

const BASE_ALIASES: &[(&str, &str)] = &[
    ("ll", "ls -la"),
    ("la", "ls -a"),
    ("cls", "clear"),
    ("md", "mkdir"),
    ("rd", "rmdir"),
    ("..", "cd .."),
    ("...", "cd ../.."),
    ("....", "cd ../../.."),
];

// Unix verbs mapped onto cmd.exe equivalents.
const WINDOWS_ALIASES: &[(&str, &str)] = &[
    ("ls", "dir"),
    ("rm", "del"),
    ("cp", "copy"),
    ("mv", "move"),
    ("cat", "type"),
    ("pwd", "echo %CD%"),
    ("ll", "dir"),
    ("la", "dir /a"),
];

/// First-token substitutions applied to every line before classification.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: BTreeMap<Box<str>, Box<str>>,
}

impl AliasTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_platform(platform: Platform) -> Self {
        let mut table = Self::empty();
        for (name, expansion) in BASE_ALIASES {
            table.add(name, expansion);
        }
        if platform == Platform::Windows {
            for (name, expansion) in WINDOWS_ALIASES {
                table.add(name, expansion);
            }
        }
        table
    }

    fn add(&mut self, name: &str, expansion: &str) {
        self.aliases.insert(name.into(), expansion.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| &**s)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (&**k, &**v))
    }

    /// Replaces the first token when it names an alias. The rest of the line is
    /// kept as typed; the expansion itself is never expanded again.
    pub fn expand<'a>(&'a self, line: &'a str) -> Cow<'a, str> {
        let trimmed = line.trim_start();
        let token_end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let (first, rest) = trimmed.split_at(token_end);

        match self.get(first) {
            Some(expansion) => {
                let rest = rest.trim_start();
                if rest.is_empty() {
                    Cow::Owned(expansion.to_string())
                } else {
                    Cow::Owned(format!("{} {}", expansion, rest))
                }
            }
            None => Cow::Borrowed(line),
        }
    }
}
