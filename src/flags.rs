use crate::error::ShellError;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub name: String,
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn new(name: &str, short: &str, long: &str, description: &str, takes_value: bool) -> Self {
        Flag {
            name: name.to_string(),
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = vec![
            Flag::new("help", "-h", "--help", "Print this help message", false),
            Flag::new("version", "-v", "--version", "Show version information", false),
            Flag::new(
                "command",
                "-c",
                "--command",
                "Run one command line and exit",
                true,
            ),
            Flag::new(
                "minimal",
                "-m",
                "--minimal",
                "Minimal prompt, no aliases",
                false,
            ),
            Flag::new("quiet", "-q", "--quiet", "Suppress banner and warnings", false),
            Flag::new("debug", "-d", "--debug", "Enable debug output", false),
        ];

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            let flag = self
                .flags
                .iter_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                match args.get(i + 1) {
                    Some(value) => {
                        flag.value = Some(value.clone());
                        i += 1;
                    }
                    None => {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            arg
                        )));
                    }
                }
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: unish [OPTIONS]");
        println!("\nOptions:");
        for flag in &self.flags {
            let long = if flag.takes_value {
                format!("{} <line>", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<18} {}", flag.short, long, flag.description);
        }
    }
}
