// `$Var$` template printer for the emitted Go source

use std::collections::HashMap;

use tracing::warn;

#[derive(Debug, Default, Clone)]
pub struct Vars(HashMap<&'static str, String>);

impl Vars {
    pub fn new() -> Vars {
        Vars::default()
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct Printer {
    buf: String,
}

impl Printer {
    pub fn new() -> Printer {
        Printer::default()
    }

    /// Appends `template`, replacing each `$Name$` with its value in `vars`.
    /// `$$` is a literal `$`.
    pub fn print(&mut self, vars: &Vars, template: &str) {
        // odd segments sit between a pair of `$`
        for (i, segment) in template.split('$').enumerate() {
            if i % 2 == 0 {
                self.buf.push_str(segment);
            } else if segment.is_empty() {
                self.buf.push('$');
            } else if let Some(value) = vars.get(segment) {
                self.buf.push_str(value);
            } else {
                warn!(placeholder = segment, "no value for template placeholder");
            }
        }
    }

    pub fn print_raw(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn into_inner(self) -> String {
        self.buf
    }
}
