// import collection and cross-package type qualification for one file

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::descriptor::{MessageRef, ServiceFile};

const ALIAS_PREFIX: &str = "apb";

/// Packages a file has to import plus the aliases needed to keep their
/// names apart. Built fresh for every generated file.
#[derive(Debug, Default, Clone)]
pub struct ImportContext {
    own_path: String,
    // first-seen order
    imports: Vec<String>,
    aliases: HashMap<String, String>,
}

impl ImportContext {
    pub fn resolve(file: &ServiceFile) -> ImportContext {
        let own_path = file.module.path();
        let mut ctx = ImportContext {
            own_path: own_path.to_string(),
            ..Default::default()
        };
        let mut seen = HashSet::new();
        let mut claimed = HashSet::new();
        claimed.insert(file.module.display_name());
        let mut next_alias = 0usize;

        let referenced = file
            .services
            .iter()
            .flat_map(|s| s.methods.iter())
            .flat_map(|m| [&m.input, &m.output]);

        for ty in referenced {
            let path = ty.module.path();
            // same package, or nothing we could import
            if path == own_path || path.is_empty() {
                continue;
            }
            if !seen.insert(path) {
                continue;
            }
            ctx.imports.push(path.to_string());

            let package = ty.module.display_name();
            if claimed.insert(package.clone()) {
                continue;
            }
            // skip candidates a real package already took
            let alias = loop {
                let candidate = format!("{}{}", ALIAS_PREFIX, next_alias);
                next_alias += 1;
                if claimed.insert(candidate.clone()) {
                    break candidate;
                }
            };
            debug!(path, package = %package, alias = %alias, "aliasing colliding import");
            ctx.aliases.insert(path.to_string(), alias);
        }
        ctx
    }

    /// Import paths in the order they were first referenced.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn contains(&self, path: &str) -> bool {
        self.imports.iter().any(|p| p == path)
    }

    pub fn alias(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    /// `import` lines for the generated file, sorted by path.
    pub fn import_lines(&self, prefix: &str) -> Vec<String> {
        let mut paths: Vec<&String> = self.imports.iter().collect();
        paths.sort();
        paths
            .into_iter()
            .map(|path| match self.alias(path) {
                Some(alias) => format!("import {} \"{}{}\"", alias, prefix, path),
                None => format!("import \"{}{}\"", prefix, path),
            })
            .collect()
    }

    /// Go spelling of a message type as seen from the file being generated.
    pub fn qualify(&self, ty: &MessageRef) -> String {
        let path = ty.module.path();
        if path == self.own_path || !self.contains(path) {
            return ty.name.clone();
        }
        match self.alias(path) {
            Some(alias) => format!("{}.{}", alias, ty.name),
            None => format!("{}.{}", ty.module.display_name(), ty.name),
        }
    }
}
