// options passed through protoc's `--grpc-go_out=<params>:<dir>`

use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Prepended to every generated message import path.
    pub import_prefix: String,
}

impl GeneratorOptions {
    /// Parses a comma separated `key=value` list. Unknown keys are ignored.
    pub fn parse(parameter: &str) -> GeneratorOptions {
        let mut options = GeneratorOptions::default();
        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            match key {
                "import_prefix" => options.import_prefix = value.to_string(),
                _ => debug!(key, "ignoring unknown generator option"),
            }
        }
        options
    }
}
