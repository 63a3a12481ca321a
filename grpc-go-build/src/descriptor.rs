// resolved service model consumed by the generator

use crate::names;

/// The Go package a `.proto` file compiles into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    path: String,
    package: String,
    go_package: Option<String>,
}

impl Module {
    /// `file_name` is the `.proto` path as protoc reports it.
    pub fn new(file_name: &str, package: &str, go_package: Option<&str>) -> Module {
        Module {
            path: names::module_path(file_name),
            package: package.to_string(),
            go_package: go_package.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }

    /// Normalized directory of the declaring file; used as the import path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Proto package, used in full method names.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// `go_package` when set, otherwise the proto package.
    pub fn package_name(&self) -> &str {
        self.go_package.as_deref().unwrap_or(&self.package)
    }

    pub fn display_name(&self) -> String {
        names::sanitize(self.package_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub name: String,
    pub module: Module,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub input: MessageRef,
    pub output: MessageRef,
    pub client_streaming: bool,
    pub server_streaming: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFile {
    pub name: String,
    pub module: Module,
    pub services: Vec<Service>,
}

impl ServiceFile {
    pub fn has_client_only_streaming(&self) -> bool {
        self.services
            .iter()
            .flat_map(|s| s.methods.iter())
            .any(|m| m.client_streaming && !m.server_streaming)
    }
}
