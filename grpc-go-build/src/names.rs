// identifier helpers shared by the resolver and the emitters

/// Replaces every non alphanumeric character with `_` so the result can be
/// used as a Go identifier. Works per `char`: the char count is preserved,
/// and a multi-byte character becomes a single `_`.
pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Lowercases the first ASCII letter. Used for the unexported client struct.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        _ => name.to_string(),
    }
}

/// Directory of a `.proto` file. Each directory is assumed to hold at most
/// one Go package, so this doubles as the import path.
pub fn module_path(file_name: &str) -> String {
    let normalized = file_name.replace('\\', "/");
    let normalized = normalized.trim_start_matches("./");
    match normalized.rfind('/') {
        Some(pos) => normalized[..pos].to_string(),
        None => String::new(),
    }
}

/// `foo/bar.proto` -> `foo/bar_grpc.pb.go`
pub fn output_file_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".proto").unwrap_or(file_name);
    format!("{}_grpc.pb.go", stem)
}
