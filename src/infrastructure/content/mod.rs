// src/infrastructure/content/mod.rs
mod fs;
mod memory;

pub use fs::FsContentStore;
pub use memory::InMemoryContentStore;

/// Alternative names for `name` when it is already taken: `a.html`, `a-1.html`, `a-2.html`, ...
fn candidate_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_owned();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{attempt}.{ext}"),
        _ => format!("{name}-{attempt}"),
    }
}

const MAX_NAME_ATTEMPTS: u32 = 64;

#[cfg(test)]
mod tests {
    use super::candidate_name;

    #[test]
    fn candidate_name_inserts_counter_before_extension() {
        assert_eq!(candidate_name("a.html", 0), "a.html");
        assert_eq!(candidate_name("a.html", 2), "a-2.html");
        assert_eq!(candidate_name("noext", 1), "noext-1");
        assert_eq!(candidate_name(".hidden", 1), ".hidden-1");
    }
}
