//! Old/new path extraction from a file segment.

const OLD_PATH_MARKER: &str = "--- a/";
const NEW_PATH_MARKER: &str = "+++ b/";

/// Path after the first `--- a/` header, or an empty string.
pub(super) fn extract_old_path(segment: &str) -> String {
    path_after_marker(segment, OLD_PATH_MARKER).unwrap_or_default()
}

/// Path after the first `+++ b/` header, or an empty string.
pub(super) fn extract_new_path(segment: &str) -> String {
    path_after_marker(segment, NEW_PATH_MARKER).unwrap_or_default()
}

/// Text between `marker` and the next newline.
///
/// Returns `None` when the marker is absent or the line is not terminated.
fn path_after_marker(segment: &str, marker: &str) -> Option<String> {
    let start = segment.find(marker)? + marker.len();
    let rest = &segment[start..];
    let end = rest.find('\n')?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEGMENT: &str = "diff --git a/src/model/Dto.java b/src/model/Dto.java
index 50e23fd0..2b304ea7 100644
--- a/src/model/Dto.java
+++ b/src/model/Dto2.java
@@ -10,6 +10,7 @@ import lombok.Data;
+  private Long id;
";

    #[test]
    fn extracts_old_path() {
        assert_eq!(extract_old_path(SEGMENT), "src/model/Dto.java");
    }

    #[test]
    fn extracts_new_path() {
        assert_eq!(extract_new_path(SEGMENT), "src/model/Dto2.java");
    }

    #[test]
    fn missing_marker_yields_empty_path() {
        let segment = "diff --git a/new.rs b/new.rs
new file mode 100644
--- /dev/null
+++ b/new.rs
@@ -0,0 +1,1 @@
+fn main() {}
";
        assert_eq!(extract_old_path(segment), "");
        assert_eq!(extract_new_path(segment), "new.rs");
    }

    #[test]
    fn unterminated_header_yields_empty_path() {
        assert_eq!(extract_old_path("--- a/src/lib.rs"), "");
        assert_eq!(extract_new_path("+++ b/"), "");
    }

    #[test]
    fn path_text_is_kept_verbatim() {
        let segment = "--- a/dir with space/ünïcode.rs\n+++ b/x\n";
        assert_eq!(extract_old_path(segment), "dir with space/ünïcode.rs");
    }
}
