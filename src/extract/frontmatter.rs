//! Isolate the YAML front-matter region of a Markdown document.

/// Return the text strictly between the first two `---` delimiter lines.
///
/// A file with fewer than two delimiters has no front matter and yields an
/// empty string. Everything after the second delimiter is ignored.
pub fn extract(content: &str) -> String {
    let mut inside = false;
    let mut collected: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim() == "---" {
            if inside {
                return collected.join("\n");
            }
            inside = true;
            continue;
        }
        if inside {
            collected.push(line);
        }
    }

    String::new()
}
