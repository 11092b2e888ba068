use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn wp2middleman_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wp2middleman").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Wrap `<item>` elements in a WordPress export envelope
pub fn export_with_items(items: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
    xmlns:content="http://purl.org/rss/1.0/modules/content/"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:wp="http://wordpress.org/export/1.2/">
<channel>
    <title>Test Blog</title>
{}
</channel>
</rss>
"#,
        items
    )
}

/// Write an export with the given items to `<dir>/wordpress.xml`
pub fn write_export(dir: &Path, items: &str) {
    fs::write(dir.join("wordpress.xml"), export_with_items(items)).unwrap();
}
