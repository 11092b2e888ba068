//! Output formatting utilities

use crate::application::ConvertReport;
use std::path::Path;

/// Announcement printed when the output directory is created
pub fn format_output_dir_created(dir: &Path) -> String {
    format!("Saving all files in {}", dir.display())
}

/// One-line summary of a conversion run
pub fn format_summary(report: &ConvertReport) -> String {
    let noun = if report.written.len() == 1 {
        "post"
    } else {
        "posts"
    };
    format!(
        "Converted {} {} ({} skipped)",
        report.written.len(),
        noun,
        report.skipped
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_summary_empty() {
        let report = ConvertReport::default();
        assert_eq!(format_summary(&report), "Converted 0 posts (0 skipped)");
    }

    #[test]
    fn test_format_summary_singular() {
        let report = ConvertReport {
            created_output_dir: false,
            written: vec![PathBuf::from("a.md")],
            skipped: 2,
        };
        assert_eq!(format_summary(&report), "Converted 1 post (2 skipped)");
    }

    #[test]
    fn test_format_output_dir_created() {
        assert_eq!(
            format_output_dir_created(Path::new("export/_posts")),
            "Saving all files in export/_posts"
        );
    }
}
