//! 識別結果のターミナル表示

use movie_id_common::render::NO_LINKS_NOTICE;
use movie_id_common::{LinksView, ResultView};

pub fn format_result(view: &ResultView) -> String {
    let mut lines = vec![
        format!("🎬 {} ({})", view.title, view.year_label),
        format!("   ✔ {}", view.badge_text()),
    ];

    if !view.summary.is_empty() {
        lines.push(format!("   {}", view.summary));
    }

    lines.push(String::new());
    match &view.links {
        LinksView::Placeholder => lines.push(format!("   {}", NO_LINKS_NOTICE)),
        LinksView::Links(links) => {
            for link in links {
                lines.push(format!("   ▶ {}  {}", link.label(), link.href));
                if let Some(title) = &link.title {
                    lines.push(format!("     {}", title));
                }
            }
        }
    }

    lines.join("\n")
}

pub fn format_error(message: &str) -> String {
    format!("✖ {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_id_common::{IdentificationResult, StreamingLink};

    #[test]
    fn test_format_result_with_links() {
        let result = IdentificationResult {
            title: "Parasite".to_string(),
            year: Some("2019".to_string()),
            summary: "A poor family schemes their way into a rich household.".to_string(),
            confidence: Some(0.92),
            links: vec![StreamingLink {
                url: "https://www.hulu.com/movie/parasite".to_string(),
                title: Some("Watch Parasite | Hulu".to_string()),
                content: None,
            }],
            ..Default::default()
        };

        let text = format_result(&ResultView::from_result(&result));
        assert!(text.contains("Parasite (2019)"));
        assert!(text.contains("92% Match"));
        assert!(text.contains("Watch on hulu.com  https://www.hulu.com/movie/parasite"));
        assert!(text.contains("Watch Parasite | Hulu"));
        assert!(!text.contains(NO_LINKS_NOTICE));
    }

    #[test]
    fn test_format_result_placeholder() {
        let text = format_result(&ResultView::from_result(&IdentificationResult::default()));
        assert!(text.contains("(Unknown Year)"));
        assert!(text.contains("0% Match"));
        assert!(text.contains(NO_LINKS_NOTICE));
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("Failed to process image(s)"), "✖ Failed to process image(s)");
    }
}
