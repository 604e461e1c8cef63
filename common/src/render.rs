//! 識別結果の表示モデル
//!
//! 文字列はすべてテキストとして扱い、マークアップは組み立てない。
//! 表示側（Leptos / ターミナル）はこのモデルをそのまま描画する。

use crate::error::{Error, Result};
use crate::types::IdentificationResult;
use url::Url;

pub const UNKNOWN_YEAR: &str = "Unknown Year";
pub const NO_LINKS_NOTICE: &str = "No specific streaming links found.";

/// 配信リンク1件分の表示
#[derive(Debug, Clone, PartialEq)]
pub struct LinkView {
    pub href: String,
    /// `www.` を除いたホスト名
    pub domain: String,
    pub title: Option<String>,
}

impl LinkView {
    pub fn label(&self) -> String {
        format!("Watch on {}", self.domain)
    }
}

/// リンク一覧の表示。空の一覧は描画せずプレースホルダを出す。
#[derive(Debug, Clone, PartialEq)]
pub enum LinksView {
    Placeholder,
    Links(Vec<LinkView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub title: String,
    pub year_label: String,
    pub summary: String,
    pub confidence_percent: u8,
    pub links: LinksView,
    /// URLが解釈できず表示から外したリンク
    pub skipped_links: Vec<String>,
}

impl ResultView {
    /// 毎回ゼロから組み立てる（前回の描画内容は持ち越さない）
    pub fn from_result(result: &IdentificationResult) -> Self {
        let mut links = Vec::new();
        let mut skipped_links = Vec::new();

        for link in &result.links {
            match display_domain(&link.url) {
                Ok(domain) => links.push(LinkView {
                    href: link.url.clone(),
                    domain,
                    title: link.title.clone().filter(|t| !t.trim().is_empty()),
                }),
                Err(_) => skipped_links.push(link.url.clone()),
            }
        }

        let year_label = result
            .year
            .as_deref()
            .map(str::trim)
            .filter(|y| !y.is_empty())
            .unwrap_or(UNKNOWN_YEAR)
            .to_string();

        Self {
            title: result.title.clone(),
            year_label,
            summary: result.summary.clone(),
            confidence_percent: confidence_percent(result.confidence),
            links: if links.is_empty() {
                LinksView::Placeholder
            } else {
                LinksView::Links(links)
            },
            skipped_links,
        }
    }

    pub fn badge_text(&self) -> String {
        format!("{}% Match", self.confidence_percent)
    }
}

/// 確信度をパーセントへ変換
///
/// 0.5境界は0から遠い方へ丸める（0.005 → 1%）。
/// 欠損・NaNは0、範囲外は0〜100に収める。
pub fn confidence_percent(confidence: Option<f64>) -> u8 {
    let value = confidence.filter(|c| !c.is_nan()).unwrap_or(0.0);
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

/// リンクURLから表示用ドメインを得る
///
/// ホスト名先頭の `www.` のみ取り除く。
pub fn display_domain(link: &str) -> Result<String> {
    let url = Url::parse(link.trim()).map_err(|e| Error::InvalidLink(format!("{}: {}", link, e)))?;
    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::InvalidLink(format!("{}: no host", link)))?;

    Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StreamingLink;

    fn link(url: &str) -> StreamingLink {
        StreamingLink {
            url: url.to_string(),
            ..Default::default()
        }
    }

    // =============================================
    // 確信度テスト
    // =============================================

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(confidence_percent(Some(0.873)), 87);
        assert_eq!(confidence_percent(Some(0.875)), 88);
        assert_eq!(confidence_percent(Some(1.0)), 100);
    }

    #[test]
    fn test_confidence_percent_half_boundary() {
        assert_eq!(confidence_percent(Some(0.005)), 1);
        assert_eq!(confidence_percent(Some(0.004)), 0);
    }

    #[test]
    fn test_confidence_percent_missing() {
        assert_eq!(confidence_percent(None), 0);
        assert_eq!(confidence_percent(Some(f64::NAN)), 0);
    }

    #[test]
    fn test_confidence_percent_clamped() {
        assert_eq!(confidence_percent(Some(1.7)), 100);
        assert_eq!(confidence_percent(Some(-0.2)), 0);
    }

    // =============================================
    // ドメイン表示テスト
    // =============================================

    #[test]
    fn test_display_domain_strips_www() {
        assert_eq!(display_domain("https://www.example.com/watch").unwrap(), "example.com");
    }

    #[test]
    fn test_display_domain_without_www() {
        assert_eq!(display_domain("https://tv.apple.com/show/1").unwrap(), "tv.apple.com");
        assert_eq!(display_domain("https://netflix.com/title/1").unwrap(), "netflix.com");
    }

    #[test]
    fn test_display_domain_only_prefix() {
        // 途中の "www." は残す
        assert_eq!(display_domain("https://foo.www.example.com/").unwrap(), "foo.www.example.com");
    }

    #[test]
    fn test_display_domain_invalid() {
        assert!(matches!(display_domain("not a url"), Err(Error::InvalidLink(_))));
        assert!(matches!(display_domain("mailto:someone@example.com"), Err(Error::InvalidLink(_))));
    }

    // =============================================
    // ResultView テスト
    // =============================================

    #[test]
    fn test_view_basic_fields() {
        let result = IdentificationResult {
            title: "Blade Runner".to_string(),
            year: Some("1982".to_string()),
            summary: "A blade runner hunts replicants.".to_string(),
            confidence: Some(0.873),
            ..Default::default()
        };

        let view = ResultView::from_result(&result);
        assert_eq!(view.title, "Blade Runner");
        assert_eq!(view.year_label, "1982");
        assert_eq!(view.summary, "A blade runner hunts replicants.");
        assert_eq!(view.badge_text(), "87% Match");
    }

    #[test]
    fn test_view_unknown_year() {
        let view = ResultView::from_result(&IdentificationResult::default());
        assert_eq!(view.year_label, "Unknown Year");

        let blank = IdentificationResult {
            year: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(ResultView::from_result(&blank).year_label, "Unknown Year");
    }

    #[test]
    fn test_view_no_links_placeholder() {
        let view = ResultView::from_result(&IdentificationResult::default());
        assert_eq!(view.links, LinksView::Placeholder);
    }

    #[test]
    fn test_view_links() {
        let result = IdentificationResult {
            links: vec![
                link("https://www.netflix.com/title/1"),
                link("https://www.hulu.com/movie/2"),
            ],
            ..Default::default()
        };

        let LinksView::Links(links) = ResultView::from_result(&result).links else {
            panic!("リンクが描画されるべき");
        };
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].domain, "netflix.com");
        assert_eq!(links[0].href, "https://www.netflix.com/title/1");
        assert_eq!(links[0].label(), "Watch on netflix.com");
        assert_eq!(links[1].domain, "hulu.com");
    }

    #[test]
    fn test_view_skips_invalid_links() {
        let result = IdentificationResult {
            links: vec![link("::garbage::")],
            ..Default::default()
        };

        let view = ResultView::from_result(&result);
        assert_eq!(view.links, LinksView::Placeholder);
        assert_eq!(view.skipped_links, vec!["::garbage::".to_string()]);
    }

    #[test]
    fn test_view_does_not_accumulate() {
        let first = IdentificationResult {
            links: vec![link("https://www.netflix.com/title/1")],
            ..Default::default()
        };
        let second = IdentificationResult::default();

        let _ = ResultView::from_result(&first);
        let view = ResultView::from_result(&second);
        assert_eq!(view.links, LinksView::Placeholder);
    }

    #[test]
    fn test_view_keeps_markup_as_text() {
        let result = IdentificationResult {
            title: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        assert_eq!(ResultView::from_result(&result).title, "<script>alert(1)</script>");
    }
}
