//! Resolves the newest post on the board listing page.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::menu::selector;

/// Narrowest first: the title column, any table link, any link on the page.
static VIEW_LINKS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    [
        selector("td.title a[href*='action=view']"),
        selector("table a[href*='action=view']"),
        selector("a[href*='action=view']"),
    ]
});

pub fn find_latest_post_url(document: &Html, base_url: &Url) -> Option<Url> {
    for candidates in VIEW_LINKS.iter() {
        let Some(href) = document
            .select(candidates)
            .filter_map(|a| a.value().attr("href"))
            .map(str::trim)
            .find(|href| !href.is_empty())
        else {
            continue;
        };

        match base_url.join(href) {
            Ok(url) => return Some(url),
            Err(err) => {
                tracing::debug!(href, ?err, "skipping unresolvable post link");
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.pknu.ac.kr/main/399").expect("valid base")
    }

    fn latest(html: &str) -> Option<String> {
        find_latest_post_url(&Html::parse_document(html), &base()).map(String::from)
    }

    #[test]
    fn prefers_title_column_link() {
        let html = r#"<a href="?action=view&amp;no=1">pinned</a>
            <table><tr><td class="num">2</td><td class="title">
              <a href="/main/399?action=view&amp;no=2">식단표</a></td></tr></table>"#;
        assert_eq!(
            latest(html).as_deref(),
            Some("https://www.pknu.ac.kr/main/399?action=view&no=2")
        );
    }

    #[test]
    fn falls_back_to_any_table_link_then_any_link() {
        let html = r#"<table><tr><td><a href="?action=view&amp;no=7">x</a></td></tr></table>"#;
        assert_eq!(
            latest(html).as_deref(),
            Some("https://www.pknu.ac.kr/main/399?action=view&no=7")
        );

        let html = r#"<ul><li><a href="399?action=view&amp;no=9">x</a></li></ul>"#;
        assert_eq!(
            latest(html).as_deref(),
            Some("https://www.pknu.ac.kr/main/399?action=view&no=9")
        );
    }

    #[test]
    fn empty_href_is_not_a_match() {
        let html = r#"<td class="title"><a href="" data-x="action=view">x</a></td>"#;
        assert_eq!(latest(html), None);
    }

    #[test]
    fn listing_without_view_links_yields_none() {
        assert_eq!(latest(r#"<a href="/main/399?page=2">next</a>"#), None);
    }
}
