use scraper::{Html, Node};
use tracing::debug;

use crate::extractor::rules::parse_selector;

/// Element kinds that never carry description text.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "svg", "iframe"];

/// Strips everything that is not description content from the document.
///
/// Order matters: non-content elements go first, then comments, then each
/// exclude selector in turn. All matches of one selector are detached before
/// the next selector is evaluated, so later selectors only see what earlier
/// ones left behind.
pub fn sanitize(document: &mut Html, exclude: &[&str]) {
    remove_non_content_elements(document);
    remove_comments(document);

    for raw in exclude {
        remove_matching(document, raw);
    }
}

fn remove_non_content_elements(document: &mut Html) {
    let ids: Vec<_> = document
        .tree
        .root()
        .descendants()
        .filter(|node| {
            matches!(
                node.value(),
                Node::Element(element) if NON_CONTENT_TAGS.contains(&element.name())
            )
        })
        .map(|node| node.id())
        .collect();

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn remove_comments(document: &mut Html) {
    let ids: Vec<_> = document
        .tree
        .root()
        .descendants()
        .filter(|node| node.value().is_comment())
        .map(|node| node.id())
        .collect();

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn remove_matching(document: &mut Html, raw: &str) {
    let Some(selector) = parse_selector(raw) else {
        return;
    };

    // Walk from the root element so nodes detached earlier are not revisited.
    let ids: Vec<_> = document
        .root_element()
        .select(&selector)
        .map(|element| element.id())
        .collect();

    if !ids.is_empty() {
        debug!(selector = raw, removed = ids.len(), "excluded region");
    }

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}
