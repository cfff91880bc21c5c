use crate::error::ScrapeError;
use crate::normalize;
use ego_tree;
use scraper::{Html, Node, Selector};
use std::ops::Deref;

/// Class token that marks the article-body container on noobnotes.net.
pub const CONTAINER_CLASS: &str = "post-content";

/// Extract keyboard-notation lines from an article page.
///
/// Finds the first element whose class set includes `post-content`, then
/// emits the text run preceding each `<br>` inside it, in document order,
/// trimmed and with non-breaking spaces removed. Runs that are empty after
/// trimming are skipped.
///
/// A missing container is a structured error, never an empty success list.
/// Pure over its input: same HTML in, same lines out.
pub fn extract_notation(html: &str) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(html);

    let container_sel =
        Selector::parse(&format!(".{CONTAINER_CLASS}")).expect("valid selector");
    let container = document
        .select(&container_sel)
        .next()
        .ok_or(ScrapeError::ContainerNotFound)?;

    let mut lines = Vec::new();
    let mut pending_text = String::new();
    walk_container(container.id(), container.tree(), &mut pending_text, &mut lines);

    // Text after the final <br> is not notation; it is deliberately dropped.
    Ok(lines)
}

/// Walk an element's children in order, associating each `<br>` with the
/// text run that immediately precedes it among its siblings.
///
/// The run resets at every non-text sibling, so a `<br>` directly preceded
/// by an element (a bolded span, say) yields no line — only plain text nodes
/// contribute. Nested elements are recursed into with their own run, which
/// keeps `<br>`s inside a `<p>` from picking up text outside it.
fn walk_container(
    node_id: ego_tree::NodeId,
    tree: &ego_tree::Tree<Node>,
    pending_text: &mut String,
    lines: &mut Vec<String>,
) {
    let node = tree.get(node_id).expect("valid node id");

    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                pending_text.push_str(text.deref());
            }
            Node::Element(elem) => {
                if elem.name() == "br" {
                    flush_line(pending_text, lines);
                } else {
                    pending_text.clear();
                    walk_container(child.id(), tree, pending_text, lines);
                    pending_text.clear();
                }
            }
            // Comments and other non-text nodes break the run
            _ => pending_text.clear(),
        }
    }
}

fn flush_line(pending_text: &mut String, lines: &mut Vec<String>) {
    let line = normalize::clean_line(pending_text);
    if !line.is_empty() {
        lines.push(line);
    }
    pending_text.clear();
}
