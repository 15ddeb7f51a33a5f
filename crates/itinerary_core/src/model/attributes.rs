//! Attribute groups shared by itinerary entities.
//!
//! # Responsibility
//! - Define reusable value groups (`Notes`, `Costing`) embedded by value.
//! - Expose capability traits so every entity gets the same setters.
//! - Render free-text notes from markdown to embeddable HTML.
//!
//! # Invariants
//! - Group storage is private; mutation goes through named setters only.
//! - `render_markdown` is pure: same input, same output.
//! - Raw HTML inside notes is escaped, never passed through.
//! - Link and image targets are limited to relative URLs and
//!   `SAFE_URL_SCHEMES`; any other target is replaced by `#`.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use serde::{Deserialize, Serialize};

const SAFE_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Free-text notes attached to an entity.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notes {
    details: Option<String>,
    pros: Option<String>,
    cons: Option<String>,
}

impl Notes {
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn pros(&self) -> Option<&str> {
        self.pros.as_deref()
    }

    pub fn cons(&self) -> Option<&str> {
        self.cons.as_deref()
    }

    pub fn set_details(&mut self, value: impl Into<String>) {
        self.details = Some(value.into());
    }

    pub fn set_pros(&mut self, value: impl Into<String>) {
        self.pros = Some(value.into());
    }

    pub fn set_cons(&mut self, value: impl Into<String>) {
        self.cons = Some(value.into());
    }

    /// Details rendered to HTML. Unset details render to an empty string.
    pub fn rendered_details(&self) -> String {
        render_optional(self.details.as_deref())
    }

    /// Pros rendered to HTML. Unset pros render to an empty string.
    pub fn rendered_pros(&self) -> String {
        render_optional(self.pros.as_deref())
    }

    /// Cons rendered to HTML. Unset cons render to an empty string.
    pub fn rendered_cons(&self) -> String {
        render_optional(self.cons.as_deref())
    }
}

/// Monetary cost and rating of an entity.
///
/// `cost` is an amount in minor currency units (e.g. cents). `rating` uses
/// whatever scale the caller presents; the core does not bound it.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Costing {
    cost: Option<i64>,
    rating: Option<u8>,
}

impl Costing {
    pub fn cost(&self) -> Option<i64> {
        self.cost
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn set_cost(&mut self, cost: i64) {
        self.cost = Some(cost);
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = Some(rating);
    }
}

/// Entity carrying free-text notes.
pub trait Annotated {
    fn notes(&self) -> &Notes;
    fn notes_mut(&mut self) -> &mut Notes;

    fn set_details(&mut self, value: impl Into<String>) {
        self.notes_mut().set_details(value);
    }

    fn set_pros(&mut self, value: impl Into<String>) {
        self.notes_mut().set_pros(value);
    }

    fn set_cons(&mut self, value: impl Into<String>) {
        self.notes_mut().set_cons(value);
    }
}

/// Entity carrying cost and rating.
pub trait Costable {
    fn costing(&self) -> &Costing;
    fn costing_mut(&mut self) -> &mut Costing;

    fn cost(&self) -> Option<i64> {
        self.costing().cost()
    }

    fn rating(&self) -> Option<u8> {
        self.costing().rating()
    }

    fn set_cost(&mut self, cost: i64) {
        self.costing_mut().set_cost(cost);
    }

    fn set_rating(&mut self, rating: u8) {
        self.costing_mut().set_rating(rating);
    }
}

/// Entity referencing one attached file (ticket scan, visa copy).
///
/// The path is opaque; its existence is never checked.
pub trait FileAttached {
    fn path_to_file(&self) -> Option<&str>;
    fn set_path_to_file(&mut self, path: impl Into<String>);
}

/// Renders markdown source to HTML.
///
/// Raw HTML blocks and inline HTML are emitted as escaped text. Links and
/// images pointing at a scheme outside `SAFE_URL_SCHEMES` get `#` as their
/// target. An empty source renders to an empty string.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: guard_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: guard_destination(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut output, events);
    output
}

fn guard_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&dest) {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

/// Relative targets and allowlisted schemes pass. Whitespace and control
/// characters are dropped before the check, as browsers ignore them.
fn is_safe_destination(dest: &str) -> bool {
    let compact: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match compact.find([':', '/', '?', '#']) {
        Some(end) if compact[end..].starts_with(':') => SAFE_URL_SCHEMES
            .iter()
            .any(|scheme| compact[..end].eq_ignore_ascii_case(scheme)),
        _ => true,
    }
}

fn render_optional(source: Option<&str>) -> String {
    source.map(render_markdown).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{render_markdown, Notes};

    #[test]
    fn renders_basic_markdown() {
        assert_eq!(
            render_markdown("**bold** move"),
            "<p><strong>bold</strong> move</p>\n"
        );
    }

    #[test]
    fn rendering_is_idempotent_for_same_input() {
        let source = "# Day one\n\n- ferry\n- hike";
        assert_eq!(render_markdown(source), render_markdown(source));
    }

    #[test]
    fn raw_html_is_escaped() {
        let rendered = render_markdown("<script>alert(1)</script>");
        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));

        let inline = render_markdown("hello <b>world</b>");
        assert!(!inline.contains("<b>"));
        assert!(inline.contains("&lt;b&gt;"));
    }

    #[test]
    fn script_links_and_images_lose_their_target() {
        for source in [
            "[click](javascript:alert(document.cookie))",
            "![pic](javascript:alert(1))",
            "[x](JaVaScRiPt:alert(1))",
            "[x](data:text/html,boom)",
            "<javascript:alert(1)>",
        ] {
            let rendered = render_markdown(source).to_ascii_lowercase();
            assert!(!rendered.contains("=\"javascript:"), "{source} -> {rendered}");
            assert!(!rendered.contains("=\"data:"), "{source} -> {rendered}");
            assert!(rendered.contains("=\"#\""), "{source} -> {rendered}");
        }

        assert_eq!(
            render_markdown("[click](javascript:alert(1))"),
            "<p><a href=\"#\">click</a></p>\n"
        );
    }

    #[test]
    fn web_mail_and_relative_targets_are_kept() {
        assert_eq!(
            render_markdown("[site](https://example.com/a?b=1)"),
            "<p><a href=\"https://example.com/a?b=1\">site</a></p>\n"
        );
        assert!(render_markdown("[mail](mailto:me@example.com)").contains("href=\"mailto:"));
        assert!(render_markdown("![scan](docs/visa.pdf)").contains("src=\"docs/visa.pdf\""));
        assert!(render_markdown("[day 2](#day-2)").contains("href=\"#day-2\""));
    }

    #[test]
    fn empty_and_unset_notes_render_to_empty_string() {
        assert_eq!(render_markdown(""), "");

        let mut notes = Notes::default();
        assert_eq!(notes.rendered_details(), "");

        notes.set_details("");
        assert_eq!(notes.details(), Some(""));
        assert_eq!(notes.rendered_details(), "");
    }
}
