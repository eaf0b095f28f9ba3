//! Sortable table header cells

use crate::render::link::{anchor, sort_class};
use crate::render::titleize::titleize;
use config::SortConfig;
use maud::{Markup, PreEscaped, html};
use sort_state::{RequestContext, SortOrder, SortState};
use std::collections::BTreeMap;

/// Options for [`sort_header_cell`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Link text; defaults to the titleized column name
    pub caption: Option<String>,
    /// Cell `title`; defaults to "Sort by <caption>"
    pub title: Option<String>,
    /// Order requested when the column is not the active one; defaults to ascending
    pub initial_order: Option<SortOrder>,
    /// Extra attributes rendered on the `<th>`
    pub attributes: BTreeMap<String, String>,
}

impl HeaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn initial_order(mut self, order: SortOrder) -> Self {
        self.initial_order = Some(order);
        self
    }

    /// Add an extra cell attribute, e.g. `.attr("width", 200)`
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(name.into(), value.to_string());
        self
    }
}

/// `<th>` wrapping a sort link for `column`.
///
/// The cell and the link share the sort class. An extra `class` attribute is
/// appended to it, an extra `title` only applies when `options.title` is
/// unset, and attributes with unusable names are dropped.
pub fn sort_header_cell(
    state: &SortState,
    ctx: &RequestContext,
    config: &SortConfig,
    column: &str,
    options: &HeaderOptions,
) -> Markup {
    let order = state.next_order(column, options.initial_order.unwrap_or_default());
    let caption = options.caption.clone().unwrap_or_else(|| titleize(column));
    let link_class = sort_class(state, config, column, order);
    let link = anchor(ctx, config, column, order, &caption, &link_class);

    let mut cell_class = link_class;
    if let Some(extra) = options.attributes.get("class") {
        cell_class.push(' ');
        cell_class.push_str(extra);
    }
    let title = options
        .title
        .clone()
        .or_else(|| options.attributes.get("title").cloned())
        .unwrap_or_else(|| format!("{} {}", config.title_prefix, caption));

    let mut cell = String::from("<th");
    push_attribute(&mut cell, "class", &cell_class);
    push_attribute(&mut cell, "title", &title);
    for (name, value) in &options.attributes {
        if name == "class" || name == "title" {
            continue;
        }
        if !is_attribute_name(name) {
            tracing::warn!(column, attribute = %name, "dropping header attribute with invalid name");
            continue;
        }
        push_attribute(&mut cell, name, value);
    }
    cell.push('>');
    cell.push_str(&link.into_string());
    cell.push_str("</th>");

    PreEscaped(cell)
}

fn push_attribute(buf: &mut String, name: &str, value: &str) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    buf.push_str(&html! { (value) }.into_string());
    buf.push('"');
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_id() -> SortState {
        SortState::new("id", SortOrder::Asc).unwrap()
    }

    fn render(column: &str, options: &HeaderOptions) -> String {
        let ctx = RequestContext::new("/contacts");
        sort_header_cell(&active_id(), &ctx, &SortConfig::default(), column, options).into_string()
    }

    #[test]
    fn test_default_cell() {
        assert_eq!(
            render("phone", &HeaderOptions::new()),
            concat!(
                r#"<th class="sort_link" title="Sort by Phone">"#,
                r#"<a href="/contacts?sort_key=phone&amp;sort_order=asc" class="sort_link">Phone</a>"#,
                "</th>"
            )
        );
    }

    #[test]
    fn test_active_cell_carries_next_order() {
        let html = render("id", &HeaderOptions::new().title("Sort by contact ID"));
        assert!(html.starts_with(r#"<th class="sort_link desc" title="Sort by contact ID">"#));
        assert!(html.contains(r#"class="sort_link desc">Id</a>"#));
    }

    #[test]
    fn test_extra_attributes_pass_through() {
        let html = render("address", &HeaderOptions::new().attr("width", 200));
        assert!(html.starts_with(r#"<th class="sort_link" title="Sort by Address" width="200">"#));
    }

    #[test]
    fn test_caption_and_initial_order() {
        let options = HeaderOptions::new()
            .caption("Name")
            .initial_order(SortOrder::Desc);
        let html = render("last_name", &options);

        assert!(html.contains(r#"title="Sort by Name""#));
        assert!(html.contains("sort_order=desc"));
        assert!(html.contains(">Name</a>"));
        assert!(!html.contains("initial_order"));
    }

    #[test]
    fn test_extra_class_and_title() {
        let options = HeaderOptions::new().attr("class", "numeric").attr("title", "Cost");
        let html = render("price", &options);
        assert!(html.starts_with(r#"<th class="sort_link numeric" title="Cost">"#));

        let options = options.title("Price in USD");
        assert!(render("price", &options).contains(r#"title="Price in USD""#));
    }

    #[test]
    fn test_attribute_values_escaped_and_bad_names_dropped() {
        let options = HeaderOptions::new()
            .attr("data-hint", r#"say "hi" & <leave>"#)
            .attr("onclick=\"x\"", "1");
        let html = render("name", &options);

        assert!(html.contains(r#"data-hint="say &quot;hi&quot; &amp; &lt;leave&gt;""#));
        assert!(!html.contains("onclick"));
    }
}
