//! Sort links

use crate::render::href::sort_url;
use crate::render::titleize::titleize;
use config::SortConfig;
use maud::{Markup, html};
use sort_state::{RequestContext, SortOrder, SortState};

/// CSS class of a sort link or header cell: the base class, followed by the
/// order a click will request when `column` is the active sort column.
pub fn sort_class(state: &SortState, config: &SortConfig, column: &str, next: SortOrder) -> String {
    if state.is_active(column) {
        format!("{} {}", config.link_class, next)
    } else {
        config.link_class.clone()
    }
}

/// Link that sorts the table by `column`.
///
/// Clicking the active column flips its order; any other column starts at
/// `initial`. The caption defaults to the titleized column name.
pub fn sort_link(
    state: &SortState,
    ctx: &RequestContext,
    config: &SortConfig,
    column: &str,
    caption: Option<&str>,
    initial: SortOrder,
) -> Markup {
    let order = state.next_order(column, initial);
    let caption = caption.map_or_else(|| titleize(column), str::to_string);
    let class = sort_class(state, config, column, order);

    anchor(ctx, config, column, order, &caption, &class)
}

pub(crate) fn anchor(
    ctx: &RequestContext,
    config: &SortConfig,
    column: &str,
    order: SortOrder,
    caption: &str,
    class: &str,
) -> Markup {
    let href = sort_url(ctx, column, order, &config.passthrough_params);
    html! {
        a href=(href) class=(class) { (caption) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_id() -> SortState {
        SortState::new("id", SortOrder::Asc).unwrap()
    }

    fn ctx() -> RequestContext {
        RequestContext::new("/contacts").with_route("contacts", "list")
    }

    #[test]
    fn test_active_column_link() {
        let link = sort_link(&active_id(), &ctx(), &SortConfig::default(), "id", None, SortOrder::Asc);
        assert_eq!(
            link.into_string(),
            r#"<a href="/contacts?sort_key=id&amp;sort_order=desc" class="sort_link desc">Id</a>"#
        );
    }

    #[test]
    fn test_inactive_column_link() {
        let link = sort_link(
            &active_id(),
            &ctx(),
            &SortConfig::default(),
            "last_name",
            None,
            SortOrder::Desc,
        );
        assert_eq!(
            link.into_string(),
            r#"<a href="/contacts?sort_key=last_name&amp;sort_order=desc" class="sort_link">Last Name</a>"#
        );
    }

    #[test]
    fn test_caption_is_escaped() {
        let link = sort_link(
            &active_id(),
            &ctx(),
            &SortConfig::default(),
            "name",
            Some("<b>Name</b>"),
            SortOrder::Asc,
        );
        assert!(link.into_string().contains(">&lt;b&gt;Name&lt;/b&gt;</a>"));
    }

    #[test]
    fn test_custom_link_class() {
        let config = SortConfig::default().with_link_class("sortable");
        assert_eq!(sort_class(&active_id(), &config, "id", SortOrder::Desc), "sortable desc");
        assert_eq!(sort_class(&active_id(), &config, "name", SortOrder::Asc), "sortable");
    }
}
