//! Sort link targets

use sort_state::{RequestContext, SORT_KEY_PARAM, SORT_ORDER_PARAM, SortOrder};
use url::form_urlencoded;

/// URL that re-requests the current path sorted by `column` in `order`.
///
/// Passthrough parameters present on the request (filter and search terms by
/// default) are carried over so sorting keeps the rest of the view intact.
pub fn sort_url(
    ctx: &RequestContext,
    column: &str,
    order: SortOrder,
    passthrough: &[String],
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair(SORT_KEY_PARAM, column);
    query.append_pair(SORT_ORDER_PARAM, order.as_str());

    for name in passthrough {
        if let Some(value) = ctx.param(name) {
            query.append_pair(name, value);
        }
    }

    format!("{}?{}", ctx.path, query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passthrough() -> Vec<String> {
        vec!["filter".to_string(), "q".to_string()]
    }

    #[test]
    fn test_sort_params_only() {
        let ctx = RequestContext::new("/contacts");
        assert_eq!(
            sort_url(&ctx, "id", SortOrder::Desc, &passthrough()),
            "/contacts?sort_key=id&sort_order=desc"
        );
    }

    #[test]
    fn test_passthrough_params_carried_over() {
        let ctx = RequestContext::new("/contacts")
            .with_param("filter", "active")
            .with_param("q", "smith & co")
            .with_param("page", "3");

        assert_eq!(
            sort_url(&ctx, "last_name", SortOrder::Asc, &passthrough()),
            "/contacts?sort_key=last_name&sort_order=asc&filter=active&q=smith+%26+co"
        );
    }

    #[test]
    fn test_missing_q_is_omitted() {
        let ctx = RequestContext::new("/contacts").with_param("filter", "");
        assert_eq!(
            sort_url(&ctx, "id", SortOrder::Asc, &passthrough()),
            "/contacts?sort_key=id&sort_order=asc&filter="
        );
    }

    #[test]
    fn test_column_is_encoded() {
        let ctx = RequestContext::new("/contacts");
        assert_eq!(
            sort_url(&ctx, "a b&c", SortOrder::Asc, &[]),
            "/contacts?sort_key=a+b%26c&sort_order=asc"
        );
    }
}
