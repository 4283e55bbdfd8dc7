mod map;
mod params;

pub use map::{QueryMap, QueryValue};
pub use params::ListRequestParams;

/// Relations populated on every list request, in index order
pub const POPULATE_BASE: [&str; 3] = ["author.avatar", "categories", "cover"];
pub const POPULATE_VIDEO: &str = "video";

pub const PAGE_KEY: &str = "pagination[page]";
pub const PAGE_SIZE_KEY: &str = "pagination[pageSize]";
pub const CATEGORY_FILTER_KEY: &str = "filters[categories][name][$eq]";
pub const SORT_KEY: &str = "sort[0]";
pub const LIKE_SORT_FIELD: &str = "like";

/// Build the wire parameters for a list request
pub fn build_list_query(params: &ListRequestParams) -> QueryMap {
    let mut query = QueryMap::new();

    for (index, relation) in populate_relations(params).enumerate() {
        query.insert(populate_key(index), relation);
    }

    query.insert(PAGE_KEY, params.start);
    query.insert(PAGE_SIZE_KEY, params.limit);

    if let Some(category) = non_empty(params.category.as_deref()) {
        query.insert(CATEGORY_FILTER_KEY, category);
    }

    if let Some(like) = non_empty(params.like.as_deref()) {
        query.insert(SORT_KEY, format!("{}:{}", LIKE_SORT_FIELD, like));
    }

    query
}

fn populate_relations(params: &ListRequestParams) -> impl Iterator<Item = &'static str> {
    let video = params.populate_video.then_some(POPULATE_VIDEO);
    POPULATE_BASE.into_iter().chain(video)
}

fn populate_key(index: usize) -> String {
    format!("populate[{}]", index)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = build_list_query(&ListRequestParams::default());

        let expected = QueryMap::from_pairs([
            ("populate[0]", QueryValue::from("author.avatar")),
            ("populate[1]", QueryValue::from("categories")),
            ("populate[2]", QueryValue::from("cover")),
            ("populate[3]", QueryValue::from("video")),
            ("pagination[page]", QueryValue::from(1u32)),
            ("pagination[pageSize]", QueryValue::from(3u32)),
        ]);
        assert_eq!(query, expected);
        assert!(!query.contains_key(CATEGORY_FILTER_KEY));
        assert!(!query.contains_key(SORT_KEY));
    }

    #[test]
    fn test_pagination_is_numeric() {
        let query = build_list_query(&ListRequestParams::new(7, 25));
        assert_eq!(query.get(PAGE_KEY), Some(&QueryValue::Number(7)));
        assert_eq!(query.get(PAGE_SIZE_KEY), Some(&QueryValue::Number(25)));
    }

    #[test]
    fn test_category_filter() {
        let params = ListRequestParams::new(2, 5).with_category("Travel");
        let query = build_list_query(&params);

        assert_eq!(query.get(CATEGORY_FILTER_KEY), Some(&QueryValue::from("Travel")));
        assert_eq!(query.get(PAGE_KEY), Some(&QueryValue::Number(2)));
        assert_eq!(query.get(PAGE_SIZE_KEY), Some(&QueryValue::Number(5)));
        assert_eq!(query.len(), 7);
    }

    #[test]
    fn test_empty_category_is_ignored() {
        let params = ListRequestParams::default().with_category("");
        assert!(!build_list_query(&params).contains_key(CATEGORY_FILTER_KEY));
    }

    #[test]
    fn test_like_sort() {
        let query = build_list_query(&ListRequestParams::default().with_like("asc"));
        assert_eq!(query.get(SORT_KEY), Some(&QueryValue::from("like:asc")));

        let query = build_list_query(&ListRequestParams::default().with_like("desc"));
        assert_eq!(query.get(SORT_KEY), Some(&QueryValue::from("like:desc")));
    }

    #[test]
    fn test_empty_like_is_ignored() {
        let params = ListRequestParams::default().with_like("");
        assert!(!build_list_query(&params).contains_key(SORT_KEY));
    }

    #[test]
    fn test_populate_order_is_fixed() {
        let params = ListRequestParams::new(3, 10)
            .with_category("Nature")
            .with_like("desc");
        let query = build_list_query(&params);

        let populate: Vec<(&str, String)> = query
            .iter()
            .filter(|(key, _)| key.starts_with("populate["))
            .map(|(key, value)| (key, value.to_string()))
            .collect();

        assert_eq!(
            populate,
            vec![
                ("populate[0]", "author.avatar".to_string()),
                ("populate[1]", "categories".to_string()),
                ("populate[2]", "cover".to_string()),
                ("populate[3]", "video".to_string()),
            ]
        );
    }

    #[test]
    fn test_without_video() {
        let query = build_list_query(&ListRequestParams::default().without_video());
        assert!(!query.contains_key("populate[3]"));
        assert_eq!(query.get("populate[2]"), Some(&QueryValue::from("cover")));
        assert_eq!(query.len(), 5);
    }

    #[test]
    fn test_construction_is_deterministic() {
        let params = ListRequestParams::new(4, 9)
            .with_category("Food")
            .with_like("asc");

        let first = build_list_query(&params);
        let second = build_list_query(&params);
        assert_eq!(first, second);
        assert_eq!(first.to_query_string(), second.to_query_string());
    }

    #[test]
    fn test_full_query_string() {
        let params = ListRequestParams::new(2, 5)
            .with_category("Travel")
            .with_like("desc");

        assert_eq!(
            build_list_query(&params).to_query_string(),
            "populate%5B0%5D=author.avatar\
             &populate%5B1%5D=categories\
             &populate%5B2%5D=cover\
             &populate%5B3%5D=video\
             &pagination%5Bpage%5D=2\
             &pagination%5BpageSize%5D=5\
             &filters%5Bcategories%5D%5Bname%5D%5B%24eq%5D=Travel\
             &sort%5B0%5D=like%3Adesc"
        );
    }
}
