use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::thread;

use pageable_params::{
    parse, Direction, Error, Order, PageableParser, ParserConfig, QueryParams, Sort,
};

#[test]
fn btree_map_source() {
    let mut params = BTreeMap::new();
    params.insert("page".to_string(), vec!["4".to_string()]);
    params.insert("sort".to_string(), vec!["name,desc".to_string()]);

    let pageable = parse(&params).expect("parse");
    assert_eq!(pageable.page(), 4);
    assert_eq!(pageable.size(), 10);
    assert_eq!(pageable.offset(), 40);
    assert_eq!(pageable.sort(), Some(&Sort::from(Order::desc("name"))));
}

#[test]
fn query_params_builder_source() {
    let params = QueryParams::new()
        .with("size", "25")
        .with("sort", "a,b,desc")
        .with("sort", "c");

    let pageable = parse(&params).expect("parse");
    assert_eq!(
        pageable.sort().map(Sort::orders),
        Some(&[Order::desc("a"), Order::desc("b"), Order::asc("c")][..])
    );
}

#[test]
fn absent_sort_is_distinct_from_sorted() {
    let unsorted = parse(&QueryParams::from_query_str("page=1")).expect("parse");
    assert!(!unsorted.is_sorted());

    let sorted = parse(&QueryParams::from_query_str("page=1&sort=a")).expect("parse");
    assert!(sorted.is_sorted());
}

#[test]
fn errors_from_query_strings() {
    let parser = PageableParser::default();
    let cases = [
        ("page=5&page=6", Error::WrongPageValueCount),
        ("page=-1", Error::InvalidPageValue),
        ("page=abc", Error::InvalidPageValue),
        ("size=0", Error::InvalidSizeValue),
        ("size=-3", Error::InvalidSizeValue),
        ("size=1&size=2", Error::WrongSizeValueCount),
        ("sort=", Error::EmptySortClause),
        ("sort=a%2Cb", Error::InvalidDirection),
    ];
    for (raw, expected) in cases {
        assert_eq!(parser.parse_query_str(raw), Err(expected), "query {raw:?}");
    }
}

#[test]
fn custom_parameter_names() {
    let parser = PageableParser::new(ParserConfig::new("p", "limit", "order", 0, 20));
    let pageable = parser
        .parse_query_str("p=2&order=created_at%2Cdesc&page=not-read")
        .expect("parse");
    assert_eq!(pageable.page(), 2);
    assert_eq!(pageable.size(), 20);
    assert_eq!(
        pageable.sort(),
        Some(&Sort::by(Direction::Desc, ["created_at"]))
    );
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = Arc::new(PageableParser::default());
    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let mut params = HashMap::new();
                params.insert("page".to_string(), vec![i.to_string()]);
                parser.parse(&params)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let pageable = handle.join().expect("thread").expect("parse");
        assert_eq!(pageable.page(), i as u64);
    }
}
