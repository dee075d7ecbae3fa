//! End-to-end checks: build a query the way an application would, then
//! parse fixture responses with the composed parser.

use proq::base::validator;
use proq::core::query::project::ConfigError;
use proq::prelude::*;
use serde_json::json;

#[test]
fn product_listing_builds_and_parses() {
    let query = QueryNode::new()
        .star()
        .filter_by_type("product")
        .order(&["price desc"])
        .project_with(|_| {
            ProjectionMap::new()
                .field("name", validator::string())
                .field("slug", validator::slug())
                .field("price", validator::number())
                .field("tags", validator::nullable(validator::array_of(validator::string())))
        })
        .unwrap();

    assert_eq!(
        query.query(),
        "*[_type == \"product\"] | order(price desc){ name, slug, price, tags }",
    );

    let raw = json!([
        {
            "name": "Keyboard",
            "slug": {"_type": "slug", "current": "keyboard"},
            "price": 129,
            "tags": ["input", "usb"],
        },
        {
            "name": "Mouse",
            "slug": {"_type": "slug", "current": "mouse"},
            "price": 59,
            "tags": null,
        },
    ]);

    let parsed = query.parse(raw).unwrap();

    assert_eq!(
        parsed,
        json!([
            {"name": "Keyboard", "slug": "keyboard", "price": 129, "tags": ["input", "usb"]},
            {"name": "Mouse", "slug": "mouse", "price": 59, "tags": null},
        ]),
    );
}

#[test]
fn single_item_query_parses_the_item_directly() {
    let query = QueryNode::new()
        .star()
        .filter_by_type("product")
        .first()
        .project(ProjectionMap::new().field("name", validator::string()))
        .unwrap();

    assert_eq!(query.query(), "*[_type == \"product\"][0]{ name }");
    assert_eq!(
        query.parse(json!({"name": "Keyboard"})).unwrap(),
        json!({"name": "Keyboard"}),
    );
}

#[test]
fn conditional_branches_flatten_into_the_result() {
    let query = QueryNode::new()
        .star()
        .filter_by_type("article")
        .project_with(|sub| {
            let video = sub
                .project(ProjectionMap::new().field("videoUrl", validator::string()))
                .unwrap();
            let image = sub
                .project(ProjectionMap::new().field("imageUrl", validator::string()))
                .unwrap();

            ProjectionMap::new()
                .field("title", validator::string())
                .conditional("format == \"video\"", &video)
                .conditional("format == \"image\"", &image)
        })
        .unwrap();

    assert_eq!(
        query.query(),
        "*[_type == \"article\"]\
         { title, format == \"video\" => { videoUrl }, format == \"image\" => { imageUrl } }",
    );

    let video_article = query
        .parse(json!({"title": "Launch", "videoUrl": "https://v"}))
        .unwrap();
    assert_eq!(
        video_article,
        json!({"title": "Launch", "videoUrl": "https://v"}),
    );

    let image_article = query
        .parse(json!({"title": "Recap", "imageUrl": "https://i"}))
        .unwrap();
    assert_eq!(
        image_article,
        json!({"title": "Recap", "imageUrl": "https://i"}),
    );
}

#[test]
fn validation_required_rejects_unparsed_fields_before_any_query_runs() {
    let options = QueryOptions {
        validation_required: true,
        ..QueryOptions::default()
    };

    let err = QueryNode::with_options(options)
        .star()
        .project(
            ProjectionMap::new()
                .field("name", validator::string())
                .field("legacy", true),
        )
        .unwrap_err();

    let Error::Config(ConfigError::MissingParsers { keys }) = err else {
        panic!("expected a configuration error");
    };
    assert_eq!(keys, vec!["legacy".to_string()]);
}

#[test]
fn parse_errors_name_the_offending_path() {
    let query = QueryNode::new()
        .star()
        .project(ProjectionMap::new().field("price", validator::number()))
        .unwrap();

    let err = query
        .parse(json!([{"price": 1}, {"price": "broken"}]))
        .unwrap_err();

    assert_eq!(err.to_string(), "`[1]`: `price`: expected number, got string");
}

#[test]
fn version_is_exported() {
    assert!(!proq::VERSION.is_empty());
}
