use std::fs;
use std::sync::Arc;
use std::thread;

use geosql_config::TranslatorConfig;
use geosql_core::{GeoSqlError, SpatialValue, SqlValue};
use geosql_postgis::observability::{
    TracingInit, apply_logging_level, init_tracing, init_tracing_with_level,
};
use geosql_postgis::{
    ColumnProjection, DeclaredType, GisPostgresTranslator, Operand, PredicateFunctionCall,
    StorageStruct, ViewProperty,
};

fn translator() -> GisPostgresTranslator {
    init_tracing_with_level("debug");
    GisPostgresTranslator::new(TranslatorConfig::default()).expect("default config is valid")
}

#[test]
fn end_to_end_select_example() {
    let translator = translator();
    let rewritten = translator
        .rewrite_select(
            "SELECT [id],[geo] FROM (...) t",
            &[ColumnProjection::other("id"), ColumnProjection::geography("geo")],
        )
        .expect("rewrite");
    assert_eq!(rewritten, "SELECT [id],ST_AsEWKT([geo]) as [geo] FROM (...) t");
}

#[test]
fn rewrite_wraps_only_spatial_columns() {
    let translator = translator();
    let suffix = "FROM (\nSELECT \"t\".* FROM \"places\" \"t\" WHERE [location] IS NOT NULL\n\
                  ) \"STORMGENERATEDQUERY\"\nORDER BY [name]";
    let sql =
        format!("SELECT [id],\n[name],\n[location],\n[rank],\n[outline],\n[border]\n{suffix}");
    let projections = vec![
        ColumnProjection::other("id"),
        ColumnProjection::other("name"),
        ColumnProjection::geography("location"),
        ColumnProjection::other("rank"),
        ColumnProjection::geometry("outline"),
        ColumnProjection::geometry("border"),
    ];

    let rewritten = translator.rewrite_select(&sql, &projections).expect("rewrite");

    assert_eq!(rewritten.matches("ST_AsEWKT(").count(), 3);
    assert!(rewritten.contains("ST_AsEWKT([location]) as [location],\n"));
    assert!(rewritten.contains("ST_AsEWKT([outline]) as [outline],\n"));
    assert!(rewritten.contains("ST_AsEWKT([border]) as [border]\n"));
    assert!(rewritten.starts_with("SELECT [id],\n[name],\n"));
    assert!(rewritten.contains("\n[rank],\n"));
    assert!(rewritten.ends_with(suffix));
}

#[test]
fn generate_select_resolves_types_from_storage() {
    let translator = translator();
    let view = vec![ViewProperty::new("id"), ViewProperty::new("area")];
    let storage = vec![
        StorageStruct::default().with_prop("id", DeclaredType::Other),
        StorageStruct::default().with_prop("area", DeclaredType::Geometry),
    ];

    let rewritten = translator
        .generate_select("SELECT [id],[area]\nFROM (t) q", &view, &storage)
        .expect("rewrite");
    assert_eq!(rewritten, "SELECT [id],ST_AsEWKT([area]) as [area]\nFROM (t) q");
}

#[test]
fn mismatch_returns_no_output() {
    let translator = translator();
    let result = translator.rewrite_select(
        "SELECT [id],[name] FROM (t) q",
        &[ColumnProjection::other("id"), ColumnProjection::geometry("shape")],
    );

    match result {
        Err(GeoSqlError::ProjectionMismatch { identifier }) => assert_eq!(identifier, "[shape]"),
        other => panic!("expected projection mismatch, got {other:?}"),
    }
}

#[test]
fn predicate_compilation_matrix() {
    let translator = translator();
    let point = SpatialValue::geography("SRID=4326;POINT(37.61 55.75)").expect("ewkt");
    let other = SpatialValue::geography("SRID=4326;POINT(30.31 59.94)").expect("ewkt");

    let cases = vec![
        (
            PredicateFunctionCall::new(
                "GeoDistance",
                vec![Operand::column("a"), Operand::column("b")],
            ),
            "ST_Distance([a]::geography,[b]::geography)",
        ),
        (
            PredicateFunctionCall::new(
                "GeoDistance",
                vec![Operand::column("a"), Operand::spatial(point.clone())],
            ),
            "ST_Distance([a]::geography,'SRID=4326;POINT(37.61 55.75)')",
        ),
        (
            PredicateFunctionCall::new(
                "GeoDistance",
                vec![Operand::spatial(point.clone()), Operand::spatial(other)],
            ),
            "ST_Distance('SRID=4326;POINT(37.61 55.75)','SRID=4326;POINT(30.31 59.94)')",
        ),
        (
            PredicateFunctionCall::new(
                "GeomIntersects",
                vec![Operand::column("a"), Operand::column("b")],
            ),
            "ST_Intersects([a],[b])",
        ),
    ];

    for (call, expected) in cases {
        assert_eq!(
            translator.compile_function(&call).expect("compile").as_deref(),
            Some(expected)
        );
    }

    let null_operand = PredicateFunctionCall::new(
        "GeoIntersects",
        vec![Operand::column("a"), Operand::value(SqlValue::Null)],
    );
    assert!(matches!(
        translator.function_to_sql(&null_operand),
        Err(GeoSqlError::InvalidArgument(_))
    ));

    let unknown = PredicateFunctionCall::new(
        "Contains",
        vec![Operand::column("a"), Operand::spatial(point)],
    );
    assert_eq!(translator.compile_function(&unknown).expect("compile"), None);
}

#[test]
fn translator_is_shareable_across_threads() {
    let translator = Arc::new(translator());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let translator = Arc::clone(&translator);
            thread::spawn(move || {
                let column = format!("g{i}");
                let sql = format!("SELECT [id],[{column}] FROM (t) q");
                translator
                    .rewrite_select(
                        &sql,
                        &[ColumnProjection::other("id"), ColumnProjection::geometry(&column)],
                    )
                    .expect("rewrite")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let sql = handle.join().expect("thread");
        assert_eq!(
            sql,
            format!("SELECT [id],ST_AsEWKT([g{i}]) as [g{i}] FROM (t) q")
        );
    }
}

#[test]
fn translator_from_config_file() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("geosql.toml");
    fs::write(
        &path,
        r#"
[identifiers]
quote_style = "double_quote"

[logging]
level = "trace"
"#,
    )
    .expect("write toml");

    let translator =
        GisPostgresTranslator::from_config_file(path.to_str()).expect("load translator");
    assert_eq!(translator.config().logging.level, "trace");
    assert_ne!(init_tracing(&translator.config().logging), TracingInit::Foreign);
    assert!(apply_logging_level(&translator.config().logging.level));

    let sql = translator
        .function_to_sql(&PredicateFunctionCall::new(
            "GeoIntersects",
            vec![Operand::column("zone"), Operand::column("area")],
        ))
        .expect("compile");
    assert_eq!(sql, "ST_Intersects(\"zone\"::geography,\"area\"::geography)");
}
