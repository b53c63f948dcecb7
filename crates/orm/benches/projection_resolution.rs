//! Projection and association resolution benchmarks
//!
//! Compares cold descriptor extraction against cached lookups, and measures
//! reverse association pairing over entities of growing width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use elif_mapping::{
    sql::replace_case, AssociationAttribute, ColumnAttribute, ConstructorInfo, MappingConfig,
    MappingContext, MetadataExtractor, PostgresSqlProvider, PropertyInfo, SqlProvider,
    TableAttribute, TypeInfo, TypeRef,
};

fn wide_entity(name: &str, columns: usize) -> TypeInfo {
    let mut info = TypeInfo::new(name)
        .with_attribute(TableAttribute::new(name.to_lowercase()))
        .with_constructor(ConstructorInfo::new())
        .with_property(
            PropertyInfo::new("Id", "i64").with_attribute(ColumnAttribute::named("id").primary_key()),
        );
    for i in 0..columns {
        info = info.with_property(
            PropertyInfo::new(format!("Field{}", i), "String")
                .with_attribute(ColumnAttribute::named(format!("field_{}", i))),
        );
    }
    info
}

fn bench_projection_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_extraction");
    let extractor = MetadataExtractor::new();

    for &columns in &[5, 25, 100] {
        let info = wide_entity("Invoice", columns);
        group.bench_with_input(BenchmarkId::new("cold", columns), &info, |b, info| {
            b.iter(|| black_box(extractor.resolve(black_box(info))))
        });
    }

    let context = MappingContext::new(MappingConfig::default()).unwrap();
    context.catalog().register(wide_entity("Invoice", 25));
    let ty = TypeRef::new("Invoice");
    group.bench_function("cached", |b| {
        b.iter(|| black_box(context.projection_for(black_box(&ty))))
    });

    group.finish();
}

fn bench_reverse_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_lookup");

    for &width in &[1, 10, 50] {
        let context = MappingContext::new(MappingConfig::default()).unwrap();
        let mut parent = TypeInfo::new("Parent").with_constructor(ConstructorInfo::new());
        let mut child = TypeInfo::new("Child").with_constructor(ConstructorInfo::new());
        for i in 0..width {
            let name = format!("FK_Child_Parent_{}", i);
            parent = parent.with_property(
                PropertyInfo::new(format!("Children{}", i), TypeRef::wrap("EntitySet", "Child".into()))
                    .with_attribute(AssociationAttribute::new(name.clone())),
            );
            child = child.with_property(
                PropertyInfo::new(format!("Parent{}", i), "Parent")
                    .with_attribute(AssociationAttribute::new(name).foreign_key()),
            );
        }
        context.catalog().register(child);
        let parent = context.catalog().register(parent);

        let last = parent.property(&format!("Children{}", width - 1)).unwrap();
        let association = context.associations().classify(last).unwrap();

        group.bench_with_input(BenchmarkId::new("find_reverse", width), &association, |b, a| {
            b.iter(|| black_box(context.associations().find_reverse(black_box(a))))
        });
    }

    group.finish();
}

fn bench_sql_fragments(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_fragments");
    let provider = PostgresSqlProvider::new();

    group.bench_function("insert_id_retrieval", |b| {
        b.iter(|| {
            black_box(provider.render_insert_id_retrieval(
                black_box(&[":id", ":version"]),
                black_box(&["nextval('orders_id_seq')", "NEXTVAL('orders_version_seq')"]),
            ))
        })
    });

    group.bench_function("replace_case", |b| {
        b.iter(|| black_box(replace_case(black_box("NextVal('a'), nextval('b')"), "nextval(", "currval(")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_projection_extraction,
    bench_reverse_lookup,
    bench_sql_fragments
);
criterion_main!(benches);
