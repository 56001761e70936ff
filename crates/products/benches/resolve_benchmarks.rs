use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use showcase_core::{Entity, ProductId};
use showcase_products::{
    CategoryFilter, NewProduct, Product, filter_by_search, resolve, seed::seed_products,
};

/// Synthetic catalog of `size` products, cycling through the seed data with fresh ids.
fn synthetic_catalog(size: usize) -> Vec<Product> {
    let seed = seed_products().expect("seed catalog is valid");
    (0..size)
        .map(|i| {
            let template = &seed[i % seed.len()];
            Product::new(NewProduct {
                id: ProductId::new(format!("{}-{i}", template.id())).expect("non-empty id"),
                name: template.name().to_string(),
                price: template.price(),
                category: template.category(),
                brand: template.brand().to_string(),
                description: template.description().to_string(),
                image: template.image().to_string(),
                features: template.features().to_vec(),
                specifications: template.specifications().clone(),
                in_stock: template.in_stock(),
                rating: template.rating(),
                reviews: template.reviews(),
            })
            .expect("template product is valid")
        })
        .collect()
}

fn bench_resolve_seed_catalog(c: &mut Criterion) {
    let products = seed_products().expect("seed catalog is valid");
    let electronics = CategoryFilter::parse(Some("Electronics"));
    let mut group = c.benchmark_group("resolve_seed_catalog");

    group.bench_function("category_only", |b| {
        b.iter(|| resolve(black_box(&products), &electronics, ""))
    });

    group.bench_function("search_only", |b| {
        b.iter(|| resolve(black_box(&products), &CategoryFilter::All, black_box("coffee")))
    });

    group.bench_function("category_and_search", |b| {
        b.iter(|| resolve(black_box(&products), &electronics, black_box("battery")))
    });

    group.finish();
}

fn bench_search_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_scaling");

    for size in [100usize, 1_000, 10_000].iter() {
        let products = synthetic_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| filter_by_search(black_box(products), black_box("wireless")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_seed_catalog, bench_search_scaling);
criterion_main!(benches);
