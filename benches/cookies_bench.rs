use cookiemanager::cookies::config::CookieConfig;
use cookiemanager::cookies::httpjar::HttpCookieStore;
use cookiemanager::cookies::memory::MemoryCookieStore;
use cookiemanager::cookies::value::Json;
use cookiemanager::manager::CookieManager;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use http::header::{HeaderMap, HeaderValue, COOKIE};

fn benchmark_set_json(c: &mut Criterion) {
    let cookies = CookieManager::new(MemoryCookieStore::new());
    let basket = Json(vec![1u32, 2, 3, 5, 8, 13]);

    c.bench_function("manager_set_json", |b| {
        b.iter(|| {
            cookies
                .set(black_box("basket"), black_box(&basket), None)
                .unwrap();
        })
    });
}

fn benchmark_get_or_set_hit(c: &mut Criterion) {
    let cookies = CookieManager::new(MemoryCookieStore::new());
    // Pre-populate
    for i in 0..100 {
        cookies.set(&format!("cookie{}", i), &i, None).unwrap();
    }

    c.bench_function("manager_get_or_set_hit", |b| {
        b.iter(|| {
            let value: u32 = cookies
                .get_or_set(black_box("cookie42"), || 0, None)
                .unwrap();
            black_box(value);
        })
    });
}

fn benchmark_parse_request(c: &mut Criterion) {
    let line = (0..30)
        .map(|i| format!("cookie{}=val%20{}", i, i))
        .collect::<Vec<_>>()
        .join("; ");
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(&line).unwrap());

    c.bench_function("httpjar_from_headers", |b| {
        b.iter(|| {
            black_box(HttpCookieStore::from_headers(
                black_box(&headers),
                CookieConfig::default(),
            ));
        })
    });
}

criterion_group!(
    benches,
    benchmark_set_json,
    benchmark_get_or_set_hit,
    benchmark_parse_request
);
criterion_main!(benches);
