// benches/country_list.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use income_explorer::{
    core::Locale,
    selection::{country_list, SelectionState},
};

// Roughly the size of the real country list, with Turkish letters mixed in
fn sample_countries() -> Vec<String> {
    const STEMS: [&str; 12] = [
        "Türkiye", "Çad", "Şili", "Özbekistan", "İran", "Irak",
        "Germany", "Ürdün", "Güney Afrika", "Chad", "Cuba", "Ghana",
    ];
    (0..220)
        .map(|i| format!("{} {}", STEMS[i % STEMS.len()], i))
        .collect()
}

fn bench_country_list(c: &mut Criterion) {
    let raw = sample_countries();

    let mut sorted = raw.clone();
    Locale::Turkish.sort(&mut sorted);

    let mut sel = SelectionState::default();
    sel.select_countries(sorted.iter().step_by(7).map(String::as_str));

    c.bench_function("sort_tr", |b| {
        b.iter(|| {
            let mut v = raw.clone();
            Locale::Turkish.sort(black_box(&mut v));
            black_box(v.len())
        })
    });

    c.bench_function("sort_root", |b| {
        b.iter(|| {
            let mut v = raw.clone();
            Locale::Root.sort(black_box(&mut v));
            black_box(v.len())
        })
    });

    c.bench_function("country_list_no_query", |b| {
        b.iter(|| {
            let list = country_list(black_box(&sorted), &sel, "", Locale::Turkish);
            black_box(list.len())
        })
    });

    c.bench_function("country_list_query", |b| {
        b.iter(|| {
            let list = country_list(black_box(&sorted), &sel, black_box("ı"), Locale::Turkish);
            black_box(list.len())
        })
    });
}

criterion_group!(benches, bench_country_list);
criterion_main!(benches);
