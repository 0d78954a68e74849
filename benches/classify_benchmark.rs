use chrono::{Duration, Utc};
use consent_ledger::models::{classify, NewConsent};
use consent_ledger::store::ConsentStore;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn benchmark_status_paths(c: &mut Criterion) {
    let now = Utc::now();

    // A ledger with a realistic mix of states: a third expired, a third
    // inside the expiring window, a third far in the future.
    let store = ConsentStore::new();
    for i in 0..1000i64 {
        let offset = match i % 3 {
            0 => Duration::minutes(-(i + 1)),
            1 => Duration::minutes(i % 60),
            _ => Duration::days(i % 30 + 1),
        };
        store.create(
            NewConsent {
                data_type: "Email".to_string(),
                organization: format!("Org {}", i),
                purpose: "Survey".to_string(),
                start_time: now,
                expiry_time: now + offset,
                proxy_email: None,
                proxy_phone: None,
            },
            now,
        );
    }

    let mut group = c.benchmark_group("consent_status");

    group.bench_function("classify_single", |b| {
        b.iter(|| classify(black_box(now + Duration::minutes(30)), black_box(now)))
    });

    group.bench_function("list_active_1000", |b| {
        b.iter(|| store.list_active(black_box(now)))
    });

    group.bench_function("summary_1000", |b| {
        b.iter(|| store.summary(black_box(now)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_status_paths);
criterion_main!(benches);
