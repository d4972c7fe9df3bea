use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::thread;
use user_registry::{CreateUserRequest, UserStore};

fn candidate(i: usize) -> CreateUserRequest {
    CreateUserRequest::new(format!("user {}", i), format!("user{}@example.com", i))
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_insert");

    group.bench_function("single_thread", |b| {
        let store = UserStore::with_seed();
        let mut i = 0;
        b.iter(|| {
            i += 1;
            black_box(store.insert(candidate(i)).unwrap())
        })
    });

    // 多线程争用同一把锁
    group.bench_function("contended_4_threads", |b| {
        let store = UserStore::with_seed();
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let store = store.clone();
                    thread::spawn(move || {
                        for i in 0..100 {
                            store.insert(candidate(t * 100 + i)).unwrap();
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        })
    });

    group.bench_function("rejected_candidate", |b| {
        let store = UserStore::with_seed();
        b.iter(|| black_box(store.insert(CreateUserRequest::new("Ana", "not-an-email")).is_err()))
    });

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_read");

    for size in [10usize, 100, 1000].iter() {
        let store = UserStore::new();
        for i in 0..*size {
            store.insert(candidate(i)).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("list", size), size, |b, _| {
            b.iter(|| black_box(store.list()))
        });

        group.bench_with_input(BenchmarkId::new("get_last", size), size, |b, &size| {
            b.iter(|| black_box(store.get(size as u64).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_read);

criterion_main!(benches);
