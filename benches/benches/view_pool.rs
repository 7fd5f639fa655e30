// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_view_pool::{Release, ViewPool};

fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_view_pool");
    group.sample_size(50);

    for &(view_types, capacity) in &[(1_usize, 1_usize), (4, 1), (4, 8)] {
        group.bench_function(
            format!("release_take_churn(types={view_types},cap={capacity})"),
            |b| {
                b.iter_batched(
                    || ViewPool::<Vec<u8>>::new(view_types, capacity),
                    |mut pool| {
                        let mut discarded = 0_usize;
                        for i in 0..4_096_usize {
                            let view_type = Some(i % view_types);
                            let view = pool.take(view_type).unwrap_or_default();
                            if let Release::Discarded(_) = pool.release(view_type, view) {
                                discarded += 1;
                            }
                            if i % 3 == 0 {
                                let extra = pool.release(view_type, Vec::new());
                                discarded += usize::from(!extra.is_pooled());
                            }
                        }
                        black_box((discarded, pool.stats()));
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pool);
criterion_main!(benches);
