// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_carousel::{
    Carousel, CarouselConfig, Direction, Extent, ItemProvider, MeasureSpec, PageBuffer,
    PageableSurface, Recycler,
};
use understory_view_pool::ViewPool;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_bool(&mut self) -> bool {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 63) == 1
    }
}

/// Items rendered into small heap-allocated views, reusing recycled ones.
struct Rows {
    count: usize,
    view_types: usize,
}

impl ItemProvider for Rows {
    type View = Vec<u8>;

    fn extent(&self) -> Extent {
        Extent::Counted(self.count)
    }

    fn view_type_count(&self) -> usize {
        self.view_types
    }

    fn item_view_type(&self, index: isize) -> Option<usize> {
        Some(index.unsigned_abs() % self.view_types)
    }

    fn render(&mut self, index: isize, recycled: &mut Option<Vec<u8>>, _page: Size) -> Vec<u8> {
        let mut view = recycled.take().unwrap_or_else(|| Vec::with_capacity(64));
        view.clear();
        view.extend_from_slice(&index.to_le_bytes());
        view
    }
}

fn bench_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_carousel/buffer");
    group.sample_size(50);

    for &(side_buffer, view_types) in &[(1_usize, 1_usize), (3, 1), (3, 4), (8, 2)] {
        group.bench_function(
            format!("random_shifts(side={side_buffer},types={view_types})"),
            |b| {
                b.iter_batched(
                    || {
                        (
                            Rows {
                                count: 10_000,
                                view_types,
                            },
                            ViewPool::new(view_types, 1),
                            PageBuffer::new(side_buffer),
                            Lcg(0xCA20_0000_0000_0001),
                        )
                    },
                    |(mut rows, mut pool, mut buffer, mut rng)| {
                        let bounds = rows.extent().bounds();
                        let mut recycler = Recycler::new(&mut rows, &mut pool, Size::ZERO);
                        buffer.rebuild(5_000, bounds.clone(), &mut recycler);
                        for _ in 0..1_000 {
                            let direction = if rng.next_bool() {
                                Direction::Forward
                            } else {
                                Direction::Backward
                            };
                            buffer.shift(direction, bounds.clone(), &mut recycler);
                        }
                        black_box(buffer.indices());
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_function(format!("rebuild(side={side_buffer},types={view_types})"), |b| {
            let mut rows = Rows {
                count: 10_000,
                view_types,
            };
            let mut pool = ViewPool::new(view_types, 1);
            let mut buffer = PageBuffer::new(side_buffer);
            let bounds = rows.extent().bounds();
            let mut selected = 0;
            b.iter(|| {
                let mut recycler = Recycler::new(&mut rows, &mut pool, Size::ZERO);
                selected = (selected + 37) % 10_000;
                black_box(buffer.rebuild(selected, bounds.clone(), &mut recycler));
            });
        });
    }

    group.finish();
}

fn bench_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_carousel/paging");
    group.sample_size(30);

    group.bench_function("snap_and_commit_100_pages", |b| {
        b.iter_batched(
            || {
                let mut carousel = Carousel::new(CarouselConfig::default());
                carousel.set_adapter(
                    Rows {
                        count: 1_000,
                        view_types: 2,
                    },
                    0,
                );
                carousel
                    .measure(MeasureSpec::Exactly(360.0), MeasureSpec::Exactly(640.0))
                    .unwrap();
                carousel
            },
            |mut carousel| {
                let mut now = 0;
                for _ in 0..100 {
                    let next = carousel.current_screen() + 1;
                    carousel.snap_to_screen(next, now);
                    while carousel.compute_scroll(now) {
                        now += 16;
                    }
                    now += 16;
                }
                black_box(carousel.selected_item_index());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_buffer, bench_paging);
criterion_main!(benches);
