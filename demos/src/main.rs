// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless carousel simulation.
//!
//! Drives a `Carousel` over a small photo album with synthetic pointer events
//! and frame ticks, printing what a page indicator and a selection listener
//! would see. Run with `RUST_LOG=debug` to watch the buffer and the pool at
//! work.

use kurbo::Size;
use understory_carousel::{
    Carousel, CarouselConfig, DataSetObserver, Extent, FlowIndicator, FlowInfo, ItemId,
    ItemProvider, MeasureSpec, PageableSurface, PointerEvent, SavedState,
};

const PAGE_WIDTH: f64 = 360.0;
const FRAME_MS: u64 = 16;

#[derive(Debug)]
enum Page {
    Photo { title: String },
    Divider { year: u16 },
}

enum Entry {
    Photo(ItemId, &'static str),
    Divider(ItemId, u16),
}

struct Album {
    entries: Vec<Entry>,
    observer: Option<DataSetObserver>,
    created: usize,
}

impl Album {
    fn new() -> Self {
        let titles = [
            "harbour", "lighthouse", "dunes", "market", "bridge", "orchard", "ferry", "glacier",
        ];
        let mut entries = Vec::new();
        let mut id = 0;
        for (i, title) in titles.into_iter().enumerate() {
            if i % 3 == 0 {
                entries.push(Entry::Divider(1_000 + id, 2020 + i as u16 / 3));
            }
            entries.push(Entry::Photo(id, title));
            id += 1;
        }
        Self {
            entries,
            observer: None,
            created: 0,
        }
    }

    fn prepend(&mut self, id: ItemId, title: &'static str) {
        self.entries.insert(0, Entry::Photo(id, title));
        if let Some(observer) = &self.observer {
            observer.notify_changed();
        }
    }
}

impl ItemProvider for Album {
    type View = Page;

    fn extent(&self) -> Extent {
        Extent::Counted(self.entries.len())
    }

    fn view_type_count(&self) -> usize {
        2
    }

    fn item_view_type(&self, index: isize) -> Option<usize> {
        match self.entries.get(usize::try_from(index).ok()?)? {
            Entry::Photo(..) => Some(0),
            Entry::Divider(..) => Some(1),
        }
    }

    fn has_stable_ids(&self) -> bool {
        true
    }

    fn item_id(&self, index: isize) -> ItemId {
        match &self.entries[index as usize] {
            Entry::Photo(id, _) | Entry::Divider(id, _) => *id,
        }
    }

    fn render(&mut self, index: isize, recycled: &mut Option<Page>, _page: Size) -> Page {
        match (&self.entries[index as usize], recycled.take()) {
            (Entry::Photo(_, name), Some(Page::Photo { mut title })) => {
                title.clear();
                title.push_str(name);
                Page::Photo { title }
            }
            (Entry::Divider(_, year), Some(Page::Divider { .. })) => Page::Divider { year: *year },
            (entry, _) => {
                self.created += 1;
                match entry {
                    Entry::Photo(_, name) => Page::Photo {
                        title: (*name).to_string(),
                    },
                    Entry::Divider(_, year) => Page::Divider { year: *year },
                }
            }
        }
    }

    fn register_observer(&mut self, observer: DataSetObserver) {
        self.observer = Some(observer);
    }

    fn unregister_observer(&mut self, _observer: &DataSetObserver) {
        self.observer = None;
    }
}

/// Prints a row of dots with the selected page highlighted.
struct Dots {
    count: usize,
    page_width: i32,
}

impl FlowIndicator<Page> for Dots {
    fn attach(&mut self, info: FlowInfo) {
        self.count = info.views_count;
        self.page_width = info.page_width;
    }

    fn on_scrolled(&mut self, h: i32, _v: i32, _old_h: i32, _old_v: i32) {
        if self.page_width > 0 {
            log::trace!("indicator at {:.2} pages", f64::from(h) / f64::from(self.page_width));
        }
    }

    fn on_switched(&mut self, _view: &Page, index: isize, _direction: i32) {
        let dots: String = (0..self.count)
            .map(|i| if i as isize == index { 'o' } else { '.' })
            .collect();
        println!("  indicator  {dots}");
    }
}

fn frames(carousel: &mut Carousel<Album>, mut now: u64) -> u64 {
    while carousel.compute_scroll(now) {
        now += FRAME_MS;
    }
    now + FRAME_MS
}

fn fling(carousel: &mut Carousel<Album>, forward: bool, now: u64) -> u64 {
    let (from, to) = if forward { (300.0, 120.0) } else { (60.0, 240.0) };
    let mid = (from + to) / 2.0;
    carousel.on_pointer(PointerEvent::down(from, 200.0, now));
    carousel.on_pointer(PointerEvent::moved(mid, 200.0, now + 8));
    carousel.on_pointer(PointerEvent::up(to, 200.0, now + 16));
    frames(carousel, now + 16)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::try_init();

    let mut carousel = Carousel::new(CarouselConfig::default().with_side_buffer(2));
    carousel.set_adapter(Album::new(), 1);
    carousel.measure(MeasureSpec::Exactly(PAGE_WIDTH), MeasureSpec::Exactly(640.0))?;
    carousel.set_indicator(Dots {
        count: 0,
        page_width: 0,
    });
    carousel.set_switch_listener(|view: &Page, index: isize, direction: i32| {
        let arrow = match direction {
            d if d > 0 => "->",
            d if d < 0 => "<-",
            _ => "==",
        };
        match view {
            Page::Photo { title } => println!("{arrow} {index}: photo \"{title}\""),
            Page::Divider { year } => println!("{arrow} {index}: {year}"),
        }
    });

    println!("flinging forward through the album");
    let mut now = 0;
    for _ in 0..6 {
        now = fling(&mut carousel, true, now);
    }

    println!("and back");
    for _ in 0..3 {
        now = fling(&mut carousel, false, now);
    }

    println!("a new photo arrives at the front");
    if let Some(album) = carousel.provider_mut() {
        album.prepend(500, "sunrise");
    }
    now = frames(&mut carousel, now);

    println!("jumping to the start");
    carousel.set_selection(0);
    frames(&mut carousel, now);

    let state = carousel.save_state();
    let json = serde_json::to_string(&state)?;
    println!("saved state: {json}");
    let restored: SavedState = serde_json::from_str(&json)?;
    assert_eq!(restored, state);

    let stats = carousel.pool().stats();
    let created = carousel.provider().map_or(0, |album| album.created);
    println!(
        "views created: {created}, reused: {}, pooled: {}, discarded: {}",
        stats.reused, stats.pooled, stats.discarded
    );
    Ok(())
}
