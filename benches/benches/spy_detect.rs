// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use sightline_dom::{Dom, Element, NodeFlags};
use sightline_spy::registry::Registry;
use sightline_spy::scheduler::FrameQueue;
use sightline_spy::settings::Settings;
use sightline_spy::spy::ScrollSpy;

const SECTION_HEIGHT: f64 = 400.0;

/// A page with `n` sections, each linked from a TOC entry. Every tenth section opens a nested
/// list so the nested walk has something to climb.
fn gen_page(n: usize) -> Dom {
    let mut dom = Dom::new(Size::new(1280.0, 800.0));
    let body = dom.body();
    let toc = dom.insert(Some(body), Element::new("div").with_class("toc-tree"));
    let mut list = dom.insert(Some(toc), Element::new("ul"));
    let main = dom.insert(
        Some(body),
        Element::new("main").with_flags(NodeFlags::DISPLAYED | NodeFlags::POSITIONED),
    );
    for i in 0..n {
        let y = i as f64 * SECTION_HEIGHT;
        let name = format!("s{i}");
        dom.insert(
            Some(main),
            Element::new("section")
                .with_id(&name)
                .with_bounds(Rect::new(0.0, y, 1000.0, y + SECTION_HEIGHT)),
        );
        let li = dom.insert(Some(list), Element::new("li"));
        dom.insert(Some(li), Element::new("a").with_href(&format!("#{name}")));
        if i % 10 == 9 {
            list = dom.insert(Some(li), Element::new("ul"));
        }
    }
    dom
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_offsets(count: usize, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| (rng.next_f64() * max).floor()).collect()
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    for &n in &[16usize, 64, 256] {
        let dom = gen_page(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_sort_n{}", n), |b| {
            b.iter(|| {
                let mut reg = Registry::new();
                reg.build(&dom, ".toc-tree a");
                reg.sort(&dom);
                black_box(reg.len());
            });
        });
    }
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for &n in &[16usize, 64, 256] {
        for nested in [false, true] {
            let offsets = gen_offsets(64, n as f64 * SECTION_HEIGHT, 0x5eed_0000 + n as u64);
            group.throughput(Throughput::Elements(offsets.len() as u64));
            let label = if nested { "nested" } else { "flat" };
            group.bench_function(format!("{label}_n{}", n), |b| {
                b.iter_batched(
                    || {
                        let mut dom = gen_page(n);
                        let settings = Settings {
                            nested,
                            ..Settings::default()
                        };
                        let spy = ScrollSpy::create(&mut dom, ".toc-tree a", settings);
                        (dom, spy)
                    },
                    |(mut dom, mut spy)| {
                        for &y in &offsets {
                            let _ = dom.scroll_to(y);
                            black_box(spy.detect(&mut dom));
                        }
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_scroll_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_burst");
    let n = 64;
    let offsets = gen_offsets(256, n as f64 * SECTION_HEIGHT, 0xb125);
    group.throughput(Throughput::Elements(offsets.len() as u64));
    // Eight signals per frame, as a fast trackpad fling delivers them.
    group.bench_function("coalesced_8_per_frame", |b| {
        b.iter_batched(
            || {
                let mut dom = gen_page(n);
                let spy = ScrollSpy::create(&mut dom, ".toc-tree a", Settings::default());
                (dom, spy, FrameQueue::new())
            },
            |(mut dom, mut spy, mut clock)| {
                for burst in offsets.chunks(8) {
                    for &y in burst {
                        let y = dom.scroll_to(y);
                        spy.on_scroll(&mut clock, y);
                    }
                    while let Some(frame) = clock.take() {
                        black_box(spy.run_frame(&mut dom, frame));
                    }
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_registry, bench_detect, bench_scroll_burst);
criterion_main!(benches);
