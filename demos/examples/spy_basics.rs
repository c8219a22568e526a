// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll spy basics.
//!
//! Builds a three-section page, scrolls through it one frame at a time, and prints which link is
//! active after each frame, along with the activate/deactivate notifications.
//!
//! Run:
//! - `RUST_LOG=sightline_spy=debug cargo run -p sightline_demos --example spy_basics`

use kurbo::{Rect, Size};
use sightline_dom::{Dom, Element, NodeId};
use sightline_spy::events::{Outcome, SpyEvent};
use sightline_spy::scheduler::FrameQueue;
use sightline_spy::settings::Settings;
use sightline_spy::spy::ScrollSpy;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut dom = Dom::new(Size::new(1024.0, 800.0));
    let body = dom.body();
    let nav = dom.insert(Some(body), Element::new("ul").with_class("toc"));
    for (name, y, h) in [("intro", 0.0, 500.0), ("usage", 500.0, 700.0), ("faq", 1200.0, 300.0)] {
        dom.insert(
            Some(body),
            Element::new("section")
                .with_id(name)
                .with_bounds(Rect::new(0.0, y, 1024.0, y + h)),
        );
        let li = dom.insert(Some(nav), Element::new("li"));
        dom.insert(Some(li), Element::new("a").with_href(&format!("#{name}")));
    }
    // A footer so the last section can end above the viewport bottom.
    dom.insert(
        Some(body),
        Element::new("footer").with_bounds(Rect::new(0.0, 1500.0, 1024.0, 1540.0)),
    );

    let mut clock = FrameQueue::new();
    let mut spy: ScrollSpy<NodeId> = ScrollSpy::new(".toc a", Settings::default());
    spy.subscribe(None, |ev: &SpyEvent<'_, NodeId>| {
        println!("  {:<20} link={:?} content={:?}", ev.kind.name(), ev.link, ev.content);
        Outcome::Continue
    });
    let _ = spy.start(&mut dom);

    let name_of = |dom: &Dom, spy: &ScrollSpy<NodeId>| {
        spy.active()
            .and_then(|p| dom.element(p.content))
            .and_then(|el| el.id.clone())
            .unwrap_or_else(|| "-".into())
    };

    println!("== Initial ==");
    println!("active: {}", name_of(&dom, &spy));

    for target in [600.0, 50.0, 10_000.0] {
        // Several scroll signals before the frame fires collapse into one pass.
        for step in 1..=4 {
            let y = dom.scroll_to(target * f64::from(step) / 4.0);
            let _ = spy.on_scroll(&mut clock, y);
        }
        println!("== Scrolled to {} ({} frame pending) ==", dom.scroll_y(), clock.pending());
        while let Some(frame) = clock.take() {
            let _ = spy.run_frame(&mut dom, frame);
        }
        println!("active: {}", name_of(&dom, &spy));
    }

    spy.destroy(&mut dom, &mut clock);
    println!("== Destroyed ==");
    println!("active: {}", name_of(&dom, &spy));
}
