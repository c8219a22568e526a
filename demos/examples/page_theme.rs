// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page controller with a persisted theme.
//!
//! Sets up a documentation-style page (sticky header, TOC sidebar, content), scrolls it, and
//! toggles the theme. The theme is stored in a JSON file under the system temp directory, so a
//! second run starts from where the first left off.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p sightline_demos --example page_theme`

use kurbo::{Rect, Size};
use sightline_dom::{Dom, Element, NodeFlags};
use sightline_page::page::{PageController, PageSettings};
use sightline_page::storage::{JsonFileStorage, StorageError};
use sightline_spy::scheduler::FrameQueue;
use tracing_subscriber::EnvFilter;

fn build() -> Dom {
    let mut dom = Dom::new(Size::new(1280.0, 720.0));
    let body = dom.body();
    dom.insert(
        Some(body),
        Element::new("header").with_bounds(Rect::new(0.0, 0.0, 1280.0, 56.0)),
    );
    let sidebar = dom.insert(
        Some(body),
        Element::new("div")
            .with_class("toc-scroll")
            .with_bounds(Rect::new(0.0, 56.0, 240.0, 356.0)),
    );
    let tree = dom.insert(Some(sidebar), Element::new("div").with_class("toc-tree"));
    let ul = dom.insert(Some(tree), Element::new("ul"));
    let main = dom.insert(
        Some(body),
        Element::new("main")
            .with_flags(NodeFlags::DISPLAYED | NodeFlags::POSITIONED)
            .with_bounds(Rect::new(240.0, 56.0, 1280.0, 4056.0)),
    );
    for i in 0..20 {
        let y = f64::from(i) * 200.0;
        let name = format!("part-{i}");
        dom.insert(
            Some(main),
            Element::new("section")
                .with_id(&name)
                .with_bounds(Rect::new(0.0, y, 1040.0, y + 200.0)),
        );
        let ty = f64::from(i) * 28.0;
        let li = dom.insert(
            Some(ul),
            Element::new("li").with_bounds(Rect::new(0.0, ty, 240.0, ty + 28.0)),
        );
        dom.insert(Some(li), Element::new("a").with_href(&format!("#{name}")));
    }
    dom
}

fn main() -> Result<(), StorageError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::temp_dir().join("sightline-demo").join("prefs.json");
    let mut dom = build();
    let mut clock = FrameQueue::new();
    let mut page = PageController::new(PageSettings::default(), JsonFileStorage::new(&path));
    page.setup(&mut dom)?;
    println!("theme on load: {} (stored in {})", page.theme().mode(), path.display());

    for y in [300.0, 1900.0, 3336.0, 0.0] {
        let y = dom.scroll_to(y);
        page.on_scroll(&mut clock, y);
        while let Some(frame) = clock.take() {
            let _ = page.run_frame(&mut dom, frame);
        }
        let sidebar = page.spy().and_then(|spy| spy.active()).map(|p| p.content);
        println!(
            "scroll {y:>6}: header scrolled={}, toc={:?}, active={:?}",
            page.header().is_scrolled(),
            page.last_toc_scroll(),
            sidebar.and_then(|c| dom.element(c)).and_then(|el| el.id.clone()),
        );
    }

    let prefers_dark = true;
    let mode = page.cycle_theme(&mut dom, prefers_dark)?;
    println!("theme toggled to {mode}");

    page.destroy(&mut dom, &mut clock);
    Ok(())
}
