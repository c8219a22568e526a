// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested navigation.
//!
//! A three-level table of contents with `nested` enabled: the active entry gets `nav_class`, and
//! every list item enclosing it gets `nested_class`. Settings are read from JSON, as a page would
//! pass them. A listener on the outermost item stops propagation, so document-level listeners
//! only hear about the other entries.
//!
//! Run:
//! - `cargo run -p sightline_demos --example spy_nested`

use kurbo::{Rect, Size};
use sightline_dom::{Dom, Element, NodeId};
use sightline_spy::events::{Outcome, SpyEvent};
use sightline_spy::settings::Settings;
use sightline_spy::spy::ScrollSpy;
use tracing_subscriber::EnvFilter;

fn classes(dom: &Dom, items: &[(NodeId, &str)]) {
    for (li, label) in items {
        let classes = dom.element(*li).map(|el| el.classes.join(" ")).unwrap_or_default();
        println!("  {label:<10} [{classes}]");
    }
}

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings: Settings = serde_json::from_str(
        r#"{ "nested": true, "nestedClass": "open", "navClass": "current", "offset": 40 }"#,
    )?;

    let mut dom = Dom::new(Size::new(1024.0, 600.0));
    let body = dom.body();
    let mut list = dom.insert(Some(body), Element::new("ul").with_class("toc"));
    let mut items = Vec::new();
    for (depth, name) in ["chapter", "section", "detail"].into_iter().enumerate() {
        let y = depth as f64 * 800.0;
        dom.insert(
            Some(body),
            Element::new("section")
                .with_id(name)
                .with_bounds(Rect::new(0.0, y, 1024.0, y + 800.0)),
        );
        let li = dom.insert(Some(list), Element::new("li"));
        dom.insert(Some(li), Element::new("a").with_href(&format!("#{name}")));
        items.push((li, name));
        list = dom.insert(Some(li), Element::new("ul"));
    }

    let mut spy = ScrollSpy::new(".toc a", settings);
    let outer = items[0].0;
    spy.subscribe(Some(outer), |ev: &SpyEvent<'_, NodeId>| {
        if ev.target == ev.current.unwrap_or(ev.target) {
            println!("  (outer item handled its own {})", ev.kind.name());
            Outcome::Stop
        } else {
            Outcome::Continue
        }
    });
    spy.subscribe(None, |ev: &SpyEvent<'_, NodeId>| {
        println!("  document heard {} for {:?}", ev.kind.name(), ev.content);
        Outcome::Continue
    });
    let _ = spy.start(&mut dom);

    for y in [0.0, 800.0, 1600.0] {
        let y = dom.scroll_to(y);
        let _ = spy.detect(&mut dom);
        println!("== scroll {y} ==");
        classes(&dom, &items);
    }
    Ok(())
}
