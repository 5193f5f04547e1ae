//! Dropping a parse result must release every allocation it made.
//!
//! Kept in its own test binary because it installs a counting global
//! allocator. Counts are per thread so the test harness's own allocations on
//! other threads do not interfere.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use mdlite_core::{dump, HtmlRenderer, Parser};

struct CountingAlloc;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static TOTAL: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
            let _ = TOTAL.try_with(|total| total.set(total.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn live() -> isize {
    LIVE.with(|live| live.get())
}

fn total() -> usize {
    TOTAL.with(|total| total.get())
}

const DOCUMENT: &str = "---\ntitle: Teardown\nauthor: test\n---\n\
# Heading\n\nA [link](https://example.com) with `mono` text.\n\n\
- first [a](b)\n- second `c`\n* third\n\n```\nfn main() {}\n```\n\nTail\n";

#[test]
fn test_dropping_tree_releases_every_node() {
    let parser = Parser::new();

    let live_before = live();
    let total_before = total();
    {
        let result = parser.parse(DOCUMENT).unwrap();
        assert_eq!(result.document.blocks.len(), 5);
        assert!(live() > live_before);
    }
    assert!(total() > total_before, "the tree should allocate");
    assert_eq!(live(), live_before, "every node freed exactly once");
}

#[test]
fn test_render_and_dump_do_not_leak() {
    let parser = Parser::new();
    let result = parser.parse(DOCUMENT).unwrap();

    let live_before = live();
    {
        let html = HtmlRenderer::new().with_escaping(true).render(&result.document);
        let json = dump::to_json_pretty(&result.document).unwrap();
        let restored = dump::from_json(&json).unwrap();
        assert!(!html.is_empty());
        assert_eq!(restored.len(), result.document.blocks.len());
    }
    assert_eq!(live(), live_before);
}

#[test]
fn test_failed_parse_releases_partial_tree() {
    let input = "# Kept\n- a\n- b\nText\n```bad\n```\n";

    let live_before = live();
    {
        let err = Parser::new().parse(input).unwrap_err();
        assert!(err.is_malformed_code_fence());
    }
    assert_eq!(live(), live_before);
}
