//! Integration tests for HTML rendering

use mdlite_core::html::escape_html;
use mdlite_core::{markdown_to_html, HtmlRenderer, ParseErrorKind, Parser};

fn render(input: &str) -> String {
    markdown_to_html(input).unwrap()
}

#[test]
fn test_render_empty() {
    assert_eq!(render(""), "");
}

#[test]
fn test_render_headings() {
    assert_eq!(render("# One\n"), "<h1>One</h1>\n");
    assert_eq!(render("### Three"), "<h3>Three</h3>\n");
}

#[test]
fn test_render_paragraphs() {
    assert_eq!(render("First\nSecond\n"), "<p>First</p>\n<p>Second</p>\n");
}

#[test]
fn test_render_inline_nodes() {
    assert_eq!(
        render("This is a [link](https://example.com) in a paragraph\n"),
        "<p>This is a <a href=\"https://example.com\">link</a> in a paragraph</p>\n"
    );
    assert_eq!(
        render("Use `mdlite dump` here\n"),
        "<p>Use <code>mdlite dump</code> here</p>\n"
    );
}

#[test]
fn test_render_list() {
    assert_eq!(
        render("- Item one\n- Item [two](/2)\n"),
        "<ul>\n<li>Item one</li>\n<li>Item <a href=\"/2\">two</a></li>\n</ul>\n"
    );
}

#[test]
fn test_render_empty_list_item() {
    assert_eq!(render("-\n"), "<ul>\n<li></li>\n</ul>\n");
}

#[test]
fn test_render_code_block() {
    assert_eq!(
        render("```\nlet x = 1;\nlet y = 2;\n```\n"),
        "<pre><code>let x = 1;\nlet y = 2;</code></pre>\n"
    );
}

#[test]
fn test_render_skips_front_matter() {
    assert_eq!(render("---\ntitle: T\n---\n# Body\n"), "<h1>Body</h1>\n");
}

#[test]
fn test_render_full_document() {
    let input = "# Title\n\nIntro with `code`.\n\n- a\n- b\n\n```\nraw\n```\n";
    let expected = "<h1>Title</h1>\n\
                    <p>Intro with <code>code</code>.</p>\n\
                    <ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\
                    <pre><code>raw</code></pre>\n";
    assert_eq!(render(input), expected);
}

#[test]
fn test_markdown_to_html_propagates_errors() {
    let err = markdown_to_html("```js\nx\n```\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MalformedCodeFence);
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_text_is_not_escaped_by_default() {
    assert_eq!(
        render("a <b>bold</b> & more\n"),
        "<p>a <b>bold</b> & more</p>\n"
    );
    assert_eq!(
        render("[x](\"><script>)\n"),
        "<p><a href=\"\"><script>\">x</a></p>\n"
    );
}

#[test]
fn test_escaping_when_enabled() {
    let input = "# A & B\n\n1 < 2 [\"q\"](/?a=1&b=2) `<T>`\n\n```\nif a > b {}\n```\n";
    let result = Parser::new().parse(input).unwrap();
    let html = HtmlRenderer::new().with_escaping(true).render(&result.document);

    assert_eq!(
        html,
        "<h1>A &amp; B</h1>\n\
         <p>1 &lt; 2 <a href=\"/?a=1&amp;b=2\">&quot;q&quot;</a> <code>&lt;T&gt;</code></p>\n\
         <pre><code>if a &gt; b {}</code></pre>\n"
    );
}

#[test]
fn test_escape_html_helper() {
    let mut out = String::from("> ");
    escape_html("plain", &mut out);
    escape_html("<&\">", &mut out);
    assert_eq!(out, "> plain&lt;&amp;&quot;&gt;");
}

#[test]
fn test_render_into_appends() {
    let result = Parser::new().parse("Body\n").unwrap();
    let mut out = String::from("<main>\n");
    HtmlRenderer::new().render_into(&result.document, &mut out);
    out.push_str("</main>\n");
    assert_eq!(out, "<main>\n<p>Body</p>\n</main>\n");
}
