//! Pretty printer for [`Element`] trees.

use quick_xml::escape::{escape, partial_escape};

use super::{Element, Format};

/// HTML elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "link", "meta"];

/// HTML elements whose text is emitted as-is.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub(super) fn render(element: &Element, format: Format) -> String {
    let mut ctx = RenderContext {
        out: String::new(),
        format,
    };
    walk_element(element, &mut ctx, 0);
    ctx.out
}

struct RenderContext {
    out: String,
    format: Format,
}

impl RenderContext {
    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str("  ");
        }
    }
}

fn walk_element(element: &Element, ctx: &mut RenderContext, depth: usize) {
    ctx.out.push('<');
    ctx.out.push_str(element.name);
    for (key, value) in &element.attributes {
        ctx.out.push(' ');
        ctx.out.push_str(key);
        ctx.out.push_str("=\"");
        ctx.out.push_str(&escape(value.as_str()));
        ctx.out.push('"');
    }

    let text = element.text.as_deref();
    if element.children.is_empty() && text.is_none_or(str::is_empty) {
        close_empty(element.name, ctx);
        return;
    }
    ctx.out.push('>');

    if let Some(text) = text {
        if ctx.format == Format::Presentational && RAW_TEXT_ELEMENTS.contains(&element.name) {
            ctx.out.push_str(text);
        } else {
            ctx.out.push_str(&partial_escape(text));
        }
    }

    for (i, child) in element.children.iter().enumerate() {
        // Whitespace before the first child would become part of the text.
        if i > 0 || text.is_none() {
            ctx.newline(depth + 1);
        }
        walk_element(child, ctx, depth + 1);
    }
    if !element.children.is_empty() {
        ctx.newline(depth);
    }

    ctx.out.push_str("</");
    ctx.out.push_str(element.name);
    ctx.out.push('>');
}

fn close_empty(name: &str, ctx: &mut RenderContext) {
    match ctx.format {
        Format::Structured => ctx.out.push_str("/>"),
        Format::Presentational if VOID_ELEMENTS.contains(&name) => ctx.out.push('>'),
        Format::Presentational => {
            ctx.out.push_str("></");
            ctx.out.push_str(name);
            ctx.out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_structured() {
        let el = Element::new("chapter").with_attr("id", "4").with_attr("end", "fail");
        assert_eq!(render(&el, Format::Structured), r#"<chapter id="4" end="fail"/>"#);
    }

    #[test]
    fn test_empty_element_presentational() {
        assert_eq!(render(&Element::new("ul"), Format::Presentational), "<ul></ul>");
        assert_eq!(render(&Element::new("hr"), Format::Presentational), "<hr>");
    }

    #[test]
    fn test_indents_children_without_text() {
        let el = Element::new("ul")
            .with_child(Element::new("li").with_text("a"))
            .with_child(Element::new("li").with_text("b"));

        assert_eq!(
            render(&el, Format::Presentational),
            "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_first_child_follows_text() {
        let el = Element::new("chapter")
            .with_text("Dark.")
            .with_child(Element::new("action").with_text("Run"))
            .with_child(Element::new("action").with_text("Hide"));

        assert_eq!(
            render(&el, Format::Structured),
            "<chapter>Dark.<action>Run</action>\n  <action>Hide</action>\n</chapter>"
        );
    }

    #[test]
    fn test_escaping() {
        let el = Element::new("action")
            .with_attr("target", "a\"b&c")
            .with_text("<Fight> & 'flee'");

        assert_eq!(
            render(&el, Format::Structured),
            r#"<action target="a&quot;b&amp;c">&lt;Fight&gt; &amp; 'flee'</action>"#
        );
    }

    #[test]
    fn test_script_text_is_raw() {
        let el = Element::new("script").with_text("if (a < b && c) {}");

        assert_eq!(
            render(&el, Format::Presentational),
            "<script>if (a < b && c) {}</script>"
        );
        assert_eq!(
            render(&el, Format::Structured),
            "<script>if (a &lt; b &amp;&amp; c) {}</script>"
        );
    }
}
