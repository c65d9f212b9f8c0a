// src/render/template.rs
//! Fixed Graphviz styling. Layout is left entirely to the renderer.

pub const GRAPH_NAME: &str = "dependency-cruiser output";

pub const GRAPH_ATTRS: &str = r##"rankdir="LR" splines="true" overlap="false" nodesep="0.16" ranksep="0.18" fontname="Helvetica-bold" fontsize="9" style="rounded,bold,filled" fillcolor="#ffffff" compound="true""##;

pub const NODE_ATTRS: &str = r##"node [shape="box" style="rounded, filled" height="0.2" color="black" fillcolor="#ffffcc" fontcolor="black" fontname="Helvetica" fontsize="9"]"##;

pub const EDGE_ATTRS: &str = r##"edge [arrowhead="normal" arrowsize="0.6" penwidth="2.0" color="#00000033" fontname="Helvetica" fontsize="9"]"##;

/// Style for the queried technology.
pub const HIGHLIGHT_ATTRS: &str = r##"fillcolor="#00ff00" fontcolor="black""##;

/// Quotes `s` as a DOT string literal.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("Bronze Working"), "\"Bronze Working\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(r#"a "b" \c"#), r#""a \"b\" \\c""#);
        assert_eq!(quote("x\ny"), "\"x\\ny\"");
    }
}
