const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node<'a> {
    Open(&'a str),
    Close(&'a str),
    Empty(&'a str),
    Special(&'a str),
    Text(&'a str),
}

/// Re-indents markup one level per open element. `None` if the markup is not well nested.
pub fn indent(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('<') {
        return None;
    }

    let nodes = tokenize(trimmed)?;
    let mut lines = Vec::new();
    let mut open: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < nodes.len() {
        let depth = open.len();
        match nodes[i] {
            Node::Open(tag) => {
                let name = tag_name(tag)?;
                match (nodes.get(i + 1), nodes.get(i + 2)) {
                    (Some(Node::Text(text)), Some(Node::Close(close)))
                        if tag_name(close)? == name =>
                    {
                        lines.push(pad(depth, &format!("{tag}{text}{close}")));
                        i += 3;
                        continue;
                    }
                    (Some(Node::Close(close)), _) if tag_name(close)? == name => {
                        lines.push(pad(depth, &format!("{tag}{close}")));
                        i += 2;
                        continue;
                    }
                    _ => {
                        lines.push(pad(depth, tag));
                        open.push(name);
                    }
                }
            }
            Node::Close(tag) => {
                if open.pop()? != tag_name(tag)? {
                    return None;
                }
                lines.push(pad(open.len(), tag));
            }
            Node::Empty(tag) | Node::Special(tag) | Node::Text(tag) => {
                lines.push(pad(depth, tag));
            }
        }
        i += 1;
    }

    if !open.is_empty() {
        return None;
    }
    Some(lines.join("\n"))
}

fn pad(depth: usize, line: &str) -> String {
    format!("{}{line}", INDENT.repeat(depth))
}

fn tokenize(input: &str) -> Option<Vec<Node<'_>>> {
    let mut nodes = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        if rest.starts_with('<') {
            let end = tag_end(rest)?;
            nodes.push(classify(&rest[..end]));
            rest = &rest[end..];
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            let text = rest[..end].trim();
            if !text.is_empty() {
                nodes.push(Node::Text(text));
            }
            rest = &rest[end..];
        }
    }

    Some(nodes)
}

fn tag_end(rest: &str) -> Option<usize> {
    for (open, close) in [("<!--", "-->"), ("<![CDATA[", "]]>")] {
        if let Some(body) = rest.strip_prefix(open) {
            return body.find(close).map(|i| open.len() + i + close.len());
        }
    }

    let mut quote: Option<char> = None;
    for (i, ch) in rest.char_indices().skip(1) {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '>') => return Some(i + 1),
            (None, '<') => return None,
            _ => {}
        }
    }
    None
}

fn classify(tag: &str) -> Node<'_> {
    if tag.starts_with("</") {
        Node::Close(tag)
    } else if tag.starts_with("<?") || tag.starts_with("<!") {
        Node::Special(tag)
    } else if tag.ends_with("/>") {
        Node::Empty(tag)
    } else {
        Node::Open(tag)
    }
}

fn tag_name(tag: &str) -> Option<&str> {
    let name = tag.trim_start_matches('<').trim_start_matches('/');
    let end = name
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(name.len());
    let name = &name[..end];
    (!name.is_empty()).then_some(name)
}
