use crate::foundation::core::Viewport;
use crate::foundation::error::{IkonaError, IkonaResult};
use crate::markup::document::{ColorToken, FillRule, IconDocument, StyledPath};

/// Parse restricted icon markup into an [`IconDocument`].
///
/// The dialect is a small self-contained subset: one optional `viewBox`
/// declaration and any number of `<path .../>` elements with `d`, `fill`,
/// `stroke`, `stroke-width` and `fill-rule` attributes. Anything else in the
/// text is ignored. A missing or malformed viewport falls back to
/// [`Viewport::DEFAULT`]; zero path elements is a genuine parse failure.
///
/// Path geometry is not validated here. Malformed path data surfaces later
/// as a rasterization no-op.
#[tracing::instrument(skip(text))]
pub fn parse_markup(text: &str) -> IkonaResult<IconDocument> {
    let viewport = scan_viewport(text);

    let mut paths = Vec::new();
    let mut pos = 0;
    while let Some((span, next)) = next_path_element(text, pos) {
        pos = next;
        // Only tags carrying geometry count as path elements.
        let Some(data) = attr_value(span, "d") else {
            continue;
        };
        paths.push(StyledPath {
            data: data.to_string(),
            fill: attr_value(span, "fill").map(ColorToken::parse),
            stroke: attr_value(span, "stroke").map(ColorToken::parse),
            stroke_width: attr_value(span, "stroke-width")
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|w| w.is_finite() && *w > 0.0),
            fill_rule: attr_value(span, "fill-rule").and_then(|raw| FillRule::parse(raw.trim())),
            opacity: None,
        });
    }

    if paths.is_empty() {
        return Err(IkonaError::markup("no path elements found"));
    }

    tracing::debug!(paths = paths.len(), "parsed icon markup");
    Ok(IconDocument { viewport, paths })
}

/// Extract the viewport from the first `viewBox` declaration.
///
/// The value must split into exactly four numeric tokens with a positive
/// finite width and height; anything else falls back to the default viewport
/// rather than failing the whole document.
fn scan_viewport(text: &str) -> Viewport {
    let Some(raw) = attr_value(text, "viewBox") else {
        return Viewport::DEFAULT;
    };

    let mut nums = [0.0f64; 4];
    let mut count = 0;
    for token in raw.split_whitespace() {
        if count == 4 {
            return Viewport::DEFAULT;
        }
        let Ok(v) = token.parse::<f64>() else {
            return Viewport::DEFAULT;
        };
        nums[count] = v;
        count += 1;
    }
    if count != 4 {
        return Viewport::DEFAULT;
    }

    let vp = Viewport {
        x: nums[0],
        y: nums[1],
        width: nums[2],
        height: nums[3],
    };
    if !vp.width.is_finite() || vp.width <= 0.0 || !vp.height.is_finite() || vp.height <= 0.0 {
        return Viewport::DEFAULT;
    }
    vp
}

/// Find the next `<path ...>` element at or after `from`.
///
/// Returns the element's full text span (through the closing `>`) and the
/// scan position to resume from. The span boundary is what keeps attribute
/// extraction scoped to a single element.
fn next_path_element(text: &str, from: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    let mut search = from;
    while let Some(rel) = text[search..].find("<path") {
        let start = search + rel;
        let after = start + "<path".len();
        search = after;

        // Tag-name boundary: reject longer names like `<pathology`.
        if after < bytes.len()
            && !bytes[after].is_ascii_whitespace()
            && bytes[after] != b'/'
            && bytes[after] != b'>'
        {
            continue;
        }

        let end = after + text[after..].find('>')?;
        return Some((&text[start..=end], end + 1));
    }
    None
}

/// Extract the quoted value of `name="..."` (or `name='...'`) within `span`.
///
/// The attribute name must stand alone: preceded by whitespace and followed
/// (modulo whitespace) by `=`. That keeps a scan for `fill` from matching
/// inside `fill-rule`, and one element's attributes from leaking into the
/// next because callers pass a single element span.
fn attr_value<'a>(span: &'a str, name: &str) -> Option<&'a str> {
    let bytes = span.as_bytes();
    let mut search = 0;
    while let Some(rel) = span[search..].find(name) {
        let start = search + rel;
        search = start + name.len();

        if start == 0 || !bytes[start - 1].is_ascii_whitespace() {
            continue;
        }

        let mut i = start + name.len();
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || (bytes[i] != b'"' && bytes[i] != b'\'') {
            continue;
        }
        let quote = bytes[i];
        i += 1;
        let vstart = i;
        while i < bytes.len() && bytes[i] != quote {
            i += 1;
        }
        if i >= bytes.len() {
            // Unterminated value; nothing usable past this point.
            return None;
        }
        return Some(&span[vstart..i]);
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/markup/parse.rs"]
mod tests;
