//! # Link header
//!
//! Parses the relation-tagged page links of an RFC 8288 `Link` header, e.g.
//!
//! ```text
//! <https://api.github.com/repositories/1234/commits?page=2>; rel="next",
//! <https://api.github.com/repositories/1234/commits?page=9>; rel="last"
//! ```
//!

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRel {
    pub url: Url,
    pub rel: String,
}

/// Parse a header whose link targets are absolute urls.
pub fn parse(header: &str) -> Vec<LinkRel> {
    parse_links(header, None)
}

/// Parse a header, resolving relative link targets against `base`.
pub fn parse_with_base(header: &str, base: &Url) -> Vec<LinkRel> {
    parse_links(header, Some(base))
}

/// First link tagged with `rel`, compared case-insensitively.
pub fn find_rel<'a>(links: &'a [LinkRel], rel: &str) -> Option<&'a LinkRel> {
    links.iter().find(|link| link.rel.eq_ignore_ascii_case(rel))
}

fn parse_links(header: &str, base: Option<&Url>) -> Vec<LinkRel> {
    let mut links = Vec::new();

    for entry in split_top_level(header, ',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let Some((target, params)) = split_target(entry) else {
            log::debug!("link_header::parse skipping malformed entry {:?}", entry);
            continue;
        };

        let url = match base {
            Some(base) => base.join(target),
            None => Url::parse(target),
        };
        let url = match url {
            Ok(url) => url,
            Err(err) => {
                log::debug!("link_header::parse skipping url {:?}: {}", target, err);
                continue;
            }
        };

        for rel in rel_types(params) {
            links.push(LinkRel {
                url: url.clone(),
                rel,
            });
        }
    }

    links
}

// "<url>; rel=next" -> ("url", "; rel=next")
fn split_target(entry: &str) -> Option<(&str, &str)> {
    let rest = entry.strip_prefix('<')?;
    let end = rest.find('>')?;
    Some((rest[..end].trim(), &rest[end + 1..]))
}

fn rel_types(params: &str) -> Vec<String> {
    for param in split_top_level(params, ';') {
        let param = param.trim();
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if !key.trim().eq_ignore_ascii_case("rel") {
            continue;
        }

        // Only the first rel parameter counts (RFC 8288 3.3)
        let value = value.trim().trim_matches('"');
        return value
            .split_whitespace()
            .map(|rel| rel.to_ascii_lowercase())
            .collect();
    }
    vec![]
}

/// Split on `sep`, ignoring separators inside `<...>` or double quotes.
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_angle = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' if !in_quotes => in_angle = true,
            '>' if !in_quotes => in_angle = false,
            '"' if !in_angle => in_quotes = !in_quotes,
            c if c == sep && !in_angle && !in_quotes => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}
