use super::params::sanitize_param_name;
use serde::Serialize;

/// How many path segments a capture may span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Wildcard {
    /// `*`: exactly one segment, rendered `:name`
    Single,
    /// `**`: any number of segments, rendered `*name`
    Double,
}

impl Wildcard {
    /// Router-syntax sigil for a capture of this depth.
    #[must_use]
    pub fn sigil(self) -> char {
        match self {
            Wildcard::Single => ':',
            Wildcard::Double => '*',
        }
    }

    #[must_use]
    pub fn is_wildcard(self) -> bool {
        self == Wildcard::Double
    }
}

/// One typed piece of a path template.
///
/// A template is split into literal text and brace fragments in a single
/// left-to-right scan; every brace fragment is classified on its own, so no
/// recognizer can ever match inside the output of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Text outside any `{...}` fragment, kept as written
    Literal { text: String },
    /// `{name}`, `{name=*}` or `{name=**}`
    Capture { name: String, depth: Wildcard },
    /// `{name=literal/*}` or `{name=literal/**}`
    PrefixedCapture {
        name: String,
        prefix: String,
        depth: Wildcard,
    },
    /// `{name=literal}`: the literal is routed, the parameter is dropped
    Fixed { name: String, literal: String },
    /// A brace fragment matching none of the supported forms. Rendered verbatim
    /// and registers no parameter.
    Unrecognized { raw: String },
}

impl Segment {
    /// Parameter registered by this segment, if any.
    #[must_use]
    pub fn param(&self) -> Option<(&str, bool)> {
        match self {
            Segment::Capture { name, depth } | Segment::PrefixedCapture { name, depth, .. } => {
                Some((name.as_str(), depth.is_wildcard()))
            }
            _ => None,
        }
    }

    /// Append the router-syntax rendering of this segment to `out`.
    ///
    /// Rendered captures always carry their own leading separator; duplicate
    /// separators are collapsed afterwards by normalization.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Segment::Literal { text } => out.push_str(text),
            Segment::Capture { name, depth } => {
                out.push('/');
                out.push(depth.sigil());
                out.push_str(name);
            }
            Segment::PrefixedCapture {
                name,
                prefix,
                depth,
            } => {
                out.push('/');
                out.push_str(prefix);
                out.push('/');
                out.push(depth.sigil());
                out.push_str(name);
            }
            Segment::Fixed { literal, .. } => {
                out.push('/');
                out.push_str(literal);
            }
            Segment::Unrecognized { raw } => out.push_str(raw),
        }
    }
}

/// Split a raw template into typed segments.
///
/// A fragment runs from `{` to the next `}`. An unclosed `{` turns the rest of
/// the template into a single [`Segment::Unrecognized`].
#[must_use]
pub fn tokenize(template: &str) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(template.matches('{').count() * 2 + 1);
    let mut rest = template;

    while !rest.is_empty() {
        let Some(open) = rest.find('{') else {
            segments.push(Segment::Literal {
                text: rest.to_string(),
            });
            break;
        };
        if open > 0 {
            segments.push(Segment::Literal {
                text: rest[..open].to_string(),
            });
        }

        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            segments.push(Segment::Unrecognized {
                raw: rest[open..].to_string(),
            });
            break;
        };

        let body = &after_open[..close];
        let raw = &rest[open..open + close + 2];
        segments.push(classify(body).unwrap_or_else(|| Segment::Unrecognized {
            raw: raw.to_string(),
        }));
        rest = &after_open[close + 1..];
    }

    segments
}

/// Classify the text between braces into one of the five supported forms.
fn classify(body: &str) -> Option<Segment> {
    let Some((raw_name, pattern)) = body.split_once('=') else {
        if body.is_empty() {
            return None;
        }
        return Some(Segment::Capture {
            name: sanitize_param_name(body),
            depth: Wildcard::Single,
        });
    };
    if raw_name.is_empty() {
        return None;
    }
    let name = sanitize_param_name(raw_name);

    match pattern {
        "**" => Some(Segment::Capture {
            name,
            depth: Wildcard::Double,
        }),
        "*" => Some(Segment::Capture {
            name,
            depth: Wildcard::Single,
        }),
        _ => {
            if let Some((prefix, depth)) = split_prefixed(pattern) {
                Some(Segment::PrefixedCapture {
                    name,
                    prefix: prefix.to_string(),
                    depth,
                })
            } else if !pattern.is_empty() && !pattern.contains(['*', '/']) {
                Some(Segment::Fixed {
                    name,
                    literal: pattern.to_string(),
                })
            } else {
                None
            }
        }
    }
}

/// `literal/<stars>` where the literal is non-empty and star-free. Exactly two
/// stars is a multi-segment capture; any other star run is single-segment.
fn split_prefixed(pattern: &str) -> Option<(&str, Wildcard)> {
    let without_stars = pattern.trim_end_matches('*');
    let stars = pattern.len() - without_stars.len();
    if stars == 0 {
        return None;
    }
    let prefix = without_stars.strip_suffix('/')?;
    if prefix.is_empty() || prefix.contains('*') {
        return None;
    }
    let depth = if stars == 2 {
        Wildcard::Double
    } else {
        Wildcard::Single
    };
    Some((prefix, depth))
}
