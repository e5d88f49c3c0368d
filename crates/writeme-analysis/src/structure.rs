use std::fmt::Write;

const BRANCH: &str = "\u{251c}\u{2500}\u{2500} ";
const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500} ";
const INDENT: &str = "    ";
const FENCE: &str = "```";

/// Render upload paths as an ASCII directory tree inside a fenced code block.
///
/// Paths are sorted byte-wise and split on `/`. A segment is printed unless
/// the previously rendered path starts with the segment's joined prefix, so
/// shared ancestors appear once. The final segment of a path gets `└── `,
/// intermediate segments get `├── `; siblings are never looked ahead at.
///
/// The prefix check is textual, not per segment: after `"ab-long/x"` the
/// `ab` line of `"ab/y"` is suppressed even though the two paths share no
/// directory.
///
/// # Examples
///
/// ```
/// use writeme_analysis::structure::render_structure;
///
/// let tree = render_structure(["src/Main.java", "pom.xml"]);
/// assert_eq!(
///     tree,
///     "```\n└── pom.xml\n├── src\n    └── Main.java\n```"
/// );
/// ```
pub fn render_structure<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = paths.into_iter().map(|p| p.as_ref().to_string()).collect();
    sorted.sort();

    let mut out = String::new();
    out.push_str(FENCE);
    out.push('\n');

    let mut previous = "";
    for path in &sorted {
        let segments = split_segments(path);

        for (depth, segment) in segments.iter().enumerate() {
            let prefix = segments[..=depth].join("/");
            if previous.starts_with(&prefix) {
                continue;
            }
            let glyph = if depth + 1 == segments.len() {
                LAST_BRANCH
            } else {
                BRANCH
            };
            let _ = writeln!(out, "{}{glyph}{segment}", INDENT.repeat(depth));
        }
        previous = path;
    }

    out.push_str(FENCE);
    out
}

/// Split on `/`, dropping trailing empty segments.
///
/// The empty path stays a single empty segment; a path made only of
/// slashes has no segments.
fn split_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').collect();
    if path.is_empty() {
        return segments;
    }
    while segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}
