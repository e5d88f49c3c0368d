/// Class and method names pulled out of one file.
///
/// # Examples
///
/// ```
/// use writeme_analysis::metadata::extract_metadata;
///
/// let meta = extract_metadata("public class Foo {\n    public static void main(String[] args) {\n");
/// assert_eq!(meta.classes, vec!["Foo"]);
/// assert_eq!(meta.methods, vec!["main"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMetadata {
    /// Declared type names, in line order.
    pub classes: Vec<String>,
    /// Declared method names, in line order.
    pub methods: Vec<String>,
}

/// Scan `content` line by line for public class and method declarations.
///
/// This is a heuristic, not a parser: there is no brace matching, no
/// multi-line joining, and comments or string literals are treated like
/// code, so `// make this public via call(x)` reports a method named `call`.
/// Both checks run on every line; one line can yield a class and a method.
pub fn extract_metadata(content: &str) -> FileMetadata {
    let mut meta = FileMetadata::default();

    for line in content.split('\n') {
        let line = line.trim();

        if line.starts_with("public class") {
            if let Some(name) = class_name(line) {
                meta.classes.push(name);
            }
        }

        if line.contains("public") && line.contains('(') && line.contains(')') {
            if let Some(name) = method_name(line) {
                meta.methods.push(name);
            }
        }
    }

    meta
}

/// Token after `class`, cut at the first `{`.
///
/// `None` when no token is exactly `class`, nothing follows it, or the
/// cut leaves an empty name.
fn class_name(line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    tokens.find(|t| *t == "class")?;
    let next = tokens.next()?;
    let name = next.split('{').next().unwrap_or_default().trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Last token before the first `(`, but only with more than two tokens.
///
/// `public Service(Repo repo)` has two tokens and is skipped, so
/// constructors never show up as methods.
fn method_name(line: &str) -> Option<String> {
    let paren = line.find('(')?;
    let tokens: Vec<&str> = line[..paren].split_whitespace().collect();
    if tokens.len() > 2 {
        tokens.last().map(|t| t.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_class_line_yields_type() {
        let meta = extract_metadata("public class Foo {");
        assert_eq!(meta.classes, vec!["Foo"]);
        assert!(meta.methods.is_empty());
    }

    #[test]
    fn brace_glued_to_name_is_cut() {
        let meta = extract_metadata("public class Foo{");
        assert_eq!(meta.classes, vec!["Foo"]);
    }

    #[test]
    fn class_with_extends_takes_token_after_class() {
        let meta = extract_metadata("public class Dog extends Animal implements Pet {");
        assert_eq!(meta.classes, vec!["Dog"]);
    }

    #[test]
    fn indented_class_is_trimmed_first() {
        let meta = extract_metadata("    public class Inner {   ");
        assert_eq!(meta.classes, vec!["Inner"]);
    }

    #[test]
    fn non_public_or_modified_classes_are_ignored() {
        let content = "class Hidden {\npublic final class Sealed {\npublic abstract class Base {";
        let meta = extract_metadata(content);
        assert!(meta.classes.is_empty());
    }

    #[test]
    fn prefix_match_without_class_token_yields_nothing() {
        let meta = extract_metadata("public classic Thing {\npublic class");
        assert!(meta.classes.is_empty());
    }

    #[test]
    fn brace_right_after_class_yields_nothing() {
        let meta = extract_metadata("public class {\npublic class {Foo");
        assert!(meta.classes.is_empty());
    }

    #[test]
    fn four_token_method_yields_name() {
        let meta = extract_metadata("public static void main(String[] args) {");
        assert_eq!(meta.methods, vec!["main"]);
    }

    #[test]
    fn two_token_method_yields_nothing() {
        let meta = extract_metadata("public run()");
        assert!(meta.methods.is_empty());
    }

    #[test]
    fn void_method_counts_three_tokens() {
        let meta = extract_metadata("public void run()");
        assert_eq!(meta.methods, vec!["run"]);
    }

    #[test]
    fn three_token_method_yields_name() {
        let meta = extract_metadata("public String getName() {");
        assert_eq!(meta.methods, vec!["getName"]);
    }

    #[test]
    fn method_needs_both_parentheses() {
        let meta = extract_metadata("public static void start(\n    int port) {");
        assert!(meta.methods.is_empty());
    }

    #[test]
    fn public_and_parens_anywhere_trigger_the_heuristic() {
        // A call in a comment still matches; only the text before '(' counts.
        let meta = extract_metadata("// make this public via the helper call(x)");
        assert_eq!(meta.methods, vec!["call"]);
    }

    #[test]
    fn class_line_with_parens_yields_class_and_method() {
        let meta = extract_metadata("public class Point(int x, int y) {");
        assert_eq!(meta.classes, vec!["Point(int"]);
        assert_eq!(meta.methods, vec!["Point"]);
    }

    #[test]
    fn constructor_with_two_tokens_is_skipped() {
        let meta = extract_metadata("public Service(Repo repo) {");
        assert!(meta.methods.is_empty());
    }

    #[test]
    fn order_and_duplicates_are_kept() {
        let content = "\
public class A {
    public void set x(int v) {
    public static int count() {
    public static int count() {
}
public class A {";
        let meta = extract_metadata(content);
        assert_eq!(meta.classes, vec!["A", "A"]);
        assert_eq!(meta.methods, vec!["x", "count", "count"]);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let meta = extract_metadata("public class Win {\r\n    public static void go() {\r\n");
        assert_eq!(meta.classes, vec!["Win"]);
        assert_eq!(meta.methods, vec!["go"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let content = "public class Foo {\n    public static void main(String[] a) {}\n}";
        assert_eq!(extract_metadata(content), extract_metadata(content));
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert_eq!(extract_metadata(""), FileMetadata::default());
    }
}
