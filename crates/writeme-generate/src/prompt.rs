use std::fmt::Write;

use writeme_core::ProjectDescriptor;

const INSTRUCTIONS: &str = "\
Analyse this codebase and generate a comprehensive README.md file. \
Focus on being clear, concise, and helpful for developers.";

const README_OUTLINE: &str = "\
Generate a README.md that includes:
1. Project Title and Description
2. Technologies Used
3. Project Structure
4. Main Features (based on code analysis)
5. How to Run/Setup
6. API Endpoints (if it's a web application)

Make it professional but approachable. Use proper markdown formatting.";

/// Build the README generation prompt for an analysed project.
///
/// Sections come in a fixed order: instructions, name, description,
/// structure, key classes and methods, then the README outline. User text
/// is interpolated verbatim. Files with no classes and no methods are left
/// out of the key classes section.
///
/// # Examples
///
/// ```
/// use writeme_core::{FileDescriptor, ProjectDescriptor};
/// use writeme_generate::prompt::build_prompt;
///
/// let project = ProjectDescriptor::new(
///     "Demo",
///     "A test",
///     "```\n└── Main.java\n```",
///     vec![FileDescriptor::new("Main.java", "", vec!["Main".into()], vec![])],
/// );
/// let prompt = build_prompt(&project);
/// assert!(prompt.contains("Project name: Demo"));
/// assert!(prompt.contains("  Class: Main"));
/// assert!(!prompt.contains("Method:"));
/// ```
pub fn build_prompt(project: &ProjectDescriptor) -> String {
    let mut prompt = String::new();
    prompt.push_str(INSTRUCTIONS);
    prompt.push_str("\n\n");

    let _ = writeln!(prompt, "Project name: {}", project.name());
    let _ = writeln!(prompt, "Project description: {}", project.description());
    let _ = writeln!(
        prompt,
        "Project structure (exclude unnecessary items):\n{}",
        project.structure()
    );

    prompt.push_str("Key classes and methods:\n");
    for file in project.files().iter().filter(|f| f.has_symbols()) {
        let _ = writeln!(prompt, "File: {}", file.name());
        for class in file.classes() {
            let _ = writeln!(prompt, "  Class: {class}");
        }
        for method in file.methods() {
            let _ = writeln!(prompt, "  Method: {method}");
        }
    }

    prompt.push('\n');
    prompt.push_str(README_OUTLINE);
    prompt
}
