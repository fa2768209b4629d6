// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_creole_content(size: usize) -> String {
    let base = "= Title =\n\n== Section ==\n\nParagraph with **some** //content// and a [[Link|link]].\n\n* Bullet point\n** Nested item\n* Another item\n\n|=Name|=Value|\n|a|1|\n\n{{{\nfn example() {\n    println!(\"Hello\");\n}\n}}}\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        for level in 1..=depth {
            let prefix: String = (0..level)
                .map(|l| if l % 2 == 0 { '*' } else { '#' })
                .collect();
            content.push_str(&format!("{prefix} item {i} at level {level}\n"));
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy(paragraphs: usize) -> String {
    let line = "Text with **bold //italic __under__// done**, ##code##, http://example.com/x, \
                {{img.png|alt}}, <<<macro>>>, ~** escaped and a -- dash.\n";
    let mut content = String::new();
    for _ in 0..paragraphs {
        content.push_str(&line.repeat(5));
        content.push('\n');
    }
    content
}
