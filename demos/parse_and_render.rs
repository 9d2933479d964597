//! Basic doc comment parsing and rendering.
//!
//! Run with: cargo run --example parse_and_render

use docblock::{parse, render};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let comment = "/**\n\
                   \x20* Counts the widgets left in a storage bin.\n\
                   \x20*\n\
                   \x20* Counting is linear in bin size; see\n\
                   \x20* {@link http://example.com/docs/bins} before calling this in a loop.\n\
                   \x20*\n\
                   \x20* @param  string   $bin   which bin to count\n\
                   \x20* @param  int|null $limit stop after this many\n\
                   \x20* @return int\n\
                   \x20*/";

    // Parse into a tree
    let block = parse(comment)?;
    println!(
        "Parsed {} nodes: {} paragraphs, {} directives\n",
        block.len(),
        block.paragraphs().count(),
        block.directives().count()
    );

    // Render back as annotated markup
    let markup = render(comment)?;
    println!("Markup output:\n{}\n", markup);

    assert!(markup.contains("<span class=\"variable\">$bin</span>"));
    println!("✓ Variable span present");

    Ok(())
}
