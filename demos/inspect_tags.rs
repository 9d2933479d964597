//! Walking a parsed comment and grouping directives by tag.
//!
//! Run with: cargo run --example inspect_tags

use docblock::{parse, TagFamily};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let comment = "/**\n\
                   \x20* Connection pool for the storage backend.\n\
                   \x20*\n\
                   \x20* @property-write int  $timeout seconds before giving up\n\
                   \x20* @property       bool $lazy\n\
                   \x20* @method         bool reconnect() drops and redials\n\
                   \x20* @author         Jane Doe <jane@example.com>\n\
                   \x20* @access         private\n\
                   \x20* @link           example.com/pool, example.com/backends\n\
                   \x20*/";

    let block = parse(comment)?;

    // Group directives by tag, in first-occurrence order
    for (tag, group) in block.by_tag() {
        println!("@{tag} ({} occurrence(s))", group.len());
        for directive in group {
            match directive.family() {
                TagFamily::Variable | TagFamily::Typed => {
                    println!("  types: {:?}", directive.info().types);
                    if let Some(var) = &directive.info().var {
                        println!("  var:   ${var}");
                    }
                }
                TagFamily::Author => {
                    println!("  name:  {:?}", directive.info().name);
                    println!("  email: {:?}", directive.info().email);
                }
                TagFamily::Access => {
                    println!("  access: {:?}", directive.info().access);
                }
                TagFamily::Link | TagFamily::License => {
                    for uri in &directive.info().uris {
                        println!("  uri:   {uri}");
                    }
                }
                _ => {}
            }
            if let Some(text) = &directive.info().text {
                println!("  text:  {}", text.as_str());
            }
        }
        println!();
    }

    // Direct lookups work too
    let by_tag = block.by_tag();
    assert!(by_tag.contains_key("access"));
    assert_eq!(by_tag["link"][0].info().uris.len(), 2);
    println!("✓ Lookup by tag successful");

    Ok(())
}
