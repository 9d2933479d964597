//! Exporting a parsed comment to JSON.
//!
//! Run with: cargo run --example json_export

use docblock::parse;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let comment = "/**\n\
                   \x20* Builds the widget report.\n\
                   \x20*\n\
                   \x20* @param  array $filters['status'] which widgets to include\n\
                   \x20* @return string rendered report body\n\
                   \x20* @author Jane Doe <jane@example.com>\n\
                   \x20*/";

    let block = parse(comment)?;

    // Every node type is Serialize; empty directive fields are omitted
    let json = serde_json::to_string_pretty(&block)?;
    println!("{json}");

    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["nodes"][1]["directive"]["tag"], "param");
    assert_eq!(value["nodes"][1]["directive"]["var"], "filters['status']");
    println!("\n✓ JSON export successful");

    Ok(())
}
