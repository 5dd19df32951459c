//! Area code lookup command handler

use anyhow::Result;
use erloc::area;

/// Handle the code command
pub fn handle(areas: &[String]) -> Result<()> {
    for name in areas {
        println!("{}", describe(name));
    }
    Ok(())
}

fn describe(name: &str) -> String {
    let code = area::resolve(name);
    let mut line = format!("{:<40} {:<10}", name, code.to_string());

    if code.zone.is_empty() {
        line.push_str(" (no zone match)");
    }
    if area::is_excluded(name) {
        line.push_str(" (excluded)");
    }
    line.trim_end().to_string()
}
