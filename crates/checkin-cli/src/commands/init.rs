//! The `checkin init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = Path::new("checkin.toml");
    if path.exists() {
        println!("checkin.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG).context("failed to write checkin.toml")?;
        println!("Created checkin.toml");
    }

    println!("\nNext steps:");
    println!("  1. Set admin_token in checkin.toml (or export ADMIN_TOKEN)");
    println!("  2. Run: checkin serve");
    println!("  3. Students open http://localhost:3000/, you open /admin");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# checkin configuration
# PORT and ADMIN_TOKEN environment variables override these values.

host = "0.0.0.0"
port = 3000

# Shared secret for /admin, sent as the x-admin-token header.
admin_token = "changeme123"

# Largest accepted request body, in bytes.
body_limit_bytes = 102400
"#;
