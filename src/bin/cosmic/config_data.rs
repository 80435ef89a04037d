use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

const CONFIG_SAMPLE: &str = r#"# Text shown when a post has no rich-text content
[render]
no_content_text = "No content available."

# If you want a location relative to the executable directory
# use ${exe_dir}/location
[paths]
categories_file = "${exe_dir}/categories.json"

[log]
level = "Info"
log_to_console = false
"#;

pub(crate) fn write_sample_cfg(file_path: &Path) -> Result<()> {
    let mut file = File::create(file_path)
        .with_context(|| format!("Error creating {}", file_path.display()))?;
    file.write_all(CONFIG_SAMPLE.as_bytes())?;
    Ok(())
}
