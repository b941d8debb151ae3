//! `fixtest list` — show what discovery would run

use crate::config::HarnessConfig;
use crate::loader;
use crate::util::ui;
use anyhow::Result;
use std::path::Path;

pub fn run(dir: &Path, ext: Option<String>) -> Result<()> {
    let settings = HarnessConfig::resolve(dir, None, ext)?;
    let (configs, names) = loader::load_configs(dir, &settings)?;

    for (config, name) in configs.iter().zip(&names) {
        let mut notes = vec![
            format!("{} out", config.out.len()),
            format!("{} file-eq", config.file_eq.len()),
            format!("{} remove", config.remove.len()),
        ];
        if config.run.is_none() {
            notes.push("no RUN directive".to_string());
        }
        ui::info(&format!("{}  ({})", name, notes.join(", ")));
    }

    ui::dim(&format!("{} fixture(s)", names.len()));
    Ok(())
}
