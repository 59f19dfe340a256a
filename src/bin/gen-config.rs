use std::{fs::OpenOptions, io::Write};

use xrandr_geometry::config::Config;

/// Generate a default config
fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let cf = Config::default();
    log::info!("Writing default config:\n{}", cf);
    let s = cf.to_toml_string()?;
    let mut f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open("./config.toml")?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
