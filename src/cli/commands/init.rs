use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    match Config::create_default_if_missing()? {
        Some(path) => println!("Created default config at {}", path.display()),
        None => println!("config.toml already exists, leaving it untouched"),
    }
    Ok(())
}
