mod config;
mod core;
mod domain;
mod error;
mod localize;
mod render;
mod watermark;
mod widget;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    localize::localize();
    core::app::run()?;
    Ok(())
}
