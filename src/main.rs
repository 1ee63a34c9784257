use crate::initialization::init;

mod config;
mod errors;
mod initialization;
mod logging;
mod manager_mail;
mod manager_notify;
mod manager_open_meteo;
mod models;
mod snowfall;
mod worker;

fn main() -> anyhow::Result<()> {
    let (config, mgr) = init()?;

    worker::run(&config, &mgr);

    Ok(())
}
