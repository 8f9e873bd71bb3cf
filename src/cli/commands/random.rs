use crate::cli::render::{ViewMode, render_detail};
use crate::services::{LookupError, LookupService};

pub async fn cmd_random(service: &LookupService) -> anyhow::Result<()> {
    match service.get_random().await {
        Ok(drink) => {
            print!("{}", render_detail(&drink, ViewMode::ListFromRandom));
            Ok(())
        }
        Err(e @ LookupError::NoRandomDrink) => {
            println!("{e}, try again.");
            Ok(())
        }
        Err(e) => Err(super::command_failure(&e)),
    }
}
