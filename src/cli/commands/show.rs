use crate::cli::render::{ViewMode, render_detail};
use crate::services::{LookupError, LookupService};

pub async fn cmd_show(service: &LookupService, id: &str) -> anyhow::Result<()> {
    match service.get_detail(id).await {
        Ok(drink) => {
            print!("{}", render_detail(&drink, ViewMode::ListFromSearch));
            Ok(())
        }
        Err(LookupError::NotFound(id)) => {
            println!("No drink with ID {id}. Use 'barback search' to find IDs.");
            Ok(())
        }
        Err(LookupError::InvalidInput) => {
            println!("Usage: barback show <id>");
            Ok(())
        }
        Err(e) => Err(super::command_failure(&e)),
    }
}
