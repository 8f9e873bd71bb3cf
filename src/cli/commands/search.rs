use crate::cli::render::render_list;
use crate::services::{LookupError, LookupService};

pub async fn cmd_search(
    service: &LookupService,
    query: &str,
    non_alcoholic: bool,
) -> anyhow::Result<()> {
    match service.search(query, non_alcoholic).await {
        Ok(drinks) => {
            print!("{}", render_list(&drinks, query));
            Ok(())
        }
        Err(LookupError::InvalidInput) => {
            println!("Please enter a search term.");
            Ok(())
        }
        Err(e) => Err(super::command_failure(&e)),
    }
}
