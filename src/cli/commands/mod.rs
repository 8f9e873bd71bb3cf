mod init;
mod random;
mod search;
mod show;

pub use init::cmd_init;
pub use random::cmd_random;
pub use search::cmd_search;
pub use show::cmd_show;

use crate::services::LookupError;

/// Keeps only the user-facing message. The upstream cause was logged where
/// the fetch failed and is not reported any further.
fn command_failure(err: &LookupError) -> anyhow::Error {
    anyhow::anyhow!("{err}.")
}
