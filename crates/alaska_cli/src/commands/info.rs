//! Service info command.

use super::GlobalOpts;
use anyhow::Result;
use console::style;

/// Print the service description.
pub fn run(opts: &GlobalOpts) -> Result<()> {
    let client = opts.client()?;
    let response = client.user_get_info()?;

    println!(
        "{} {}",
        style("Service:").bold(),
        style(client.config().info_url()).cyan()
    );
    println!("{}", response.body().trim_end());
    Ok(())
}
