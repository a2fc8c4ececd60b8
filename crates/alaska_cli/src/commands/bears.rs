//! Bear record commands.

use super::GlobalOpts;
use alaska_core::{BearRecord, BearType};
use anyhow::{bail, Context, Result};
use console::style;

/// List all bears.
pub fn list(opts: &GlobalOpts, format: &str) -> Result<()> {
    let client = opts.client()?;
    let bears = client.user_view_all_bears()?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&bears)?),
        "text" => {
            if bears.is_empty() {
                println!("{}", style("No bears.").dim());
            }
            for bear in &bears {
                print_bear(bear);
            }
            println!();
            println!("{} bear(s)", style(bears.len()).cyan());
        }
        other => bail!("Unknown format: {} (expected text or json)", other),
    }
    Ok(())
}

/// Show one bear.
pub fn get(opts: &GlobalOpts, id: u64) -> Result<()> {
    let client = opts.client()?;
    let response = client.user_get_one_bear(id)?;
    let bear: BearRecord = response
        .json()
        .with_context(|| format!("Bear {} is not a valid record", id))?;
    print_bear(&bear);
    Ok(())
}

/// Create a bear.
pub fn create(opts: &GlobalOpts, bear_type: &str, name: &str, age: f64) -> Result<()> {
    let bear_type: BearType = bear_type.parse()?;
    let client = opts.client()?;
    let response = client.user_create_bear(bear_type, name, age)?;

    println!(
        "{} Created {} {} (age {})",
        style("✓").green(),
        bear_type,
        style(name).bold(),
        age
    );
    print_body(response.body());
    Ok(())
}

/// Replace a bear's fields.
pub fn update(opts: &GlobalOpts, id: u64, bear_type: &str, name: &str, age: f64) -> Result<()> {
    let bear_type: BearType = bear_type.parse()?;
    let client = opts.client()?;
    let response = client.user_update_bear(id, bear_type, name, age)?;

    println!("{} Updated bear {}", style("✓").green(), style(id).cyan());
    print_body(response.body());
    Ok(())
}

/// Delete one bear.
pub fn delete(opts: &GlobalOpts, id: u64) -> Result<()> {
    let client = opts.client()?;
    client.user_delete_one_bear(id)?;
    println!("{} Deleted bear {}", style("✓").green(), style(id).cyan());
    Ok(())
}

/// Delete every bear.
pub fn clean(opts: &GlobalOpts) -> Result<()> {
    let client = opts.client()?;
    client.user_clean_all_bears()?;
    println!("{} All bears deleted", style("✓").green());
    Ok(())
}

fn print_bear(bear: &BearRecord) {
    println!(
        "  {:>6}  {:<6} {:<20} {}",
        style(bear.bear_id).cyan(),
        bear.bear_type,
        style(&bear.bear_name).bold(),
        bear.bear_age
    );
}

fn print_body(body: &str) {
    let body = body.trim();
    if !body.is_empty() {
        println!("  {}", style(body).dim());
    }
}
