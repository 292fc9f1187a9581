// Report emission shared by the inventory-producing commands

use crate::Result;
use crate::cli::OutputArgs;
use crate::inventory::Inventory;
use crate::output::json::{generate_json, write_json_file};
use crate::output::{InventoryFormatter, OutputFormat};
use tracing::info;

/// Write the inventory to the `--json` file (if any) and to stdout
pub(crate) fn emit_inventory(output: &OutputArgs, inventory: &Inventory) -> Result<()> {
    if let Some(path) = &output.json {
        write_json_file(inventory, &path.to_string_lossy(), output.json_pretty)?;
        info!("Inventory written to {}", path.display());
    }

    if output.quiet {
        return Ok(());
    }

    match output.stdout_format() {
        OutputFormat::Terminal => {
            let formatter = InventoryFormatter::new(output.colorize(), output.verbose > 0);
            print!("{}", formatter.render(inventory));
        }
        OutputFormat::JSON => println!("{}", generate_json(inventory, false)?),
        OutputFormat::JSONPretty => println!("{}", generate_json(inventory, true)?),
    }

    Ok(())
}
