// Output module - Terminal formatting of TLS inventories
//
// Presentation only: counts and grades are taken from the inventory as
// reported, nothing is re-scored here.

use crate::inventory::{HostInventory, Inventory, PortInventory};
use crate::tls_enum::{SectionRecord, TlsVersion};
use colored::*;

/// Color a least-strength grade: A green, B/C yellow, anything else red
fn format_grade(grade: &str, colorize: bool) -> String {
    if grade.is_empty() {
        return if colorize {
            "-".dimmed().to_string()
        } else {
            "-".to_string()
        };
    }

    if !colorize {
        return grade.to_string();
    }

    match grade {
        "A" => grade.green().bold().to_string(),
        "B" | "C" => grade.yellow().to_string(),
        _ => grade.red().bold().to_string(),
    }
}

fn format_section_line(version: TlsVersion, section: &SectionRecord) -> String {
    let mut line = format!(
        "    {:<8} {:>3} cipher(s)",
        version.label(),
        section.ciphers.len()
    );

    if !section.cipher_preference.is_empty() {
        line.push_str(&format!(", {} preference", section.cipher_preference));
    }
    if !section.compressors.is_empty() {
        line.push_str(&format!(", compressors: {}", section.compressors.join(", ")));
    }

    line
}

/// Renders an [`Inventory`] for the terminal
pub struct InventoryFormatter {
    colorize: bool,
    verbose: bool,
}

impl InventoryFormatter {
    pub fn new(colorize: bool, verbose: bool) -> Self {
        Self { colorize, verbose }
    }

    pub fn render(&self, inventory: &Inventory) -> String {
        let mut output = String::new();

        for host in &inventory.hosts {
            output.push_str(&self.render_host(host));
        }

        if !inventory.failures.is_empty() {
            let title = "Failed targets";
            if self.colorize {
                output.push_str(&format!("\n{}\n", title.red().bold()));
            } else {
                output.push_str(&format!("\n{}\n", title));
            }
            for failure in &inventory.failures {
                output.push_str(&format!("  {}: {}\n", failure.target, failure.error));
            }
        }

        output.push_str(&format!(
            "\n{} host(s), {} port(s), {} with TLS data\n",
            inventory.hosts.len(),
            inventory.port_count(),
            inventory.tls_port_count()
        ));

        output
    }

    fn render_host(&self, host: &HostInventory) -> String {
        let mut title = host.ip.clone();
        if !host.hostnames.is_empty() {
            title = format!("{} ({})", host.hostnames.join(", "), host.ip);
        }

        let mut output = if self.colorize {
            format!("\n{}\n", title.cyan().bold())
        } else {
            format!("\n{}\n", title)
        };
        output.push_str(&"=".repeat(50));
        output.push('\n');

        for port in &host.ports {
            output.push_str(&self.render_port(port));
        }

        output
    }

    fn render_port(&self, port: &PortInventory) -> String {
        let mut output = format!(
            "  {}/{} {} {}  least strength: {}\n",
            port.id,
            port.protocol,
            port.state,
            port.service,
            format_grade(&port.tls.least_strength, self.colorize)
        );

        if !port.has_script_output {
            output.push_str("    no TLS data\n");
            return output;
        }

        for version in TlsVersion::ALL {
            let section = port.tls.get(version);
            if section.is_empty() {
                continue;
            }

            output.push_str(&format_section_line(version, section));
            output.push('\n');

            if self.verbose {
                for cipher in &section.ciphers {
                    output.push_str(&format!("      {}\n", cipher));
                }
            }

            for warning in &section.warnings {
                let line = format!("      ! {}", warning);
                if self.colorize {
                    output.push_str(&format!("{}\n", line.yellow()));
                } else {
                    output.push_str(&format!("{}\n", line));
                }
            }
        }

        output
    }
}
