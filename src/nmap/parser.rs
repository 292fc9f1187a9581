// Nmap Normal Format Parser
// Parses nmap -oN output, including the `|` prefixed script blocks

use super::{ScanRun, ScannedHost, ScannedPort, ScriptOutput};

const HOST_PREFIX: &str = "Nmap scan report for ";

/// Parse nmap normal output into hosts, ports and per-port script text
///
/// Unrecognized lines are skipped, so truncated or interleaved reports
/// produce whatever could be read rather than an error. Host-level script
/// results are ignored.
pub fn parse_normal_output(content: &str) -> ScanRun {
    let mut run = ScanRun::default();
    let mut in_port_scripts = false;

    for line in content.lines() {
        // Skip comments and empty lines
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(HOST_PREFIX) {
            run.hosts.push(parse_host_line(rest));
            in_port_scripts = false;
            continue;
        }

        let Some(host) = run.hosts.last_mut() else {
            continue;
        };

        if line.starts_with("Host script results:") {
            in_port_scripts = false;
            continue;
        }

        if let Some(port) = parse_port_line(line) {
            host.ports.push(port);
            in_port_scripts = true;
            continue;
        }

        if !in_port_scripts {
            continue;
        }

        let Some(content) = strip_script_prefix(line) else {
            // Any other line ends the port's script block
            in_port_scripts = false;
            continue;
        };

        let Some(port) = host.ports.last_mut() else {
            continue;
        };

        if let Some((id, inline)) = parse_script_header(content) {
            port.scripts.push(ScriptOutput {
                id: id.to_string(),
                output: inline.to_string(),
            });
        } else if let Some(script) = port.scripts.last_mut() {
            if !script.output.is_empty() {
                script.output.push('\n');
            }
            script.output.push_str(content.strip_prefix(' ').unwrap_or(content));
        }
    }

    run
}

/// `example.com (93.184.216.34)` or a bare address
fn parse_host_line(rest: &str) -> ScannedHost {
    let rest = rest.trim();

    if let Some((name, addr)) = rest.split_once(" (")
        && let Some(ip) = addr.strip_suffix(')')
    {
        return ScannedHost {
            ip: ip.to_string(),
            hostnames: vec![name.to_string()],
            ports: Vec::new(),
        };
    }

    ScannedHost {
        ip: rest.to_string(),
        hostnames: Vec::new(),
        ports: Vec::new(),
    }
}

/// `443/tcp open  https`
fn parse_port_line(line: &str) -> Option<ScannedPort> {
    let mut parts = line.split_whitespace();
    let (port, protocol) = parts.next()?.split_once('/')?;
    let id = port.parse::<u16>().ok()?;

    if !matches!(protocol, "tcp" | "udp" | "sctp") {
        return None;
    }

    let state = parts.next()?.to_string();
    let service = parts.next().unwrap_or_default().to_string();

    Some(ScannedPort {
        id,
        protocol: protocol.to_string(),
        state,
        service,
        scripts: Vec::new(),
    })
}

/// Text after the `|` or `|_` script prefix
fn strip_script_prefix(line: &str) -> Option<&str> {
    line.strip_prefix("|_").or_else(|| line.strip_prefix('|'))
}

/// A script header sits at most one space after the prefix and looks like
/// `ssl-enum-ciphers:` optionally followed by inline output. Deeper lines
/// belong to the current script body. Script ids are lowercase, which keeps
/// continuation lines such as `| Issuer: ...` in the body.
fn parse_script_header(content: &str) -> Option<(&str, &str)> {
    let unindented = content.strip_prefix(' ').unwrap_or(content);
    if unindented.starts_with(' ') {
        return None;
    }

    let (id, inline) = unindented.split_once(':')?;
    let is_script_id = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'));

    if is_script_id {
        Some((id, inline.trim()))
    } else {
        None
    }
}
