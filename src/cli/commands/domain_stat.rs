use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

use crate::CourseworkError;
use crate::domainstat::get_domain_stat;

/// Count email hosts under `domain`, reading records from `file` or stdin.
///
/// Plain output is one `host count` pair per line, sorted by host.
pub fn execute_domain_stat_command(domain: &str, file: Option<&Path>, json: bool) -> Result<()> {
    let stat = match file {
        Some(path) => {
            let file = File::open(path)
                .map_err(CourseworkError::from)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            get_domain_stat(BufReader::new(file), domain)
        }
        None => get_domain_stat(io::stdin().lock(), domain),
    }
    .map_err(CourseworkError::from)?;

    debug!(domain = %domain, hosts = stat.len(), "Computed domain statistics");

    if json {
        let json =
            serde_json::to_string_pretty(&stat).context("Failed to emit domain stat JSON")?;
        println!("{json}");
    } else {
        for (host, count) in &stat {
            println!("{host} {count}");
        }
    }

    Ok(())
}
