//! Email host statistics
//!
//! Reads newline-delimited JSON user records and counts, per email host,
//! the users whose host belongs to a requested top-level domain.
//!
//! ```rust
//! use coursework_domainstat::get_domain_stat;
//!
//! let input = r#"{"Id":1,"Email":"RoseSmith@Browsecat.com"}
//! {"Id":2,"Email":"mLynch@broWsecat.com"}
//! {"Id":3,"Email":"5Moore@Teklist.net"}"#;
//!
//! let stat = get_domain_stat(input.as_bytes(), "com").unwrap();
//! assert_eq!(stat.get("browsecat.com"), Some(&2));
//! assert_eq!(stat.len(), 1);
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Host (lowercased) to number of users with an email there.
pub type DomainStat = BTreeMap<String, u64>;

#[derive(Error, Debug)]
pub enum DomainStatError {
    #[error("domain must not be empty")]
    EmptyDomain,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// The only field of a user record that matters here. Everything else in
/// the record is ignored.
#[derive(Debug, Deserialize)]
struct UserRecord {
    #[serde(rename = "Email", default)]
    email: String,
}

/// Tally email hosts ending in `.domain` across JSON-lines `reader`.
///
/// Matching is case-insensitive and hosts are reported lowercased. Blank
/// lines are skipped; records without an `Email` field count as no match.
///
/// # Errors
///
/// Fails on an empty `domain`, on read errors, and on the first line that
/// is not a JSON object.
pub fn get_domain_stat<R: BufRead>(reader: R, domain: &str) -> Result<DomainStat, DomainStatError> {
    let domain = domain.trim().trim_start_matches('.').to_lowercase();
    if domain.is_empty() {
        return Err(DomainStatError::EmptyDomain);
    }
    let suffix = format!(".{domain}");

    let mut stat = DomainStat::new();
    let mut records = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let user: UserRecord =
            serde_json::from_str(&line).map_err(|source| DomainStatError::MalformedRecord {
                line: index + 1,
                source,
            })?;
        records += 1;

        if let Some(host) = matching_host(&user.email, &suffix) {
            *stat.entry(host).or_default() += 1;
        }
    }

    debug!(domain = %domain, records, hosts = stat.len(), "Tallied email hosts");
    Ok(stat)
}

fn matching_host(email: &str, suffix: &str) -> Option<String> {
    let (_, host) = email.split_once('@')?;
    let host = host.to_lowercase();
    host.ends_with(suffix).then_some(host)
}
