use anyhow::{Result, bail};

use mailfilter_lib::{Reason, Strictness, Verdict};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct OutputRow {
    pub email: String,
    pub strictness: u8,
    pub fake: bool,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reason: Option<Reason>,
}

impl OutputRow {
    pub fn new(email: String, strictness: Strictness, verdict: Verdict) -> Self {
        Self {
            email,
            strictness: strictness.level(),
            fake: verdict.is_fake(),
            reason: verdict.reason(),
        }
    }
}

pub fn write_reports(rows: &[OutputRow], format: &str) -> Result<()> {
    match format {
        "human" => write_human(rows),
        "json" => write_json(rows),
        "ndjson" => write_ndjson(rows),
        other => bail!("unknown --format '{other}', use: human|json|ndjson"),
    }
}

pub fn any_fake(rows: &[OutputRow]) -> bool {
    rows.iter().any(|row| row.fake)
}

fn write_human(rows: &[OutputRow]) -> Result<()> {
    for row in rows {
        match row.reason {
            Some(reason) => println!("[FAKE]  {} :: {reason}", row.email),
            None => println!("[OK]    {}", row.email),
        }
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[OutputRow]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[OutputRow]) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[OutputRow]) -> Result<()> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[OutputRow]) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}
