use anyhow::{Context, Result};
use chrono::DateTime;
use fvchain_api::types::{BlockInfo, TransactionInfo};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct BlockRow {
    #[tabled(rename = "Height")]
    #[serde(rename = "Height")]
    height: u64,
    #[tabled(rename = "Hash")]
    #[serde(rename = "Hash")]
    hash: String,
    #[tabled(rename = "Time")]
    #[serde(rename = "Time")]
    time: String,
    #[tabled(rename = "Txs")]
    #[serde(rename = "Txs")]
    transactions: u64,
    #[tabled(rename = "Miner")]
    #[serde(rename = "Miner")]
    miner: String,
}

#[derive(Tabled, Serialize)]
struct TransactionRow {
    #[tabled(rename = "Hash")]
    #[serde(rename = "Hash")]
    hash: String,
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    #[serde(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Fee")]
    #[serde(rename = "Fee")]
    fee: String,
    #[tabled(rename = "Block")]
    #[serde(rename = "Block")]
    block: u64,
    #[tabled(rename = "Time")]
    #[serde(rename = "Time")]
    time: String,
}

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_block_rows(blocks: &[BlockInfo]) -> Vec<BlockRow> {
    blocks
        .iter()
        .map(|b| BlockRow {
            height: b.height,
            hash: b.hash.clone(),
            time: format_timestamp(b.timestamp),
            transactions: b.transactions_count,
            miner: b.miner.clone(),
        })
        .collect()
}

fn build_transaction_rows(transactions: &[TransactionInfo]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            hash: t.hash.clone(),
            from: t.from_address.clone(),
            to: t.to_address.clone(),
            amount: format_amount(t.amount),
            fee: format_amount(t.fee),
            block: t.block_height,
            time: format_timestamp(t.timestamp),
        })
        .collect()
}

/// One row per top-level field. Non-objects become a single `value` row.
fn build_field_rows(value: &serde_json::Value) -> Vec<FieldRow> {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(k, v)| FieldRow {
                field: k.clone(),
                value: format_json_value(v),
            })
            .collect(),
        other => vec![FieldRow {
            field: "value".to_string(),
            value: format_json_value(other),
        }],
    }
}

fn decode_blocks(raw: &[serde_json::Value]) -> Result<Vec<BlockInfo>> {
    raw.iter()
        .map(|b| BlockInfo::from_value(b).context("unexpected block record from node"))
        .collect()
}

fn decode_transactions(raw: &[serde_json::Value]) -> Result<Vec<TransactionInfo>> {
    raw.iter()
        .map(|t| TransactionInfo::from_value(t).context("unexpected transaction record from node"))
        .collect()
}

// -- Rendering --

fn print_rows<T: Tabled + Serialize>(rows: Vec<T>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

/// Prints raw block items; tabular formats show the common block fields.
pub fn print_blocks(blocks: &[serde_json::Value], format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(&blocks);
        return Ok(());
    }
    print_rows(build_block_rows(&decode_blocks(blocks)?), format)
}

/// Prints raw transaction items; tabular formats show the common fields.
pub fn print_transactions(transactions: &[serde_json::Value], format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(&transactions);
        return Ok(());
    }
    print_rows(
        build_transaction_rows(&decode_transactions(transactions)?),
        format,
    )
}

/// Prints any serializable record as a field/value listing or as JSON.
pub fn print_record<T: Serialize>(record: &T, format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(record);
        return Ok(());
    }
    let value = serde_json::to_value(record)?;
    print_rows(build_field_rows(&value), format)
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_timestamp(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(dt) if ts > 0 => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => "-".to_string(),
    }
}

fn format_amount(amount: f64) -> String {
    let s = format!("{:.8}", amount);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{} FVC", s)
}

fn format_json_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
