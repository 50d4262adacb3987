use serde::Deserialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::{Command, SizeTier};

/// Errors that can occur when parsing command script rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized action '{action}'")]
    UnrecognizedAction { line: usize, action: String },

    #[error("line {line}: {action} missing target")]
    MissingTarget { line: usize, action: String },

    #[error("line {line}: invalid quantity '{value}', expected a whole number")]
    InvalidQuantity { line: usize, value: String },

    #[error("line {line}: unknown size '{value}', expected small, medium, large or 0-2")]
    InvalidSize { line: usize, value: String },

    #[error("line {line}: invalid topping toggle '{value}', expected on or off")]
    InvalidToggle { line: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    action: String,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

/// Read commands from a csv script with an `action,target,value` header.
///
/// Rows are parsed lazily, one per `next()`, so an interactive reader only
/// blocks when the engine asks for the next command. Errors carry the line
/// the row starts on, counting blank lines and multi-line quoted fields.
pub fn read_commands(reader: impl io::Read) -> impl Iterator<Item = Result<Command, CsvError>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    // a broken header shows up again as a parse error on the first row
    let headers = reader.headers().cloned().unwrap_or_default();

    reader.into_records().map(move |result| {
        let record = result.map_err(|source| CsvError::Parse {
            line: source.position().map_or(0, line_of),
            source,
        })?;
        let line = record.position().map_or(0, line_of);
        let row = record
            .deserialize::<InputRow>(Some(&headers))
            .map_err(|source| CsvError::Parse { line, source })?;
        parse_row(line, row)
    })
}

fn line_of(position: &csv::Position) -> usize {
    position.line() as usize
}

fn parse_row(line: usize, row: InputRow) -> Result<Command, CsvError> {
    let InputRow {
        action,
        target,
        value,
    } = row;

    let require_target = |target: Option<String>| {
        target.ok_or_else(|| CsvError::MissingTarget {
            line,
            action: action.clone(),
        })
    };

    match action.as_str() {
        "menu" => Ok(Command::Menu),
        "add" => {
            let pizzas = require_target(target)?
                .split(';')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            let value = value.unwrap_or_default();
            let quantity = value
                .parse::<i64>()
                .map_err(|_| CsvError::InvalidQuantity { line, value })?;
            Ok(Command::AddToOrder { pizzas, quantity })
        }
        "size" => {
            let value = require_target(target)?;
            // indices go to the engine as is, so out of range tiers are
            // rejected there
            if let Ok(index) = value.parse::<usize>() {
                return Ok(Command::SetSize(index));
            }
            let tier = value
                .parse::<SizeTier>()
                .map_err(|_| CsvError::InvalidSize { line, value })?;
            Ok(Command::SetSize(tier.index()))
        }
        "topping" => {
            let name = require_target(target)?;
            let selected = match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
                None | Some("on") | Some("yes") | Some("true") | Some("1") => true,
                Some("off") | Some("no") | Some("false") | Some("0") => false,
                Some(_) => {
                    return Err(CsvError::InvalidToggle {
                        line,
                        value: value.unwrap_or_default(),
                    });
                }
            };
            Ok(Command::ToggleTopping { name, selected })
        }
        "summary" => Ok(Command::Summary),
        "calculate" => Ok(Command::CalculateBill),
        "clear" => Ok(Command::Clear),
        "save" => Ok(Command::Save(target.map(PathBuf::from))),
        _ => Err(CsvError::UnrecognizedAction { line, action }),
    }
}
