use crate::{input, theme, Config};
use anyhow::Result;
use clap::Parser;
use ixmodel_core::{IndexModel, Indexes};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct SummaryCommand {
    /// JSON file with raw index descriptors (`-` for stdin)
    file: PathBuf,
}

impl SummaryCommand {
    pub(crate) fn run(self, config: &Config, out: &mut impl Write) -> Result<()> {
        let descriptors = input::read(&self.file)?;
        let indexes = super::load(config, descriptors)?;
        write_summary(&indexes, out)
    }
}

fn write_summary(indexes: &Indexes, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", theme::heading("Indexes"))?;
    writeln!(out)?;

    let sorted = indexes.sorted();
    let width = sorted
        .iter()
        .map(|index| index.id().chars().count())
        .max()
        .unwrap_or(0);

    for index in sorted {
        writeln!(out, "  {}", line(index, width))?;
    }

    for rejected in indexes.rejected() {
        writeln!(
            out,
            "  {} record #{}: {}",
            theme::rejected_prefix(),
            rejected.position,
            rejected.error.root()
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "  {} indexes, {} rejected",
        indexes.len(),
        indexes.rejected().len()
    )?;
    Ok(())
}

fn line(index: &IndexModel, width: usize) -> String {
    let properties: Vec<String> = index
        .properties()
        .into_iter()
        .map(|property| theme::property(property.as_str()).to_string())
        .collect();

    let size = match index.relative_size() {
        Some(relative) => format!("{:>5.1}%", relative),
        None => "     -".to_string(),
    };

    // Pad before styling; escape codes would throw the width off.
    let kind = index.index_type();
    let kind = theme::index_kind(kind, format!("{:<10}", kind.as_str()));

    format!(
        "{:<width$}  {}  {:<8}  {}  {}",
        index.id(),
        kind,
        index.cardinality().as_str(),
        size,
        properties.join(", "),
        width = width,
    )
    .trim_end()
    .to_string()
}
