use console::{style, StyledObject};
use ixmodel_core::IndexKind;

/// Styles an index type label for terminal output
pub(crate) fn index_kind(kind: IndexKind, label: String) -> StyledObject<String> {
    let label = style(label);
    match kind {
        IndexKind::Geospatial => label.green(),
        IndexKind::Hashed => label.magenta(),
        IndexKind::Text => label.yellow(),
        IndexKind::Regular => label.dim(),
    }
}

pub(crate) fn heading(text: &str) -> StyledObject<&str> {
    style(text).cyan().bold().underlined()
}

pub(crate) fn property(text: &'static str) -> StyledObject<&'static str> {
    style(text).cyan()
}

pub(crate) fn rejected_prefix() -> StyledObject<&'static str> {
    style("✖").red().bold()
}
