//! Reader for the `.lvl` text format, the same way the game splits it.
//!
//! A document is a run of levels, each introduced by `---\n`, followed by the
//! level name, a `--\n` plane separator and one line per tile row. Anything
//! after the last row that is not another level separator ends the document.

use crate::export::{LEVEL_SEPARATOR, PLANE_SEPARATOR};

/// One level block of a `.lvl` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LvlLevel {
    /// Display name line.
    pub name: String,
    /// Tile rows, one character per cell.
    pub rows: Vec<String>,
}

fn is_plane_tile(c: char) -> bool {
    c != '-' && c != '#' && c != '\n'
}

/// Split `.lvl` text into levels. Returns `None` when a level header is cut short.
pub fn parse_lvl(text: &str) -> Option<Vec<LvlLevel>> {
    let mut levels = Vec::new();
    let mut rest = text;

    while let Some(after_sep) = rest.strip_prefix(LEVEL_SEPARATOR) {
        let (name, after_name) = after_sep.split_once('\n')?;
        let mut body = after_name.strip_prefix(PLANE_SEPARATOR)?;

        let mut rows = Vec::new();
        while body.chars().next().is_some_and(is_plane_tile) {
            let (row, next) = body.split_once('\n')?;
            rows.push(row.to_owned());
            body = next;
        }

        levels.push(LvlLevel {
            name: name.to_owned(),
            rows,
        });
        rest = body;
    }

    Some(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_levels_and_rows() {
        let text = "---\nLevel One\n--\nWWW\nWPG\n---\nLevel Two\n--\n<>\n[]\nFF\n\n";
        let levels = parse_lvl(text).expect("parse");

        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].name, "Level One");
        assert_eq!(levels[0].rows, vec!["WWW", "WPG"]);
        assert_eq!(levels[1].rows, vec!["<>", "[]", "FF"]);
    }

    #[test]
    fn blank_line_ends_a_plane() {
        let levels = parse_lvl("---\nA\n--\n\nW\n").expect("parse");
        assert!(levels[0].rows.is_empty());
    }

    #[test]
    fn truncated_header_is_rejected() {
        assert_eq!(parse_lvl("---\nLevel One"), None);
        assert_eq!(parse_lvl("---\nLevel One\nWW\n"), None);
        assert_eq!(parse_lvl("---\nLevel One\n--\nWW"), None);
    }

    #[test]
    fn empty_document_has_no_levels() {
        assert_eq!(parse_lvl("\n"), Some(vec![]));
        assert_eq!(parse_lvl(""), Some(vec![]));
    }
}
