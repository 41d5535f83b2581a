//! Text rendering of the board for read access

use crate::kanban::{Board, Card, ColumnId};

/// Format one card with its checklist
///
/// # Arguments
/// * `index` - Position of the card in its column
/// * `card` - The card to format
/// * `blocked` - Whether the card's checklist is locked
pub fn format_card(index: usize, card: &Card, blocked: bool) -> String {
    let mut result = format!(
        "- [{}] {} ({}% complete{})\n",
        index,
        card.title,
        card.completion(),
        if blocked { ", blocked" } else { "" }
    );
    for (i, item) in card.list.iter().enumerate() {
        result.push_str(&format!(
            "    {}. [{}] {}\n",
            i,
            if item.done { "x" } else { " " },
            item.text
        ));
    }
    if card.is_complete()
        && let Some(ref stamp) = card.completed_at
    {
        result.push_str(&format!("  Completed at: {}\n", stamp));
    }
    result
}

/// Format every column of the board
pub fn format_board(board: &Board) -> String {
    let mut result = String::new();
    for column in ColumnId::ALL {
        let cards = board.cards(column);
        result.push_str(&format!("{}: {} card(s)\n", column, cards.len()));
        for (index, card) in cards.iter().enumerate() {
            result.push_str(&format_card(index, card, board.is_card_blocked(column, index)));
        }
        result.push('\n');
    }
    if board.block_first_column() {
        result.push_str(
            "The first column is blocked: new cards and moving all cards are disabled until the second column has free space.\n",
        );
    }
    result.trim_end().to_string()
}
