use crate::moves::Move;
use crate::rules::MoveFacts;

/// An applied move and the facts it was accepted with.
#[derive(Clone, PartialEq, Debug)]
pub struct HistoryEntry {
    pub mv: Move,
    pub facts: MoveFacts,
}

/// The moves applied so far, plus the line undone since the last new move.
///
/// Entries before the cursor are applied; entries at or after it can be
/// redone. Equality only looks at the applied part.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an applied move. Replaying the next undone move keeps the
    /// rest of the undone line; any other move discards it.
    pub fn push(&mut self, entry: HistoryEntry) {
        match self.entries.get(self.cursor) {
            Some(next) if next.mv == entry.mv => self.entries[self.cursor] = entry,
            _ => {
                self.entries.truncate(self.cursor);
                self.entries.push(entry);
            }
        }
        self.cursor += 1;
    }

    /// Steps back over the latest applied entry and returns it.
    pub fn rewind(&mut self) -> Option<HistoryEntry> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.entries[self.cursor].clone())
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.applied().last()
    }

    /// The entry `redo` would replay.
    pub fn next_redo(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn applied(&self) -> &[HistoryEntry] {
        &self.entries[..self.cursor]
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.applied().iter().map(|entry| entry.mv)
    }

    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    pub fn redo_len(&self) -> usize {
        self.entries.len() - self.cursor
    }
}

impl PartialEq for MoveHistory {
    fn eq(&self, other: &Self) -> bool {
        self.applied() == other.applied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::coord;

    fn entry(mv: Move) -> HistoryEntry {
        HistoryEntry {
            mv,
            facts: MoveFacts::unset(),
        }
    }

    #[test]
    fn test_rewind_and_replay() {
        let a1 = Move::place(Color::White, coord!("a1"));
        let b1 = Move::place(Color::Black, coord!("b1"));
        let mut history = MoveHistory::new();
        history.push(entry(a1));
        history.push(entry(b1));

        assert_eq!(history.rewind().map(|e| e.mv), Some(b1));
        assert_eq!(history.rewind().map(|e| e.mv), Some(a1));
        assert_eq!(history.rewind(), None);
        assert_eq!(history.redo_len(), 2);

        // replaying the undone line keeps what follows it
        history.push(entry(a1));
        assert_eq!(history.next_redo().map(|e| e.mv), Some(b1));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_new_move_discards_undone_line() {
        let mut history = MoveHistory::new();
        history.push(entry(Move::place(Color::White, coord!("a1"))));
        history.push(entry(Move::place(Color::Black, coord!("b1"))));
        history.rewind();

        let c1 = Move::place(Color::Black, coord!("c1"));
        history.push(entry(c1));
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.last().map(|e| e.mv), Some(c1));
    }

    #[test]
    fn test_equality_ignores_undone_line() {
        let a1 = Move::place(Color::White, coord!("a1"));
        let mut with_redo = MoveHistory::new();
        with_redo.push(entry(a1));
        with_redo.push(entry(Move::place(Color::Black, coord!("b1"))));
        with_redo.rewind();

        let mut plain = MoveHistory::new();
        plain.push(entry(a1));
        assert_eq!(with_redo, plain);
    }
}
