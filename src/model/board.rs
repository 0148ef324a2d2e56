use crate::model::message::Message;

/// Number of tiles revealed per pagination step.
pub const PAGE_SIZE: usize = 6;

/// The tile store: every tile currently on the wall, in display order,
/// plus the fixed dataset pagination draws from.
///
/// Order of `records` is the only ranking mechanism; reorders, sorts and
/// appends all work by rewriting it. Each mutation runs to completion
/// inside one event handler, so there is no interior locking.
#[derive(Debug, Clone)]
pub struct Board {
    /// The dataset as loaded at startup. Never mutated; source of truth
    /// for "original order" and for pagination's unconsumed tail.
    dataset: Vec<Message>,
    /// The visible store.
    records: Vec<Message>,
    /// Whether pagination can still grow the store. Recomputed after
    /// every mutation as `records.len() < dataset.len()`.
    has_more: bool,
}

impl Board {
    /// Seed the store with the first page of the dataset.
    pub fn new(dataset: Vec<Message>) -> Self {
        let first = dataset.len().min(PAGE_SIZE);
        let records = dataset[..first].to_vec();
        let has_more = records.len() < dataset.len();
        Board {
            dataset,
            records,
            has_more,
        }
    }

    pub fn records(&self) -> &[Message] {
        &self.records
    }

    pub fn dataset(&self) -> &[Message] {
        &self.dataset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reveal the next page. Returns the number of tiles appended.
    ///
    /// The page is sliced from the *original* dataset at the current store
    /// length. If the store was sorted or manually appended to first, the
    /// new tiles still arrive from that offset in dataset order; tests
    /// pin this.
    pub fn load_more(&mut self) -> usize {
        if self.records.len() >= self.dataset.len() {
            self.has_more = false;
            return 0;
        }
        let start = self.records.len();
        let end = (start + PAGE_SIZE).min(self.dataset.len());
        self.records.extend_from_slice(&self.dataset[start..end]);
        self.has_more = self.records.len() < self.dataset.len();
        end - start
    }

    /// Append one tile to the end of the store.
    pub fn push(&mut self, message: Message) {
        self.records.push(message);
        self.has_more = self.records.len() < self.dataset.len();
    }

    /// Replace the whole store. Reorder uses this after flattening the
    /// grouped view back into a flat sequence.
    pub fn replace_records(&mut self, records: Vec<Message>) {
        self.records = records;
        self.has_more = self.records.len() < self.dataset.len();
    }

    /// Sort the store ascending by date. The sort is stable: tiles with
    /// equal dates keep their prior relative order.
    pub fn sort_by_date(&mut self) {
        self.records.sort_by_key(|m| m.date);
    }

    /// Replace the store with a copy of the full dataset in its original
    /// order, discarding every reorder, sort, and appended tile. After
    /// this the unconsumed tail is empty, so `has_more` is false.
    pub fn restore_original(&mut self) {
        self.records = self.dataset.clone();
        self.has_more = self.records.len() < self.dataset.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::message::parse_date;
    use pretty_assertions::assert_eq;

    fn msg(date: &str, text: &str) -> Message {
        Message::new(parse_date(date).unwrap(), text)
    }

    /// Four tiles, two years, deliberately out of date order.
    fn sample_dataset() -> Vec<Message> {
        vec![
            msg("2021-06-21", "message D"),
            msg("2020-06-18", "message A"),
            msg("2021-06-20", "message C"),
            msg("2020-06-19", "message B"),
        ]
    }

    /// `n` tiles with strictly increasing dates, labeled by index.
    fn numbered_dataset(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| {
                let date = parse_date("2022-01-01").unwrap() + chrono::Days::new(i as u64);
                Message::new(date, format!("tile {i}"))
            })
            .collect()
    }

    #[test]
    fn test_new_seeds_first_page() {
        let board = Board::new(numbered_dataset(14));
        assert_eq!(board.len(), 6);
        assert_eq!(board.records(), &board.dataset()[..6]);
        assert!(board.has_more());
    }

    #[test]
    fn test_new_small_dataset_fits_in_one_page() {
        let board = Board::new(sample_dataset());
        assert_eq!(board.len(), 4);
        assert!(!board.has_more());
    }

    #[test]
    fn test_new_empty_dataset() {
        let board = Board::new(Vec::new());
        assert!(board.is_empty());
        assert!(!board.has_more());
    }

    #[test]
    fn test_load_more_walks_to_the_end() {
        let mut board = Board::new(numbered_dataset(14));
        assert_eq!(board.load_more(), 6);
        assert_eq!(board.len(), 12);
        assert!(board.has_more());

        assert_eq!(board.load_more(), 2);
        assert_eq!(board.len(), 14);
        assert_eq!(board.records(), board.dataset());
        assert!(!board.has_more());
    }

    #[test]
    fn test_load_more_exact_page_multiple() {
        // 12 = 2 pages exactly; has_more flips false the moment the last
        // tile arrives, not one call later.
        let mut board = Board::new(numbered_dataset(12));
        assert_eq!(board.load_more(), 6);
        assert_eq!(board.len(), 12);
        assert!(!board.has_more());
    }

    #[test]
    fn test_load_more_after_exhaustion_is_noop() {
        let mut board = Board::new(sample_dataset());
        let before = board.records().to_vec();
        assert_eq!(board.load_more(), 0);
        assert_eq!(board.load_more(), 0);
        assert_eq!(board.records(), &before);
        assert!(!board.has_more());
    }

    #[test]
    fn test_push_appends_at_end() {
        let mut board = Board::new(sample_dataset());
        board.push(msg("2019-01-01", "message E"));
        assert_eq!(board.len(), 5);
        assert_eq!(board.records()[4], msg("2019-01-01", "message E"));
        // Store outgrew the dataset; nothing left to page in.
        assert!(!board.has_more());
    }

    #[test]
    fn test_push_shifts_the_pagination_window() {
        // Appending while a tail is unconsumed advances the slice offset,
        // so one dataset tile is skipped by the next load. This test
        // pins that.
        let mut board = Board::new(numbered_dataset(14));
        board.push(msg("2030-01-01", "extra"));
        assert_eq!(board.len(), 7);
        assert!(board.has_more());

        board.load_more();
        assert_eq!(board.len(), 13);
        let texts: Vec<&str> = board.records().iter().map(|m| m.message.as_str()).collect();
        assert!(!texts.contains(&"tile 6"));
        assert_eq!(&board.records()[7..], &board.dataset()[7..13]);
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let mut board = Board::new(sample_dataset());
        board.sort_by_date();
        let texts: Vec<&str> = board.records().iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["message A", "message B", "message C", "message D"]);
    }

    #[test]
    fn test_sort_by_date_is_stable() {
        let mut board = Board::new(vec![
            msg("2021-03-03", "later"),
            msg("2021-01-01", "first of pair"),
            msg("2021-01-01", "second of pair"),
        ]);
        board.sort_by_date();
        let texts: Vec<&str> = board.records().iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["first of pair", "second of pair", "later"]);
    }

    #[test]
    fn test_sort_then_load_more_appends_original_tail() {
        // Sorting the visible page does not re-aim pagination: the next
        // page still comes from the dataset at the store-length offset,
        // in dataset order.
        let mut board = Board::new(numbered_dataset(14));
        let mut shuffled = board.records().to_vec();
        shuffled.reverse();
        board.replace_records(shuffled);
        board.sort_by_date();

        board.load_more();
        assert_eq!(board.len(), 12);
        assert_eq!(&board.records()[6..], &board.dataset()[6..12]);
    }

    #[test]
    fn test_restore_original_resets_everything() {
        let mut board = Board::new(numbered_dataset(14));
        board.load_more();
        board.sort_by_date();
        board.push(msg("2030-01-01", "extra"));

        board.restore_original();
        assert_eq!(board.records(), board.dataset());
        assert!(!board.has_more());
    }

    #[test]
    fn test_restore_is_idempotent_through_sort() {
        let mut board = Board::new(sample_dataset());
        board.restore_original();
        board.sort_by_date();
        board.restore_original();
        assert_eq!(board.records(), board.dataset());
    }
}
