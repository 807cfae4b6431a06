//! Itinerary Partition
//!
//! The full board state: an insertion-ordered map from column name to the
//! ordered cards scheduled for that day. Card ids are unique across the whole
//! board, so the map is a true partition of the cards, never a multiset.
//!
//! Every operation either applies completely or leaves the partition
//! untouched; validation failures come back as [`BoardError`] so the caller
//! decides whether to surface them (duplicate names) or swallow them as
//! no-ops (lookup misses during a drag).

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Reserved name given to a freshly added column until the user renames it.
pub const PENDING_COLUMN_NAME: &str = "New Column";

/// Column seeded on first load when the service has no data for this trip.
pub const DEFAULT_COLUMN_NAME: &str = "default";

/// A place pinned to the itinerary.
///
/// Field names on the wire (`placeID`, `img`) follow the persistence
/// service's stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "placeID")]
    pub place_id: String,
    /// Opaque image reference from the place lookup, if any.
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A place resolved by the map/places collaborator. The board consumes this
/// shape as-is and never performs geocoding or photo retrieval itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSelection {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "placeID")]
    pub place_id: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Card {
    /// Build a card from a resolved place. The caller supplies the id,
    /// normally [`Partition::next_card_id`].
    pub fn from_selection(id: u32, place: PlaceSelection) -> Self {
        Self {
            id,
            name: place.name,
            address: place.address,
            latitude: place.latitude,
            longitude: place.longitude,
            place_id: place.place_id,
            thumbnail: place.photo,
        }
    }

    /// Hand the card's location back to the place-lookup collaborator,
    /// e.g. to pin it on the map.
    pub fn to_selection(&self) -> PlaceSelection {
        PlaceSelection {
            name: self.name.clone(),
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            place_id: self.place_id.clone(),
            photo: self.thumbnail.clone(),
        }
    }
}

/// The board state. Serializes to a JSON object keyed by column name, each
/// value the ordered card array, exactly as the service stores it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    columns: IndexMap<String, Vec<Card>>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition for a trip with no saved data: one empty default column.
    pub fn seeded() -> Self {
        let mut partition = Self::new();
        partition
            .columns
            .insert(DEFAULT_COLUMN_NAME.to_string(), Vec::new());
        partition
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in display (insertion) order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Columns with their cards, in display order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Card])> {
        self.columns.iter().map(|(name, cards)| (name.as_str(), cards.as_slice()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn cards(&self, column: &str) -> Option<&[Card]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    /// Name of the column currently holding the card.
    pub fn column_of(&self, card_id: u32) -> Option<&str> {
        self.columns
            .iter()
            .find(|(_, cards)| cards.iter().any(|c| c.id == card_id))
            .map(|(name, _)| name.as_str())
    }

    pub fn card(&self, card_id: u32) -> Option<&Card> {
        self.columns
            .values()
            .flat_map(|cards| cards.iter())
            .find(|c| c.id == card_id)
    }

    pub fn contains_card(&self, card_id: u32) -> bool {
        self.card(card_id).is_some()
    }

    /// Position of the card within the named column.
    pub fn index_of_card(&self, column: &str, card_id: u32) -> Option<usize> {
        self.columns
            .get(column)?
            .iter()
            .position(|c| c.id == card_id)
    }

    /// Lowest positive id not in use anywhere on the board, so ids freed by
    /// deletion get reused.
    pub fn next_card_id(&self) -> u32 {
        let used: HashSet<u32> = self
            .columns
            .values()
            .flat_map(|cards| cards.iter().map(|c| c.id))
            .collect();
        let mut id = 1;
        while used.contains(&id) {
            id += 1;
        }
        id
    }

    /// Reorder one column: take the card at `from` and re-insert it at `to`.
    /// Equal indices are a no-op.
    pub fn move_card_within_column(
        &mut self,
        column: &str,
        from: usize,
        to: usize,
    ) -> Result<(), BoardError> {
        let cards = self
            .columns
            .get_mut(column)
            .ok_or_else(|| BoardError::UnknownColumn(column.to_string()))?;
        let out_of_range = |index| BoardError::IndexOutOfRange {
            column: column.to_string(),
            index,
        };
        if from >= cards.len() {
            return Err(out_of_range(from));
        }
        if to >= cards.len() {
            return Err(out_of_range(to));
        }
        if from != to {
            let card = cards.remove(from);
            cards.insert(to, card);
        }
        Ok(())
    }

    /// Move a card out of `from` into `to`, at `to_index` or appended.
    /// Re-applying with the card already in `to` changes nothing.
    pub fn move_card_across_columns(
        &mut self,
        card_id: u32,
        from: &str,
        to: &str,
        to_index: Option<usize>,
    ) -> Result<(), BoardError> {
        if !self.columns.contains_key(to) {
            return Err(BoardError::UnknownColumn(to.to_string()));
        }
        if from == to {
            return Ok(());
        }
        let source = self
            .columns
            .get_mut(from)
            .ok_or_else(|| BoardError::UnknownColumn(from.to_string()))?;
        let Some(position) = source.iter().position(|c| c.id == card_id) else {
            // Card concurrently moved or deleted: leave the partition as-is,
            // it still holds the card at most once.
            return Err(BoardError::UnknownCard(card_id));
        };
        let card = source.remove(position);
        let target = self
            .columns
            .get_mut(to)
            .ok_or_else(|| BoardError::UnknownColumn(to.to_string()))?;
        match to_index {
            Some(index) if index < target.len() => target.insert(index, card),
            _ => target.push(card),
        }
        Ok(())
    }

    /// Rename a column, keeping its position and cards. Renaming to its own
    /// name is a no-op; renaming onto another existing column is rejected.
    pub fn rename_column(&mut self, old: &str, new: &str) -> Result<(), BoardError> {
        if old == new {
            return Ok(());
        }
        if !self.columns.contains_key(old) {
            return Err(BoardError::UnknownColumn(old.to_string()));
        }
        if self.columns.contains_key(new) {
            return Err(BoardError::NameTaken(new.to_string()));
        }
        let columns = std::mem::take(&mut self.columns);
        self.columns = columns
            .into_iter()
            .map(|(name, cards)| {
                if name == old {
                    (new.to_string(), cards)
                } else {
                    (name, cards)
                }
            })
            .collect();
        Ok(())
    }

    /// Append an empty column. Adding while a same-named column exists is
    /// rejected; when that column is the unrenamed placeholder the error
    /// prompts for a rename first.
    pub fn add_column(&mut self, name: &str) -> Result<(), BoardError> {
        if self.columns.contains_key(name) {
            if name == PENDING_COLUMN_NAME {
                return Err(BoardError::PendingColumnUnrenamed);
            }
            return Err(BoardError::NameTaken(name.to_string()));
        }
        self.columns.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Remove a column and every card in it. Cards are discarded, not
    /// migrated elsewhere.
    pub fn delete_column(&mut self, name: &str) -> Result<(), BoardError> {
        self.columns
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| BoardError::UnknownColumn(name.to_string()))
    }

    /// Remove a card from whichever column holds it. Absent cards are a
    /// silent no-op; returns whether anything was removed.
    pub fn delete_card(&mut self, card_id: u32) -> bool {
        let before: usize = self.columns.values().map(Vec::len).sum();
        for cards in self.columns.values_mut() {
            cards.retain(|c| c.id != card_id);
        }
        let after: usize = self.columns.values().map(Vec::len).sum();
        if before == after {
            log::warn!("delete_card: card {card_id} not on the board");
        }
        before != after
    }

    /// Append a card to the named column. The id must not already be in use
    /// anywhere, see [`Partition::next_card_id`].
    pub fn insert_card(&mut self, column: &str, card: Card) -> Result<(), BoardError> {
        if self.contains_card(card.id) {
            return Err(BoardError::DuplicateCardId(card.id));
        }
        let cards = self
            .columns
            .get_mut(column)
            .ok_or_else(|| BoardError::UnknownColumn(column.to_string()))?;
        cards.push(card);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(id: u32, name: &str) -> Card {
        Card {
            id,
            name: name.to_string(),
            address: format!("{name} street 1"),
            latitude: 25.03,
            longitude: 121.56,
            place_id: format!("place-{id}"),
            thumbnail: None,
        }
    }

    fn board(columns: &[(&str, &[u32])]) -> Partition {
        let mut partition = Partition::new();
        for (name, ids) in columns {
            partition.add_column(name).unwrap();
            for id in *ids {
                partition
                    .insert_card(name, make_card(*id, &format!("site {id}")))
                    .unwrap();
            }
        }
        partition
    }

    fn ids(partition: &Partition, column: &str) -> Vec<u32> {
        partition
            .cards(column)
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect()
    }

    /// Every card id appears in exactly one column.
    fn assert_partition_invariant(partition: &Partition) {
        let mut seen = HashSet::new();
        for (_, cards) in partition.columns() {
            for card in cards {
                assert!(seen.insert(card.id), "card {} appears twice", card.id);
            }
        }
    }

    #[test]
    fn test_move_within_column() {
        let mut p = board(&[("Day1", &[1, 2, 3])]);
        p.move_card_within_column("Day1", 2, 0).unwrap();
        assert_eq!(ids(&p, "Day1"), vec![3, 1, 2]);
        assert_partition_invariant(&p);
    }

    #[test]
    fn test_move_within_column_same_index_is_noop() {
        let mut p = board(&[("Day1", &[1, 2, 3])]);
        p.move_card_within_column("Day1", 1, 1).unwrap();
        assert_eq!(ids(&p, "Day1"), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_within_column_out_of_range_leaves_state() {
        let mut p = board(&[("Day1", &[1, 2])]);
        let err = p.move_card_within_column("Day1", 0, 5).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 5, .. }));
        assert_eq!(ids(&p, "Day1"), vec![1, 2]);
    }

    #[test]
    fn test_move_across_columns_appends() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2])]);
        p.move_card_across_columns(1, "Day1", "Day2", None).unwrap();
        assert_eq!(ids(&p, "Day1"), Vec::<u32>::new());
        assert_eq!(ids(&p, "Day2"), vec![2, 1]);
        assert_partition_invariant(&p);
    }

    #[test]
    fn test_move_across_columns_at_index() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2, 3])]);
        p.move_card_across_columns(1, "Day1", "Day2", Some(0))
            .unwrap();
        assert_eq!(ids(&p, "Day2"), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_across_columns_missing_card_leaves_state() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[])]);
        let err = p
            .move_card_across_columns(9, "Day1", "Day2", None)
            .unwrap_err();
        assert_eq!(err, BoardError::UnknownCard(9));
        assert_eq!(ids(&p, "Day1"), vec![1]);
        assert_partition_invariant(&p);
    }

    #[test]
    fn test_move_across_same_column_is_noop() {
        let mut p = board(&[("Day1", &[1, 2])]);
        p.move_card_across_columns(1, "Day1", "Day1", None).unwrap();
        assert_eq!(ids(&p, "Day1"), vec![1, 2]);
    }

    #[test]
    fn test_rename_column_keeps_position() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2]), ("Day3", &[])]);
        p.rename_column("Day2", "Beach day").unwrap();
        let names: Vec<&str> = p.column_names().collect();
        assert_eq!(names, vec!["Day1", "Beach day", "Day3"]);
        assert_eq!(ids(&p, "Beach day"), vec![2]);
    }

    #[test]
    fn test_rename_to_taken_name_rejected() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2])]);
        let err = p.rename_column("Day1", "Day2").unwrap_err();
        assert_eq!(err, BoardError::NameTaken("Day2".to_string()));
        let names: Vec<&str> = p.column_names().collect();
        assert_eq!(names, vec!["Day1", "Day2"]);
        assert_eq!(ids(&p, "Day1"), vec![1]);
    }

    #[test]
    fn test_rename_to_own_name_is_noop() {
        let mut p = board(&[("Day1", &[1])]);
        p.rename_column("Day1", "Day1").unwrap();
        assert_eq!(ids(&p, "Day1"), vec![1]);
    }

    #[test]
    fn test_add_pending_column_twice_rejected() {
        let mut p = Partition::seeded();
        p.add_column(PENDING_COLUMN_NAME).unwrap();
        let err = p.add_column(PENDING_COLUMN_NAME).unwrap_err();
        assert_eq!(err, BoardError::PendingColumnUnrenamed);
        assert_eq!(p.column_count(), 2);
    }

    #[test]
    fn test_delete_column_drops_cards() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2])]);
        p.delete_column("Day1").unwrap();
        let names: Vec<&str> = p.column_names().collect();
        assert_eq!(names, vec!["Day2"]);
        assert!(!p.contains_card(1));
        assert!(p.contains_card(2));
    }

    #[test]
    fn test_delete_card_from_owning_column() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2, 3])]);
        assert!(p.delete_card(3));
        assert_eq!(ids(&p, "Day2"), vec![2]);
        assert!(!p.delete_card(3));
        assert_partition_invariant(&p);
    }

    #[test]
    fn test_lowest_free_id_reused_after_deletion() {
        let mut p = board(&[("A", &[1]), ("B", &[2])]);
        p.delete_card(1);
        assert_eq!(p.next_card_id(), 1);
        p.insert_card("A", make_card(1, "reused")).unwrap();
        assert_eq!(p.next_card_id(), 3);
    }

    #[test]
    fn test_duplicate_card_id_rejected() {
        let mut p = board(&[("A", &[1]), ("B", &[])]);
        let err = p.insert_card("B", make_card(1, "dup")).unwrap_err();
        assert_eq!(err, BoardError::DuplicateCardId(1));
        assert_eq!(ids(&p, "B"), Vec::<u32>::new());
    }

    #[test]
    fn test_invariant_over_mixed_operations() {
        let mut p = board(&[("Day1", &[1, 2, 3]), ("Day2", &[4])]);
        p.move_card_across_columns(2, "Day1", "Day2", None).unwrap();
        p.delete_card(4);
        let id = p.next_card_id();
        p.insert_card("Day2", make_card(id, "new")).unwrap();
        p.move_card_within_column("Day2", 0, 1).unwrap();
        p.move_card_across_columns(1, "Day1", "Day2", Some(0))
            .unwrap();
        assert_partition_invariant(&p);
        assert_eq!(ids(&p, "Day1"), vec![3]);
        assert_eq!(ids(&p, "Day2"), vec![1, 4, 2]);
    }
}
