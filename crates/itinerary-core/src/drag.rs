//! Drag Gesture State Machine
//!
//! Interprets drag events into partition mutations in two phases: while the
//! pointer hovers a different column the card eagerly joins it (live
//! preview), and only on release does the card settle into its final slot
//! within that column. Releasing outside any target keeps whatever the eager
//! phase produced.

use crate::partition::Partition;

/// A drop target as reported by the pointer or keyboard layer. A card id
/// resolves to its owning column; a column name resolves to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Card(u32),
    Column(String),
}

/// Gesture events. Matching is exhaustive so a new gesture kind cannot be
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { card_id: u32 },
    Over { target: Option<DragTarget> },
    End { target: Option<DragTarget> },
}

/// Ephemeral state between drag start and drag end. Discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub active_card: u32,
    pub source_column: String,
}

/// Two-state controller: idle, or dragging one card.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_card(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.active_card)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    fn resolve_target(partition: &Partition, target: &DragTarget) -> Option<String> {
        match target {
            DragTarget::Card(id) => partition.column_of(*id).map(str::to_string),
            DragTarget::Column(name) => partition.has_column(name).then(|| name.clone()),
        }
    }

    /// Feed one gesture event through the state machine, mutating the
    /// partition as needed. Steps that cannot be applied (card deleted
    /// mid-drag, target vanished) are abandoned without error; any event
    /// other than `Start` is ignored while idle.
    pub fn handle(&mut self, partition: &mut Partition, event: DragEvent) {
        match event {
            DragEvent::Start { card_id } => {
                let Some(source) = partition.column_of(card_id) else {
                    log::warn!("drag started on unknown card {card_id}");
                    return;
                };
                self.session = Some(DragSession {
                    active_card: card_id,
                    source_column: source.to_string(),
                });
            }
            DragEvent::Over { target } => {
                let Some(session) = self.session.as_ref() else {
                    return;
                };
                let active = session.active_card;
                if matches!(target, Some(DragTarget::Card(id)) if id == active) {
                    return;
                }
                let Some(over_column) =
                    target.and_then(|t| Self::resolve_target(partition, &t))
                else {
                    return;
                };
                let Some(current) = partition.column_of(active).map(str::to_string) else {
                    return;
                };
                if current != over_column {
                    // Eager phase: the card visually joins the hovered column
                    // right away. Re-entering the same column is idempotent.
                    let _ = partition.move_card_across_columns(active, &current, &over_column, None);
                }
            }
            DragEvent::End { target } => {
                let Some(session) = self.session.take() else {
                    return;
                };
                let active = session.active_card;
                // Released outside any column or card: keep the optimistic
                // state from the last hover.
                let Some(target) = target else {
                    return;
                };
                let Some(over_column) = Self::resolve_target(partition, &target) else {
                    return;
                };
                let Some(current) = partition.column_of(active).map(str::to_string) else {
                    return;
                };
                if current == over_column {
                    // Settling phase: reorder within the column the card
                    // already lives in. Dropping on the column body or on
                    // itself settles in place.
                    let DragTarget::Card(over_id) = target else {
                        return;
                    };
                    if over_id == active {
                        return;
                    }
                    let from = partition.index_of_card(&current, active);
                    let to = partition.index_of_card(&current, over_id);
                    if let (Some(from), Some(to)) = (from, to) {
                        if from != to {
                            let _ = partition.move_card_within_column(&current, from, to);
                        }
                    }
                } else {
                    // Drop without an intermediate hover over the target.
                    let _ = partition.move_card_across_columns(active, &current, &over_column, None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Card;

    fn make_card(id: u32) -> Card {
        Card {
            id,
            name: format!("site {id}"),
            address: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            place_id: format!("place-{id}"),
            thumbnail: None,
        }
    }

    fn board(columns: &[(&str, &[u32])]) -> Partition {
        let mut partition = Partition::new();
        for (name, card_ids) in columns {
            partition.add_column(name).unwrap();
            for id in *card_ids {
                partition.insert_card(name, make_card(*id)).unwrap();
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

    #[test]
    fn test_same_column_reorder_on_drop() {
        let mut p = board(&[("Day1", &[1, 2, 3])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 3 });
        dnd.handle(
            &mut p,
            DragEvent::End {
                target: Some(DragTarget::Card(1)),
            },
        );
        assert_eq!(ids(&p, "Day1"), vec![3, 1, 2]);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_cross_column_move_on_hover() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        dnd.handle(
            &mut p,
            DragEvent::Over {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        assert_eq!(ids(&p, "Day1"), Vec::<u32>::new());
        assert_eq!(ids(&p, "Day2"), vec![1]);
    }

    #[test]
    fn test_hover_same_column_is_idempotent() {
        let mut p = board(&[("Day1", &[1, 2]), ("Day2", &[3])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        for _ in 0..3 {
            dnd.handle(
                &mut p,
                DragEvent::Over {
                    target: Some(DragTarget::Column("Day2".to_string())),
                },
            );
        }
        assert_eq!(ids(&p, "Day2"), vec![3, 1]);
    }

    #[test]
    fn test_hover_over_card_moves_into_its_column() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        dnd.handle(
            &mut p,
            DragEvent::Over {
                target: Some(DragTarget::Card(2)),
            },
        );
        assert_eq!(ids(&p, "Day2"), vec![2, 1]);
    }

    #[test]
    fn test_drop_outside_keeps_optimistic_state() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        dnd.handle(
            &mut p,
            DragEvent::Over {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        dnd.handle(&mut p, DragEvent::End { target: None });
        assert_eq!(ids(&p, "Day2"), vec![1]);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_drop_across_without_hover() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[2])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        dnd.handle(
            &mut p,
            DragEvent::End {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        assert_eq!(ids(&p, "Day1"), Vec::<u32>::new());
        assert_eq!(ids(&p, "Day2"), vec![2, 1]);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut p = board(&[("Day1", &[1, 2])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        dnd.handle(
            &mut p,
            DragEvent::Over {
                target: Some(DragTarget::Card(1)),
            },
        );
        dnd.handle(
            &mut p,
            DragEvent::End {
                target: Some(DragTarget::Card(1)),
            },
        );
        assert_eq!(ids(&p, "Day1"), vec![1, 2]);
    }

    #[test]
    fn test_card_deleted_mid_drag_abandons_step() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        p.delete_card(1);
        dnd.handle(
            &mut p,
            DragEvent::Over {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        dnd.handle(
            &mut p,
            DragEvent::End {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        assert_eq!(ids(&p, "Day1"), Vec::<u32>::new());
        assert_eq!(ids(&p, "Day2"), Vec::<u32>::new());
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_column_deleted_mid_drag_does_not_shift_target() {
        // Deleting an earlier column must not redirect a drop aimed at a
        // later one, and a drop aimed at the deleted column itself resolves
        // to nothing rather than a neighbor.
        let mut p = board(&[("Day1", &[1]), ("Day2", &[]), ("Day3", &[])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        p.delete_column("Day2").unwrap();
        dnd.handle(
            &mut p,
            DragEvent::End {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        assert_eq!(ids(&p, "Day1"), vec![1]);
        assert_eq!(ids(&p, "Day3"), Vec::<u32>::new());
        assert!(!dnd.is_dragging());

        // Day3 shifted down a slot but is still reachable by name.
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        dnd.handle(
            &mut p,
            DragEvent::End {
                target: Some(DragTarget::Column("Day3".to_string())),
            },
        );
        assert_eq!(ids(&p, "Day3"), vec![1]);
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut p = board(&[("Day1", &[1]), ("Day2", &[])]);
        let mut dnd = DragController::new();
        dnd.handle(
            &mut p,
            DragEvent::Over {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        dnd.handle(
            &mut p,
            DragEvent::End {
                target: Some(DragTarget::Column("Day2".to_string())),
            },
        );
        assert_eq!(ids(&p, "Day1"), vec![1]);
    }

    #[test]
    fn test_start_on_unknown_card_stays_idle() {
        let mut p = board(&[("Day1", &[1])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 42 });
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_session_records_source_column() {
        let mut p = board(&[("Day1", &[1])]);
        let mut dnd = DragController::new();
        dnd.handle(&mut p, DragEvent::Start { card_id: 1 });
        let session = dnd.session().unwrap();
        assert_eq!(session.active_card, 1);
        assert_eq!(session.source_column, "Day1");
    }
}
