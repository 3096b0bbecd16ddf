//! Locus-ordered record sequence
//!
//! Records are kept in an index arena and threaded together through `next`
//! links, so insertion never moves an existing record. The sequence tracks
//! both its first and last node: appends at the tail are O(1), anything that
//! lands in the middle costs a linear scan from the head.
//!
//! Records with equal loci keep their arrival order whichever insertion path
//! is taken.

use std::cmp::Ordering;
use thiserror::Error;

use crate::types::{Locus, Record};

type NodeIndex = usize;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Record {id} at {locus} cannot be appended after {tail}")]
    OutOfOrder { id: String, locus: Locus, tail: Locus },
}

#[derive(Debug, Clone)]
struct Node {
    record: Record,
    next: Option<NodeIndex>,
}

/// Singly-linked, locus-sorted sequence of records.
#[derive(Debug, Clone, Default)]
pub struct OrderedRecordSequence {
    nodes: Vec<Node>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
}

impl OrderedRecordSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<&Record> {
        self.head.map(|idx| &self.nodes[idx].record)
    }

    pub fn tail(&self) -> Option<&Record> {
        self.tail.map(|idx| &self.nodes[idx].record)
    }

    /// Record at `position` in sorted order.
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.iter().nth(position)
    }

    /// Insert a record at its sorted position.
    pub fn insert_sorted(&mut self, record: Record) {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => {
                let idx = self.alloc(record, None);
                self.head = Some(idx);
                self.tail = Some(idx);
                return;
            }
        };

        if record.cmp_locus(&self.nodes[head].record) == Ordering::Less {
            let idx = self.alloc(record, Some(head));
            self.head = Some(idx);
            return;
        }

        if record.cmp_locus(&self.nodes[tail].record) != Ordering::Less {
            self.push_tail(record);
            return;
        }

        // Somewhere strictly inside: find the last node that does not rank after
        // the new record. The head qualifies and the tail does not, so the scan
        // always stops before running off the end.
        let mut prev = head;
        while let Some(next) = self.nodes[prev].next {
            if self.nodes[next].record.cmp_locus(&record) == Ordering::Greater {
                break;
            }
            prev = next;
        }
        self.insert_after(prev, record);
    }

    /// Append at the tail without searching.
    ///
    /// Fails if the record ranks before the current tail, since that would
    /// break the ordering.
    pub fn append(&mut self, record: Record) -> Result<(), SequenceError> {
        if let Some(tail) = self.tail() {
            if record.cmp_locus(tail) == Ordering::Less {
                return Err(SequenceError::OutOfOrder {
                    id: record.id,
                    locus: record.locus,
                    tail: tail.locus,
                });
            }
        }
        self.push_tail(record);
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            sequence: self,
            cursor: self.head,
        }
    }

    /// Forward cursor positioned on the head, for callers that need to look ahead.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            sequence: self,
            current: self.head,
        }
    }

    fn push_tail(&mut self, record: Record) {
        let idx = self.alloc(record, None);
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    fn insert_after(&mut self, prev: NodeIndex, record: Record) {
        let next = self.nodes[prev].next;
        let idx = self.alloc(record, next);
        self.nodes[prev].next = Some(idx);
        if self.tail == Some(prev) {
            self.tail = Some(idx);
        }
    }

    fn alloc(&mut self, record: Record, next: Option<NodeIndex>) -> NodeIndex {
        self.nodes.push(Node { record, next });
        self.nodes.len() - 1
    }
}

impl FromIterator<Record> for OrderedRecordSequence {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sequence = Self::with_capacity(iter.size_hint().0);
        sequence.extend(iter);
        sequence
    }
}

impl Extend<Record> for OrderedRecordSequence {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert_sorted(record);
        }
    }
}

impl<'a> IntoIterator for &'a OrderedRecordSequence {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over records in sorted order
pub struct Iter<'a> {
    sequence: &'a OrderedRecordSequence,
    cursor: Option<NodeIndex>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let sequence = self.sequence;
        let node = &sequence.nodes[idx];
        self.cursor = node.next;
        Some(&node.record)
    }
}

/// A position in the sequence that can peek at its successor.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    sequence: &'a OrderedRecordSequence,
    current: Option<NodeIndex>,
}

impl<'a> Cursor<'a> {
    pub fn record(&self) -> Option<&'a Record> {
        let sequence = self.sequence;
        self.current.map(|idx| &sequence.nodes[idx].record)
    }

    pub fn next_record(&self) -> Option<&'a Record> {
        self.following().next()
    }

    pub fn advance(&mut self) {
        let sequence = self.sequence;
        self.current = self.current.and_then(|idx| sequence.nodes[idx].next);
    }

    /// Records strictly after the cursor.
    pub fn following(&self) -> Iter<'a> {
        let sequence = self.sequence;
        Iter {
            sequence,
            cursor: self.current.and_then(|idx| sequence.nodes[idx].next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Arm, GeometricPoint};

    fn rec(id: &str, locus: &str) -> Record {
        Record::new(id, locus.parse().unwrap(), GeometricPoint::new(0.0, 0.0))
    }

    fn ids(sequence: &OrderedRecordSequence) -> Vec<&str> {
        sequence.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_sequence() {
        let sequence = OrderedRecordSequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
        assert!(sequence.head().is_none());
        assert!(sequence.tail().is_none());
        assert_eq!(sequence.iter().count(), 0);
    }

    #[test]
    fn test_insert_all_branches() {
        let mut sequence = OrderedRecordSequence::new();
        sequence.insert_sorted(rec("a", "5p")); // empty
        sequence.insert_sorted(rec("b", "2q")); // head
        sequence.insert_sorted(rec("c", "9q")); // tail
        sequence.insert_sorted(rec("d", "5q")); // middle

        assert_eq!(ids(&sequence), vec!["b", "a", "d", "c"]);
        assert_eq!(sequence.head().unwrap().id, "b");
        assert_eq!(sequence.tail().unwrap().id, "c");
        assert_eq!(sequence.len(), 4);
    }

    #[test]
    fn test_equal_loci_keep_arrival_order() {
        let mut sequence = OrderedRecordSequence::new();
        sequence.insert_sorted(rec("x1", "3p"));
        sequence.insert_sorted(rec("y1", "4p"));
        // Equal to head
        sequence.insert_sorted(rec("x2", "3p"));
        // Equal to tail
        sequence.insert_sorted(rec("y2", "4p"));
        sequence.insert_sorted(rec("z1", "7q"));
        // Equal to an interior run
        sequence.insert_sorted(rec("y3", "4p"));
        sequence.insert_sorted(rec("x3", "3p"));

        assert_eq!(ids(&sequence), vec!["x1", "x2", "x3", "y1", "y2", "y3", "z1"]);
    }

    #[test]
    fn test_tail_stays_put_after_middle_insert() {
        let mut sequence = OrderedRecordSequence::new();
        sequence.insert_sorted(rec("a", "1p"));
        sequence.insert_sorted(rec("c", "3p"));
        sequence.insert_sorted(rec("b", "2p"));
        assert_eq!(sequence.tail().unwrap().id, "c");

        // Tail append must still link after "c", not after "b"
        sequence.insert_sorted(rec("d", "4p"));
        assert_eq!(ids(&sequence), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_get() {
        let sequence: OrderedRecordSequence =
            vec![rec("b", "2p"), rec("a", "1p")].into_iter().collect();
        assert_eq!(sequence.get(0).unwrap().id, "a");
        assert_eq!(sequence.get(1).unwrap().id, "b");
        assert!(sequence.get(2).is_none());
    }

    #[test]
    fn test_append() {
        let mut sequence = OrderedRecordSequence::new();
        sequence.append(rec("a", "1p")).unwrap();
        sequence.append(rec("b", "1p")).unwrap();
        sequence.append(rec("c", "1q")).unwrap();

        let err = sequence.append(rec("d", "1p")).unwrap_err();
        assert!(matches!(err, SequenceError::OutOfOrder { .. }));
        assert_eq!(ids(&sequence), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let sequence: OrderedRecordSequence =
            vec![rec("a", "2p"), rec("b", "1q")].into_iter().collect();
        let first: Vec<_> = sequence.iter().map(|r| r.id.clone()).collect();
        let second: Vec<_> = (&sequence).into_iter().map(|r| r.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cursor() {
        let sequence: OrderedRecordSequence =
            vec![rec("a", "1p"), rec("b", "1p"), rec("c", "2q")].into_iter().collect();
        let mut cursor = sequence.cursor();
        assert_eq!(cursor.record().unwrap().id, "a");
        assert_eq!(cursor.next_record().unwrap().id, "b");
        assert_eq!(cursor.following().count(), 2);

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.record().unwrap().locus.arm, Arm::Q);
        assert!(cursor.next_record().is_none());
        assert_eq!(cursor.following().count(), 0);

        cursor.advance();
        assert!(cursor.record().is_none());
    }
}
