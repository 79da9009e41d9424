//! Edge-exact adjacency detection and rectangle fusion
//!
//! Two rectangles can be fused only when they share one full edge: the same span
//! along that edge and no gap between them. The union of such a pair is itself a
//! rectangle, so repeated fusion never creates overlaps or holes.

use std::collections::HashMap;
use tracing::debug;

use crate::spatial::rectangle::Rectangle;

/// Position of one rectangle relative to another it shares a full edge with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// No full shared edge
    None,
    /// First rectangle sits directly above the second
    Above,
    /// First rectangle sits directly below the second
    Below,
    /// First rectangle sits directly left of the second
    LeftOf,
    /// First rectangle sits directly right of the second
    RightOf,
}

impl Adjacency {
    /// Classify where `a` sits relative to `b`
    ///
    /// Vertical stacking is checked before side-by-side placement.
    pub const fn between(a: &Rectangle, b: &Rectangle) -> Self {
        if is_above(a, b) {
            Self::Above
        } else if is_left_of(a, b) {
            Self::LeftOf
        } else if is_above(b, a) {
            Self::Below
        } else if is_left_of(b, a) {
            Self::RightOf
        } else {
            Self::None
        }
    }

    /// Check whether the pair can be fused
    pub const fn is_adjacent(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// `a`'s bottom row immediately precedes `b`'s top row and both span the same columns
pub const fn is_above(a: &Rectangle, b: &Rectangle) -> bool {
    follows(a.y1(), b.y0()) && a.x0() == b.x0() && a.x1() == b.x1()
}

/// `a`'s right column immediately precedes `b`'s left column and both span the same rows
pub const fn is_left_of(a: &Rectangle, b: &Rectangle) -> bool {
    follows(a.x1(), b.x0()) && a.y0() == b.y0() && a.y1() == b.y1()
}

const fn follows(last: i32, first: i32) -> bool {
    matches!(last.checked_add(1), Some(next) if next == first)
}

/// Fuse two rectangles that share a full edge
///
/// Returns `None` when either rectangle is absent or they are not edge-adjacent.
pub fn merge_pair(a: Option<Rectangle>, b: Option<Rectangle>) -> Option<Rectangle> {
    let (a, b) = (a?, b?);
    match Adjacency::between(&a, &b) {
        Adjacency::None => None,
        Adjacency::Above | Adjacency::LeftOf => Some(span(&a, &b)),
        Adjacency::Below | Adjacency::RightOf => Some(span(&b, &a)),
    }
}

const fn span(first: &Rectangle, last: &Rectangle) -> Rectangle {
    Rectangle::from_ordered(first.x0(), first.y0(), last.x1(), last.y1())
}

/// Fuse adjacent rectangles until no pair can be fused
///
/// Every input rectangle ends up in the output, either as is or inside a fused
/// rectangle covering exactly the inputs it absorbed. The input slice is left
/// untouched. Rectangles are indexed by their edges, so finding a partner is a
/// handful of hash lookups and the whole reduction stays close to linear. The
/// result is deterministic but not necessarily the smallest possible set.
pub fn reduce_all(rectangles: &[Rectangle]) -> Vec<Rectangle> {
    let mut slots: Vec<Option<Rectangle>> = rectangles.iter().copied().map(Some).collect();
    let mut edges = EdgeIndex::default();
    for (index, rect) in rectangles.iter().enumerate() {
        edges.insert(index, rect);
    }

    // Popped in input order; fused rectangles are pushed back for another look
    let mut pending: Vec<usize> = (0..slots.len()).rev().collect();
    let mut merges = 0_usize;

    while let Some(index) = pending.pop() {
        let Some((partner, merged)) = fusion_for(index, &slots, &edges) else {
            continue;
        };

        for slot in [index, partner] {
            if let Some(rect) = slots.get_mut(slot).and_then(Option::take) {
                edges.remove(slot, &rect);
            }
        }

        let keep = index.min(partner);
        if let Some(slot) = slots.get_mut(keep) {
            *slot = Some(merged);
        }
        edges.insert(keep, &merged);
        pending.push(keep);
        merges += 1;
    }

    let reduced: Vec<Rectangle> = slots.into_iter().flatten().collect();
    debug!(
        input = rectangles.len(),
        output = reduced.len(),
        merges,
        "reduced rectangle set"
    );
    reduced
}

fn fusion_for(
    index: usize,
    slots: &[Option<Rectangle>],
    edges: &EdgeIndex,
) -> Option<(usize, Rectangle)> {
    let current = (*slots.get(index)?)?;
    let partner = edges.partner(&current)?;
    let merged = merge_pair(Some(current), *slots.get(partner)?)?;
    Some((partner, merged))
}

/// Edge as `(span start, span end, line)`
type EdgeKey = (i32, i32, i32);

/// Live rectangles looked up by each of their four edges
#[derive(Debug, Default)]
struct EdgeIndex {
    tops: HashMap<EdgeKey, Vec<usize>>,
    bottoms: HashMap<EdgeKey, Vec<usize>>,
    lefts: HashMap<EdgeKey, Vec<usize>>,
    rights: HashMap<EdgeKey, Vec<usize>>,
}

impl EdgeIndex {
    fn insert(&mut self, index: usize, rect: &Rectangle) {
        self.tops.entry(top_edge(rect)).or_default().push(index);
        self.bottoms.entry(bottom_edge(rect)).or_default().push(index);
        self.lefts.entry(left_edge(rect)).or_default().push(index);
        self.rights.entry(right_edge(rect)).or_default().push(index);
    }

    fn remove(&mut self, index: usize, rect: &Rectangle) {
        detach(&mut self.tops, top_edge(rect), index);
        detach(&mut self.bottoms, bottom_edge(rect), index);
        detach(&mut self.lefts, left_edge(rect), index);
        detach(&mut self.rights, right_edge(rect), index);
    }

    /// Some indexed rectangle sharing a full edge with `rect`
    fn partner(&self, rect: &Rectangle) -> Option<usize> {
        let (x0, y0, x1, y1) = (rect.x0(), rect.y0(), rect.x1(), rect.y1());
        let below = y1.checked_add(1).and_then(|y| self.tops.get(&(x0, x1, y)));
        let above = y0.checked_sub(1).and_then(|y| self.bottoms.get(&(x0, x1, y)));
        let right = x1.checked_add(1).and_then(|x| self.lefts.get(&(y0, y1, x)));
        let left = x0.checked_sub(1).and_then(|x| self.rights.get(&(y0, y1, x)));

        [below, above, right, left]
            .into_iter()
            .flatten()
            .find_map(|indices| indices.first().copied())
    }
}

const fn top_edge(rect: &Rectangle) -> EdgeKey {
    (rect.x0(), rect.x1(), rect.y0())
}

const fn bottom_edge(rect: &Rectangle) -> EdgeKey {
    (rect.x0(), rect.x1(), rect.y1())
}

const fn left_edge(rect: &Rectangle) -> EdgeKey {
    (rect.y0(), rect.y1(), rect.x0())
}

const fn right_edge(rect: &Rectangle) -> EdgeKey {
    (rect.y0(), rect.y1(), rect.x1())
}

fn detach(edges: &mut HashMap<EdgeKey, Vec<usize>>, key: EdgeKey, index: usize) {
    if let Some(indices) = edges.get_mut(&key) {
        indices.retain(|&other| other != index);
        if indices.is_empty() {
            edges.remove(&key);
        }
    }
}
