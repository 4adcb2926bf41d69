// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! block-towers: a shortest-path solver for a block-stacking puzzle.
//!
//! The puzzle is played on a fixed number of columns, each of which can hold a fixed number of
//! uniquely numbered blocks stacked from the bottom up. A move takes the top block of one column
//! and places it on top of another column, provided the source is not empty and the destination is
//! not full. Given a start and a goal [`Configuration`], [`find_solution`] runs a breadth-first
//! search over every reachable configuration and returns the shortest sequence of configurations
//! (and moves) leading from one to the other.

#![no_std]

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Debug, Display, Formatter};
use core::hash::Hash;
use core::num::IntErrorKind;
use core::ops::Neg;
use hashbrown::hash_map::Entry;
use hashbrown::{HashMap, HashSet};
use num_traits::Unsigned;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

extern crate alloc;

/// Marker trait: specifies that a value may be used to identify blocks.
pub trait BlockValue:
    Unsigned + Copy + Eq + Hash + Debug + Display + DeserializeOwned + Serialize + 'static
{
}

impl<V> BlockValue for V where
    V: Unsigned + Copy + Eq + Hash + Debug + Display + DeserializeOwned + Serialize + 'static
{
}

/// The dimensions of a puzzle: how many columns there are and how many blocks each can hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Dimensions {
    columns: usize,
    capacity: usize,
}

impl Dimensions {
    /// The number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of blocks a single column can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// An error associated with the creation of the dimensions.
#[derive(Debug)]
pub struct DimensionError(IntErrorKind);

impl Display for DimensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let reason = match self.0 {
            IntErrorKind::PosOverflow => "the dimensions were too large",
            IntErrorKind::Zero => "the dimensions have zero cells",
            _ => unreachable!(),
        };
        f.write_fmt(format_args!("dimensions could not be used: {reason}"))
    }
}

impl Error for DimensionError {}

impl TryFrom<(usize, usize)> for Dimensions {
    type Error = DimensionError;

    fn try_from((columns, capacity): (usize, usize)) -> Result<Self, Self::Error> {
        match columns.checked_mul(capacity) {
            None => Err(DimensionError(IntErrorKind::PosOverflow)),
            Some(0) => Err(DimensionError(IntErrorKind::Zero)),
            Some(_) => Ok(Self { columns, capacity }),
        }
    }
}

/// An error raised when a block cannot be taken from or placed on a [`Column`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnError {
    /// There is no block to take.
    Empty,
    /// There is no room to place another block.
    Full,
}

impl Display for ColumnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ColumnError::Empty => "the column is empty",
            ColumnError::Full => "the column is full",
        })
    }
}

impl Error for ColumnError {}

/// An error which denotes that a column could not be constructed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidColumnError {
    /// The column cannot hold any blocks.
    ZeroCapacity,
    /// More blocks were provided than the column can hold.
    Overfull {
        /// The capacity of the column.
        capacity: usize,
        /// The number of blocks that were provided.
        found: usize,
    },
    /// A block with the identifier zero was provided; identifiers must be positive.
    ZeroBlock {
        /// The slot (from the bottom) at which the block was found.
        slot: usize,
    },
    /// A block was found above an empty slot.
    Gap {
        /// The slot (from the bottom) of the floating block.
        slot: usize,
    },
}

impl Display for InvalidColumnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidColumnError::ZeroCapacity => f.write_str("the column has no capacity"),
            InvalidColumnError::Overfull { capacity, found } => f.write_fmt(format_args!(
                "{found} blocks were provided for a column of capacity {capacity}"
            )),
            InvalidColumnError::ZeroBlock { slot } => {
                f.write_fmt(format_args!("the block in slot {slot} has the identifier zero"))
            }
            InvalidColumnError::Gap { slot } => {
                f.write_fmt(format_args!("the block in slot {slot} is above an empty slot"))
            }
        }
    }
}

impl Error for InvalidColumnError {}

/// A single column of the puzzle: a stack of at most [`Column::capacity`] blocks, anchored at the
/// bottom. Every occupied slot lies below every empty slot.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(
    try_from = "Vec<Option<V>>",
    into = "Vec<Option<V>>",
    bound(serialize = "V: BlockValue", deserialize = "V: BlockValue")
)]
pub struct Column<V> {
    slots: Vec<Option<V>>,
    len: usize,
}

impl<V> Column<V> {
    /// The number of blocks this column can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of blocks currently in this column.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this column holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this column cannot accept another block.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The slots of this column from the bottom up, with [`None`] for empty slots.
    pub fn slots(&self) -> &[Option<V>] {
        &self.slots
    }
}

impl<V> Column<V>
where
    V: BlockValue,
{
    /// Produce an empty column with the provided capacity. A column with no capacity is both
    /// empty and full.
    pub fn empty(capacity: usize) -> Self {
        Self {
            slots: alloc::vec![None; capacity],
            len: 0,
        }
    }

    /// Produce a column of the provided capacity holding `blocks`, listed from the bottom up.
    pub fn new<I: IntoIterator<Item = V>>(
        capacity: usize,
        blocks: I,
    ) -> Result<Self, InvalidColumnError> {
        if capacity == 0 {
            return Err(InvalidColumnError::ZeroCapacity);
        }
        let mut column = Self::empty(capacity);
        let mut blocks = blocks.into_iter();
        let mut slot = 0;
        while let Some(block) = blocks.next() {
            if block.is_zero() {
                return Err(InvalidColumnError::ZeroBlock { slot });
            }
            if column.place_top(block).is_err() {
                return Err(InvalidColumnError::Overfull {
                    capacity,
                    found: slot + 1 + blocks.count(),
                });
            }
            slot += 1;
        }
        Ok(column)
    }

    /// The topmost block, if any.
    pub fn top(&self) -> Option<V> {
        self.len.checked_sub(1).and_then(|slot| self.slots[slot])
    }

    /// The blocks of this column from the bottom up.
    pub fn blocks(&self) -> impl Iterator<Item = V> + '_ {
        self.slots[..self.len].iter().flatten().copied()
    }

    /// Remove the topmost block and return it.
    pub fn take_top(&mut self) -> Result<V, ColumnError> {
        let top = self.len.checked_sub(1).ok_or(ColumnError::Empty)?;
        let block = self.slots[top].take().ok_or(ColumnError::Empty)?;
        self.len = top;
        Ok(block)
    }

    /// Place `block` on top of this column.
    pub fn place_top(&mut self, block: V) -> Result<(), ColumnError> {
        let slot = self.slots.get_mut(self.len).ok_or(ColumnError::Full)?;
        *slot = Some(block);
        self.len += 1;
        Ok(())
    }
}

impl<V> TryFrom<Vec<Option<V>>> for Column<V>
where
    V: BlockValue,
{
    type Error = InvalidColumnError;

    fn try_from(slots: Vec<Option<V>>) -> Result<Self, Self::Error> {
        if slots.is_empty() {
            return Err(InvalidColumnError::ZeroCapacity);
        }
        let len = slots.iter().take_while(|slot| slot.is_some()).count();
        if let Some(offset) = slots[len..].iter().position(Option::is_some) {
            return Err(InvalidColumnError::Gap { slot: len + offset });
        }
        if let Some(slot) = slots[..len]
            .iter()
            .position(|block| block.is_some_and(|block| block.is_zero()))
        {
            return Err(InvalidColumnError::ZeroBlock { slot });
        }
        Ok(Self { slots, len })
    }
}

impl<V> From<Column<V>> for Vec<Option<V>> {
    fn from(column: Column<V>) -> Self {
        column.slots
    }
}

/// A move of the top block of one column onto another. A move may be reversed with [`Neg`]
/// (i.e. `-`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Move {
    from: usize,
    to: usize,
}

impl Move {
    /// The index of the column the block is taken from.
    pub fn source(&self) -> usize {
        self.from
    }

    /// The index of the column the block is placed on.
    pub fn destination(&self) -> usize {
        self.to
    }
}

impl From<(usize, usize)> for Move {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{} -> {}", self.from, self.to))
    }
}

impl Neg for Move {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// The type of invalid move that was observed in an [`InvalidMoveError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidMoveType {
    /// The column with the provided index doesn't exist.
    InvalidColumn(usize),
    /// The source and destination are the same column.
    SameColumn,
    /// The source column has no block to take.
    EmptySource,
    /// The destination column has no room for another block.
    FullDestination,
}

/// An error which describes an attempted invalid move.
#[derive(Copy, Clone, Debug)]
pub struct InvalidMoveError {
    mv: Move,
    variant: InvalidMoveType,
}

impl InvalidMoveError {
    /// The move that was attempted.
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Why the move was rejected.
    pub fn variant(&self) -> InvalidMoveType {
        self.variant
    }
}

impl Display for InvalidMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let Move { from, to } = self.mv;
        match self.variant {
            InvalidMoveType::InvalidColumn(idx) => f.write_fmt(format_args!("cannot move {from} -> {to} because column {idx} doesn't exist")),
            InvalidMoveType::SameColumn => f.write_fmt(format_args!("cannot move {from} -> {to} because a block cannot be moved onto its own column")),
            InvalidMoveType::EmptySource => f.write_fmt(format_args!("cannot move {from} -> {to} because column {from} is empty")),
            InvalidMoveType::FullDestination => f.write_fmt(format_args!("cannot move {from} -> {to} because column {to} is full")),
        }
    }
}

impl Error for InvalidMoveError {}

/// An error which denotes that a configuration could not be constructed.
#[derive(Debug)]
pub enum InvalidConfigurationError<V> {
    /// The configuration has no columns at all.
    NoColumns,
    /// A different number of columns was provided than the dimensions require.
    ColumnCount {
        /// The number of columns required by the dimensions.
        expected: usize,
        /// The number of columns provided.
        found: usize,
    },
    /// The column with the provided index is invalid.
    Column {
        /// The index of the column.
        index: usize,
        /// Why the column is invalid.
        error: InvalidColumnError,
    },
    /// The column with the provided index has a different capacity from the first column.
    CapacityMismatch {
        /// The index of the column.
        index: usize,
        /// The capacity of the first column.
        expected: usize,
        /// The capacity of the offending column.
        found: usize,
    },
    /// The provided block appears more than once.
    Duplicate(V),
}

impl<V> Display for InvalidConfigurationError<V>
where
    V: BlockValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidConfigurationError::NoColumns => f.write_str("the configuration has no columns"),
            InvalidConfigurationError::ColumnCount { expected, found } => f.write_fmt(
                format_args!("expected {expected} columns, but {found} were provided"),
            ),
            InvalidConfigurationError::Column { index, error } => {
                f.write_fmt(format_args!("column {index} is invalid: {error}"))
            }
            InvalidConfigurationError::CapacityMismatch {
                index,
                expected,
                found,
            } => f.write_fmt(format_args!(
                "column {index} has capacity {found}, but the configuration uses {expected}"
            )),
            InvalidConfigurationError::Duplicate(block) => {
                f.write_fmt(format_args!("block {block} appears more than once"))
            }
        }
    }
}

impl<V> Error for InvalidConfigurationError<V>
where
    V: BlockValue,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InvalidConfigurationError::Column { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// An arrangement of blocks across every column of the puzzle. Two configurations are equal when
/// every column holds the same blocks in the same order.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(
    try_from = "Vec<Column<V>>",
    into = "Vec<Column<V>>",
    bound(serialize = "V: BlockValue", deserialize = "V: BlockValue")
)]
pub struct Configuration<V> {
    columns: Vec<Column<V>>,
}

impl<V> Configuration<V> {
    /// The columns of this configuration.
    pub fn columns(&self) -> &[Column<V>] {
        &self.columns
    }

    /// The dimensions of this configuration.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            columns: self.columns.len(),
            capacity: self.columns.first().map_or(0, Column::capacity),
        }
    }
}

impl<V> Configuration<V>
where
    V: BlockValue,
{
    /// Produce a configuration with the provided dimensions from one list of blocks per column,
    /// each listed from the bottom up.
    pub fn new<I, C>(dim: Dimensions, columns: I) -> Result<Self, InvalidConfigurationError<V>>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
    {
        let columns = columns
            .into_iter()
            .enumerate()
            .map(|(index, blocks)| {
                Column::new(dim.capacity, blocks)
                    .map_err(|error| InvalidConfigurationError::Column { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if columns.len() != dim.columns {
            return Err(InvalidConfigurationError::ColumnCount {
                expected: dim.columns,
                found: columns.len(),
            });
        }
        Self::try_from(columns)
    }

    /// Every block in this configuration, column by column from the bottom up.
    pub fn blocks(&self) -> impl Iterator<Item = V> + '_ {
        self.columns.iter().flat_map(Column::blocks)
    }

    /// Perform the provided move in place. If the move is invalid, the configuration is left
    /// untouched.
    pub fn move_block(&mut self, mv: Move) -> Result<(), InvalidMoveError> {
        let err = move |variant| InvalidMoveError { mv, variant };
        let count = self.columns.len();
        let [source, destination] = self
            .columns
            .get_disjoint_mut([mv.from, mv.to])
            .map_err(|_| {
                err(match [mv.from, mv.to].into_iter().find(|&idx| idx >= count) {
                    Some(idx) => InvalidMoveType::InvalidColumn(idx),
                    None => InvalidMoveType::SameColumn,
                })
            })?;
        if source.is_empty() {
            return Err(err(InvalidMoveType::EmptySource));
        }
        if destination.is_full() {
            return Err(err(InvalidMoveType::FullDestination));
        }
        let block = source
            .take_top()
            .map_err(|_| err(InvalidMoveType::EmptySource))?;
        destination
            .place_top(block)
            .map_err(|_| err(InvalidMoveType::FullDestination))
    }

    /// Produce the configuration that results from performing the provided move on a copy of
    /// this one.
    pub fn apply_move(&self, mv: Move) -> Result<Self, InvalidMoveError> {
        let mut next = self.clone();
        next.move_block(mv)?;
        Ok(next)
    }

    /// Every legal move from this configuration together with the configuration it produces.
    /// Moves are produced source-major: `0 -> 1`, `0 -> 2`, ..., `1 -> 0`, `1 -> 2`, ...
    pub fn transitions(&self) -> impl Iterator<Item = (Move, Self)> + '_ {
        let count = self.columns.len();
        (0..count)
            .flat_map(move |from| (0..count).map(move |to| Move { from, to }))
            .filter(|mv| mv.from != mv.to)
            .filter_map(|mv| self.apply_move(mv).ok().map(|next| (mv, next)))
    }

    /// Every configuration reachable from this one by exactly one legal move, in the order of
    /// [`Configuration::transitions`].
    pub fn successors(&self) -> impl Iterator<Item = Self> + '_ {
        self.transitions().map(|(_, next)| next)
    }
}

impl<V> TryFrom<Vec<Column<V>>> for Configuration<V>
where
    V: BlockValue,
{
    type Error = InvalidConfigurationError<V>;

    fn try_from(columns: Vec<Column<V>>) -> Result<Self, Self::Error> {
        let capacity = columns
            .first()
            .ok_or(InvalidConfigurationError::NoColumns)?
            .capacity();
        if capacity == 0 {
            return Err(InvalidConfigurationError::Column {
                index: 0,
                error: InvalidColumnError::ZeroCapacity,
            });
        }
        let mut seen = HashSet::new();
        for (index, column) in columns.iter().enumerate() {
            if column.capacity() != capacity {
                return Err(InvalidConfigurationError::CapacityMismatch {
                    index,
                    expected: capacity,
                    found: column.capacity(),
                });
            }
            for block in column.blocks() {
                if !seen.insert(block) {
                    return Err(InvalidConfigurationError::Duplicate(block));
                }
            }
        }
        Ok(Self { columns })
    }
}

impl<V> From<Configuration<V>> for Vec<Column<V>> {
    fn from(configuration: Configuration<V>) -> Self {
        configuration.columns
    }
}

impl<V> Display for Configuration<V>
where
    V: BlockValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in (0..self.dimensions().capacity).rev() {
            for (idx, column) in self.columns.iter().enumerate() {
                if idx > 0 {
                    f.write_str(" ")?;
                }
                match column.slots[row] {
                    Some(block) => write!(f, "{block}")?,
                    None => f.write_str("_")?,
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A shortest sequence of configurations leading from a start to a goal, as found by
/// [`find_solution`].
#[derive(Clone, Debug)]
pub struct Solution<V> {
    configurations: Vec<Configuration<V>>,
    moves: Vec<Move>,
    explored: usize,
}

impl<V> Solution<V> {
    /// Every configuration from the start to the goal, both inclusive.
    pub fn configurations(&self) -> &[Configuration<V>] {
        &self.configurations
    }

    /// The moves leading from each configuration to the next.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The number of moves in the solution.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the start already was the goal.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The number of distinct configurations discovered by the search.
    pub fn explored(&self) -> usize {
        self.explored
    }
}

/// An error which denotes that the goal cannot be reached from the start.
#[derive(Clone, Debug)]
pub struct NoPathFoundError<V> {
    start: Configuration<V>,
    goal: Configuration<V>,
    explored: usize,
}

impl<V> NoPathFoundError<V> {
    /// The configuration the search started from.
    pub fn start(&self) -> &Configuration<V> {
        &self.start
    }

    /// The configuration the search was looking for.
    pub fn goal(&self) -> &Configuration<V> {
        &self.goal
    }

    /// The number of distinct configurations reachable from the start.
    pub fn explored(&self) -> usize {
        self.explored
    }
}

impl<V> Display for NoPathFoundError<V>
where
    V: BlockValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "no sequence of moves leads from:\n{}\nto:\n{}",
            self.start, self.goal
        ))
    }
}

impl<V> Error for NoPathFoundError<V> where V: BlockValue {}

struct Node<V> {
    configuration: Configuration<V>,
    predecessor: Option<(usize, Move)>,
}

/// Every configuration discovered so far, each linked to the one it was first reached from.
struct Predecessors<V> {
    nodes: Vec<Node<V>>,
    index: HashMap<Configuration<V>, usize>,
}

impl<V> Predecessors<V>
where
    V: BlockValue,
{
    fn new(start: Configuration<V>) -> Self {
        let mut index = HashMap::new();
        index.insert(start.clone(), 0);
        Self {
            nodes: alloc::vec![Node {
                configuration: start,
                predecessor: None,
            }],
            index,
        }
    }

    /// Record `configuration` as reached from node `predecessor` by `mv`. Returns the new node,
    /// or [`None`] if the configuration was already discovered.
    fn discover(
        &mut self,
        configuration: Configuration<V>,
        predecessor: usize,
        mv: Move,
    ) -> Option<usize> {
        match self.index.entry(configuration) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => {
                let node = self.nodes.len();
                self.nodes.push(Node {
                    configuration: entry.key().clone(),
                    predecessor: Some((predecessor, mv)),
                });
                entry.insert(node);
                Some(node)
            }
        }
    }

    fn path_to(&self, mut node: usize) -> Solution<V> {
        let mut configurations = Vec::new();
        let mut moves = Vec::new();
        loop {
            let Node {
                configuration,
                predecessor,
            } = &self.nodes[node];
            configurations.push(configuration.clone());
            match predecessor {
                Some((previous, mv)) => {
                    moves.push(*mv);
                    node = *previous;
                }
                None => break,
            }
        }
        configurations.reverse();
        moves.reverse();
        Solution {
            configurations,
            moves,
            explored: self.nodes.len(),
        }
    }
}

/// Find the shortest sequence of moves which transforms `start` into `goal`.
///
/// Configurations are explored breadth-first, so the first time the goal is discovered it is
/// reached by a minimal number of moves. If `start` and `goal` are equal, the solution holds only
/// that configuration. If every configuration reachable from `start` is explored without
/// discovering `goal` (e.g. because they hold different blocks, or the capacities leave no room
/// to rearrange them), a [`NoPathFoundError`] is returned instead.
pub fn find_solution<V>(
    start: &Configuration<V>,
    goal: &Configuration<V>,
) -> Result<Solution<V>, NoPathFoundError<V>>
where
    V: BlockValue,
{
    let mut predecessors = Predecessors::new(start.clone());
    if start == goal {
        return Ok(predecessors.path_to(0));
    }
    let mut frontier = VecDeque::from([0]);
    while let Some(current) = frontier.pop_front() {
        let transitions = predecessors.nodes[current]
            .configuration
            .transitions()
            .collect::<Vec<_>>();
        for (mv, next) in transitions {
            let Some(node) = predecessors.discover(next, current, mv) else {
                continue;
            };
            if predecessors.nodes[node].configuration == *goal {
                return Ok(predecessors.path_to(node));
            }
            frontier.push_back(node);
        }
    }
    Err(NoPathFoundError {
        start: start.clone(),
        goal: goal.clone(),
        explored: predecessors.nodes.len(),
    })
}

#[cfg(test)]
mod test {
    extern crate std;

    use crate::{
        Column, ColumnError, Configuration, Dimensions, InvalidColumnError,
        InvalidConfigurationError, InvalidMoveError, InvalidMoveType, Move, find_solution,
    };
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::error::Error;
    use std::println;

    fn example() -> Result<(Configuration<u8>, Configuration<u8>), Box<dyn Error>> {
        let dim = Dimensions::try_from((3usize, 4usize))?;
        let start = Configuration::new(dim, [vec![1], vec![2], vec![3, 4, 5]])?;
        let goal = Configuration::new(dim, [vec![], vec![4], vec![1, 2, 3, 5]])?;
        Ok((start, goal))
    }

    #[test]
    fn dimensions() {
        let dim = Dimensions::try_from((3usize, 4usize)).expect("valid dimensions");
        assert_eq!((3, 4), (dim.columns(), dim.capacity()));
        assert!(Dimensions::try_from((0usize, 4usize)).is_err());
        assert!(Dimensions::try_from((3usize, 0usize)).is_err());
        assert!(Dimensions::try_from((usize::MAX, 2usize)).is_err());
    }

    #[test]
    fn column_stack() -> Result<(), Box<dyn Error>> {
        let mut column = Column::<u8>::empty(3);
        assert!(column.is_empty());
        for block in 1..=3 {
            column.place_top(block)?;
        }
        assert!(column.is_full());
        assert_eq!(Some(3), column.top());
        assert_eq!(Err(ColumnError::Full), column.place_top(4));

        let full = column.clone();
        let top = column.take_top()?;
        column.place_top(top)?;
        assert_eq!(full, column);

        for expected in (1..=3).rev() {
            assert_eq!(expected, column.take_top()?);
        }
        assert_eq!(Err(ColumnError::Empty), column.take_top());
        assert_eq!(&[None, None, None], column.slots());

        Ok(())
    }

    #[test]
    fn column_construction() -> Result<(), Box<dyn Error>> {
        let column = Column::new(4, [3u8, 4, 5])?;
        assert_eq!(&[Some(3), Some(4), Some(5), None], column.slots());
        assert_eq!(vec![3, 4, 5], column.blocks().collect::<Vec<_>>());

        assert_eq!(
            Err(InvalidColumnError::Overfull {
                capacity: 2,
                found: 4
            }),
            Column::new(2, [1u8, 2, 3, 4])
        );
        assert_eq!(
            Err(InvalidColumnError::ZeroBlock { slot: 1 }),
            Column::new(2, [1u8, 0])
        );
        assert_eq!(
            Err(InvalidColumnError::ZeroCapacity),
            Column::<u8>::new(0, [])
        );
        assert_eq!(
            Err(InvalidColumnError::Gap { slot: 2 }),
            Column::try_from(vec![Some(1u8), None, Some(2)])
        );

        Ok(())
    }

    #[test]
    fn configuration_construction() -> Result<(), Box<dyn Error>> {
        let dim = Dimensions::try_from((2usize, 2usize))?;

        match Configuration::new(dim, [vec![1u8], vec![1]]) {
            Err(InvalidConfigurationError::Duplicate(block)) => assert_eq!(1, block),
            s => unreachable!("Expected another error, got {s:?}"),
        }
        match Configuration::new(dim, [vec![1u8]]) {
            Err(InvalidConfigurationError::ColumnCount { expected, found }) => {
                assert_eq!((2, 1), (expected, found))
            }
            s => unreachable!("Expected another error, got {s:?}"),
        }
        match Configuration::new(dim, [vec![1u8], vec![2, 3, 4]]) {
            Err(InvalidConfigurationError::Column {
                index,
                error: InvalidColumnError::Overfull { .. },
            }) => assert_eq!(1, index),
            s => unreachable!("Expected another error, got {s:?}"),
        }
        match Configuration::try_from(vec![Column::<u8>::empty(2), Column::empty(3)]) {
            Err(InvalidConfigurationError::CapacityMismatch {
                index,
                expected,
                found,
            }) => assert_eq!((1, 2, 3), (index, expected, found)),
            s => unreachable!("Expected another error, got {s:?}"),
        }
        assert!(matches!(
            Configuration::try_from(Vec::<Column<u8>>::new()),
            Err(InvalidConfigurationError::NoColumns)
        ));
        match Configuration::try_from(vec![Column::<u8>::empty(0), Column::empty(0)]) {
            Err(InvalidConfigurationError::Column {
                index,
                error: InvalidColumnError::ZeroCapacity,
            }) => assert_eq!(0, index),
            s => unreachable!("Expected another error, got {s:?}"),
        }
        assert!(serde_json::from_str::<Configuration<u8>>("[[],[]]").is_err());

        Ok(())
    }

    #[test]
    fn rendering() -> Result<(), Box<dyn Error>> {
        let (start, goal) = example()?;
        println!("{start}");
        assert_eq!("_ _ _\n_ _ 5\n_ _ 4\n1 2 3", start.to_string());
        assert_eq!("_ _ 5\n_ _ 3\n_ _ 2\n_ 4 1", goal.to_string());
        assert_eq!("0 -> 2", Move::from((0, 2)).to_string());

        Ok(())
    }

    #[test]
    fn moves() -> Result<(), Box<dyn Error>> {
        let dim = Dimensions::try_from((3usize, 2usize))?;
        let mut config = Configuration::new(dim, [vec![1u8], vec![2, 3], vec![]])?;
        let original = config.clone();

        let mv = Move::from((1, 2));
        config.move_block(mv)?;
        assert_eq!(Some(3), config.columns()[2].top());
        config.move_block(-mv)?;
        assert_eq!(original, config);

        match config.move_block(Move::from((0, 1))) {
            Err(InvalidMoveError {
                variant: InvalidMoveType::FullDestination,
                mv,
            }) => assert_eq!(Move::from((0, 1)), mv),
            s => unreachable!("Expected another error, got {s:?}"),
        }
        assert_eq!(original, config);

        let cases = [
            ((2, 0), InvalidMoveType::EmptySource),
            ((1, 1), InvalidMoveType::SameColumn),
            ((0, 3), InvalidMoveType::InvalidColumn(3)),
            ((5, 0), InvalidMoveType::InvalidColumn(5)),
        ];
        for (mv, expected) in cases {
            let err = config
                .apply_move(Move::from(mv))
                .expect_err("move should be rejected");
            assert_eq!(expected, err.variant());
            assert_eq!(mv, (err.mv().source(), err.mv().destination()));
            println!("{err}");
        }
        assert_eq!(original, config);

        Ok(())
    }

    #[test]
    fn successors() -> Result<(), Box<dyn Error>> {
        let (start, _) = example()?;
        let transitions = start.transitions().collect::<Vec<_>>();
        assert_eq!(6, transitions.len());
        assert_eq!(Move::from((0, 1)), transitions[0].0);
        assert_eq!(Move::from((2, 1)), transitions[5].0);
        assert!(start.successors().all(|next| next != start));

        let dim = Dimensions::try_from((3usize, 2usize))?;
        let config = Configuration::new(dim, [vec![1u8, 2], vec![3], vec![]])?;
        let moves = config.transitions().map(|(mv, _)| mv).collect::<Vec<_>>();
        assert_eq!(
            vec![
                Move::from((0, 1)),
                Move::from((0, 2)),
                Move::from((1, 2))
            ],
            moves
        );

        Ok(())
    }

    #[test]
    fn example_solution() -> Result<(), Box<dyn Error>> {
        let (start, goal) = example()?;
        let solution = find_solution(&start, &goal)?;
        for config in solution.configurations() {
            println!("{config}\n");
        }

        let configurations = solution.configurations();
        assert_eq!(Some(&start), configurations.first());
        assert_eq!(Some(&goal), configurations.last());
        assert_eq!(configurations.len(), solution.len() + 1);
        for (pair, mv) in configurations.windows(2).zip(solution.moves()) {
            assert_eq!(pair[1], pair[0].apply_move(*mv)?);
        }

        let again = find_solution(&start, &goal)?;
        assert_eq!(solution.moves(), again.moves());

        Ok(())
    }

    #[test]
    fn short_solution() -> Result<(), Box<dyn Error>> {
        let dim = Dimensions::try_from((2usize, 2usize))?;
        let start = Configuration::new(dim, [vec![1u8, 2], vec![]])?;
        let goal = Configuration::new(dim, [vec![], vec![2, 1]])?;
        let solution = find_solution(&start, &goal)?;
        assert_eq!(&[Move::from((0, 1)), Move::from((0, 1))], solution.moves());

        Ok(())
    }

    #[test]
    fn trivial_solution() -> Result<(), Box<dyn Error>> {
        let (start, _) = example()?;
        let solution = find_solution(&start, &start)?;
        assert!(solution.is_empty());
        assert_eq!(1, solution.explored());
        assert_eq!(&[start], solution.configurations());

        Ok(())
    }

    #[test]
    fn unreachable() -> Result<(), Box<dyn Error>> {
        let dim = Dimensions::try_from((3usize, 2usize))?;
        let start = Configuration::new(dim, [vec![1u8], vec![9], vec![]])?;
        let goal = Configuration::new(dim, [vec![1u8], vec![], vec![]])?;
        let err = find_solution(&start, &goal).expect_err("goal lacks block 9");
        assert_eq!(&start, err.start());
        assert_eq!(&goal, err.goal());
        let rendered = err.to_string();
        assert!(rendered.contains(&start.to_string()));
        assert!(rendered.contains(&goal.to_string()));
        println!("{rendered}");

        let dim = Dimensions::try_from((2usize, 1usize))?;
        let start = Configuration::new(dim, [vec![1u8], vec![2]])?;
        let goal = Configuration::new(dim, [vec![2u8], vec![1]])?;
        let err = find_solution(&start, &goal).expect_err("both columns are full");
        assert_eq!(1, err.explored());

        Ok(())
    }

    #[test]
    fn serde() -> Result<(), Box<dyn Error>> {
        let (start, _) = example()?;
        let json = serde_json::to_string(&start)?;
        assert_eq!(
            "[[1,null,null,null],[2,null,null,null],[3,4,5,null]]",
            json
        );
        assert_eq!(start, serde_json::from_str::<Configuration<u8>>(&json)?);

        assert!(serde_json::from_str::<Column<u8>>("[1,null,2]").is_err());
        assert!(serde_json::from_str::<Column<u8>>("[0,null]").is_err());
        assert!(serde_json::from_str::<Column<u8>>("[]").is_err());
        assert!(serde_json::from_str::<Configuration<u8>>("[[1,null],[1,null]]").is_err());
        assert!(serde_json::from_str::<Configuration<u8>>("[[1,null],[2]]").is_err());

        Ok(())
    }
}
