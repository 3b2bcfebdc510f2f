use crate::Cell;
use std::sync::OnceLock;

/// The number of distinct raw cell bytes
const PERMUTATIONS: usize = 1 << 8;
type RuleTable = [Transition; PERMUTATIONS];

/// What happens to a cell when the generation advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Birth,
    Death,
    Unchanged,
}

/// Looks up the transition for a cell as of the start of a generation
#[inline]
pub(super) fn transition(cell: Cell) -> Transition {
    get_rule_table()[cell.bits() as usize]
}

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn get_rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

/// Creates a lookup table for B3/S23, indexed by the raw packed cell byte
fn generate_rule_table() -> RuleTable {
    let mut table = [Transition::Unchanged; PERMUTATIONS];
    for (bits, entry) in table.iter_mut().enumerate() {
        let cell = Cell::from_bits(bits as u8);
        *entry = match (cell.is_alive(), cell.neighbor_count()) {
            (true, 2 | 3) => Transition::Unchanged,
            (true, _) => Transition::Death,
            (false, 3) => Transition::Birth,
            (false, _) => Transition::Unchanged,
        };
    }
    table
}
