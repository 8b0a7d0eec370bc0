//! Game rules: occupancy, sequences, turn order, validation, lobby, and the
//! game aggregate.

pub mod game;
pub mod lobby;
pub mod occupancy;
pub mod sequences;
pub mod turn_order;
pub mod validator;

pub use game::{replay, Game, Snapshot};
pub use lobby::{
    assign_team, generate_room_code, generate_seed, start_game, switch_team, update_settings,
    validate_balanced, GameStart,
};
pub use occupancy::{occupancy_from, team_at, Occupancy};
pub use sequences::{
    accepted_lines, complete_lines, is_cell_locked, sequence_count,
    sequence_count_after_placement,
};
pub use turn_order::TurnOrder;
pub use validator::{apply_move, MoveAction, MoveOutcome, MoveRequest};
