//! Tutorial loops
//!
//! Two warm-up programs that share the game's platform traits:
//! - `blank`: clear and present at 60 ticks/s until closed
//! - `free_move`: a circle steered with WASD, integrated by elapsed time

pub mod blank;
pub mod free_move;

pub use blank::run_blank;
pub use free_move::{FreeMove, run_free_move};
