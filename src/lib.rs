//! # Grid Four
//!
//! Two-player console game on a 5x5 grid. Players name a cell as `row col`;
//! exactly four tokens in one row or one column wins.
//!
//! ## Modules
//!
//! - [`core`] — board, cells, positions, moves
//! - [`logic`] — move validation, placement, win detection
//! - [`display`] — text rendering of the board
//! - [`player`] — players and name validation
//! - [`game`] — turn loop and session
//! - [`ui`] — console boundary
//! - [`config`] — JSON configuration
//! - [`error`] — error types

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod ui;

mod logic_tests;
