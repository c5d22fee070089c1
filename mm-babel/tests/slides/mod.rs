//! S5 slide-deck format tests.

mod export;
mod table;
