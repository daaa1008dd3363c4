mod all;
mod checklist;
mod editor;
mod footer;
mod list;
mod log;
mod main;

use super::Frame;
use footer::footer;
use main::main;

use self::log::log;

pub use all::all as render;
