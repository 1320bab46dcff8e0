#![allow(dead_code)]

pub mod catalog;
pub mod users;
