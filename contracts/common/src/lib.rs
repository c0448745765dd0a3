#![no_std]

pub mod ownership;
pub mod reentrancy;
