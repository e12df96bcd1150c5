#![allow(clippy::cast_precision_loss)]

mod determinism;
mod multi_group;
mod quasi_random;
