mod arena;
mod handle;
mod node;
mod raw_wavl_tree;
mod rebalance;
mod select;
mod size;
mod traversal;

pub(crate) use handle::Link;
pub(crate) use raw_wavl_tree::RawWavlTree;
